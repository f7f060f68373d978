use pdf_canvas::images::{decode, probe_dimensions, ColorSpace, ImageError};
use pdf_canvas::PdfCanvas;

/// Encode a small PNG in memory so the tests need no binary fixtures.
fn png_bytes(width: u32, height: u32, color: png::ColorType) -> Vec<u8> {
    let channels = match color {
        png::ColorType::Grayscale => 1,
        png::ColorType::GrayscaleAlpha => 2,
        png::ColorType::Rgb => 3,
        png::ColorType::Rgba => 4,
        other => panic!("unsupported test color type {:?}", other),
    };
    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, width, height);
        encoder.set_color(color);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder.write_header().unwrap();
        let pixels = vec![0x7Fu8; (width * height * channels) as usize];
        writer.write_image_data(&pixels).unwrap();
        writer.finish().unwrap();
    }
    out
}

/// Minimal JPEG: SOI, an SOF0 frame header, EOI.
fn jpeg_bytes(width: u16, height: u16) -> Vec<u8> {
    let mut data = vec![0xFF, 0xD8, 0xFF, 0xC0, 0x00, 0x11, 0x08];
    data.extend_from_slice(&height.to_be_bytes());
    data.extend_from_slice(&width.to_be_bytes());
    data.push(0x03);
    data.extend_from_slice(&[0; 9]);
    data.extend_from_slice(&[0xFF, 0xD9]);
    data
}

#[test]
fn probe_reads_png_dimensions() {
    let data = png_bytes(12, 7, png::ColorType::Rgb);
    assert_eq!(probe_dimensions(&data).unwrap(), (12, 7));
}

#[test]
fn probe_reads_jpeg_dimensions() {
    let data = jpeg_bytes(640, 480);
    assert_eq!(probe_dimensions(&data).unwrap(), (640, 480));
}

#[test]
fn probe_rejects_garbage() {
    let result = probe_dimensions(&[0x00, 0x01, 0x02, 0x03, 0x04]);
    assert!(matches!(result, Err(ImageError::UnknownFormat)));
}

#[test]
fn probe_rejects_truncated_png() {
    // Valid signature, then nothing: the IHDR chunk is missing.
    let data = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];
    assert!(matches!(probe_dimensions(&data), Err(ImageError::Png(_))));
}

#[test]
fn decode_rgb_png() {
    let image = decode(&png_bytes(4, 4, png::ColorType::Rgb)).unwrap();
    assert_eq!((image.width, image.height), (4, 4));
    assert_eq!(image.color_space, ColorSpace::Rgb);
    assert_eq!(image.samples.len(), 4 * 4 * 3);
    assert!(image.alpha.is_none());
}

#[test]
fn decode_rgba_png_splits_alpha() {
    let image = decode(&png_bytes(4, 4, png::ColorType::Rgba)).unwrap();
    assert_eq!(image.samples.len(), 4 * 4 * 3);
    assert_eq!(image.alpha.as_ref().unwrap().len(), 4 * 4);
}

#[test]
fn decode_grayscale_png() {
    let image = decode(&png_bytes(4, 4, png::ColorType::Grayscale)).unwrap();
    assert_eq!(image.color_space, ColorSpace::Gray);
    assert_eq!(image.samples.len(), 4 * 4);
}

#[test]
fn indexed_png_is_rejected() {
    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, 4, 4);
        encoder.set_color(png::ColorType::Indexed);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_palette(vec![0, 0, 0, 255, 255, 255]);
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(&vec![0u8; 4 * 4]).unwrap();
        writer.finish().unwrap();
    }
    // The header probe still succeeds; only a full decode sees the
    // unsupported pixel format.
    assert_eq!(probe_dimensions(&out).unwrap(), (4, 4));
    assert!(matches!(
        decode(&out),
        Err(ImageError::PngColorType(png::ColorType::Indexed))
    ));
}

#[test]
fn sixteen_bit_png_is_rejected() {
    let mut out = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut out, 4, 4);
        encoder.set_color(png::ColorType::Rgb);
        encoder.set_depth(png::BitDepth::Sixteen);
        let mut writer = encoder.write_header().unwrap();
        writer.write_image_data(&vec![0u8; 4 * 4 * 3 * 2]).unwrap();
        writer.finish().unwrap();
    }
    assert!(matches!(decode(&out), Err(ImageError::PngBitDepth(_))));
}

#[test]
fn jpeg_embeds_with_dctdecode() {
    let mut canvas = PdfCanvas::new(Vec::new());
    canvas.image(&jpeg_bytes(10, 5), 100.0, 50.0).unwrap();
    let bytes = canvas.finish().unwrap();
    let out = String::from_utf8_lossy(&bytes);
    assert!(out.contains("/Subtype /Image"));
    assert!(out.contains("/Filter /DCTDecode"));
    assert!(out.contains("/ColorSpace /DeviceRGB"));
    assert!(out.contains("/Im1 Do"));
}

#[test]
fn rgba_png_embeds_with_smask() {
    let mut canvas = PdfCanvas::new(Vec::new());
    let data = png_bytes(4, 4, png::ColorType::Rgba);
    canvas.image(&data, 40.0, 40.0).unwrap();
    let bytes = canvas.finish().unwrap();
    let out = String::from_utf8_lossy(&bytes);
    assert!(out.contains("/SMask"));
    assert!(out.contains("/ColorSpace /DeviceGray"));
}

#[test]
fn bad_image_bytes_do_not_touch_the_page() {
    let mut canvas = PdfCanvas::new(Vec::new());
    assert!(canvas.image(&[0xDE, 0xAD, 0xBE, 0xEF], 100.0, 50.0).is_err());
    let bytes = canvas.finish().unwrap();
    let out = String::from_utf8_lossy(&bytes);
    assert!(!out.contains("/XObject"));
    assert!(!out.contains(" Do"));
}
