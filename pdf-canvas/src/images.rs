use thiserror::Error;

/// Failures while probing or decoding an image. All variants are
/// recoverable by the caller; nothing in this module panics on bad
/// input data.
#[derive(Debug, Error)]
pub enum ImageError {
    #[error("image data too short to identify a format")]
    TooShort,
    #[error("unsupported image format (expected PNG or JPEG)")]
    UnknownFormat,
    #[error("PNG decode failed: {0}")]
    Png(#[from] png::DecodingError),
    #[error("unsupported PNG color type {0:?}")]
    PngColorType(png::ColorType),
    #[error("unsupported PNG bit depth {0:?} (expected 8 bits per channel)")]
    PngBitDepth(png::BitDepth),
    #[error("JPEG has {0} color components (expected 1 or 3)")]
    JpegComponents(u8),
    #[error("no SOF marker found in JPEG data")]
    JpegMissingSof,
    #[error("JPEG SOF marker truncated")]
    JpegTruncated,
}

/// Raster formats the canvas can embed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Png,
    Jpeg,
}

/// Color space of the embedded samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorSpace {
    Rgb,
    Gray,
}

impl ColorSpace {
    pub fn pdf_name(&self) -> &'static str {
        match self {
            ColorSpace::Rgb => "DeviceRGB",
            ColorSpace::Gray => "DeviceGray",
        }
    }
}

/// How the sample bytes are encoded in the PDF stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encoding {
    /// Raw samples; compressed with FlateDecode on output.
    Raw,
    /// Unmodified JPEG bytes, embedded behind DCTDecode.
    Dct,
}

/// Image decoded far enough to embed as a PDF XObject.
pub struct ImageData {
    pub width: u32,
    pub height: u32,
    pub color_space: ColorSpace,
    pub encoding: Encoding,
    pub samples: Vec<u8>,
    /// Grayscale alpha channel for a soft mask, if the source had one.
    pub alpha: Option<Vec<u8>>,
}

/// Identify the format from magic bytes.
pub fn detect_format(data: &[u8]) -> Result<Format, ImageError> {
    if data.len() < 4 {
        return Err(ImageError::TooShort);
    }
    if data[0] == 0xFF && data[1] == 0xD8 {
        Ok(Format::Jpeg)
    } else if data[..4] == [0x89, b'P', b'N', b'G'] {
        Ok(Format::Png)
    } else {
        Err(ImageError::UnknownFormat)
    }
}

/// Read only enough of the image to report its pixel dimensions.
/// PNG dimensions come from the IHDR chunk; JPEG dimensions from the
/// first SOF marker. No pixel data is decoded.
pub fn probe_dimensions(data: &[u8]) -> Result<(u32, u32), ImageError> {
    match detect_format(data)? {
        Format::Png => {
            let reader = png::Decoder::new(data).read_info()?;
            let info = reader.info();
            Ok((info.width, info.height))
        }
        Format::Jpeg => {
            let (width, height, _) = jpeg_frame_header(data)?;
            Ok((width, height))
        }
    }
}

/// Fully decode an image into embeddable form.
pub fn decode(data: &[u8]) -> Result<ImageData, ImageError> {
    match detect_format(data)? {
        Format::Png => decode_png(data),
        Format::Jpeg => wrap_jpeg(data),
    }
}

/// JPEG needs no pixel decoding: the bytes are embedded as-is behind a
/// DCTDecode filter. Only the frame header is parsed.
fn wrap_jpeg(data: &[u8]) -> Result<ImageData, ImageError> {
    let (width, height, components) = jpeg_frame_header(data)?;
    let color_space = match components {
        1 => ColorSpace::Gray,
        3 => ColorSpace::Rgb,
        n => return Err(ImageError::JpegComponents(n)),
    };
    Ok(ImageData {
        width,
        height,
        color_space,
        encoding: Encoding::Dct,
        samples: data.to_vec(),
        alpha: None,
    })
}

/// Scan for an SOF0-SOF3 marker and extract width, height, and
/// component count.
fn jpeg_frame_header(data: &[u8]) -> Result<(u32, u32, u8), ImageError> {
    let len = data.len();
    let mut i = 0;
    while i + 1 < len {
        if data[i] != 0xFF {
            i += 1;
            continue;
        }
        let marker = data[i + 1];
        if (0xC0..=0xC3).contains(&marker) {
            if i + 9 >= len {
                return Err(ImageError::JpegTruncated);
            }
            let height = u16::from_be_bytes([data[i + 5], data[i + 6]]);
            let width = u16::from_be_bytes([data[i + 7], data[i + 8]]);
            return Ok((width as u32, height as u32, data[i + 9]));
        }
        // Fill bytes and stuffed zero bytes.
        if marker == 0xFF || marker == 0x00 {
            i += 1;
            continue;
        }
        // Standalone markers carry no length field.
        if marker == 0xD8 || marker == 0xD9 || (0xD0..=0xD7).contains(&marker)
        {
            i += 2;
            continue;
        }
        if i + 3 >= len {
            break;
        }
        let segment = u16::from_be_bytes([data[i + 2], data[i + 3]]) as usize;
        i += 2 + segment;
    }
    Err(ImageError::JpegMissingSof)
}

/// Decode PNG pixels with the `png` crate, splitting any alpha channel
/// into a separate soft-mask plane.
fn decode_png(data: &[u8]) -> Result<ImageData, ImageError> {
    let mut reader = png::Decoder::new(data).read_info()?;
    let mut buf = vec![0u8; reader.output_buffer_size()];
    let frame = reader.next_frame(&mut buf)?;
    buf.truncate(frame.buffer_size());

    // The XObject declares 8 bits per component; 16-bit and sub-byte
    // samples would embed as corrupt data.
    if frame.bit_depth != png::BitDepth::Eight {
        return Err(ImageError::PngBitDepth(frame.bit_depth));
    }

    let (width, height) = (frame.width, frame.height);
    let base = ImageData {
        width,
        height,
        color_space: ColorSpace::Rgb,
        encoding: Encoding::Raw,
        samples: Vec::new(),
        alpha: None,
    };

    match frame.color_type {
        png::ColorType::Rgb => Ok(ImageData { samples: buf, ..base }),
        png::ColorType::Rgba => {
            let (color, alpha) = split_alpha(&buf, 3);
            Ok(ImageData {
                samples: color,
                alpha: Some(alpha),
                ..base
            })
        }
        png::ColorType::Grayscale => Ok(ImageData {
            color_space: ColorSpace::Gray,
            samples: buf,
            ..base
        }),
        png::ColorType::GrayscaleAlpha => {
            let (gray, alpha) = split_alpha(&buf, 1);
            Ok(ImageData {
                color_space: ColorSpace::Gray,
                samples: gray,
                alpha: Some(alpha),
                ..base
            })
        }
        other => Err(ImageError::PngColorType(other)),
    }
}

/// Split interleaved color+alpha samples into separate planes.
/// `color_channels` is the number of channels preceding the alpha byte.
fn split_alpha(buf: &[u8], color_channels: usize) -> (Vec<u8>, Vec<u8>) {
    let stride = color_channels + 1;
    let pixels = buf.len() / stride;
    let mut color = Vec::with_capacity(pixels * color_channels);
    let mut alpha = Vec::with_capacity(pixels);
    for px in buf.chunks_exact(stride) {
        color.extend_from_slice(&px[..color_channels]);
        alpha.push(px[color_channels]);
    }
    (color, alpha)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_jpeg_magic() {
        let data = [0xFF, 0xD8, 0xFF, 0xE0];
        assert_eq!(detect_format(&data).unwrap(), Format::Jpeg);
    }

    #[test]
    fn rejects_short_and_unknown_data() {
        assert!(matches!(detect_format(&[1, 2]), Err(ImageError::TooShort)));
        assert!(matches!(
            detect_format(&[1, 2, 3, 4]),
            Err(ImageError::UnknownFormat)
        ));
    }

    #[test]
    fn jpeg_sof_scan_reads_dimensions() {
        // SOI, then an SOF0 segment: length 17, precision 8,
        // height 480, width 640, 3 components.
        let mut data = vec![0xFF, 0xD8, 0xFF, 0xC0, 0x00, 0x11, 0x08];
        data.extend_from_slice(&480u16.to_be_bytes());
        data.extend_from_slice(&640u16.to_be_bytes());
        data.push(0x03);
        data.extend_from_slice(&[0; 9]);
        data.extend_from_slice(&[0xFF, 0xD9]);
        assert_eq!(jpeg_frame_header(&data).unwrap(), (640, 480, 3));
    }

    #[test]
    fn jpeg_without_sof_is_rejected() {
        let data = [0xFF, 0xD8, 0xFF, 0xD9];
        assert!(matches!(
            jpeg_frame_header(&data),
            Err(ImageError::JpegMissingSof)
        ));
    }

    #[test]
    fn split_alpha_separates_planes() {
        let rgba = [10, 20, 30, 255, 40, 50, 60, 128];
        let (rgb, alpha) = split_alpha(&rgba, 3);
        assert_eq!(rgb, [10, 20, 30, 40, 50, 60]);
        assert_eq!(alpha, [255, 128]);
    }
}
