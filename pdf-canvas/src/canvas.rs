use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use flate2::write::ZlibEncoder;
use flate2::Compression;
use thiserror::Error;

use crate::fonts::Font;
use crate::images::{self, ColorSpace, Encoding, ImageData, ImageError};
use crate::objects::{ObjId, Object};
use crate::writer::{format_real, DocWriter};

/// A4 page size in points.
pub const PAGE_WIDTH: f64 = 595.28;
pub const PAGE_HEIGHT: f64 = 841.89;

/// Cursor origin and left edge for line breaks.
const MARGIN_LEFT: f64 = 40.0;
const MARGIN_TOP: f64 = 40.0;

const CATALOG_OBJ: ObjId = ObjId(1);
const PAGES_OBJ: ObjId = ObjId(2);
const FONT_REGULAR_OBJ: ObjId = ObjId(3);
const FONT_BOLD_OBJ: ObjId = ObjId(4);
const FIRST_DYNAMIC_OBJ: u32 = 5;

#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("write failed: {0}")]
    Io(#[from] io::Error),
    #[error("image rejected: {0}")]
    Image(#[from] ImageError),
}

/// RGB fill/stroke color, each component 0.0–1.0.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub fn rgb(r: f64, g: f64, b: f64) -> Self {
        Color { r, g, b }
    }

    /// Convert 0–255 components to the PDF 0.0–1.0 range.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Color {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
        }
    }
}

/// A single-page A4 canvas with a top-left-origin cursor, in the style
/// of terminal-to-page report writers: text cells advance the cursor
/// horizontally, `br` drops it to the start of the next line.
///
/// Generic over `Write` so output can go to a file or an in-memory
/// buffer. All drawing buffers content operations; the document is
/// serialized once by `finish`.
pub struct PdfCanvas<W: Write> {
    out: W,
    info: Vec<(String, String)>,
    ops: Vec<u8>,
    images: Vec<ImageData>,
    x: f64,
    y: f64,
    font: Font,
    font_size: f64,
    fill: Color,
    stroke: Color,
    compress: bool,
}

impl PdfCanvas<BufWriter<File>> {
    /// Create a canvas that writes to a file on `finish`.
    pub fn create<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        Ok(Self::new(BufWriter::new(File::create(path)?)))
    }
}

impl<W: Write> PdfCanvas<W> {
    pub fn new(out: W) -> Self {
        PdfCanvas {
            out,
            info: Vec::new(),
            ops: Vec::new(),
            images: Vec::new(),
            x: MARGIN_LEFT,
            y: MARGIN_TOP,
            font: Font::Helvetica,
            font_size: 12.0,
            fill: Color::rgb(0.0, 0.0, 0.0),
            stroke: Color::rgb(0.0, 0.0, 0.0),
            compress: false,
        }
    }

    /// Set a document info entry (e.g. "Title", "Creator").
    pub fn set_info(&mut self, key: &str, value: &str) {
        self.info.push((key.to_string(), value.to_string()));
    }

    /// Enable FlateDecode compression of the content stream.
    pub fn set_compression(&mut self, on: bool) {
        self.compress = on;
    }

    pub fn x(&self) -> f64 {
        self.x
    }

    pub fn y(&self) -> f64 {
        self.y
    }

    pub fn set_x(&mut self, x: f64) {
        self.x = x;
    }

    pub fn set_y(&mut self, y: f64) {
        self.y = y;
    }

    /// Drop the cursor by `height` and return it to the left margin.
    pub fn br(&mut self, height: f64) {
        self.y += height;
        self.x = MARGIN_LEFT;
    }

    pub fn set_font(&mut self, font: Font, size: f64) {
        self.font = font;
        self.font_size = size;
    }

    pub fn set_font_size(&mut self, size: f64) {
        self.font_size = size;
    }

    pub fn set_text_color(&mut self, color: Color) {
        self.fill = color;
    }

    pub fn set_stroke_color(&mut self, color: Color) {
        self.stroke = color;
    }

    /// Place text at the cursor and advance it by the measured width.
    pub fn cell(&mut self, text: &str) {
        self.show_text(self.x, text);
        self.x += self.font.text_width(text, self.font_size);
    }

    /// Place text right-aligned inside a cell of `width` points
    /// starting at the cursor, then advance past the whole cell.
    pub fn cell_right(&mut self, width: f64, text: &str) {
        let text_width = self.font.text_width(text, self.font_size);
        self.show_text(self.x + width - text_width, text);
        self.x += width;
    }

    fn show_text(&mut self, x: f64, text: &str) {
        // Baseline sits one em below the cursor line, so the cursor
        // marks the top of the text like the rest of the coordinate
        // system.
        let baseline = PAGE_HEIGHT - self.y - self.font_size;
        let mut op = format!(
            "BT /{} {} Tf {} {} {} rg {} {} Td (",
            self.font.resource_name(),
            format_real(self.font_size),
            format_real(self.fill.r),
            format_real(self.fill.g),
            format_real(self.fill.b),
            format_real(x),
            format_real(baseline),
        )
        .into_bytes();
        op.extend_from_slice(&encode_text(text));
        op.extend_from_slice(b") Tj ET\n");
        self.ops.extend_from_slice(&op);
    }

    /// Stroke a straight line between two points in cursor coordinates.
    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) {
        let op = format!(
            "{} {} {} RG {} {} m {} {} l S\n",
            format_real(self.stroke.r),
            format_real(self.stroke.g),
            format_real(self.stroke.b),
            format_real(x1),
            format_real(PAGE_HEIGHT - y1),
            format_real(x2),
            format_real(PAGE_HEIGHT - y2),
        );
        self.ops.extend_from_slice(op.as_bytes());
    }

    /// Draw an image with its top-left corner at the cursor, scaled to
    /// `width` x `height` points. The cursor does not move. The bytes
    /// must be a PNG or JPEG; undecodable data is rejected here, before
    /// anything is added to the page.
    pub fn image(
        &mut self,
        data: &[u8],
        width: f64,
        height: f64,
    ) -> Result<(), CanvasError> {
        let image = images::decode(data)?;
        self.images.push(image);
        let op = format!(
            "q {} 0 0 {} {} {} cm /Im{} Do Q\n",
            format_real(width),
            format_real(height),
            format_real(self.x),
            format_real(PAGE_HEIGHT - self.y - height),
            self.images.len(),
        );
        self.ops.extend_from_slice(op.as_bytes());
        Ok(())
    }

    /// Serialize the finished page. Writes fonts, image XObjects, the
    /// content stream, page tree, catalog, info, and xref; consumes
    /// self and returns the inner writer.
    pub fn finish(self) -> Result<W, CanvasError> {
        let mut writer = DocWriter::new(self.out);
        writer.write_header()?;

        for (id, font) in [
            (FONT_REGULAR_OBJ, Font::Helvetica),
            (FONT_BOLD_OBJ, Font::HelveticaBold),
        ] {
            writer.write_object(
                id,
                &Object::dict(vec![
                    ("Type", Object::name("Font")),
                    ("Subtype", Object::name("Type1")),
                    ("BaseFont", Object::name(font.base_name())),
                    ("Encoding", Object::name("WinAnsiEncoding")),
                ]),
            )?;
        }

        let mut next = FIRST_DYNAMIC_OBJ;
        let mut alloc = || {
            let id = ObjId(next);
            next += 1;
            id
        };

        let mut xobjects = Vec::new();
        for (index, image) in self.images.iter().enumerate() {
            let mask_id = match &image.alpha {
                Some(alpha) => {
                    let id = alloc();
                    writer.write_object(id, &soft_mask(image, alpha)?)?;
                    Some(id)
                }
                None => None,
            };
            let id = alloc();
            writer.write_object(id, &image_xobject(image, mask_id)?)?;
            xobjects.push((format!("Im{}", index + 1), id));
        }

        let content_id = alloc();
        let content = if self.compress {
            Object::stream(
                vec![("Filter", Object::name("FlateDecode"))],
                deflate(&self.ops)?,
            )
        } else {
            Object::stream(vec![], self.ops)
        };
        writer.write_object(content_id, &content)?;

        let mut resources = vec![(
            "Font",
            Object::dict(vec![
                ("F1", Object::Ref(FONT_REGULAR_OBJ)),
                ("F2", Object::Ref(FONT_BOLD_OBJ)),
            ]),
        )];
        if !xobjects.is_empty() {
            resources.push((
                "XObject",
                Object::Dict(
                    xobjects
                        .into_iter()
                        .map(|(name, id)| (name, Object::Ref(id)))
                        .collect(),
                ),
            ));
        }

        let page_id = alloc();
        writer.write_object(
            page_id,
            &Object::dict(vec![
                ("Type", Object::name("Page")),
                ("Parent", Object::Ref(PAGES_OBJ)),
                (
                    "MediaBox",
                    Object::Array(vec![
                        Object::Integer(0),
                        Object::Integer(0),
                        Object::Real(PAGE_WIDTH),
                        Object::Real(PAGE_HEIGHT),
                    ]),
                ),
                ("Contents", Object::Ref(content_id)),
                ("Resources", Object::dict(resources)),
            ]),
        )?;

        writer.write_object(
            PAGES_OBJ,
            &Object::dict(vec![
                ("Type", Object::name("Pages")),
                ("Kids", Object::Array(vec![Object::Ref(page_id)])),
                ("Count", Object::Integer(1)),
            ]),
        )?;
        writer.write_object(
            CATALOG_OBJ,
            &Object::dict(vec![
                ("Type", Object::name("Catalog")),
                ("Pages", Object::Ref(PAGES_OBJ)),
            ]),
        )?;

        let info_id = if self.info.is_empty() {
            None
        } else {
            let id = alloc();
            let entries = self
                .info
                .iter()
                .map(|(k, v)| (k.clone(), Object::text(v)))
                .collect();
            writer.write_object(id, &Object::Dict(entries))?;
            Some(id)
        };

        writer.write_trailer(CATALOG_OBJ, info_id)?;
        Ok(writer.into_inner())
    }
}

/// Build the XObject dictionary and stream for one image.
fn image_xobject(
    image: &ImageData,
    mask: Option<ObjId>,
) -> Result<Object, CanvasError> {
    let mut dict = vec![
        ("Type", Object::name("XObject")),
        ("Subtype", Object::name("Image")),
        ("Width", Object::Integer(image.width as i64)),
        ("Height", Object::Integer(image.height as i64)),
        ("ColorSpace", Object::name(image.color_space.pdf_name())),
        ("BitsPerComponent", Object::Integer(8)),
    ];
    let data = match image.encoding {
        Encoding::Dct => {
            dict.push(("Filter", Object::name("DCTDecode")));
            image.samples.clone()
        }
        Encoding::Raw => {
            dict.push(("Filter", Object::name("FlateDecode")));
            deflate(&image.samples)?
        }
    };
    if let Some(mask) = mask {
        dict.push(("SMask", Object::Ref(mask)));
    }
    Ok(Object::stream(dict, data))
}

/// Grayscale soft-mask stream carrying an image's alpha channel.
fn soft_mask(image: &ImageData, alpha: &[u8]) -> Result<Object, CanvasError> {
    Ok(Object::stream(
        vec![
            ("Type", Object::name("XObject")),
            ("Subtype", Object::name("Image")),
            ("Width", Object::Integer(image.width as i64)),
            ("Height", Object::Integer(image.height as i64)),
            ("ColorSpace", Object::name(ColorSpace::Gray.pdf_name())),
            ("BitsPerComponent", Object::Integer(8)),
            ("Filter", Object::name("FlateDecode")),
        ],
        deflate(alpha)?,
    ))
}

fn deflate(data: &[u8]) -> io::Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}

/// Encode a string for a WinAnsi text-showing operator, escaping the
/// literal-string delimiters. Characters without a WinAnsi code point
/// become `?` rather than corrupting the stream.
fn encode_text(text: &str) -> Vec<u8> {
    let mut out = Vec::with_capacity(text.len());
    for ch in text.chars() {
        let byte = match ch {
            '\\' => {
                out.extend_from_slice(b"\\\\");
                continue;
            }
            '(' => {
                out.extend_from_slice(b"\\(");
                continue;
            }
            ')' => {
                out.extend_from_slice(b"\\)");
                continue;
            }
            '\u{20}'..='\u{7e}' => ch as u8,
            '€' => 0x80,
            // Latin-1 and WinAnsi agree over 0xA0..=0xFF.
            '\u{a0}'..='\u{ff}' => ch as u8,
            _ => b'?',
        };
        out.push(byte);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cell_advances_cursor_by_text_width() {
        let mut canvas = PdfCanvas::new(Vec::new());
        let x0 = canvas.x();
        canvas.cell("Total");
        let expected = Font::Helvetica.text_width("Total", 12.0);
        assert!((canvas.x() - x0 - expected).abs() < 1e-9);
    }

    #[test]
    fn cell_right_advances_past_the_cell() {
        let mut canvas = PdfCanvas::new(Vec::new());
        canvas.set_x(405.0);
        canvas.cell_right(45.0, "Due");
        assert_eq!(canvas.x(), 450.0);
    }

    #[test]
    fn br_returns_to_left_margin() {
        let mut canvas = PdfCanvas::new(Vec::new());
        canvas.set_x(300.0);
        let y0 = canvas.y();
        canvas.br(24.0);
        assert_eq!(canvas.x(), MARGIN_LEFT);
        assert_eq!(canvas.y(), y0 + 24.0);
    }

    #[test]
    fn encode_text_maps_winansi() {
        assert_eq!(encode_text("abc"), b"abc");
        assert_eq!(encode_text("a(b)"), b"a\\(b\\)");
        assert_eq!(encode_text("€"), [0x80]);
        assert_eq!(encode_text("£"), [0xA3]);
        assert_eq!(encode_text("₹"), b"?");
    }

    #[test]
    fn finish_produces_wellformed_single_page() {
        let mut canvas = PdfCanvas::new(Vec::new());
        canvas.cell("hello");
        let bytes = canvas.finish().unwrap();
        let out = String::from_utf8_lossy(&bytes);
        assert!(out.starts_with("%PDF-1.7"));
        assert!(out.contains("/Type /Page"));
        assert!(out.contains("/Count 1"));
        assert!(out.contains("(hello) Tj"));
        assert!(out.ends_with("%%EOF\n"));
    }
}
