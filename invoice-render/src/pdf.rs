//! `Canvas` implementation for the PDF backend.

use std::io::Write;

use pdf_canvas::{Color, Font, PdfCanvas};

use crate::canvas::{Canvas, DrawError, DrawResult, FontStyle};
use crate::style::Rgb;

fn color(rgb: Rgb) -> Color {
    Color::from_rgb8(rgb.r, rgb.g, rgb.b)
}

fn font(style: FontStyle) -> Font {
    match style {
        FontStyle::Regular => Font::Helvetica,
        FontStyle::Bold => Font::HelveticaBold,
    }
}

impl<W: Write> Canvas for PdfCanvas<W> {
    fn set_font(&mut self, style: FontStyle, size: f64) -> DrawResult {
        PdfCanvas::set_font(self, font(style), size);
        Ok(())
    }

    fn set_font_size(&mut self, size: f64) -> DrawResult {
        PdfCanvas::set_font_size(self, size);
        Ok(())
    }

    fn set_text_color(&mut self, rgb: Rgb) -> DrawResult {
        PdfCanvas::set_text_color(self, color(rgb));
        Ok(())
    }

    fn set_stroke_color(&mut self, rgb: Rgb) -> DrawResult {
        PdfCanvas::set_stroke_color(self, color(rgb));
        Ok(())
    }

    fn cell(&mut self, text: &str) -> DrawResult {
        PdfCanvas::cell(self, text);
        Ok(())
    }

    fn cell_right(&mut self, width: f64, text: &str) -> DrawResult {
        PdfCanvas::cell_right(self, width, text);
        Ok(())
    }

    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> DrawResult {
        PdfCanvas::line(self, x1, y1, x2, y2);
        Ok(())
    }

    fn image(&mut self, data: &[u8], width: f64, height: f64) -> DrawResult {
        PdfCanvas::image(self, data, width, height).map_err(DrawError::new)
    }

    fn br(&mut self, height: f64) {
        PdfCanvas::br(self, height);
    }

    fn set_x(&mut self, x: f64) {
        PdfCanvas::set_x(self, x);
    }

    fn set_y(&mut self, y: f64) {
        PdfCanvas::set_y(self, y);
    }

    fn x(&self) -> f64 {
        PdfCanvas::x(self)
    }

    fn y(&self) -> f64 {
        PdfCanvas::y(self)
    }
}
