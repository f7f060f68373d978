//! Minimal canvas walkthrough: styled text, a rule, and cursor moves.
//!
//! Run with:
//!   cargo run --example generate_sample -p pdf-canvas

use std::io::Write;

use pdf_canvas::{Color, Font, PdfCanvas};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let mut canvas = PdfCanvas::create("sample.pdf")?;
    canvas.set_info("Title", "pdf-canvas sample");
    canvas.set_compression(true);

    canvas.set_font(Font::HelveticaBold, 24.0);
    canvas.set_text_color(Color::from_rgb8(25, 25, 25));
    canvas.cell("Hello, page");
    canvas.br(36.0);

    canvas.set_font(Font::Helvetica, 12.0);
    canvas.set_text_color(Color::from_rgb8(75, 75, 75));
    canvas.cell("Left cell");
    canvas.set_x(300.0);
    canvas.cell_right(100.0, "right-aligned");
    canvas.br(24.0);

    canvas.set_stroke_color(Color::from_rgb8(225, 225, 225));
    canvas.line(canvas.x(), canvas.y(), 300.0, canvas.y());

    canvas.finish()?.flush()?;
    println!("Written to sample.pdf");
    Ok(())
}
