use std::fs;
use std::path::Path;

use tracing::warn;

use crate::canvas::{Canvas, DrawResult, FontStyle};
use crate::currency;
use crate::error::{in_band, Band, RenderError};
use crate::format::{format_money, format_quantity};
use crate::invoice::{Invoice, LineItem};
use crate::style::{self, Rgb, Style};
use crate::totals;

/// Width the logo is scaled to, preserving aspect ratio.
const LOGO_WIDTH: f64 = 100.0;

// Fixed vertical anchors (top-left origin). Totals and notes share a
// height and sit in different columns; anchoring them absolutely keeps
// them at the same visual spot regardless of item count, at the cost
// of overflow for very long item lists.
const TOTALS_ANCHOR: f64 = 650.0;
const NOTES_ANCHOR: f64 = 650.0;
const FOOTER_ANCHOR: f64 = 800.0;

/// Right edge of the footer rule.
const RULE_RIGHT_EDGE: f64 = 550.0;
/// Width of the right-aligned label cells in the due-date and totals
/// area.
const LABEL_CELL_WIDTH: f64 = 45.0;

/// Lays out one invoice per call as a strict top-to-bottom sequence of
/// bands. Holds only the injected style; renders share no other state,
/// so one layout can serve many invoices.
pub struct DocumentLayout {
    style: Style,
}

impl Default for DocumentLayout {
    fn default() -> Self {
        DocumentLayout::new(Style::default())
    }
}

impl DocumentLayout {
    pub fn new(style: Style) -> Self {
        DocumentLayout { style }
    }

    /// Render `invoice` onto `canvas`. A logo that cannot be read or
    /// decoded degrades to no logo; any failing draw primitive aborts
    /// the whole render, reported with the band it happened in, so a
    /// partial document is never left behind as a success.
    pub fn render<C: Canvas>(
        &self,
        invoice: &Invoice,
        canvas: &mut C,
    ) -> Result<(), RenderError> {
        let symbol = currency::symbol_or_code(&invoice.currency);

        in_band(Band::Logo, self.write_logo(invoice, canvas))?;
        in_band(Band::Issuer, self.write_issuer(invoice, canvas))?;
        in_band(Band::Title, self.write_title(invoice, canvas))?;
        in_band(Band::DueDate, self.write_due_date(invoice, canvas))?;
        in_band(Band::BillTo, self.write_bill_to(invoice, canvas))?;
        in_band(Band::HeaderRow, self.write_header_row(canvas))?;
        for item in &invoice.items {
            in_band(Band::Items, self.write_row(item, symbol, canvas))?;
        }
        in_band(Band::Totals, self.write_totals(invoice, symbol, canvas))?;
        in_band(Band::Notes, self.write_notes(invoice, canvas))?;
        in_band(Band::Footer, self.write_footer(invoice, canvas))?;
        Ok(())
    }

    fn write_logo<C: Canvas>(
        &self,
        invoice: &Invoice,
        canvas: &mut C,
    ) -> DrawResult {
        let Some(path) = &invoice.logo else {
            return Ok(());
        };
        if let Some((data, width, height)) = load_logo(path) {
            let scaled_height = height as f64 * LOGO_WIDTH / width as f64;
            canvas.image(&data, LOGO_WIDTH, scaled_height)?;
            canvas.br(scaled_height + 24.0);
        }
        Ok(())
    }

    fn write_issuer<C: Canvas>(
        &self,
        invoice: &Invoice,
        canvas: &mut C,
    ) -> DrawResult {
        let mut lines = invoice.from.splitn(2, '\n');
        let first = lines.next().unwrap_or_default();
        canvas.set_font(FontStyle::Bold, 14.0)?;
        canvas.set_text_color(self.style.text)?;
        canvas.cell(first)?;
        canvas.br(16.0);
        if let Some(rest) = lines.next() {
            text_block(canvas, rest, FontStyle::Regular, 12.0, self.style.text, 16.0)?;
        }
        canvas.br(36.0);
        canvas.set_stroke_color(self.style.border)?;
        canvas.line(canvas.x(), canvas.y(), 100.0, canvas.y())?;
        canvas.br(36.0);
        Ok(())
    }

    fn write_title<C: Canvas>(
        &self,
        invoice: &Invoice,
        canvas: &mut C,
    ) -> DrawResult {
        canvas.set_font(FontStyle::Bold, 24.0)?;
        canvas.set_text_color(self.style.text)?;
        canvas.cell(&invoice.title)?;
        canvas.br(36.0);
        canvas.set_font(FontStyle::Regular, 12.0)?;
        canvas.set_text_color(self.style.heading)?;
        canvas.cell("#")?;
        canvas.cell(&invoice.id)?;
        canvas.cell("  ·  ")?;
        canvas.cell(&invoice.date)?;
        canvas.br(48.0);
        Ok(())
    }

    fn write_due_date<C: Canvas>(
        &self,
        invoice: &Invoice,
        canvas: &mut C,
    ) -> DrawResult {
        canvas.set_font(FontStyle::Regular, 10.0)?;
        canvas.set_text_color(self.style.heading)?;
        canvas.set_x(self.style.rate_column + 5.0);
        canvas.cell_right(LABEL_CELL_WIDTH, "Due")?;
        canvas.set_x(self.style.amount_column - 15.0);
        canvas.cell(&invoice.due_date)?;
        canvas.br(12.0);
        Ok(())
    }

    fn write_bill_to<C: Canvas>(
        &self,
        invoice: &Invoice,
        canvas: &mut C,
    ) -> DrawResult {
        canvas.set_font(FontStyle::Regular, 9.0)?;
        canvas.set_text_color(self.style.heading)?;
        canvas.cell(&style::BILL_TO_LABEL.to_uppercase())?;
        canvas.br(18.0);
        text_block(canvas, &invoice.to, FontStyle::Regular, 12.0, self.style.text, 15.0)?;
        canvas.br(64.0);
        Ok(())
    }

    fn write_header_row<C: Canvas>(&self, canvas: &mut C) -> DrawResult {
        canvas.set_font(FontStyle::Regular, 9.0)?;
        canvas.set_text_color(self.style.heading)?;
        canvas.cell("ITEM")?;
        canvas.set_x(self.style.quantity_column);
        canvas.cell(&style::QUANTITY_LABEL.to_uppercase())?;
        canvas.set_x(self.style.rate_column);
        canvas.cell("RATE")?;
        canvas.set_x(self.style.amount_column);
        canvas.cell("AMOUNT")?;
        canvas.br(24.0);
        Ok(())
    }

    fn write_row<C: Canvas>(
        &self,
        item: &LineItem,
        symbol: &str,
        canvas: &mut C,
    ) -> DrawResult {
        canvas.set_font(FontStyle::Regular, 11.0)?;
        canvas.set_text_color(self.style.text)?;
        let amount = item.quantity * item.rate;
        canvas.cell(&item.description)?;
        canvas.set_x(self.style.quantity_column);
        canvas.cell(&format_quantity(item.quantity))?;
        canvas.set_x(self.style.rate_column);
        canvas.cell(&format_money(item.rate, symbol))?;
        canvas.set_x(self.style.amount_column);
        canvas.cell(&format_money(amount, symbol))?;
        canvas.br(24.0);
        Ok(())
    }

    fn write_totals<C: Canvas>(
        &self,
        invoice: &Invoice,
        symbol: &str,
        canvas: &mut C,
    ) -> DrawResult {
        canvas.set_y(TOTALS_ANCHOR);
        let subtotal = totals::subtotal(&invoice.items);

        self.total_line(style::SUBTOTAL_LABEL, subtotal, false, symbol, canvas)?;
        if invoice.tax > 0.0 {
            self.total_line(style::TAX_LABEL, invoice.tax, false, symbol, canvas)?;
        }
        if invoice.discount > 0.0 {
            self.total_line(style::DISCOUNT_LABEL, invoice.discount, false, symbol, canvas)?;
        }
        let total = totals::total(subtotal, invoice.tax, invoice.discount);
        self.total_line(style::TOTAL_LABEL, total, true, symbol, canvas)
    }

    /// One line of the totals block: right-aligned label ending at the
    /// rate column, value at the amount column. The grand total gets
    /// emphasized styling at a distinct size.
    fn total_line<C: Canvas>(
        &self,
        label: &str,
        value: f64,
        emphasize: bool,
        symbol: &str,
        canvas: &mut C,
    ) -> DrawResult {
        canvas.set_font(FontStyle::Regular, 10.0)?;
        canvas.set_text_color(self.style.heading)?;
        canvas.set_x(self.style.rate_column + 5.0);
        canvas.cell_right(LABEL_CELL_WIDTH, label)?;
        canvas.set_text_color(self.style.text)?;
        canvas.set_x(self.style.amount_column - 15.0);
        if emphasize {
            canvas.set_font(FontStyle::Bold, 11.5)?;
        } else {
            canvas.set_font_size(12.0)?;
        }
        canvas.cell(&format_money(value, symbol))?;
        canvas.br(24.0);
        Ok(())
    }

    fn write_notes<C: Canvas>(
        &self,
        invoice: &Invoice,
        canvas: &mut C,
    ) -> DrawResult {
        if invoice.note.is_empty() {
            return Ok(());
        }
        canvas.set_y(NOTES_ANCHOR);
        canvas.set_font(FontStyle::Regular, 10.0)?;
        canvas.set_text_color(self.style.heading)?;
        canvas.cell(&invoice.note_header)?;
        canvas.br(18.0);
        // Literal backslash-n sequences count as line breaks too.
        let normalized = invoice.note.replace("\\n", "\n");
        text_block(canvas, &normalized, FontStyle::Regular, 10.0, self.style.text, 14.0)
    }

    fn write_footer<C: Canvas>(
        &self,
        invoice: &Invoice,
        canvas: &mut C,
    ) -> DrawResult {
        canvas.set_y(FOOTER_ANCHOR);
        canvas.set_font(FontStyle::Regular, 10.0)?;
        canvas.set_text_color(self.style.muted)?;
        canvas.cell(&invoice.id)?;
        canvas.set_stroke_color(self.style.border)?;
        canvas.line(
            canvas.x() + 10.0,
            canvas.y() + 6.0,
            RULE_RIGHT_EDGE,
            canvas.y() + 6.0,
        )?;
        Ok(())
    }
}

/// Render newline-separated text as one cell per physical line.
fn text_block<C: Canvas>(
    canvas: &mut C,
    text: &str,
    font: FontStyle,
    size: f64,
    color: Rgb,
    pitch: f64,
) -> DrawResult {
    canvas.set_font(font, size)?;
    canvas.set_text_color(color)?;
    for line in text.split('\n') {
        canvas.cell(line)?;
        canvas.br(pitch);
    }
    Ok(())
}

/// Read the logo and decode it all the way down, exactly as the
/// backend will. Any failure is reported and treated as "no logo"; a
/// bad logo must never abort invoice generation. Probing headers alone
/// is not enough: a PNG with valid dimensions can still carry a pixel
/// format the backend rejects.
fn load_logo(path: &Path) -> Option<(Vec<u8>, u32, u32)> {
    let data = match fs::read(path) {
        Ok(data) => data,
        Err(err) => {
            warn!(path = %path.display(), %err, "logo unreadable, skipping");
            return None;
        }
    };
    match pdf_canvas::images::decode(&data) {
        Ok(image) if image.width > 0 && image.height > 0 => {
            Some((data, image.width, image.height))
        }
        Ok(_) => {
            warn!(path = %path.display(), "logo has a zero dimension, skipping");
            None
        }
        Err(err) => {
            warn!(path = %path.display(), %err, "logo not a usable image, skipping");
            None
        }
    }
}
