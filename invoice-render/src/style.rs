use serde::{Deserialize, Serialize};

pub const SUBTOTAL_LABEL: &str = "Subtotal";
pub const DISCOUNT_LABEL: &str = "Discount";
pub const TAX_LABEL: &str = "Tax";
pub const TOTAL_LABEL: &str = "Total";
pub const BILL_TO_LABEL: &str = "To";
pub const QUANTITY_LABEL: &str = "Days";

/// An RGB triple in the 0–255 range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }
}

/// Colors and column offsets for one layout. Injected into
/// `DocumentLayout` at construction so alternate stylings stay
/// testable; the defaults reproduce the reference look.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Style {
    pub text: Rgb,
    pub border: Rgb,
    pub heading: Rgb,
    /// Footer id color.
    pub muted: Rgb,
    /// Horizontal column anchors in page points.
    pub quantity_column: f64,
    pub rate_column: f64,
    pub amount_column: f64,
}

impl Default for Style {
    fn default() -> Self {
        Style {
            text: Rgb::new(25, 25, 25),
            border: Rgb::new(225, 225, 225),
            heading: Rgb::new(75, 75, 75),
            muted: Rgb::new(150, 150, 150),
            quantity_column: 360.0,
            rate_column: 405.0,
            amount_column: 480.0,
        }
    }
}
