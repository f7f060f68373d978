use std::error::Error;

use thiserror::Error as ThisError;

use crate::style::Rgb;

/// Font face selector for canvas text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontStyle {
    Regular,
    Bold,
}

/// A failed canvas primitive, wrapping whatever error the backend
/// produced. Opaque on purpose: the layout only needs to know that a
/// primitive failed, not why.
#[derive(Debug, ThisError)]
#[error(transparent)]
pub struct DrawError(#[from] Box<dyn Error + Send + Sync>);

impl DrawError {
    pub fn new<E>(err: E) -> Self
    where
        E: Error + Send + Sync + 'static,
    {
        DrawError(Box::new(err))
    }
}

pub type DrawResult = Result<(), DrawError>;

/// The drawing capability the layout engine consumes. Coordinates use
/// a top-left origin; text cells advance the cursor horizontally and
/// `br` drops it to the start of the next line. The layout never reads
/// output back, it only issues commands.
pub trait Canvas {
    fn set_font(&mut self, style: FontStyle, size: f64) -> DrawResult;
    fn set_font_size(&mut self, size: f64) -> DrawResult;
    fn set_text_color(&mut self, color: Rgb) -> DrawResult;
    fn set_stroke_color(&mut self, color: Rgb) -> DrawResult;
    /// Place text at the cursor and advance past it.
    fn cell(&mut self, text: &str) -> DrawResult;
    /// Place text right-aligned inside a cell of `width` points
    /// starting at the cursor, then advance past the whole cell.
    fn cell_right(&mut self, width: f64, text: &str) -> DrawResult;
    fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> DrawResult;
    /// Draw an image with its top-left corner at the cursor, scaled
    /// to `width` × `height` points. Does not move the cursor.
    fn image(&mut self, data: &[u8], width: f64, height: f64) -> DrawResult;
    fn br(&mut self, height: f64);
    fn set_x(&mut self, x: f64);
    fn set_y(&mut self, y: f64);
    fn x(&self) -> f64;
    fn y(&self) -> f64;
}
