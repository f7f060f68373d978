pub mod canvas;
pub mod fonts;
pub mod images;
pub mod objects;
pub mod writer;

pub use canvas::{CanvasError, Color, PdfCanvas, PAGE_HEIGHT, PAGE_WIDTH};
pub use fonts::Font;
pub use images::{probe_dimensions, ImageError};
