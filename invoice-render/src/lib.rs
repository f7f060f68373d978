//! Renders a business invoice as a single fixed-layout PDF page:
//! logo, issuer and recipient blocks, a line-item table, computed
//! totals, notes, and a footer, each placed in a named vertical band.
//!
//! The layout engine draws through the [`Canvas`] trait; the
//! `pdf-canvas` crate provides the PDF backend.

pub mod canvas;
pub mod currency;
pub mod error;
pub mod format;
pub mod invoice;
pub mod layout;
pub mod pdf;
pub mod style;
pub mod totals;

pub use canvas::{Canvas, DrawError, DrawResult, FontStyle};
pub use error::{Band, RenderError};
pub use invoice::{Invoice, LineItem};
pub use layout::DocumentLayout;
pub use style::{Rgb, Style};
