//! Vector PDF backend.
//!
//! [`VectorRenderer`] builds a [`PdfCanvas`] from the resolved geometry, binds
//! a cursor context to it, runs the content producer and serializes the
//! result. Text uses the standard PDF fonts with approximate metrics.

mod canvas;
pub mod fonts;
mod renderer;
mod table;

pub use canvas::{PdfCanvas, WRAP_LINE_SPACING};
pub use renderer::VectorRenderer;
pub use table::{CELL_FONT_SIZE, CELL_PADDING, GridTableLayout};
