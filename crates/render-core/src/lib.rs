//! Core rendering abstractions for PDF generation.
//!
//! This crate provides the backend-neutral pieces both folio backends share:
//! - `PageCanvas`, the drawing surface a vector backend implements
//! - `CursorContext`, the stateful drawing API content producers write against
//! - `TableLayout`, the delegate that lays out tables on a canvas
//! - `DrawContent`/`ComposeMarkup`, the two content-producer capabilities
//! - output selection and the render error type

mod canvas;
mod cursor;
mod error;
mod image;
mod options;
mod output;
mod producer;
mod style;
mod table;
pub mod utils;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use canvas::{PageCanvas, wrap_text};
pub use cursor::{
    BODY_FONT_SIZE, CursorContext, DEFAULT_IMAGE_SIZE, DEFAULT_LINE_WIDTH, DEFAULT_SIGNATURE_WIDTH,
    DEFAULT_SPACE, SIGNATURE_FONT_SIZE,
};
pub use error::RenderError;
pub use image::load_image_source;
pub use options::{
    BodyStyle, ColumnWidth, HeaderStyle, HeadingLevel, ImageOptions, LineOptions, RectOptions,
    SignatureOptions, TableOptions, TextOptions,
};
pub use output::{
    Backend, Blob, DEFAULT_FILENAME, OutputFormat, PDF_MIME_TYPE, Payload, RenderOptions, RenderResult,
    encode_output,
};
pub use producer::{ComposeMarkup, DrawContent};
pub use style::{FontStyle, Stroke, TextAlign, TextPlacement, TextStyle};
pub use table::{CellStyle, TableLayout, TableRequest, calculate_column_widths};
pub use folio_types;
