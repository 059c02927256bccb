//! folio: business documents (invoices and the like) rendered to PDF from
//! structured data.
//!
//! A content producer draws onto a [`CursorContext`], a page surface with a
//! single advancing vertical cursor, and may also compose an HTML fragment.
//! The [`PdfGenerator`] routes each render either to the vector backend,
//! which issues PDF drawing operations directly, or to the browser-print
//! backend, which prints the composed HTML in headless Chrome.
//!
//! ```no_run
//! use folio::{PdfConfig, PdfGenerator, RenderOptions, templates::invoice_template};
//!
//! # async fn run() -> Result<(), folio::PipelineError> {
//! let mut generator = PdfGenerator::new(PdfConfig::default());
//! generator.register(invoice_template());
//! let data = serde_json::from_str(&std::fs::read_to_string("invoice.json")?)?;
//! let result = generator.render("invoice", &data, &RenderOptions::default()).await?;
//! println!("{} page(s)", result.pages);
//! # Ok(())
//! # }
//! ```

pub mod components;
mod error;
pub mod format;
mod generator;
mod template;
pub mod templates;

pub use error::PipelineError;
pub use generator::PdfGenerator;
pub use template::Template;

pub use folio_render_browser::{BrowserOptions, ChromeLauncher, PageCountStrategy};
pub use folio_render_core::{
    Backend, ComposeMarkup, CursorContext, DrawContent, OutputFormat, Payload, RenderError,
    RenderOptions, RenderResult,
};
pub use folio_render_pdf::VectorRenderer;
pub use folio_types::{Orientation, PageSize, PdfConfig};

pub use folio_render_browser;
pub use folio_render_core;
pub use folio_render_pdf;
pub use folio_types;
