use folio_render_core::RenderError;
use thiserror::Error;

/// Errors surfaced by the generator facade and the CLI.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Template \"{0}\" not found")]
    TemplateNotFound(String),
}
