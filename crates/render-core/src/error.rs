use std::time::Duration;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid color '{value}': {reason}")]
    InvalidColor { value: String, reason: String },
    #[error("Image error for '{source_name}': {reason}")]
    Image { source_name: String, reason: String },
    #[error("PDF generation error: {0}")]
    Pdf(String),
    #[error("Browser error: {0}")]
    Browser(String),
    #[error("Timed out after {after:?} waiting for {stage}")]
    Timeout { stage: &'static str, after: Duration },
    #[error("Invalid document data: {0}")]
    InvalidData(String),
    #[error("Other rendering error: {0}")]
    Other(String),
}

impl RenderError {
    pub fn image(source_name: &str, reason: impl ToString) -> Self {
        RenderError::Image {
            source_name: source_name.to_string(),
            reason: reason.to_string(),
        }
    }
}

impl From<&str> for RenderError {
    fn from(s: &str) -> Self {
        RenderError::Other(s.to_string())
    }
}
