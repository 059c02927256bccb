//! Output selection: a post-processing switch over finished PDF bytes that
//! never influences layout.

use crate::error::RenderError;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::path::{Path, PathBuf};

pub const PDF_MIME_TYPE: &str = "application/pdf";
pub const DEFAULT_FILENAME: &str = "document.pdf";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputFormat {
    Buffer,
    Blob,
    Base64,
    /// Persist to disk; `None` writes `document.pdf` in the working directory.
    Save { filename: Option<PathBuf> },
}

impl OutputFormat {
    pub fn save_to(path: impl Into<PathBuf>) -> Self {
        OutputFormat::Save {
            filename: Some(path.into()),
        }
    }
}

/// Which backend a facade should route a render to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Backend {
    #[default]
    Vector,
    Browser,
}

/// Per-call render options. An unset format means the backend's default.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderOptions {
    pub format: Option<OutputFormat>,
    pub backend: Backend,
}

impl RenderOptions {
    pub fn with_format(format: OutputFormat) -> Self {
        Self {
            format: Some(format),
            ..Default::default()
        }
    }

    pub fn browser() -> Self {
        Self {
            backend: Backend::Browser,
            ..Default::default()
        }
    }

    pub fn format(mut self, format: OutputFormat) -> Self {
        self.format = Some(format);
        self
    }
}

/// Raw bytes tagged with their MIME type, the closest native analogue of a
/// platform blob.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Blob {
    pub bytes: Vec<u8>,
    pub mime_type: &'static str,
}

/// Exactly one encoded representation of the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Payload {
    Buffer(Vec<u8>),
    Blob(Blob),
    Base64(String),
    Saved(PathBuf),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderResult {
    pub payload: Payload,
    pub pages: usize,
}

impl RenderResult {
    /// The raw document bytes, for the in-memory payloads that carry them.
    pub fn bytes(&self) -> Option<&[u8]> {
        match &self.payload {
            Payload::Buffer(bytes) => Some(bytes),
            Payload::Blob(blob) => Some(&blob.bytes),
            Payload::Base64(_) | Payload::Saved(_) => None,
        }
    }

    pub fn base64(&self) -> Option<&str> {
        match &self.payload {
            Payload::Base64(encoded) => Some(encoded),
            _ => None,
        }
    }

    pub fn saved_path(&self) -> Option<&Path> {
        match &self.payload {
            Payload::Saved(path) => Some(path),
            _ => None,
        }
    }
}

/// Wraps finished bytes in the requested representation.
pub fn encode_output(
    bytes: Vec<u8>,
    pages: usize,
    format: &OutputFormat,
) -> Result<RenderResult, RenderError> {
    let payload = match format {
        OutputFormat::Buffer => Payload::Buffer(bytes),
        OutputFormat::Blob => Payload::Blob(Blob {
            bytes,
            mime_type: PDF_MIME_TYPE,
        }),
        OutputFormat::Base64 => Payload::Base64(STANDARD.encode(&bytes)),
        OutputFormat::Save { filename } => {
            let path = filename
                .clone()
                .unwrap_or_else(|| PathBuf::from(DEFAULT_FILENAME));
            std::fs::write(&path, &bytes)?;
            log::debug!("Saved {} bytes to {}", bytes.len(), path.display());
            Payload::Saved(path)
        }
    };
    Ok(RenderResult { payload, pages })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buffer_and_blob_carry_bytes() {
        let result = encode_output(b"%PDF-1.7".to_vec(), 2, &OutputFormat::Buffer).unwrap();
        assert_eq!(result.bytes(), Some(&b"%PDF-1.7"[..]));
        assert_eq!(result.pages, 2);

        let blob = encode_output(b"%PDF".to_vec(), 1, &OutputFormat::Blob).unwrap();
        match blob.payload {
            Payload::Blob(ref b) => assert_eq!(b.mime_type, "application/pdf"),
            ref other => panic!("expected blob, got {:?}", other),
        }
    }

    #[test]
    fn base64_is_standard_padded() {
        let result = encode_output(b"%PDF".to_vec(), 1, &OutputFormat::Base64).unwrap();
        assert_eq!(result.base64(), Some("JVBERg=="));
        assert!(result.bytes().is_none());
    }

    #[test]
    fn save_writes_the_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.pdf");
        let result =
            encode_output(b"%PDF-1.7".to_vec(), 1, &OutputFormat::save_to(&path)).unwrap();
        assert_eq!(result.saved_path(), Some(path.as_path()));
        assert_eq!(std::fs::read(&path).unwrap(), b"%PDF-1.7");
    }
}
