use crate::error::RenderError;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

/// Loads raster bytes from a `data:` URI with a base64 payload, or from a
/// filesystem path.
pub fn load_image_source(src: &str) -> Result<Vec<u8>, RenderError> {
    if let Some(rest) = src.strip_prefix("data:") {
        let (header, payload) = rest
            .split_once(',')
            .ok_or_else(|| RenderError::image(src_label(src), "data URI has no payload"))?;
        if !header.ends_with(";base64") {
            return Err(RenderError::image(
                src_label(src),
                "only base64 data URIs are supported",
            ));
        }
        return STANDARD
            .decode(payload.trim())
            .map_err(|e| RenderError::image(src_label(src), e));
    }
    std::fs::read(src).map_err(|e| RenderError::image(src, e))
}

/// Data URIs can be megabytes long; keep error messages readable.
fn src_label(src: &str) -> &str {
    match src.char_indices().nth(48) {
        Some((idx, _)) => &src[..idx],
        None => src,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_base64_data_uri() {
        let bytes = load_image_source("data:image/png;base64,iVBORw0KGgo=").unwrap();
        assert_eq!(&bytes[1..4], b"PNG");
    }

    #[test]
    fn rejects_non_base64_data_uri() {
        let err = load_image_source("data:image/svg+xml,<svg/>").unwrap_err();
        assert!(matches!(err, RenderError::Image { .. }));
    }

    #[test]
    fn missing_file_is_an_image_error() {
        let err = load_image_source("/definitely/not/here.png").unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.png"));
    }
}
