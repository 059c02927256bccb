//! Recovering a page count from finished PDF bytes.
//!
//! The marker scan looks for `/Type /Page` not followed by `s` (which would be
//! the page-tree node) in the raw bytes. It is a best-effort estimate:
//! compressed object streams hide the markers entirely. The structural count
//! reads the page tree with lopdf and only falls back to the scan when the
//! document cannot be parsed.

use regex::bytes::Regex;
use std::sync::LazyLock;

static PAGE_MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?-u)/Type\s*/Page[^s]").expect("BUG: invalid PAGE_MARKER regex literal")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageCountStrategy {
    /// Parse the page tree; scan only if parsing fails.
    #[default]
    Structural,
    /// Scan the bytes only.
    MarkerScan,
}

/// Counts page-object markers. Never returns less than one.
pub fn count_page_markers(bytes: &[u8]) -> usize {
    PAGE_MARKER.find_iter(bytes).count().max(1)
}

/// Counts pages in the document's page tree.
pub fn count_pages_structurally(bytes: &[u8]) -> Result<usize, lopdf::Error> {
    let doc = lopdf::Document::load_mem(bytes)?;
    Ok(doc.get_pages().len())
}

pub fn count_pages(bytes: &[u8], strategy: PageCountStrategy) -> usize {
    match strategy {
        PageCountStrategy::MarkerScan => count_page_markers(bytes),
        PageCountStrategy::Structural => match count_pages_structurally(bytes) {
            Ok(pages) if pages > 0 => pages,
            Ok(_) => count_page_markers(bytes),
            Err(e) => {
                log::debug!("Could not parse printed PDF ({}), scanning for page markers", e);
                count_page_markers(bytes)
            }
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_three_page_markers() {
        let bytes = b"1 0 obj << /Type /Page /Parent 4 0 R >>\n\
                      2 0 obj << /Type /Page/Parent 4 0 R >>\n\
                      3 0 obj << /Type/Page >>\n\
                      4 0 obj << /Kids [1 0 R 2 0 R 3 0 R] /Count 3 >>";
        assert_eq!(count_page_markers(bytes), 3);
    }

    #[test]
    fn pages_node_is_not_counted() {
        let bytes = b"<< /Type /Pages /Kids [] >> << /Type /Page >> << /Type /Pages >>";
        assert_eq!(count_page_markers(bytes), 1);
    }

    #[test]
    fn no_markers_counts_as_one_page() {
        assert_eq!(count_page_markers(b""), 1);
        assert_eq!(count_page_markers(b"%PDF-1.7 nothing here"), 1);
    }

    #[test]
    fn scans_non_utf8_bytes() {
        let mut bytes = vec![0xff, 0xfe, 0x80];
        bytes.extend_from_slice(b"/Type /Page\n");
        bytes.extend_from_slice(&[0xc3, 0x28]);
        bytes.extend_from_slice(b"/Type /Page ");
        assert_eq!(count_page_markers(&bytes), 2);
    }

    #[test]
    fn structural_falls_back_to_scan_on_garbage() {
        let bytes = b"not a pdf /Type /Page /Type /Page ";
        assert_eq!(count_pages(bytes, PageCountStrategy::Structural), 2);
        assert_eq!(count_pages(bytes, PageCountStrategy::MarkerScan), 2);
    }
}
