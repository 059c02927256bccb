pub mod fixtures;

use folio::folio_render_browser::{BrowserLauncher, BrowserSession, PrintOptions};
use folio::{Payload, RenderError, RenderResult};
use lopdf::Document as LopdfDocument;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    /// Parses whatever in-memory payload a render returned.
    pub fn from_result(result: &RenderResult) -> Result<Self, Box<dyn std::error::Error>> {
        match &result.payload {
            Payload::Buffer(bytes) => Self::from_bytes(bytes.clone()),
            Payload::Blob(blob) => Self::from_bytes(blob.bytes.clone()),
            other => Err(format!("expected an in-memory payload, got {:?}", other).into()),
        }
    }

    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    pub fn is_pdf(&self) -> bool {
        self.bytes.starts_with(b"%PDF-")
    }

    /// Text of every page, in page order.
    pub fn text(&self) -> Result<String, Box<dyn std::error::Error>> {
        let pages: Vec<u32> = self.doc.get_pages().keys().copied().collect();
        Ok(self.doc.extract_text(&pages)?)
    }

    /// Width and height of the first page's media box, in points.
    pub fn first_page_size(&self) -> Result<(f32, f32), Box<dyn std::error::Error>> {
        let (_, page_id) = self.doc.get_pages().into_iter().next().ok_or("no pages")?;
        let media_box = self.doc.get_dictionary(page_id)?.get(b"MediaBox")?.as_array()?.clone();
        Ok((media_box[2].as_float()?, media_box[3].as_float()?))
    }
}

/// Assert the number of pages in a PDF
#[macro_export]
macro_rules! assert_pdf_page_count {
    ($pdf:expr, $count:expr) => {
        assert_eq!(
            $pdf.page_count(),
            $count,
            "Expected {} pages, got {}",
            $count,
            $pdf.page_count()
        );
    };
}

/// A real single-page PDF, as a browser would print it.
pub const PRINTED_PDF: &[u8] = b"%PDF-1.4
1 0 obj << /Type /Catalog /Pages 2 0 R >> endobj
2 0 obj << /Type /Pages /Kids [3 0 R] /Count 1 >> endobj
3 0 obj << /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] >> endobj
trailer << /Root 1 0 R >>
%%EOF";

/// An in-process browser that records the document it was handed.
#[derive(Clone, Default)]
pub struct RecordingBrowser {
    pub launches: Arc<AtomicUsize>,
    pub closes: Arc<AtomicUsize>,
    pub loaded: Arc<Mutex<Option<String>>>,
}

impl RecordingBrowser {
    pub fn launches(&self) -> usize {
        self.launches.load(Ordering::SeqCst)
    }

    pub fn closes(&self) -> usize {
        self.closes.load(Ordering::SeqCst)
    }

    pub fn loaded(&self) -> Option<String> {
        self.loaded.lock().ok().and_then(|doc| doc.clone())
    }
}

pub struct RecordingSession {
    browser: RecordingBrowser,
}

impl BrowserLauncher for RecordingBrowser {
    type Session = RecordingSession;

    async fn launch(&self) -> Result<RecordingSession, RenderError> {
        self.launches.fetch_add(1, Ordering::SeqCst);
        Ok(RecordingSession {
            browser: self.clone(),
        })
    }
}

impl BrowserSession for RecordingSession {
    async fn load_html(&mut self, html: &str) -> Result<(), RenderError> {
        if let Ok(mut loaded) = self.browser.loaded.lock() {
            *loaded = Some(html.to_string());
        }
        Ok(())
    }

    async fn fonts_ready(&mut self) -> Result<(), RenderError> {
        Ok(())
    }

    async fn print_pdf(&mut self, _: &PrintOptions) -> Result<Vec<u8>, RenderError> {
        Ok(PRINTED_PDF.to_vec())
    }

    async fn close(self) -> Result<(), RenderError> {
        self.browser.closes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
