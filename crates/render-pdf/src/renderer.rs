use crate::canvas::PdfCanvas;
use crate::table::GridTableLayout;
use folio_render_core::{
    CursorContext, DrawContent, OutputFormat, RenderError, RenderOptions, RenderResult,
    TableLayout, encode_output,
};
use folio_types::{PdfConfig, ResolvedConfig};

const DEFAULT_TITLE: &str = "Document";

/// Renders content producers by drawing directly onto a printpdf canvas.
///
/// Page count is exact: it is whatever the canvas holds when serialized.
pub struct VectorRenderer {
    config: ResolvedConfig,
    title: String,
    tables: Box<dyn TableLayout + Send + Sync>,
}

impl VectorRenderer {
    pub fn new(config: &PdfConfig) -> Self {
        Self {
            config: config.resolve(),
            title: DEFAULT_TITLE.to_string(),
            tables: Box::new(GridTableLayout::new()),
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Replaces the default grid table delegate.
    pub fn with_table_layout(mut self, tables: impl TableLayout + Send + Sync + 'static) -> Self {
        self.tables = Box::new(tables);
        self
    }

    pub fn config(&self) -> &ResolvedConfig {
        &self.config
    }

    pub fn render<P>(
        &self,
        producer: &P,
        data: &P::Data,
        options: &RenderOptions,
    ) -> Result<RenderResult, RenderError>
    where
        P: DrawContent + ?Sized,
    {
        let mut canvas = PdfCanvas::new(&self.title, &self.config.geometry);
        {
            let mut ctx = CursorContext::new(&mut canvas, self.tables.as_ref(), &self.config);
            producer.draw(data, &mut ctx)?;
        }
        let (bytes, pages) = canvas.finish();
        log::info!(
            "Vector backend rendered {} page(s), {} bytes",
            pages,
            bytes.len()
        );
        let format = options.format.clone().unwrap_or(OutputFormat::Blob);
        encode_output(bytes, pages, &format)
    }
}
