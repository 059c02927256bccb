//! Reusable cursor-context fragments shared by templates.

mod footer;
mod header;
mod signature;
mod totals;

pub use footer::{FooterOptions, render_footer};
pub use header::{HeaderOptions, render_header};
pub use signature::{SignatureBlockOptions, render_signature_block};
pub use totals::{TotalsOptions, render_totals};

#[cfg(test)]
pub(crate) mod test_support {
    use folio_render_core::testing::{RecordingCanvas, ScriptedTableLayout};
    use folio_render_core::{CursorContext, RenderError};
    use folio_types::ResolvedConfig;

    /// Runs `f` against a recording canvas and returns the canvas with the
    /// final cursor offset.
    pub fn record<F>(f: F) -> Result<(RecordingCanvas, f32), RenderError>
    where
        F: FnOnce(&mut CursorContext<'_>) -> Result<(), RenderError>,
    {
        let config = ResolvedConfig::default();
        let tables = ScriptedTableLayout::ending_at(5.0);
        let mut canvas = RecordingCanvas::new();
        let y = {
            let mut ctx = CursorContext::new(&mut canvas, &tables, &config);
            f(&mut ctx)?;
            ctx.y()
        };
        Ok((canvas, y))
    }
}
