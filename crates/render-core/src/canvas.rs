use crate::error::RenderError;
use crate::style::{Stroke, TextPlacement, TextStyle};
use folio_types::Rect;

/// A paginated drawing surface, abstracting the PDF-writing primitives.
///
/// Coordinates are inches from the top-left corner of the current page; the
/// implementation converts them to whatever its output format needs. Every
/// call draws onto the most recently added page.
pub trait PageCanvas {
    /// Pages committed so far. A fresh canvas already holds one page.
    fn page_count(&self) -> usize;

    /// Appends a blank page and makes it current.
    fn add_page(&mut self);

    fn draw_text(
        &mut self,
        content: &str,
        placement: TextPlacement,
        style: &TextStyle,
    ) -> Result<(), RenderError>;

    fn draw_line(
        &mut self,
        from: (f32, f32),
        to: (f32, f32),
        stroke: &Stroke,
    ) -> Result<(), RenderError>;

    /// Fills, then strokes, whichever of the two are given.
    fn draw_rect(
        &mut self,
        rect: Rect,
        fill: Option<&str>,
        stroke: Option<&Stroke>,
    ) -> Result<(), RenderError>;

    /// Places raster data scaled into `rect`. `key` identifies the source so
    /// a canvas may reuse an already decoded image.
    fn draw_image(&mut self, key: &str, data: &[u8], rect: Rect) -> Result<(), RenderError>;

    /// Approximate rendered width of `content` in inches.
    fn text_width(&self, content: &str, style: &TextStyle) -> f32;
}

/// Greedy word wrap against the canvas' width estimate. Words longer than
/// `max_width` are kept whole on their own line.
pub fn wrap_text(
    canvas: &dyn PageCanvas,
    content: &str,
    style: &TextStyle,
    max_width: f32,
) -> Vec<String> {
    let mut lines = Vec::new();
    for paragraph in content.split('\n') {
        let mut current = String::new();
        for word in paragraph.split_whitespace() {
            if current.is_empty() {
                current.push_str(word);
                continue;
            }
            let candidate = format!("{} {}", current, word);
            if canvas.text_width(&candidate, style) <= max_width {
                current = candidate;
            } else {
                lines.push(std::mem::take(&mut current));
                current.push_str(word);
            }
        }
        lines.push(current);
    }
    lines
}
