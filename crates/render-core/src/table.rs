use crate::canvas::PageCanvas;
use crate::error::RenderError;
use crate::options::ColumnWidth;
use crate::style::{FontStyle, Stroke};

/// Resolved styling for one class of table cells.
#[derive(Debug, Clone, PartialEq)]
pub struct CellStyle {
    pub fill_color: Option<String>,
    pub text_color: String,
    pub font_style: FontStyle,
}

/// Everything a tabular-layout delegate needs. Offsets are inches from the
/// top of the page.
#[derive(Debug, Clone)]
pub struct TableRequest {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    /// Offset of the table's top edge on the current page.
    pub start_y: f32,
    pub margin_left: f32,
    pub margin_right: f32,
    /// Width available between the margins.
    pub width: f32,
    /// Where content restarts after the delegate appends a page.
    pub page_top: f32,
    /// Offset past which a row must move to a new page.
    pub page_bottom: f32,
    pub font_family: String,
    pub header: CellStyle,
    pub body: CellStyle,
    /// Fill for alternating body rows, when striping is requested.
    pub stripe_fill: Option<String>,
    pub column_widths: Vec<ColumnWidth>,
    pub grid: Option<Stroke>,
}

/// Lays out and draws a table onto the canvas, paginating inside the table
/// if it has to. Returns the vertical offset of the table's bottom edge on
/// whichever page it ended on.
pub trait TableLayout {
    fn layout(
        &self,
        canvas: &mut dyn PageCanvas,
        request: &TableRequest,
    ) -> Result<f32, RenderError>;
}

/// Calculates final column widths: fixed widths are taken as given and auto
/// columns share what is left equally.
pub fn calculate_column_widths(
    columns: &[ColumnWidth],
    column_count: usize,
    available_width: f32,
) -> Vec<f32> {
    let mut widths = vec![0.0; column_count];
    let mut remaining_width = available_width;
    let mut auto_indices = Vec::new();
    for (i, width) in widths.iter_mut().enumerate() {
        match columns.get(i) {
            Some(ColumnWidth::Fixed(w)) => {
                *width = *w;
                remaining_width -= *w;
            }
            Some(ColumnWidth::Auto) | None => auto_indices.push(i),
        }
    }
    if !auto_indices.is_empty() {
        let width_per_auto = remaining_width.max(0.0) / auto_indices.len() as f32;
        for i in auto_indices {
            widths[i] = width_per_auto;
        }
    }
    widths
}
