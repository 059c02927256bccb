//! The default tabular-layout delegate: a simple grid with wrapped cell text,
//! a repeated header row and row-level pagination.

use crate::canvas::WRAP_LINE_SPACING;
use folio_render_core::{
    CellStyle, PageCanvas, RenderError, TableLayout, TableRequest, TextPlacement, TextStyle,
    calculate_column_widths, wrap_text,
};
use folio_types::Rect;

pub const CELL_FONT_SIZE: f32 = 10.0;
pub const CELL_PADDING: f32 = 0.07;
/// Baseline offset below the top of a text line, as a fraction of the size.
const BASELINE_RATIO: f32 = 0.8;

#[derive(Debug, Clone, Copy, Default)]
pub struct GridTableLayout;

/// One laid-out row: wrapped lines per cell and the total row height.
struct RowLayout {
    cells: Vec<Vec<String>>,
    height: f32,
}

impl GridTableLayout {
    pub fn new() -> Self {
        Self
    }

    fn layout_row(
        canvas: &dyn PageCanvas,
        cells: &[String],
        widths: &[f32],
        style: &TextStyle,
    ) -> RowLayout {
        let wrapped: Vec<Vec<String>> = widths
            .iter()
            .enumerate()
            .map(|(i, width)| {
                let content = cells.get(i).map(String::as_str).unwrap_or("");
                let inner = (width - 2.0 * CELL_PADDING).max(0.0);
                wrap_text(canvas, content, style, inner)
            })
            .collect();
        let lines = wrapped.iter().map(Vec::len).max().unwrap_or(1).max(1);
        RowLayout {
            cells: wrapped,
            height: lines as f32 * style.size_inches() * WRAP_LINE_SPACING + 2.0 * CELL_PADDING,
        }
    }

    fn draw_row(
        canvas: &mut dyn PageCanvas,
        request: &TableRequest,
        row: &RowLayout,
        widths: &[f32],
        top: f32,
        style: &TextStyle,
        fill: Option<&str>,
    ) -> Result<(), RenderError> {
        let line_height = style.size_inches() * WRAP_LINE_SPACING;
        let mut x = request.margin_left;
        for (lines, width) in row.cells.iter().zip(widths) {
            let cell = Rect::new(x, top, *width, row.height);
            canvas.draw_rect(cell, fill, request.grid.as_ref())?;
            let baseline = top + CELL_PADDING + style.size_inches() * BASELINE_RATIO;
            for (i, line) in lines.iter().enumerate() {
                let placement = TextPlacement {
                    x: x + CELL_PADDING,
                    y: baseline + i as f32 * line_height,
                    ..Default::default()
                };
                canvas.draw_text(line, placement, style)?;
            }
            x += width;
        }
        Ok(())
    }
}

fn cell_text_style(family: &str, cell: &CellStyle) -> TextStyle {
    TextStyle::new(family, CELL_FONT_SIZE, cell.text_color.as_str()).with_style(cell.font_style)
}

impl TableLayout for GridTableLayout {
    fn layout(
        &self,
        canvas: &mut dyn PageCanvas,
        request: &TableRequest,
    ) -> Result<f32, RenderError> {
        let column_count = request
            .rows
            .iter()
            .map(Vec::len)
            .chain(std::iter::once(request.headers.len()))
            .max()
            .unwrap_or(0);
        if column_count == 0 {
            return Ok(request.start_y);
        }
        let widths = calculate_column_widths(&request.column_widths, column_count, request.width);
        let header_style = cell_text_style(&request.font_family, &request.header);
        let body_style = cell_text_style(&request.font_family, &request.body);

        let header = (!request.headers.is_empty())
            .then(|| Self::layout_row(&*canvas, &request.headers, &widths, &header_style));
        let header_fill = request.header.fill_color.as_deref();

        let mut y = request.start_y;
        if let Some(header) = &header {
            if y + header.height > request.page_bottom && y > request.page_top {
                canvas.add_page();
                y = request.page_top;
            }
            Self::draw_row(canvas, request, header, &widths, y, &header_style, header_fill)?;
            y += header.height;
        }

        for (index, cells) in request.rows.iter().enumerate() {
            let row = Self::layout_row(&*canvas, cells, &widths, &body_style);
            if y + row.height > request.page_bottom && y > request.page_top {
                canvas.add_page();
                log::debug!("Table continues on page {}", canvas.page_count());
                y = request.page_top;
                if let Some(header) = &header {
                    Self::draw_row(canvas, request, header, &widths, y, &header_style, header_fill)?;
                    y += header.height;
                }
            }
            let fill = if index % 2 == 1 {
                request
                    .stripe_fill
                    .as_deref()
                    .or(request.body.fill_color.as_deref())
            } else {
                request.body.fill_color.as_deref()
            };
            Self::draw_row(canvas, request, &row, &widths, y, &body_style, fill)?;
            y += row.height;
        }
        Ok(y)
    }
}
