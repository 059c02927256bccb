//! The cursor context: a drawing surface with one advancing vertical offset.
//!
//! Every primitive draws at the current `y` and then moves it down by a fixed,
//! documented amount. The context never moves `y` up by itself; only
//! [`CursorContext::page_break`] restarts it at the top margin of a new page.
//! There is no automatic overflow handling: producers decide where pages break.

use crate::canvas::PageCanvas;
use crate::error::RenderError;
use crate::image::load_image_source;
use crate::options::{
    HeadingLevel, ImageOptions, LineOptions, RectOptions, SignatureOptions, TableOptions,
    TextOptions,
};
use crate::style::{FontStyle, PendingStyle, Stroke, TextAlign, TextPlacement, TextStyle};
use crate::table::{CellStyle, TableLayout, TableRequest};
use folio_types::{Rect, ResolvedConfig};

pub const BODY_FONT_SIZE: f32 = 11.0;
pub const SIGNATURE_FONT_SIZE: f32 = 9.0;
pub const DEFAULT_SPACE: f32 = 0.2;
pub const DEFAULT_LINE_WIDTH: f32 = 0.01;
pub const DEFAULT_IMAGE_SIZE: f32 = 1.0;
pub const DEFAULT_SIGNATURE_WIDTH: f32 = 2.5;

const TEXT_ADVANCE_PAD: f32 = 0.05;
const HEADING_ADVANCE_PAD: f32 = 0.1;
const TABLE_PADDING: f32 = 0.2;
const LINE_ADVANCE: f32 = 0.1;
const IMAGE_PADDING: f32 = 0.1;
const SIGNATURE_LINE_OFFSET: f32 = 0.3;
const SIGNATURE_LABEL_OFFSET: f32 = 0.45;
const SIGNATURE_ADVANCE: f32 = 0.6;

pub struct CursorContext<'a> {
    canvas: &'a mut dyn PageCanvas,
    tables: &'a dyn TableLayout,
    config: &'a ResolvedConfig,
    y: f32,
    pending: PendingStyle,
    overflow_reported: bool,
}

impl<'a> CursorContext<'a> {
    /// Binds a context to a canvas. The cursor starts at the top margin.
    pub fn new(
        canvas: &'a mut dyn PageCanvas,
        tables: &'a dyn TableLayout,
        config: &'a ResolvedConfig,
    ) -> Self {
        Self {
            canvas,
            tables,
            config,
            y: config.geometry.margins.top,
            pending: PendingStyle::default(),
            overflow_reported: false,
        }
    }

    /// Current vertical offset in inches from the top of the page.
    pub fn y(&self) -> f32 {
        self.y
    }

    /// Content-area width.
    pub fn width(&self) -> f32 {
        self.config.geometry.content.width
    }

    /// Content-area height.
    pub fn height(&self) -> f32 {
        self.config.geometry.content.height
    }

    pub fn margin_left(&self) -> f32 {
        self.config.geometry.margins.left
    }

    pub fn config(&self) -> &ResolvedConfig {
        self.config
    }

    /// Distance between the cursor and the bottom of the content area.
    /// Negative once content has overflowed.
    pub fn remaining(&self) -> f32 {
        self.config.geometry.content_bottom() - self.y
    }

    /// Whether a block of `height` inches would still end inside the content area.
    pub fn fits(&self, height: f32) -> bool {
        self.y + height <= self.config.geometry.content_bottom()
    }

    pub fn text(&mut self, content: &str, options: &TextOptions) -> Result<(), RenderError> {
        let style = self.text_style(options);
        let margin_left = self.margin_left();
        let x = match options.align {
            TextAlign::Left => options.x.unwrap_or(margin_left),
            TextAlign::Center => margin_left + self.width() / 2.0,
            TextAlign::Right => margin_left + self.width(),
        };
        let placement = TextPlacement {
            x,
            y: self.y,
            align: options.align,
            max_width: options.max_width,
        };
        self.canvas.draw_text(content, placement, &style)?;
        self.advance(style.size_inches() + TEXT_ADVANCE_PAD);
        Ok(())
    }

    pub fn heading(&mut self, content: &str, level: HeadingLevel) -> Result<(), RenderError> {
        self.pending = PendingStyle::default();
        let size = level.point_size();
        let style = TextStyle::new(&self.config.fonts.heading, size, &self.config.colors.text)
            .with_style(FontStyle::Bold);
        let placement = TextPlacement {
            x: self.margin_left(),
            y: self.y,
            ..Default::default()
        };
        self.canvas.draw_text(content, placement, &style)?;
        self.advance(size / 72.0 + HEADING_ADVANCE_PAD);
        Ok(())
    }

    /// Hands the table to the layout delegate, starting at the cursor, and
    /// resumes 0.2in below wherever the delegate finished.
    pub fn table<H, C>(
        &mut self,
        headers: &[H],
        rows: &[Vec<C>],
        options: &TableOptions,
    ) -> Result<(), RenderError>
    where
        H: AsRef<str>,
        C: AsRef<str>,
    {
        self.pending = PendingStyle::default();
        let request = self.table_request(headers, rows, options);
        let pages_before = self.canvas.page_count();
        let final_y = self.tables.layout(&mut *self.canvas, &request)?;
        if self.canvas.page_count() != pages_before {
            log::debug!(
                "Table continued from page {} to page {}",
                pages_before,
                self.canvas.page_count()
            );
            self.overflow_reported = false;
        }
        self.y = final_y + TABLE_PADDING;
        self.report_overflow();
        Ok(())
    }

    pub fn line(&mut self, options: &LineOptions) -> Result<(), RenderError> {
        let stroke = Stroke::new(
            options
                .color
                .as_deref()
                .unwrap_or(&self.config.colors.border),
            options.width.unwrap_or(DEFAULT_LINE_WIDTH),
        );
        let left = self.margin_left();
        self.canvas
            .draw_line((left, self.y), (left + self.width(), self.y), &stroke)?;
        self.advance(LINE_ADVANCE);
        Ok(())
    }

    /// Advances the cursor without drawing. `None` means the default 0.2in.
    pub fn space(&mut self, amount: impl Into<Option<f32>>) {
        self.advance(amount.into().unwrap_or(DEFAULT_SPACE));
    }

    /// Starts a new page and moves the cursor to its top margin.
    pub fn page_break(&mut self) {
        self.canvas.add_page();
        self.y = self.config.geometry.margins.top;
        self.overflow_reported = false;
        log::debug!("Page break, now on page {}", self.canvas.page_count());
    }

    pub fn image(&mut self, src: &str, options: &ImageOptions) -> Result<(), RenderError> {
        let data = load_image_source(src)?;
        let width = options.width.unwrap_or(DEFAULT_IMAGE_SIZE);
        let height = options.height.unwrap_or(DEFAULT_IMAGE_SIZE);
        let x = options.x.unwrap_or(self.margin_left());
        self.canvas
            .draw_image(src, &data, Rect::new(x, self.y, width, height))?;
        self.advance(height + IMAGE_PADDING);
        Ok(())
    }

    /// A signature line with a small label beneath it. The block always
    /// occupies 0.6in, whatever the label.
    pub fn signature(&mut self, label: &str, options: &SignatureOptions) -> Result<(), RenderError> {
        self.pending = PendingStyle::default();
        let width = options.width.unwrap_or(DEFAULT_SIGNATURE_WIDTH);
        let left = self.margin_left();
        let line_y = self.y + SIGNATURE_LINE_OFFSET;
        let stroke = Stroke::new(&self.config.colors.border, DEFAULT_LINE_WIDTH);
        self.canvas
            .draw_line((left, line_y), (left + width, line_y), &stroke)?;

        let style = TextStyle::new(
            &self.config.fonts.body,
            SIGNATURE_FONT_SIZE,
            &self.config.colors.text_light,
        );
        let placement = TextPlacement {
            x: left,
            y: self.y + SIGNATURE_LABEL_OFFSET,
            ..Default::default()
        };
        self.canvas.draw_text(label, placement, &style)?;
        self.advance(SIGNATURE_ADVANCE);
        Ok(())
    }

    /// Pages committed to the surface so far (not a forward-looking total).
    pub fn page_number(&self) -> usize {
        self.canvas.page_count()
    }

    /// Font for the next text-drawing call only.
    pub fn set_font(&mut self, family: &str, style: FontStyle) {
        self.pending.family = Some(family.to_string());
        self.pending.style = Some(style);
    }

    /// Size in points for the next text-drawing call only.
    pub fn set_font_size(&mut self, size: f32) {
        self.pending.size = Some(size);
    }

    /// Color for the next text-drawing call only.
    pub fn set_text_color(&mut self, color: &str) {
        self.pending.color = Some(color.to_string());
    }

    /// Draws a rectangle at explicit coordinates. The cursor does not move;
    /// painting a plate before writing text over it is the caller's ordering.
    pub fn rect(
        &mut self,
        x: f32,
        y: f32,
        width: f32,
        height: f32,
        options: &RectOptions,
    ) -> Result<(), RenderError> {
        let stroke = options
            .stroke
            .as_deref()
            .map(|color| Stroke::new(color, DEFAULT_LINE_WIDTH));
        self.canvas.draw_rect(
            Rect::new(x, y, width, height),
            options.fill.as_deref(),
            stroke.as_ref(),
        )
    }

    /// Body defaults, then pending values, then the call's own options.
    fn text_style(&mut self, options: &TextOptions) -> TextStyle {
        let mut style = TextStyle::new(
            &self.config.fonts.body,
            BODY_FONT_SIZE,
            &self.config.colors.text,
        );
        std::mem::take(&mut self.pending).apply_to(&mut style);
        if let Some(font) = &options.font {
            style.family = font.clone();
        }
        if options.bold {
            style.style = FontStyle::Bold;
        }
        if let Some(size) = options.size {
            style.size = size;
        }
        if let Some(color) = &options.color {
            style.color = color.clone();
        }
        style
    }

    fn table_request<H, C>(&self, headers: &[H], rows: &[Vec<C>], options: &TableOptions) -> TableRequest
    where
        H: AsRef<str>,
        C: AsRef<str>,
    {
        let colors = &self.config.colors;
        let geometry = &self.config.geometry;
        let header_style = options.header_style.clone().unwrap_or_default();
        let body_style = options.body_style.clone().unwrap_or_default();
        TableRequest {
            headers: headers.iter().map(|h| h.as_ref().to_string()).collect(),
            rows: rows
                .iter()
                .map(|row| row.iter().map(|c| c.as_ref().to_string()).collect())
                .collect(),
            start_y: self.y,
            margin_left: geometry.margins.left,
            margin_right: geometry.margins.right,
            width: geometry.content.width,
            page_top: geometry.margins.top,
            page_bottom: geometry.content_bottom(),
            font_family: self.config.fonts.body.clone(),
            header: CellStyle {
                fill_color: Some(header_style.fill_color.unwrap_or_else(|| colors.primary.clone())),
                text_color: header_style.text_color.unwrap_or_else(|| "#ffffff".to_string()),
                font_style: header_style.font_style.unwrap_or(FontStyle::Bold),
            },
            body: CellStyle {
                fill_color: body_style.fill_color,
                text_color: body_style.text_color.unwrap_or_else(|| colors.text.clone()),
                font_style: FontStyle::Normal,
            },
            stripe_fill: options.striped.then(|| colors.background.clone()),
            column_widths: options.column_widths.clone(),
            grid: options
                .show_grid
                .then(|| Stroke::new(&colors.border, DEFAULT_LINE_WIDTH)),
        }
    }

    /// The only place `y` moves forward. Negative amounts are ignored so the
    /// cursor stays monotonic between page breaks.
    fn advance(&mut self, amount: f32) {
        if amount < 0.0 {
            log::warn!("Ignoring negative cursor advance of {:.3}in", amount);
            return;
        }
        self.y += amount;
        self.report_overflow();
    }

    fn report_overflow(&mut self) {
        if !self.overflow_reported && self.y > self.config.geometry.content_bottom() {
            self.overflow_reported = true;
            log::warn!(
                "Content on page {} runs past the content area ({:.3}in > {:.3}in); \
                 call page_break() to continue on a new page",
                self.canvas.page_count(),
                self.y,
                self.config.geometry.content_bottom()
            );
        }
    }
}
