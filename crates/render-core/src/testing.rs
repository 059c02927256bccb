//! In-memory doubles for exercising the cursor context without a real backend.

use crate::canvas::PageCanvas;
use crate::error::RenderError;
use crate::style::{Stroke, TextPlacement, TextStyle};
use crate::table::{TableLayout, TableRequest};
use folio_types::Rect;
use std::cell::RefCell;

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Text {
        page: usize,
        content: String,
        placement: TextPlacement,
        style: TextStyle,
    },
    Line {
        page: usize,
        from: (f32, f32),
        to: (f32, f32),
        stroke: Stroke,
    },
    Rect {
        page: usize,
        rect: Rect,
        fill: Option<String>,
        stroke: Option<Stroke>,
    },
    Image {
        page: usize,
        key: String,
        rect: Rect,
    },
}

/// A canvas that records every call. Text width is estimated at half an em
/// per character.
#[derive(Debug)]
pub struct RecordingCanvas {
    pub pages: usize,
    pub calls: Vec<DrawCall>,
}

impl Default for RecordingCanvas {
    fn default() -> Self {
        Self {
            pages: 1,
            calls: Vec::new(),
        }
    }
}

impl RecordingCanvas {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn texts(&self) -> Vec<(&str, &TextStyle)> {
        self.calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Text { content, style, .. } => Some((content.as_str(), style)),
                _ => None,
            })
            .collect()
    }
}

impl PageCanvas for RecordingCanvas {
    fn page_count(&self) -> usize {
        self.pages
    }

    fn add_page(&mut self) {
        self.pages += 1;
    }

    fn draw_text(
        &mut self,
        content: &str,
        placement: TextPlacement,
        style: &TextStyle,
    ) -> Result<(), RenderError> {
        self.calls.push(DrawCall::Text {
            page: self.pages,
            content: content.to_string(),
            placement,
            style: style.clone(),
        });
        Ok(())
    }

    fn draw_line(
        &mut self,
        from: (f32, f32),
        to: (f32, f32),
        stroke: &Stroke,
    ) -> Result<(), RenderError> {
        self.calls.push(DrawCall::Line {
            page: self.pages,
            from,
            to,
            stroke: stroke.clone(),
        });
        Ok(())
    }

    fn draw_rect(
        &mut self,
        rect: Rect,
        fill: Option<&str>,
        stroke: Option<&Stroke>,
    ) -> Result<(), RenderError> {
        self.calls.push(DrawCall::Rect {
            page: self.pages,
            rect,
            fill: fill.map(str::to_string),
            stroke: stroke.cloned(),
        });
        Ok(())
    }

    fn draw_image(&mut self, key: &str, _data: &[u8], rect: Rect) -> Result<(), RenderError> {
        self.calls.push(DrawCall::Image {
            page: self.pages,
            key: key.to_string(),
            rect,
        });
        Ok(())
    }

    fn text_width(&self, content: &str, style: &TextStyle) -> f32 {
        content.chars().count() as f32 * style.size_inches() * 0.5
    }
}

/// A table delegate that reports a fixed final offset, optionally after
/// appending pages, and keeps the requests it saw.
#[derive(Debug, Default)]
pub struct ScriptedTableLayout {
    pub final_y: f32,
    pub pages_to_add: usize,
    pub requests: RefCell<Vec<TableRequest>>,
}

impl ScriptedTableLayout {
    pub fn ending_at(final_y: f32) -> Self {
        Self {
            final_y,
            ..Default::default()
        }
    }
}

impl TableLayout for ScriptedTableLayout {
    fn layout(
        &self,
        canvas: &mut dyn PageCanvas,
        request: &TableRequest,
    ) -> Result<f32, RenderError> {
        self.requests.borrow_mut().push(request.clone());
        for _ in 0..self.pages_to_add {
            canvas.add_page();
        }
        Ok(self.final_y)
    }
}
