//! Caller-facing options for the cursor-context primitives. Every field is
//! optional; unset fields fall back to the palette, font set or a fixed default.

use crate::style::{FontStyle, TextAlign};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TextOptions {
    /// Absolute x in inches. Only honoured for left-aligned text.
    pub x: Option<f32>,
    pub align: TextAlign,
    pub color: Option<String>,
    /// Font family override.
    pub font: Option<String>,
    /// Size in points.
    pub size: Option<f32>,
    pub bold: bool,
    /// Wrap width in inches.
    pub max_width: Option<f32>,
}

impl TextOptions {
    pub fn aligned(align: TextAlign) -> Self {
        Self {
            align,
            ..Default::default()
        }
    }

    pub fn sized(size: f32) -> Self {
        Self {
            size: Some(size),
            ..Default::default()
        }
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    pub fn with_size(mut self, size: f32) -> Self {
        self.size = Some(size);
        self
    }

    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn with_align(mut self, align: TextAlign) -> Self {
        self.align = align;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HeadingLevel {
    #[default]
    H1,
    H2,
    H3,
}

impl HeadingLevel {
    /// Fixed point size for the level.
    pub fn point_size(self) -> f32 {
        match self {
            HeadingLevel::H1 => 24.0,
            HeadingLevel::H2 => 18.0,
            HeadingLevel::H3 => 14.0,
        }
    }
}

impl TryFrom<u8> for HeadingLevel {
    type Error = u8;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            1 => Ok(HeadingLevel::H1),
            2 => Ok(HeadingLevel::H2),
            3 => Ok(HeadingLevel::H3),
            other => Err(other),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ColumnWidth {
    /// Width in inches.
    Fixed(f32),
    Auto,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct HeaderStyle {
    pub fill_color: Option<String>,
    pub text_color: Option<String>,
    pub font_style: Option<FontStyle>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BodyStyle {
    pub fill_color: Option<String>,
    pub text_color: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableOptions {
    pub column_widths: Vec<ColumnWidth>,
    pub header_style: Option<HeaderStyle>,
    pub body_style: Option<BodyStyle>,
    pub show_grid: bool,
    pub striped: bool,
}

impl TableOptions {
    pub fn striped() -> Self {
        Self {
            striped: true,
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LineOptions {
    pub color: Option<String>,
    /// Stroke width in inches.
    pub width: Option<f32>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImageOptions {
    pub x: Option<f32>,
    pub width: Option<f32>,
    pub height: Option<f32>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignatureOptions {
    /// Signature line length in inches.
    pub width: Option<f32>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RectOptions {
    pub fill: Option<String>,
    pub stroke: Option<String>,
}

impl RectOptions {
    pub fn filled(color: impl Into<String>) -> Self {
        Self {
            fill: Some(color.into()),
            stroke: None,
        }
    }
}
