//! Per-call style snapshots handed to the canvas.
//!
//! A canvas never holds ambient text state: every draw call carries the full
//! style it needs, so nothing can leak from one call into the next.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FontStyle {
    #[default]
    Normal,
    Bold,
    Italic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// An immutable text style for exactly one draw call. `size` is in points.
#[derive(Debug, Clone, PartialEq)]
pub struct TextStyle {
    pub family: String,
    pub style: FontStyle,
    pub size: f32,
    pub color: String,
}

impl TextStyle {
    pub fn new(family: impl Into<String>, size: f32, color: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            style: FontStyle::Normal,
            size,
            color: color.into(),
        }
    }

    pub fn with_style(mut self, style: FontStyle) -> Self {
        self.style = style;
        self
    }

    /// Font size in inches.
    pub fn size_inches(&self) -> f32 {
        self.size / 72.0
    }
}

/// Where a text run is anchored. `x` is the alignment anchor: the left edge,
/// the midpoint or the right edge depending on `align`. `y` is the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TextPlacement {
    pub x: f32,
    pub y: f32,
    pub align: TextAlign,
    pub max_width: Option<f32>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    pub color: String,
    /// Line width in inches.
    pub width: f32,
}

impl Stroke {
    pub fn new(color: impl Into<String>, width: f32) -> Self {
        Self {
            color: color.into(),
            width,
        }
    }
}

/// Style values set through `set_font`/`set_font_size`/`set_text_color`,
/// held until the next text-drawing primitive consumes them.
#[derive(Debug, Clone, Default, PartialEq)]
pub(crate) struct PendingStyle {
    pub family: Option<String>,
    pub style: Option<FontStyle>,
    pub size: Option<f32>,
    pub color: Option<String>,
}

impl PendingStyle {
    pub fn apply_to(self, base: &mut TextStyle) {
        if let Some(family) = self.family {
            base.family = family;
        }
        if let Some(style) = self.style {
            base.style = style;
        }
        if let Some(size) = self.size {
            base.size = size;
        }
        if let Some(color) = self.color {
            base.color = color;
        }
    }
}
