//! Physical page geometry, in inches.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// Named physical page sizes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageSize {
    #[default]
    Letter,
    A4,
    Legal,
}

impl PageSize {
    /// Portrait dimensions in inches.
    pub fn portrait_inches(self) -> Size {
        match self {
            PageSize::Letter => Size::new(8.5, 11.0),
            PageSize::A4 => Size::new(8.27, 11.69),
            PageSize::Legal => Size::new(8.5, 14.0),
        }
    }

    /// Dimensions in inches with the orientation applied.
    pub fn dimensions(self, orientation: Orientation) -> Size {
        let portrait = self.portrait_inches();
        match orientation {
            Orientation::Portrait => portrait,
            Orientation::Landscape => Size::new(portrait.height, portrait.width),
        }
    }

    /// The keyword CSS `@page { size }` and print-to-PDF paper formats understand.
    pub fn css_name(self) -> &'static str {
        match self {
            PageSize::Letter => "letter",
            PageSize::A4 => "A4",
            PageSize::Legal => "legal",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    #[default]
    Portrait,
    Landscape,
}

impl Orientation {
    pub fn is_landscape(self) -> bool {
        matches!(self, Orientation::Landscape)
    }

    pub fn css_name(self) -> &'static str {
        match self {
            Orientation::Portrait => "portrait",
            Orientation::Landscape => "landscape",
        }
    }
}

/// Page margins in inches.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Margins {
    pub fn uniform(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::uniform(0.5)
    }
}

/// Resolved page geometry: the physical page and the content area inside the margins.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub page_size: PageSize,
    pub orientation: Orientation,
    pub margins: Margins,
    /// Physical page dimensions with orientation applied.
    pub page: Size,
    /// Page dimensions minus margins.
    pub content: Size,
}

impl Geometry {
    pub fn new(page_size: PageSize, orientation: Orientation, margins: Margins) -> Self {
        let page = page_size.dimensions(orientation);
        let content = Size::new(
            page.width - margins.left - margins.right,
            page.height - margins.top - margins.bottom,
        );
        Self {
            page_size,
            orientation,
            margins,
            page,
            content,
        }
    }

    /// The vertical offset at which the content area ends.
    pub fn content_bottom(&self) -> f32 {
        self.margins.top + self.content.height
    }
}
