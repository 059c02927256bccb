//! Partial page configuration and its resolution to a total one.

use crate::geometry::{Geometry, Margins, Orientation, PageSize};
use crate::theme::{FontSet, Palette};
use serde::{Deserialize, Serialize};

/// User-supplied configuration. Every unset field takes a documented default
/// when resolved: letter, portrait, 0.5in margins, the default palette and font set.
///
/// Nested groups are replaced whole, never merged field by field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PdfConfig {
    pub page_size: Option<PageSize>,
    pub orientation: Option<Orientation>,
    pub margins: Option<Margins>,
    pub colors: Option<Palette>,
    pub fonts: Option<FontSet>,
}

impl PdfConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page_size(mut self, page_size: PageSize) -> Self {
        self.page_size = Some(page_size);
        self
    }

    pub fn with_orientation(mut self, orientation: Orientation) -> Self {
        self.orientation = Some(orientation);
        self
    }

    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = Some(margins);
        self
    }

    pub fn with_colors(mut self, colors: Palette) -> Self {
        self.colors = Some(colors);
        self
    }

    pub fn with_fonts(mut self, fonts: FontSet) -> Self {
        self.fonts = Some(fonts);
        self
    }

    /// Layers `overrides` on top of `self`: any field set in `overrides` wins.
    pub fn merged_with(&self, overrides: &PdfConfig) -> PdfConfig {
        PdfConfig {
            page_size: overrides.page_size.or(self.page_size),
            orientation: overrides.orientation.or(self.orientation),
            margins: overrides.margins.or(self.margins),
            colors: overrides.colors.clone().or_else(|| self.colors.clone()),
            fonts: overrides.fonts.clone().or_else(|| self.fonts.clone()),
        }
    }

    /// Fills every unset field with its default. Pure and infallible; both
    /// backends resolve through here so they agree on the content area.
    pub fn resolve(&self) -> ResolvedConfig {
        let page_size = self.page_size.unwrap_or_default();
        let orientation = self.orientation.unwrap_or_default();
        let margins = self.margins.unwrap_or_default();
        let geometry = Geometry::new(page_size, orientation, margins);
        log::debug!(
            "Resolved geometry: {:?} {:?}, content {:.3}in x {:.3}in",
            page_size,
            orientation,
            geometry.content.width,
            geometry.content.height
        );
        ResolvedConfig {
            geometry,
            colors: self.colors.clone().unwrap_or_default(),
            fonts: self.fonts.clone().unwrap_or_default(),
        }
    }
}

/// A fully populated configuration, created fresh for each render.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub geometry: Geometry,
    pub colors: Palette,
    pub fonts: FontSet,
}

impl ResolvedConfig {
    pub fn page_size(&self) -> PageSize {
        self.geometry.page_size
    }

    pub fn orientation(&self) -> Orientation {
        self.geometry.orientation
    }

    pub fn margins(&self) -> Margins {
        self.geometry.margins
    }
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        PdfConfig::default().resolve()
    }
}
