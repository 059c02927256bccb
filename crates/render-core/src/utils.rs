//! Unit conversions and color parsing shared by canvases.

use crate::error::RenderError;
use folio_types::Color;

pub const POINTS_PER_INCH: f32 = 72.0;

pub fn inches_to_points(inches: f32) -> f32 {
    inches * POINTS_PER_INCH
}

/// Convert layout Y coordinate to PDF Y coordinate (flip origin)
pub fn flip_y(y: f32, page_height: f32) -> f32 {
    page_height - y
}

/// Parses a palette or option color, naming the offending value on failure.
pub fn parse_color(value: &str) -> Result<Color, RenderError> {
    Color::from_hex(value).map_err(|e| RenderError::InvalidColor {
        value: value.to_string(),
        reason: e.0,
    })
}
