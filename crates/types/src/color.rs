use std::fmt;
use std::str::FromStr;

/// An opaque RGB color parsed from a `#RGB` or `#RRGGBB` hex string.
///
/// Palettes carry colors as strings; parsing happens in the backend that needs
/// numeric components, so an invalid hex value is that backend's failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Parse a hex color string (#RGB or #RRGGBB format)
    pub fn from_hex(s: &str) -> Result<Color, ColorParseError> {
        let s = s.trim();
        let hex = s
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError(format!("Color must start with #, got: {}", s)))?;

        let component = |digits: &str, name: &str| {
            u8::from_str_radix(digits, 16)
                .map_err(|e| ColorParseError(format!("Invalid {} component in '{}': {}", name, s, e)))
        };

        match hex.len() {
            3 if hex.is_ascii() => {
                // #RGB format - expand each digit
                let r = component(&hex[0..1].repeat(2), "red")?;
                let g = component(&hex[1..2].repeat(2), "green")?;
                let b = component(&hex[2..3].repeat(2), "blue")?;
                Ok(Color { r, g, b })
            }
            6 if hex.is_ascii() => {
                let r = component(&hex[0..2], "red")?;
                let g = component(&hex[2..4], "green")?;
                let b = component(&hex[4..6], "blue")?;
                Ok(Color { r, g, b })
            }
            _ => Err(ColorParseError(format!(
                "Invalid hex color length: expected 3 or 6, got {} in '{}'",
                hex.len(),
                s
            ))),
        }
    }

    /// Components scaled to `0.0..=1.0`, the range PDF color operators expect.
    pub fn to_unit_rgb(self) -> (f32, f32, f32) {
        (
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        )
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::from_hex(s)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct ColorParseError(pub String);
