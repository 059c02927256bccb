//! Mapping from font family names to the fourteen standard PDF fonts, plus
//! the width approximation used for alignment and wrapping.
//!
//! Nothing is embedded or shaped; widths are an average-advance estimate.
//! Text for the builtin fonts is written in WinAnsiEncoding (Windows-1252).

use folio_render_core::{FontStyle, TextStyle};
use printpdf::BuiltinFont;

/// Average glyph advance as a fraction of the font size.
const PROPORTIONAL_ADVANCE: f32 = 0.5;
const MONOSPACE_ADVANCE: f32 = 0.6;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Family {
    Helvetica,
    Times,
    Courier,
}

fn family_of(name: &str) -> Option<Family> {
    let lower = name.trim().to_ascii_lowercase();
    match lower.as_str() {
        "helvetica" | "arial" | "sans-serif" | "sans" => Some(Family::Helvetica),
        "times" | "times-roman" | "times new roman" | "serif" => Some(Family::Times),
        "courier" | "courier new" | "monospace" | "mono" => Some(Family::Courier),
        _ => None,
    }
}

pub fn is_standard_family(name: &str) -> bool {
    family_of(name).is_some()
}

/// Resolves a family name and style to a builtin font. Unknown families fall
/// back to Helvetica.
pub fn builtin_font(family: &str, style: FontStyle) -> BuiltinFont {
    match (family_of(family).unwrap_or(Family::Helvetica), style) {
        (Family::Helvetica, FontStyle::Normal) => BuiltinFont::Helvetica,
        (Family::Helvetica, FontStyle::Bold) => BuiltinFont::HelveticaBold,
        (Family::Helvetica, FontStyle::Italic) => BuiltinFont::HelveticaOblique,
        (Family::Times, FontStyle::Normal) => BuiltinFont::TimesRoman,
        (Family::Times, FontStyle::Bold) => BuiltinFont::TimesBold,
        (Family::Times, FontStyle::Italic) => BuiltinFont::TimesItalic,
        (Family::Courier, FontStyle::Normal) => BuiltinFont::Courier,
        (Family::Courier, FontStyle::Bold) => BuiltinFont::CourierBold,
        (Family::Courier, FontStyle::Italic) => BuiltinFont::CourierOblique,
    }
}

/// Approximate width of `content` in inches.
pub fn approximate_width(content: &str, style: &TextStyle) -> f32 {
    let advance = match family_of(&style.family) {
        Some(Family::Courier) => MONOSPACE_ADVANCE,
        _ => PROPORTIONAL_ADVANCE,
    };
    content.chars().count() as f32 * style.size_inches() * advance
}

/// Encodes `text` as Windows-1252 for a builtin font declared with
/// `/WinAnsiEncoding`. Characters without a code point become `?`; the second
/// value counts them.
pub fn win_ansi_bytes(text: &str) -> (Vec<u8>, usize) {
    let mut bytes = Vec::with_capacity(text.len());
    let mut replaced = 0;
    for ch in text.chars() {
        match win_ansi_byte(ch) {
            Some(byte) => bytes.push(byte),
            None => {
                bytes.push(b'?');
                replaced += 1;
            }
        }
    }
    (bytes, replaced)
}

fn win_ansi_byte(ch: char) -> Option<u8> {
    let byte = match ch as u32 {
        code @ (0x00..=0x7F | 0xA0..=0xFF) => code as u8,
        0x20AC => 0x80,
        0x201A => 0x82,
        0x0192 => 0x83,
        0x201E => 0x84,
        0x2026 => 0x85,
        0x2020 => 0x86,
        0x2021 => 0x87,
        0x02C6 => 0x88,
        0x2030 => 0x89,
        0x0160 => 0x8A,
        0x2039 => 0x8B,
        0x0152 => 0x8C,
        0x017D => 0x8E,
        0x2018 => 0x91,
        0x2019 => 0x92,
        0x201C => 0x93,
        0x201D => 0x94,
        0x2022 => 0x95,
        0x2013 => 0x96,
        0x2014 => 0x97,
        0x02DC => 0x98,
        0x2122 => 0x99,
        0x0161 => 0x9A,
        0x203A => 0x9B,
        0x0153 => 0x9C,
        0x017E => 0x9E,
        0x0178 => 0x9F,
        _ => return None,
    };
    Some(byte)
}
