use serde::{Deserialize, Serialize};

/// The five named document colors, as hex strings.
///
/// Values are not validated here; a backend that cannot interpret one fails
/// when it first uses it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    pub primary: String,
    pub text: String,
    pub text_light: String,
    pub border: String,
    pub background: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            primary: "#0066FF".into(),
            text: "#1a1a1a".into(),
            text_light: "#6b7280".into(),
            border: "#e5e7eb".into(),
            background: "#f9fafb".into(),
        }
    }
}

/// Logical font roles mapped to family names understood by the active backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontSet {
    pub heading: String,
    pub body: String,
    pub mono: String,
}

impl Default for FontSet {
    fn default() -> Self {
        Self {
            heading: "Helvetica".into(),
            body: "Helvetica".into(),
            mono: "Courier".into(),
        }
    }
}
