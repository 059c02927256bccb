//! Wraps an HTML fragment in a full document whose stylesheet is derived from
//! the same resolved configuration the vector backend uses.
//!
//! Page margins are zero here; the print step applies the configured margins
//! so they are never counted twice.

use folio_types::ResolvedConfig;
use std::fmt::Write;

pub fn compose_document(config: &ResolvedConfig, fragment: &str) -> String {
    let mut html = String::with_capacity(fragment.len() + 2048);
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n  <meta charset=\"UTF-8\">\n  <style>\n");
    html.push_str(&stylesheet(config));
    html.push_str("  </style>\n</head>\n<body>\n");
    html.push_str(fragment);
    html.push_str("\n</body>\n</html>\n");
    html
}

pub fn stylesheet(config: &ResolvedConfig) -> String {
    let colors = &config.colors;
    let fonts = &config.fonts;
    let mut css = String::new();
    // Writing to a String cannot fail.
    let _ = write!(
        css,
        r#"    :root {{
      --color-primary: {primary};
      --color-text: {text};
      --color-text-light: {text_light};
      --color-border: {border};
      --color-background: {background};
      --font-heading: {heading}, sans-serif;
      --font-body: {body}, sans-serif;
      --font-mono: {mono}, monospace;
    }}

    * {{ margin: 0; padding: 0; box-sizing: border-box; }}

    @page {{
      size: {size} {orientation};
      margin: 0;
    }}

    body {{
      font-family: var(--font-body);
      font-size: 11pt;
      line-height: 1.5;
      color: var(--color-text);
      -webkit-print-color-adjust: exact;
      print-color-adjust: exact;
    }}

    h1, h2, h3 {{ font-family: var(--font-heading); }}
    code, pre, .mono {{ font-family: var(--font-mono); }}

    .text-primary {{ color: var(--color-primary); }}
    .text-light {{ color: var(--color-text-light); }}
    .bg-primary {{ background-color: var(--color-primary); }}
    .bg-light {{ background-color: var(--color-background); }}
"#,
        primary = colors.primary,
        text = colors.text,
        text_light = colors.text_light,
        border = colors.border,
        background = colors.background,
        heading = fonts.heading,
        body = fonts.body,
        mono = fonts.mono,
        size = config.page_size().css_name(),
        orientation = config.orientation().css_name(),
    );
    css
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_types::{Orientation, PageSize, PdfConfig};

    #[test]
    fn embeds_fragment_and_palette() {
        let config = ResolvedConfig::default();
        let html = compose_document(&config, "<p>x</p>");
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<body>\n<p>x</p>\n</body>"));
        assert!(html.contains("--color-primary: #0066FF;"));
        assert!(html.contains("--font-mono: Courier, monospace;"));
        assert!(html.contains("print-color-adjust: exact;"));
    }

    #[test]
    fn page_rule_has_size_orientation_and_zero_margin() {
        let config = PdfConfig::new()
            .with_page_size(PageSize::A4)
            .with_orientation(Orientation::Landscape)
            .resolve();
        let css = stylesheet(&config);
        assert!(css.contains("size: A4 landscape;"));
        assert!(css.contains("@page {\n      size: A4 landscape;\n      margin: 0;"));
    }
}
