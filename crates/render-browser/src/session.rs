//! The headless-browser delegate.
//!
//! A launcher produces one isolated session per render. The session is driven
//! through content load, font readiness and printing, and is then consumed by
//! [`BrowserSession::close`], so it can be closed at most once.

use folio_render_core::RenderError;
use folio_types::{PageSize, ResolvedConfig};
use std::future::Future;

/// Print parameters handed to the browser, derived from resolved geometry.
#[derive(Debug, Clone, PartialEq)]
pub struct PrintOptions {
    pub page_size: PageSize,
    pub landscape: bool,
    pub margins: PrintMargins,
    pub print_background: bool,
}

/// Margins as CSS dimension strings such as `"0.5in"`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrintMargins {
    pub top: String,
    pub right: String,
    pub bottom: String,
    pub left: String,
}

impl PrintOptions {
    pub fn from_config(config: &ResolvedConfig) -> Self {
        let margins = config.margins();
        Self {
            page_size: config.page_size(),
            landscape: config.orientation().is_landscape(),
            margins: PrintMargins {
                top: inches(margins.top),
                right: inches(margins.right),
                bottom: inches(margins.bottom),
                left: inches(margins.left),
            },
            print_background: true,
        }
    }

    /// A `@page` rule that applies these options when injected at print time.
    pub fn page_rule(&self) -> String {
        let orientation = if self.landscape { "landscape" } else { "portrait" };
        format!(
            "@page {{ size: {} {}; margin: {} {} {} {}; }}",
            self.page_size.css_name(),
            orientation,
            self.margins.top,
            self.margins.right,
            self.margins.bottom,
            self.margins.left
        )
    }
}

fn inches(value: f32) -> String {
    format!("{}in", value)
}

/// Starts isolated browser sessions.
pub trait BrowserLauncher: Send + Sync {
    type Session: BrowserSession;

    fn launch(&self) -> impl Future<Output = Result<Self::Session, RenderError>> + Send;
}

/// One browser page, used for exactly one render.
pub trait BrowserSession: Send {
    /// Loads a complete HTML document and resolves once the network has settled.
    fn load_html(&mut self, html: &str) -> impl Future<Output = Result<(), RenderError>> + Send;

    /// Resolves once web fonts have finished loading.
    fn fonts_ready(&mut self) -> impl Future<Output = Result<(), RenderError>> + Send;

    fn print_pdf(
        &mut self,
        options: &PrintOptions,
    ) -> impl Future<Output = Result<Vec<u8>, RenderError>> + Send;

    /// Tears the browser down.
    fn close(self) -> impl Future<Output = Result<(), RenderError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_types::{Margins, Orientation, PdfConfig};

    #[test]
    fn default_geometry_prints_letter_portrait_half_inch() {
        let options = PrintOptions::from_config(&ResolvedConfig::default());
        assert_eq!(options.page_size, PageSize::Letter);
        assert!(!options.landscape);
        assert_eq!(options.margins.top, "0.5in");
        assert_eq!(options.margins.left, "0.5in");
        assert!(options.print_background);
    }

    #[test]
    fn page_rule_carries_orientation_and_margins() {
        let config = PdfConfig::new()
            .with_page_size(PageSize::Legal)
            .with_orientation(Orientation::Landscape)
            .with_margins(Margins {
                top: 1.0,
                right: 0.75,
                bottom: 1.0,
                left: 0.75,
            })
            .resolve();
        let rule = PrintOptions::from_config(&config).page_rule();
        assert_eq!(rule, "@page { size: legal landscape; margin: 1in 0.75in 1in 0.75in; }");
    }
}
