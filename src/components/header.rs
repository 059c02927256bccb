use folio_render_core::{CursorContext, HeadingLevel, RenderError, TextOptions};

#[derive(Debug, Clone, Default)]
pub struct HeaderOptions {
    pub title: String,
    pub subtitle: Option<String>,
    /// Subtitle color; the palette's light text color when unset.
    pub color: Option<String>,
}

impl HeaderOptions {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = Some(subtitle.into());
        self
    }
}

/// A level-one title, an optional 12pt subtitle and a 0.3in gap.
pub fn render_header(ctx: &mut CursorContext<'_>, options: &HeaderOptions) -> Result<(), RenderError> {
    ctx.heading(&options.title, HeadingLevel::H1)?;
    if let Some(subtitle) = &options.subtitle {
        let color = options
            .color
            .clone()
            .unwrap_or_else(|| ctx.config().colors.text_light.clone());
        ctx.text(subtitle, &TextOptions::sized(12.0).with_color(color))?;
    }
    ctx.space(0.3);
    Ok(())
}
