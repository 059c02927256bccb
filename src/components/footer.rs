use folio_render_core::{CursorContext, LineOptions, RenderError, TextAlign, TextOptions};

const FOOTER_TEXT_SIZE: f32 = 9.0;
const FOOTER_TEXT_COLOR: &str = "#9ca3af";

#[derive(Debug, Clone, Default)]
pub struct FooterOptions {
    pub text: Option<String>,
    pub show_page_number: bool,
}

/// A rule followed by optional centered text and an optional right-aligned
/// `Page N`, where N is the page the footer is drawn on.
pub fn render_footer(ctx: &mut CursorContext<'_>, options: &FooterOptions) -> Result<(), RenderError> {
    ctx.space(0.3);
    ctx.line(&LineOptions::default())?;
    ctx.space(0.1);

    let small = TextOptions::sized(FOOTER_TEXT_SIZE).with_color(FOOTER_TEXT_COLOR);
    if let Some(text) = &options.text {
        ctx.text(text, &small.clone().with_align(TextAlign::Center))?;
    }
    if options.show_page_number {
        let label = format!("Page {}", ctx.page_number());
        ctx.text(&label, &small.with_align(TextAlign::Right))?;
    }
    Ok(())
}
