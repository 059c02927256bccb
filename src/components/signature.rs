use folio_render_core::{CursorContext, HeadingLevel, LineOptions, RenderError, TextOptions};

#[derive(Debug, Clone, PartialEq)]
pub struct SignatureBlockOptions {
    pub labels: Vec<String>,
    pub include_date: bool,
    /// Gap after each signature, in inches.
    pub spacing: f32,
}

impl SignatureBlockOptions {
    pub fn new<I, S>(labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            labels: labels.into_iter().map(Into::into).collect(),
            include_date: true,
            spacing: 0.4,
        }
    }

    pub fn without_date(mut self) -> Self {
        self.include_date = false;
        self
    }
}

pub fn render_signature_block(
    ctx: &mut CursorContext<'_>,
    options: &SignatureBlockOptions,
) -> Result<(), RenderError> {
    ctx.space(0.3);
    ctx.line(&LineOptions::default())?;
    ctx.space(0.3);
    ctx.heading("Signatures", HeadingLevel::H2)?;
    ctx.space(0.3);

    for label in &options.labels {
        ctx.signature(label, &Default::default())?;
        if options.include_date {
            let date_line = TextOptions::sized(9.0).with_color(ctx.config().colors.text_light.clone());
            ctx.text("Date: _______________", &date_line)?;
        }
        ctx.space(options.spacing);
    }
    Ok(())
}
