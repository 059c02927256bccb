use crate::format::format_currency;
use folio_render_core::{CursorContext, LineOptions, RectOptions, RenderError, TextAlign, TextOptions};

const AMOUNT_DUE_PLATE_HEIGHT: f32 = 0.7;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TotalsOptions {
    pub subtotal: f64,
    /// Percentage, e.g. `8.25`.
    pub tax_rate: Option<f64>,
    pub tax_amount: Option<f64>,
    pub total: f64,
    /// Caption of the total line; `"Total"` when absent.
    pub total_label: Option<String>,
    pub amount_due_label: Option<String>,
    pub show_amount_due_box: bool,
}

/// Right-aligned subtotal, tax and total lines, optionally followed by a
/// filled plate announcing the amount due.
///
/// The tax line is only drawn when both the rate and the amount are present
/// and nonzero.
pub fn render_totals(ctx: &mut CursorContext<'_>, options: &TotalsOptions) -> Result<(), RenderError> {
    let right = TextOptions::aligned(TextAlign::Right);
    ctx.space(0.2);
    ctx.text(&format!("Subtotal: {}", format_currency(options.subtotal)), &right)?;

    if let (Some(rate), Some(amount)) = (options.tax_rate, options.tax_amount) {
        if rate != 0.0 && amount != 0.0 {
            ctx.text(&format!("Tax ({}%): {}", rate, format_currency(amount)), &right)?;
        }
    }

    ctx.line(&LineOptions::default())?;
    ctx.text(
        &format!(
            "{}: {}",
            options.total_label.as_deref().unwrap_or("Total"),
            format_currency(options.total)
        ),
        &right.clone().bold().with_size(16.0),
    )?;

    if options.show_amount_due_box {
        ctx.space(0.4);
        let plate = RectOptions::filled(ctx.config().colors.primary.clone());
        let (left, top, width) = (ctx.margin_left(), ctx.y(), ctx.width());
        ctx.rect(left, top, width, AMOUNT_DUE_PLATE_HEIGHT, &plate)?;
        ctx.space(0.25);
        let label = options.amount_due_label.as_deref().unwrap_or("Amount Due");
        ctx.text(
            &format!("{}: {}", label, format_currency(options.total)),
            &TextOptions::sized(18.0).bold().with_color("#ffffff"),
        )?;
        ctx.space(0.5);
    }
    Ok(())
}
