//! The estimate template: priced line items with an estimated total, a
//! validity date and optional terms.

use super::invoice::{LineItem, compose_party, draw_party, escape_html};
use crate::components::{HeaderOptions, TotalsOptions, render_header, render_totals};
use crate::format::{format_currency, format_date_str};
use crate::template::Template;
use folio_render_core::{
    ComposeMarkup, CursorContext, DrawContent, RectOptions, RenderError, TableOptions, TextOptions,
};
use folio_types::{Orientation, PageSize, PdfConfig};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

const DATES_BAR_HEIGHT: f32 = 0.6;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateData {
    pub document_number: String,
    pub business_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_phone: Option<String>,
    pub client_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_address: Option<String>,
    pub document_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub valid_until: Option<String>,
    pub items: Vec<LineItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub terms: Option<String>,
}

impl EstimateData {
    pub fn subtotal(&self) -> f64 {
        self.items.iter().map(LineItem::amount).sum()
    }

    /// Tax at `tax_rate` percent; zero when the rate is absent or zero.
    pub fn tax(&self) -> f64 {
        self.tax_rate.map_or(0.0, |rate| self.subtotal() * rate / 100.0)
    }

    pub fn total(&self) -> f64 {
        self.subtotal() + self.tax()
    }

    fn dates_line(&self) -> String {
        let mut line = format!("Estimate Date: {}", format_date_str(&self.document_date));
        if let Some(valid_until) = &self.valid_until {
            line.push_str(&format!("    Valid Until: {}", format_date_str(valid_until)));
        }
        line
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct EstimateTemplate;

impl DrawContent for EstimateTemplate {
    type Data = EstimateData;

    fn draw(&self, data: &EstimateData, ctx: &mut CursorContext<'_>) -> Result<(), RenderError> {
        let light = ctx.config().colors.text_light.clone();

        render_header(
            ctx,
            &HeaderOptions::new("ESTIMATE").with_subtitle(data.document_number.as_str()),
        )?;

        draw_party(
            ctx,
            "FROM",
            &data.business_name,
            &[data.business_email.as_deref(), data.business_phone.as_deref()],
        )?;
        ctx.space(0.3);
        draw_party(
            ctx,
            "PREPARED FOR",
            &data.client_name,
            &[
                data.client_email.as_deref(),
                data.client_phone.as_deref(),
                data.client_address.as_deref(),
            ],
        )?;
        ctx.space(0.4);

        let bar = RectOptions::filled(ctx.config().colors.background.clone());
        let (left, top, width) = (ctx.margin_left(), ctx.y(), ctx.width());
        ctx.rect(left, top, width, DATES_BAR_HEIGHT, &bar)?;
        ctx.space(0.15);
        ctx.text(&data.dates_line(), &TextOptions::default())?;
        ctx.space(0.5);

        let rows: Vec<Vec<String>> = data
            .items
            .iter()
            .map(|item| {
                vec![
                    item.description.clone(),
                    item.quantity_label(),
                    format_currency(item.rate),
                    format_currency(item.amount()),
                ]
            })
            .collect();
        ctx.table(
            &["Description", "Qty", "Rate", "Amount"],
            &rows,
            &TableOptions::striped(),
        )?;

        render_totals(
            ctx,
            &TotalsOptions {
                subtotal: data.subtotal(),
                tax_rate: data.tax_rate,
                tax_amount: data.tax_rate.map(|_| data.tax()),
                total: data.total(),
                total_label: Some("Estimated Total".into()),
                amount_due_label: None,
                show_amount_due_box: false,
            },
        )?;
        ctx.space(0.5);

        let caption = TextOptions::sized(9.0).with_color(light.clone()).bold();
        let muted = TextOptions::default().with_color(light);
        if let Some(notes) = &data.notes {
            ctx.text("NOTES", &caption)?;
            ctx.space(0.1);
            ctx.text(notes, &muted)?;
            ctx.space(0.3);
        }
        if let Some(terms) = &data.terms {
            ctx.text("TERMS & CONDITIONS", &caption)?;
            ctx.space(0.1);
            ctx.text(terms, &muted)?;
        }
        Ok(())
    }
}

impl ComposeMarkup for EstimateTemplate {
    fn compose(&self, data: &EstimateData) -> Result<String, RenderError> {
        let mut html = String::new();
        compose_estimate(&mut html, data).map_err(|e| RenderError::Other(e.to_string()))?;
        Ok(html)
    }
}

fn compose_estimate(html: &mut String, data: &EstimateData) -> std::fmt::Result {
    html.push_str("<div class=\"estimate\">");
    write!(
        html,
        "<h1 class=\"text-primary\">ESTIMATE</h1><p class=\"document-number text-light\">{}</p>",
        escape_html(&data.document_number)
    )?;

    html.push_str("<div class=\"parties\">");
    compose_party(
        html,
        "From",
        &data.business_name,
        &[data.business_email.as_deref(), data.business_phone.as_deref()],
    )?;
    compose_party(
        html,
        "Prepared For",
        &data.client_name,
        &[
            data.client_email.as_deref(),
            data.client_phone.as_deref(),
            data.client_address.as_deref(),
        ],
    )?;
    html.push_str("</div>");

    write!(
        html,
        "<div class=\"dates-bar bg-light\"><p>{}</p></div>",
        escape_html(&data.dates_line())
    )?;

    html.push_str(
        "<table class=\"items\"><thead><tr><th>Description</th><th class=\"num\">Qty</th>\
         <th class=\"num\">Rate</th><th class=\"num\">Amount</th></tr></thead><tbody>",
    );
    for item in &data.items {
        write!(
            html,
            "<tr><td>{}</td><td class=\"num\">{}</td><td class=\"num\">{}</td><td class=\"num amount\">{}</td></tr>",
            escape_html(&item.description),
            escape_html(&item.quantity_label()),
            format_currency(item.rate),
            format_currency(item.amount())
        )?;
    }
    html.push_str("</tbody></table>");

    write!(
        html,
        "<div class=\"totals\"><div class=\"totals-row\"><span>Subtotal</span><span>{}</span></div>",
        format_currency(data.subtotal())
    )?;
    if let Some(rate) = data.tax_rate.filter(|rate| *rate != 0.0) {
        write!(
            html,
            "<div class=\"totals-row\"><span>Tax ({}%)</span><span>{}</span></div>",
            rate,
            format_currency(data.tax())
        )?;
    }
    write!(
        html,
        "<div class=\"totals-row grand\"><span>Estimated Total</span><span>{}</span></div></div>",
        format_currency(data.total())
    )?;

    if let Some(notes) = &data.notes {
        write!(
            html,
            "<div class=\"notes\"><p class=\"caption text-light\">Notes</p><p class=\"text-light\">{}</p></div>",
            escape_html(notes)
        )?;
    }
    if let Some(terms) = &data.terms {
        write!(
            html,
            "<div class=\"terms\"><p class=\"caption text-light\">Terms &amp; Conditions</p><p class=\"text-light\">{}</p></div>",
            escape_html(terms)
        )?;
    }
    html.push_str("</div>");
    Ok(())
}

/// The estimate template, on letter portrait paper.
pub fn estimate_template() -> Template {
    Template::dual("estimate", "Estimate", EstimateTemplate).with_config(
        PdfConfig::new()
            .with_page_size(PageSize::Letter)
            .with_orientation(Orientation::Portrait),
    )
}
