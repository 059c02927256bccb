//! The invoice reference template, drawable on either backend.

use crate::components::{HeaderOptions, TotalsOptions, render_header, render_totals};
use crate::format::{format_currency, format_date_str};
use crate::template::Template;
use folio_render_core::{
    ComposeMarkup, CursorContext, DrawContent, RectOptions, RenderError, TableOptions, TextAlign,
    TextOptions,
};
use folio_types::{Orientation, PageSize, PdfConfig};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

const DEFAULT_PAYMENT_TERMS: &str = "Net 30";
const DATES_BAR_HEIGHT: f32 = 0.6;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    pub description: String,
    pub quantity: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    pub rate: f64,
}

impl LineItem {
    pub fn amount(&self) -> f64 {
        self.quantity * self.rate
    }

    pub(super) fn quantity_label(&self) -> String {
        match &self.unit {
            Some(unit) => format!("{} {}", self.quantity, unit),
            None => self.quantity.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceData {
    pub document_number: String,
    pub business_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub business_address: Option<String>,
    pub client_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_address: Option<String>,
    /// `YYYY-MM-DD`, optionally followed by a time.
    pub document_date: String,
    pub due_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payment_terms: Option<String>,
    pub items: Vec<LineItem>,
    /// Percentage; absent or zero means untaxed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tax_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// Subtotal, tax and total for one invoice.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Totals {
    subtotal: f64,
    tax_rate: Option<f64>,
    tax: f64,
    total: f64,
}

impl InvoiceData {
    fn totals(&self) -> Totals {
        let subtotal: f64 = self.items.iter().map(LineItem::amount).sum();
        let tax_rate = self.tax_rate.filter(|rate| *rate != 0.0);
        let tax = tax_rate.map_or(0.0, |rate| subtotal * rate / 100.0);
        Totals {
            subtotal,
            tax_rate,
            tax,
            total: subtotal + tax,
        }
    }
}

/// Escapes the characters that could break out of HTML text or a quoted
/// attribute.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[derive(Debug, Clone, Copy, Default)]
pub struct InvoiceTemplate;

/// A captioned party block: caption, bold name, then whichever details are
/// present.
pub(super) fn draw_party(
    ctx: &mut CursorContext<'_>,
    caption: &str,
    name: &str,
    details: &[Option<&str>],
) -> Result<(), RenderError> {
    let light = ctx.config().colors.text_light.clone();
    ctx.text(caption, &TextOptions::sized(9.0).with_color(light).bold())?;
    ctx.space(0.1);
    ctx.text(name, &TextOptions::default().bold())?;
    for detail in details.iter().flatten() {
        ctx.text(detail, &TextOptions::default())?;
    }
    Ok(())
}

impl DrawContent for InvoiceTemplate {
    type Data = InvoiceData;

    fn draw(&self, data: &InvoiceData, ctx: &mut CursorContext<'_>) -> Result<(), RenderError> {
        let totals = data.totals();
        let light = ctx.config().colors.text_light.clone();

        render_header(
            ctx,
            &HeaderOptions::new("INVOICE").with_subtitle(data.document_number.as_str()),
        )?;
        ctx.text(
            &data.business_name,
            &TextOptions::sized(14.0).bold().with_align(TextAlign::Right),
        )?;
        ctx.space(0.5);

        draw_party(
            ctx,
            "FROM",
            &data.business_name,
            &[
                data.business_email.as_deref(),
                data.business_phone.as_deref(),
                data.business_address.as_deref(),
            ],
        )?;
        ctx.space(0.3);
        draw_party(
            ctx,
            "BILL TO",
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
        ctx.text(
            &format!(
                "Invoice Date: {}    Due Date: {}    {}",
                format_date_str(&data.document_date),
                format_date_str(&data.due_date),
                data.payment_terms.as_deref().unwrap_or(DEFAULT_PAYMENT_TERMS)
            ),
            &TextOptions::default(),
        )?;
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
                subtotal: totals.subtotal,
                tax_rate: totals.tax_rate,
                tax_amount: totals.tax_rate.map(|_| totals.tax),
                total: totals.total,
                total_label: None,
                amount_due_label: None,
                show_amount_due_box: true,
            },
        )?;

        if let Some(notes) = &data.notes {
            ctx.text("NOTES", &TextOptions::sized(9.0).with_color(light.clone()).bold())?;
            ctx.space(0.1);
            ctx.text(notes, &TextOptions::default().with_color(light))?;
        }
        Ok(())
    }
}

impl ComposeMarkup for InvoiceTemplate {
    fn compose(&self, data: &InvoiceData) -> Result<String, RenderError> {
        let totals = data.totals();
        let mut html = String::new();
        compose_invoice(&mut html, data, &totals).map_err(|e| RenderError::Other(e.to_string()))?;
        Ok(html)
    }
}

pub(super) fn compose_party(
    html: &mut String,
    caption: &str,
    name: &str,
    details: &[Option<&str>],
) -> std::fmt::Result {
    write!(
        html,
        "<div class=\"party\"><p class=\"caption\">{}</p><p class=\"party-name\">{}</p>",
        caption,
        escape_html(name)
    )?;
    for detail in details.iter().flatten() {
        write!(html, "<p class=\"party-detail\">{}</p>", escape_html(detail))?;
    }
    html.push_str("</div>");
    Ok(())
}

fn compose_invoice(html: &mut String, data: &InvoiceData, totals: &Totals) -> std::fmt::Result {
    html.push_str("<div class=\"invoice\">");
    write!(
        html,
        "<h1 style=\"color: var(--color-primary);\">INVOICE</h1><p class=\"document-number\">{}</p>",
        escape_html(&data.document_number)
    )?;

    html.push_str("<div class=\"parties\">");
    compose_party(
        html,
        "From",
        &data.business_name,
        &[
            data.business_email.as_deref(),
            data.business_phone.as_deref(),
            data.business_address.as_deref(),
        ],
    )?;
    compose_party(
        html,
        "Bill To",
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
        "<div class=\"dates-bar\"><div><span class=\"caption\">Invoice Date</span><br><span>{}</span></div>\
         <div><span class=\"caption\">Due Date</span><br><span>{}</span></div>",
        escape_html(&format_date_str(&data.document_date)),
        escape_html(&format_date_str(&data.due_date))
    )?;
    if let Some(terms) = &data.payment_terms {
        write!(
            html,
            "<div><span class=\"caption\">Payment Terms</span><br><span>{}</span></div>",
            escape_html(terms)
        )?;
    }
    html.push_str("</div>");

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
        format_currency(totals.subtotal)
    )?;
    if let Some(rate) = totals.tax_rate {
        write!(
            html,
            "<div class=\"totals-row\"><span>Tax ({}%)</span><span>{}</span></div>",
            rate,
            format_currency(totals.tax)
        )?;
    }
    write!(
        html,
        "<div class=\"totals-row grand\"><span>Total</span><span>{}</span></div></div>",
        format_currency(totals.total)
    )?;

    write!(
        html,
        "<div class=\"amount-due\" style=\"background: var(--color-primary);\"><span>Amount Due</span><span>{}</span></div>",
        format_currency(totals.total)
    )?;

    if let Some(notes) = &data.notes {
        write!(
            html,
            "<div class=\"notes\"><p class=\"caption\">Notes</p><p>{}</p></div>",
            escape_html(notes)
        )?;
    }
    html.push_str("</div>");
    Ok(())
}

/// The invoice template, on letter portrait paper.
pub fn invoice_template() -> Template {
    Template::dual("invoice", "Invoice", InvoiceTemplate).with_config(
        PdfConfig::new()
            .with_page_size(PageSize::Letter)
            .with_orientation(Orientation::Portrait),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_render_core::testing::{DrawCall, RecordingCanvas, ScriptedTableLayout};
    use folio_types::ResolvedConfig;

    fn sample() -> InvoiceData {
        InvoiceData {
            document_number: "INV-001".into(),
            business_name: "Acme Construction".into(),
            business_email: Some("info@acme.com".into()),
            business_phone: None,
            business_address: None,
            client_name: "John Doe".into(),
            client_email: Some("john@example.com".into()),
            client_phone: None,
            client_address: None,
            document_date: "2026-01-15".into(),
            due_date: "2026-02-15".into(),
            payment_terms: None,
            items: vec![
                LineItem {
                    description: "Flooring".into(),
                    quantity: 200.0,
                    unit: None,
                    rate: 5.0,
                },
                LineItem {
                    description: "Labor".into(),
                    quantity: 8.0,
                    unit: None,
                    rate: 75.0,
                },
            ],
            tax_rate: Some(5.0),
            notes: Some("Payment due within 30 days".into()),
        }
    }

    fn minimal() -> InvoiceData {
        InvoiceData {
            document_number: "INV-002".into(),
            business_name: "Test Co".into(),
            business_email: None,
            business_phone: None,
            business_address: None,
            client_name: "Client".into(),
            client_email: None,
            client_phone: None,
            client_address: None,
            document_date: "2026-01-01".into(),
            due_date: "2026-02-01".into(),
            payment_terms: None,
            items: vec![LineItem {
                description: "Service".into(),
                quantity: 1.0,
                unit: None,
                rate: 500.0,
            }],
            tax_rate: None,
            notes: None,
        }
    }

    fn draw(data: &InvoiceData) -> (RecordingCanvas, ScriptedTableLayout) {
        let config = ResolvedConfig::default();
        let tables = ScriptedTableLayout::ending_at(4.0);
        let mut canvas = RecordingCanvas::new();
        {
            let mut ctx = CursorContext::new(&mut canvas, &tables, &config);
            InvoiceTemplate.draw(data, &mut ctx).unwrap();
        }
        (canvas, tables)
    }

    #[test]
    fn registered_as_invoice() {
        let template = invoice_template();
        assert_eq!(template.id(), "invoice");
        assert_eq!(template.name(), "Invoice");
        assert!(template.supports_markup());
        assert_eq!(template.config().page_size, Some(PageSize::Letter));
    }

    #[test]
    fn computes_totals() {
        let totals = sample().totals();
        assert_eq!(totals.subtotal, 1600.0);
        assert_eq!(totals.tax, 80.0);
        assert_eq!(totals.total, 1680.0);
        assert_eq!(minimal().totals().tax_rate, None);
    }

    #[test]
    fn html_contains_the_document() {
        let html = InvoiceTemplate.compose(&sample()).unwrap();
        for needle in ["INVOICE", "INV-001", "Acme Construction", "John Doe", "Flooring", "Labor"] {
            assert!(html.contains(needle), "missing {}", needle);
        }
        assert!(html.contains("$1,600.00"));
        assert!(html.contains("$80.00"));
        assert!(html.contains("$1,680.00"));
        assert!(html.contains("January 15, 2026"));
    }

    #[test]
    fn html_escapes_client_data() {
        let data = InvoiceData {
            client_name: "<script>alert(\"xss\")</script>".into(),
            ..sample()
        };
        let html = InvoiceTemplate.compose(&data).unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&quot;xss&quot;)&lt;/script&gt;"));
    }

    #[test]
    fn html_omits_missing_optional_sections() {
        let html = InvoiceTemplate.compose(&minimal()).unwrap();
        assert!(html.contains("INV-002"));
        assert!(html.contains("$500.00"));
        assert!(!html.contains("Tax"));
        assert!(!html.contains("Notes"));
    }

    #[test]
    fn escapes_ampersands_first() {
        assert_eq!(escape_html("a & <b>"), "a &amp; &lt;b&gt;");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn draws_the_full_sequence() {
        let (canvas, tables) = draw(&sample());
        let texts: Vec<&str> = canvas.texts().into_iter().map(|(t, _)| t).collect();
        assert_eq!(texts[0], "INVOICE");
        assert_eq!(texts[1], "INV-001");
        assert_eq!(texts[2], "Acme Construction");
        assert!(texts.contains(&"BILL TO"));
        assert!(texts.contains(&"Invoice Date: January 15, 2026    Due Date: February 15, 2026    Net 30"));
        assert!(texts.contains(&"Tax (5%): $80.00"));
        assert!(texts.contains(&"Amount Due: $1,680.00"));
        assert_eq!(texts.last(), Some(&"Payment due within 30 days"));

        let requests = tables.requests.borrow();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].headers, ["Description", "Qty", "Rate", "Amount"]);
        assert_eq!(requests[0].rows[0], ["Flooring", "200", "$5.00", "$1,000.00"]);
        assert!(requests[0].stripe_fill.is_some());
    }

    #[test]
    fn dates_bar_and_amount_due_plate_are_filled() {
        let (canvas, _) = draw(&minimal());
        let fills: Vec<Option<String>> = canvas
            .calls
            .iter()
            .filter_map(|call| match call {
                DrawCall::Rect { fill, .. } => Some(fill.clone()),
                _ => None,
            })
            .collect();
        assert_eq!(fills, [Some("#f9fafb".to_string()), Some("#0066FF".to_string())]);
        let texts: Vec<&str> = canvas.texts().into_iter().map(|(t, _)| t).collect();
        assert!(!texts.iter().any(|t| t.starts_with("Tax")));
        assert!(!texts.contains(&"NOTES"));
    }

    #[test]
    fn deserializes_camel_case_json() {
        let data: InvoiceData = serde_json::from_value(serde_json::json!({
            "documentNumber": "INV-9",
            "businessName": "B",
            "clientName": "C",
            "documentDate": "2026-03-01",
            "dueDate": "2026-03-31",
            "items": [{"description": "Work", "quantity": 2, "unit": "hrs", "rate": 50}],
            "taxRate": 8.25
        }))
        .unwrap();
        assert_eq!(data.items[0].quantity_label(), "2 hrs");
        assert_eq!(data.tax_rate, Some(8.25));
        assert!(data.notes.is_none());
    }
}
