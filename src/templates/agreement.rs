//! The agreement template: numbered parties and sections followed by a
//! signature block for every party.

use super::invoice::escape_html;
use crate::components::{SignatureBlockOptions, render_signature_block};
use crate::format::format_date_str;
use crate::template::Template;
use folio_render_core::{
    ComposeMarkup, CursorContext, DrawContent, HeadingLevel, RenderError, TextOptions,
};
use folio_types::{Orientation, PageSize, PdfConfig};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Party {
    pub name: String,
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Party {
    /// `Name (Role)`, as printed under a signature line.
    fn signature_label(&self) -> String {
        format!("{} ({})", self.name, self.role)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Section {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgreementData {
    pub title: String,
    pub effective_date: String,
    pub parties: Vec<Party>,
    pub sections: Vec<Section>,
    /// Signature lines are drawn unless this is explicitly `false`.
    #[serde(default = "signatures_default")]
    pub signatures: bool,
}

fn signatures_default() -> bool {
    true
}

#[derive(Debug, Clone, Copy, Default)]
pub struct AgreementTemplate;

impl DrawContent for AgreementTemplate {
    type Data = AgreementData;

    fn draw(&self, data: &AgreementData, ctx: &mut CursorContext<'_>) -> Result<(), RenderError> {
        let light = ctx.config().colors.text_light.clone();
        let muted = TextOptions::default().with_color(light);

        ctx.heading(&data.title, HeadingLevel::H1)?;
        ctx.space(0.2);
        ctx.text(
            &format!("Effective Date: {}", format_date_str(&data.effective_date)),
            &muted,
        )?;
        ctx.space(0.4);

        ctx.heading("Parties", HeadingLevel::H2)?;
        ctx.space(0.1);
        for (i, party) in data.parties.iter().enumerate() {
            ctx.text(
                &format!("{}. {} (\"{}\")", i + 1, party.name, party.role),
                &TextOptions::default().bold(),
            )?;
            if let Some(email) = &party.email {
                ctx.text(&format!("   Email: {}", email), &muted)?;
            }
            ctx.space(0.1);
        }
        ctx.space(0.3);

        for (i, section) in data.sections.iter().enumerate() {
            ctx.heading(&format!("{}. {}", i + 1, section.title), HeadingLevel::H3)?;
            ctx.space(0.1);
            ctx.text(&section.content, &TextOptions::default())?;
            ctx.space(0.3);
        }

        if data.signatures {
            ctx.space(0.2);
            let labels = data.parties.iter().map(Party::signature_label);
            render_signature_block(ctx, &SignatureBlockOptions::new(labels))?;
        }
        Ok(())
    }
}

impl ComposeMarkup for AgreementTemplate {
    fn compose(&self, data: &AgreementData) -> Result<String, RenderError> {
        let mut html = String::new();
        compose_agreement(&mut html, data).map_err(|e| RenderError::Other(e.to_string()))?;
        Ok(html)
    }
}

fn compose_agreement(html: &mut String, data: &AgreementData) -> std::fmt::Result {
    write!(
        html,
        "<div class=\"agreement\"><h1 style=\"text-align: center;\">{}</h1>\
         <p class=\"text-light\" style=\"text-align: center;\">Effective Date: {}</p>",
        escape_html(&data.title),
        escape_html(&format_date_str(&data.effective_date))
    )?;

    html.push_str("<h2>Parties</h2>");
    for (i, party) in data.parties.iter().enumerate() {
        write!(
            html,
            "<p><strong>{}. {}</strong> (&quot;{}&quot;)</p>",
            i + 1,
            escape_html(&party.name),
            escape_html(&party.role)
        )?;
        if let Some(email) = &party.email {
            write!(html, "<p class=\"text-light party-email\">Email: {}</p>", escape_html(email))?;
        }
    }

    for (i, section) in data.sections.iter().enumerate() {
        write!(
            html,
            "<h3>{}. {}</h3><p style=\"text-align: justify;\">{}</p>",
            i + 1,
            escape_html(&section.title),
            escape_html(&section.content)
        )?;
    }

    if data.signatures {
        html.push_str("<div class=\"signatures\"><h2>Signatures</h2>");
        for party in &data.parties {
            write!(
                html,
                "<div class=\"signature\"><div class=\"signature-line\"></div>\
                 <p class=\"text-light\">{}</p><p class=\"text-light\">Date: _______________</p></div>",
                escape_html(&party.signature_label())
            )?;
        }
        html.push_str("</div>");
    }
    html.push_str("</div>");
    Ok(())
}

/// The agreement template, on letter portrait paper.
pub fn agreement_template() -> Template {
    Template::dual("agreement", "Agreement", AgreementTemplate).with_config(
        PdfConfig::new()
            .with_page_size(PageSize::Letter)
            .with_orientation(Orientation::Portrait),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_render_core::testing::{RecordingCanvas, ScriptedTableLayout};
    use folio_types::ResolvedConfig;

    fn sample() -> AgreementData {
        AgreementData {
            title: "Roommate Agreement".into(),
            effective_date: "2026-03-01".into(),
            parties: vec![
                Party {
                    name: "Alice Johnson".into(),
                    role: "Tenant A".into(),
                    email: Some("alice@example.com".into()),
                },
                Party {
                    name: "Bob Smith".into(),
                    role: "Tenant B".into(),
                    email: None,
                },
            ],
            sections: vec![
                Section {
                    title: "Rent".into(),
                    content: "Each party pays $750/month.".into(),
                },
                Section {
                    title: "Utilities".into(),
                    content: "Split equally between all parties.".into(),
                },
            ],
            signatures: true,
        }
    }

    fn texts(data: &AgreementData) -> Vec<String> {
        let config = ResolvedConfig::default();
        let tables = ScriptedTableLayout::default();
        let mut canvas = RecordingCanvas::new();
        {
            let mut ctx = CursorContext::new(&mut canvas, &tables, &config);
            AgreementTemplate.draw(data, &mut ctx).unwrap();
        }
        canvas.texts().into_iter().map(|(t, _)| t.to_string()).collect()
    }

    #[test]
    fn registered_as_agreement() {
        let template = agreement_template();
        assert_eq!(template.id(), "agreement");
        assert_eq!(template.name(), "Agreement");
        assert!(template.supports_markup());
    }

    #[test]
    fn draws_numbered_parties_sections_and_signatures() {
        let texts = texts(&sample());
        assert_eq!(texts[0], "Roommate Agreement");
        assert_eq!(texts[1], "Effective Date: March 1, 2026");
        assert!(texts.contains(&"1. Alice Johnson (\"Tenant A\")".to_string()));
        assert!(texts.contains(&"   Email: alice@example.com".to_string()));
        assert!(texts.contains(&"2. Utilities".to_string()));
        assert!(texts.contains(&"Bob Smith (Tenant B)".to_string()));
        let dates = texts.iter().filter(|t| t.starts_with("Date: ")).count();
        assert_eq!(dates, 2);
    }

    #[test]
    fn signatures_can_be_turned_off() {
        let data = AgreementData {
            signatures: false,
            ..sample()
        };
        let texts = texts(&data);
        assert!(!texts.contains(&"Signatures".to_string()));
        assert_eq!(texts.last().map(String::as_str), Some("Split equally between all parties."));
    }

    #[test]
    fn html_lists_parties_and_sections() {
        let html = AgreementTemplate.compose(&sample()).unwrap();
        for needle in ["Alice Johnson", "Bob Smith", "Tenant A", "Tenant B", "Rent", "Utilities", "$750/month"] {
            assert!(html.contains(needle), "missing {}", needle);
        }
        assert!(html.contains("Signatures"));
        assert!(html.contains("Date: _______________"));
    }

    #[test]
    fn html_omits_signatures_when_disabled() {
        let data = AgreementData {
            signatures: false,
            ..sample()
        };
        assert!(!AgreementTemplate.compose(&data).unwrap().contains("Signatures"));
    }

    #[test]
    fn html_escapes_the_title() {
        let data = AgreementData {
            title: "<img onerror=alert(1)>".into(),
            ..sample()
        };
        let html = AgreementTemplate.compose(&data).unwrap();
        assert!(!html.contains("<img"));
        assert!(html.contains("&lt;img"));
    }

    #[test]
    fn signatures_default_to_on() {
        let data: AgreementData = serde_json::from_value(serde_json::json!({
            "title": "Lease",
            "effectiveDate": "2026-03-01",
            "parties": [{"name": "A", "role": "Landlord"}],
            "sections": []
        }))
        .unwrap();
        assert!(data.signatures);
    }
}
