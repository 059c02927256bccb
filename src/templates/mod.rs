//! Built-in document templates.

mod agreement;
mod estimate;
mod invoice;

pub use agreement::{AgreementData, AgreementTemplate, Party, Section, agreement_template};
pub use estimate::{EstimateData, EstimateTemplate, estimate_template};
pub use invoice::{InvoiceData, InvoiceTemplate, LineItem, escape_html, invoice_template};

use crate::template::Template;

/// Every template the CLI and a fresh generator can render by id.
pub fn builtin_templates() -> Vec<Template> {
    vec![invoice_template(), estimate_template(), agreement_template()]
}
