use serde_json::{Value, json};

/// The two-item, 5% tax invoice used throughout the tests.
pub fn sample_invoice() -> Value {
    json!({
        "documentNumber": "INV-001",
        "businessName": "Acme Construction",
        "businessEmail": "info@acme.com",
        "clientName": "John Doe",
        "clientEmail": "john@example.com",
        "documentDate": "2026-01-15",
        "dueDate": "2026-02-15",
        "items": [
            { "description": "Flooring", "quantity": 200, "rate": 5 },
            { "description": "Labor", "quantity": 8, "rate": 75 }
        ],
        "taxRate": 5,
        "notes": "Payment due within 30 days"
    })
}

/// An invoice with `count` line items.
pub fn invoice_with_items(count: usize) -> Value {
    let items: Vec<Value> = (1..=count)
        .map(|i| json!({ "description": format!("Line item {}", i), "quantity": i, "rate": 12.5 }))
        .collect();
    let mut invoice = sample_invoice();
    invoice["items"] = Value::Array(items);
    invoice
}

/// A taxed estimate with a validity date and terms.
pub fn sample_estimate() -> Value {
    json!({
        "documentNumber": "EST-042",
        "businessName": "Acme Construction",
        "businessEmail": "info@acme.com",
        "clientName": "Jane Roe",
        "clientAddress": "12 Elm St",
        "documentDate": "2026-04-01",
        "validUntil": "2026-05-01",
        "items": [
            { "description": "Deck boards", "quantity": 40, "unit": "pcs", "rate": 12.5 },
            { "description": "Installation", "quantity": 10, "rate": 60 }
        ],
        "taxRate": 10,
        "terms": "50% deposit before work starts"
    })
}

/// A two-party agreement with signature lines.
pub fn sample_agreement() -> Value {
    json!({
        "title": "Roommate Agreement",
        "effectiveDate": "2026-03-01",
        "parties": [
            { "name": "Alice Johnson", "role": "Tenant A", "email": "alice@example.com" },
            { "name": "Bob Smith", "role": "Tenant B" }
        ],
        "sections": [
            { "title": "Rent", "content": "Each party pays $750/month." },
            { "title": "Utilities", "content": "Split equally between all parties." }
        ]
    })
}
