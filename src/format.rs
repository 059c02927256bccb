//! Currency and date formatting shared by templates.

use chrono::NaiveDate;

/// Formats an amount as US dollars with thousands separators, rounding half
/// away from zero to whole cents: `1234.56` becomes `$1,234.56`.
pub fn format_currency(amount: f64) -> String {
    let cents = (amount.abs() * 100.0).round() as u64;
    let dollars = group_thousands(cents / 100);
    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    format!("{}${}.{:02}", sign, dollars, cents % 100)
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// `January 15, 2026`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// Formats a `YYYY-MM-DD` string, or the date part of a longer timestamp.
/// Anything else is returned unchanged.
pub fn format_date_str(value: &str) -> String {
    let date_part = value.get(..10).unwrap_or(value);
    match NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        Ok(date) => format_date(date),
        Err(e) => {
            log::debug!("Leaving unparseable date '{}' as is: {}", value, e);
            value.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_currency() {
        assert_eq!(format_currency(100.0), "$100.00");
        assert_eq!(format_currency(1234.56), "$1,234.56");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(1_234_567.891), "$1,234,567.89");
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(format_currency(10.999), "$11.00");
        assert_eq!(format_currency(0.125), "$0.13");
        assert_eq!(format_currency(-2.5), "-$2.50");
        assert_eq!(format_currency(-0.001), "$0.00");
    }

    #[test]
    fn formats_dates() {
        assert_eq!(format_date_str("2026-01-15"), "January 15, 2026");
        assert_eq!(format_date_str("2026-02-01T09:30:00Z"), "February 1, 2026");
        let date = NaiveDate::from_ymd_opt(2026, 1, 15).unwrap();
        assert_eq!(format_date(date), "January 15, 2026");
    }

    #[test]
    fn leaves_unparseable_dates_alone() {
        assert_eq!(format_date_str("next week"), "next week");
        assert_eq!(format_date_str(""), "");
    }
}
