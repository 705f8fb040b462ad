//! Money Display Helpers
//!
//! The backend stores USD; the selected display currency only changes how
//! amounts are rendered, never what is sent back.

/// Convert a USD amount for display. Rates are relative to USD; USD itself
/// is 1.0.
pub fn convert(amount_usd: f64, rate: f64) -> f64 {
    amount_usd * rate
}

/// Format an amount like `USD 1,234.56`.
pub fn format_amount(value: f64, code: &str) -> String {
    format!("{} {}", code, format_grouped(value))
}

/// Two decimals with thousands separators.
pub fn format_grouped(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{}{}.{:02}", if negative { "-" } else { "" }, grouped, fraction)
}

/// Short date (`Mar 4, 2026`) from a backend timestamp or day string.
pub fn format_date(raw: &str) -> String {
    let trimmed = raw.trim();
    let day = chrono::DateTime::parse_from_rfc3339(trimmed)
        .map(|ts| ts.date_naive())
        .ok()
        .or_else(|| chrono::NaiveDate::parse_from_str(trimmed, "%Y-%m-%d").ok());
    match day {
        Some(day) => day.format("%b %-d, %Y").to_string(),
        None => trimmed.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grouping_and_rounding() {
        assert_eq!(format_grouped(0.0), "0.00");
        assert_eq!(format_grouped(7.5), "7.50");
        assert_eq!(format_grouped(1234.567), "1,234.57");
        assert_eq!(format_grouped(1_000_000.0), "1,000,000.00");
        assert_eq!(format_grouped(-42.0), "-42.00");
    }

    #[test]
    fn test_format_amount_includes_code() {
        assert_eq!(format_amount(12.0, "EUR"), "EUR 12.00");
    }

    #[test]
    fn test_convert_applies_rate() {
        assert_eq!(convert(100.0, 0.5), 50.0);
        assert_eq!(convert(100.0, 1.0), 100.0);
    }

    #[test]
    fn test_format_date_accepts_both_shapes() {
        assert_eq!(format_date("2026-03-04"), "Mar 4, 2026");
        assert_eq!(format_date("2026-03-04T10:30:00Z"), "Mar 4, 2026");
        assert_eq!(format_date("unknown"), "unknown");
    }
}
