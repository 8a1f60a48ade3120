//! Utility functions for UI components

use chrono::NaiveDate;

/// Format a price in dollars, always with cents
pub fn format_price(price: f64) -> String {
    format!("${price:.2}")
}

/// Format an ISO release date (YYYY-MM-DD) for display, e.g. "3 May 2021".
/// Falls back to the raw string when it doesn't parse.
pub fn format_release_date(date: &str) -> String {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map(|d| d.format("%-d %B %Y").to_string())
        .unwrap_or_else(|_| date.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_price_pads_cents() {
        assert_eq!(format_price(12.5), "$12.50");
        assert_eq!(format_price(30.0), "$30.00");
    }

    #[test]
    fn test_format_release_date() {
        assert_eq!(format_release_date("2021-05-03"), "3 May 2021");
    }

    #[test]
    fn test_format_release_date_falls_back_on_unparseable_input() {
        assert_eq!(format_release_date("soon"), "soon");
        assert_eq!(format_release_date(""), "");
    }
}
