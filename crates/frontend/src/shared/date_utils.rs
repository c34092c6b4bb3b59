//! Utilities for date formatting
//!
//! Post dates arrive as RFC 3339 timestamps or plain `YYYY-MM-DD` dates.

use chrono::{DateTime, NaiveDate};

const POST_DATE_FORMAT: &str = "%B %-d, %Y";

/// Format a post date as `Month D, YYYY`
/// Example: "2025-04-10T12:00:00Z" -> "April 10, 2025"
///
/// Unrecognized input is returned unchanged.
pub fn format_post_date(raw: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.format(POST_DATE_FORMAT).to_string();
    }
    let date_part = raw.split('T').next().unwrap_or(raw);
    if let Ok(date) = NaiveDate::parse_from_str(date_part, "%Y-%m-%d") {
        return date.format(POST_DATE_FORMAT).to_string();
    }
    raw.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_post_date() {
        assert_eq!(format_post_date("2025-04-10T12:00:00Z"), "April 10, 2025");
        assert_eq!(format_post_date("2024-12-01T23:59:59.123+02:00"), "December 1, 2024");
        assert_eq!(format_post_date("2024-03-05"), "March 5, 2024");
        assert_eq!(format_post_date("2024-03-05T10:00:00"), "March 5, 2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_post_date("invalid"), "invalid");
        assert_eq!(format_post_date(""), "");
    }
}
