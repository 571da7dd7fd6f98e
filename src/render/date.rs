//! Date display for server timestamps

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Layouts accepted besides RFC 3339, most specific first
const NAIVE_LAYOUTS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Shown for input that is not a date
pub const INVALID_DATE: &str = "Invalid Date";

/// Format a server timestamp as `Jun 1, 2024, 10:02 AM`.
///
/// Accepts RFC 3339 (kept in its own offset), ISO-like naive date-times and
/// plain `YYYY-MM-DD` dates (midnight). Returns `None` for anything else.
pub fn format_date(input: &str) -> Option<String> {
    let input = input.trim();

    let naive = match DateTime::parse_from_rfc3339(input) {
        Ok(dt) => dt.naive_local(),
        Err(_) => match NAIVE_LAYOUTS
            .iter()
            .find_map(|layout| NaiveDateTime::parse_from_str(input, layout).ok())
        {
            Some(dt) => dt,
            None => NaiveDate::parse_from_str(input, "%Y-%m-%d")
                .ok()?
                .and_hms_opt(0, 0, 0)?,
        },
    };

    Some(naive.format("%b %-d, %Y, %I:%M %p").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iso_timestamps() {
        assert_eq!(
            format_date("2024-06-01T10:02:00").as_deref(),
            Some("Jun 1, 2024, 10:02 AM")
        );
        assert_eq!(
            format_date("2024-12-25 21:05:30.123456").as_deref(),
            Some("Dec 25, 2024, 09:05 PM")
        );
        assert_eq!(
            format_date("2024-06-01T10:02:00+02:00").as_deref(),
            Some("Jun 1, 2024, 10:02 AM")
        );
    }

    #[test]
    fn test_date_only_is_midnight() {
        assert_eq!(
            format_date("2024-06-01").as_deref(),
            Some("Jun 1, 2024, 12:00 AM")
        );
    }

    #[test]
    fn test_garbage_is_rejected() {
        assert_eq!(format_date("next tuesday"), None);
        assert_eq!(format_date(""), None);
    }
}
