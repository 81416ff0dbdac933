use chrono::{DateTime, NaiveDate};
use chrono_tz::Tz;

// Constants for format strings
pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";
pub const TIME_FORMAT: &str = "%I:%M %p";
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %I:%M %p";
pub const LONG_DATE_FORMAT: &str = "%B %d, %Y";

/// Token rendered for an instant the calculator cannot produce
pub const ABSENT: &str = "N/A";

/// Available resource URIs for the Zmanim MCP Server
pub const AVAILABLE_RESOURCES: &[&str] =
    &["zmanim://status", "zmanim://help", "zmanim://glossary"];

/// Format an instant as "HH:MM AM/PM", or "N/A" when absent.
pub fn format_time(dt: Option<&DateTime<Tz>>) -> String {
    match dt {
        Some(dt) => dt.format(TIME_FORMAT).to_string(),
        None => ABSENT.to_string(),
    }
}

/// Format an instant as "YYYY-MM-DD HH:MM AM/PM", or "N/A" when absent.
pub fn format_time_with_date(dt: Option<&DateTime<Tz>>) -> String {
    match dt {
        Some(dt) => dt.format(DATETIME_FORMAT).to_string(),
        None => ABSENT.to_string(),
    }
}

/// Format an instant as an RFC 3339 timestamp, or `None` when absent.
pub fn format_iso(dt: Option<&DateTime<Tz>>) -> Option<String> {
    dt.map(DateTime::to_rfc3339)
}

/// Format a date the way the markdown metadata block shows it ("June 21, 2024").
pub fn format_long_date(date: NaiveDate) -> String {
    date.format(LONG_DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_instant() -> DateTime<Tz> {
        chrono_tz::America::New_York
            .with_ymd_and_hms(2024, 6, 21, 5, 25, 0)
            .unwrap()
    }

    #[test]
    fn test_format_time() {
        assert_eq!(format_time(Some(&sample_instant())), "05:25 AM");
        assert_eq!(format_time(None), "N/A");
    }

    #[test]
    fn test_format_time_with_date() {
        assert_eq!(
            format_time_with_date(Some(&sample_instant())),
            "2024-06-21 05:25 AM"
        );
        assert_eq!(format_time_with_date(None), "N/A");
    }

    #[test]
    fn test_format_iso() {
        assert_eq!(
            format_iso(Some(&sample_instant())),
            Some("2024-06-21T05:25:00-04:00".to_string())
        );
        assert_eq!(format_iso(None), None);
    }

    #[test]
    fn test_format_long_date() {
        let date = chrono::NaiveDate::from_ymd_opt(2024, 6, 21).unwrap();
        assert_eq!(format_long_date(date), "June 21, 2024");
    }

    #[test]
    fn test_afternoon_uses_pm() {
        let dt = chrono_tz::America::New_York
            .with_ymd_and_hms(2024, 6, 21, 20, 30, 0)
            .unwrap();
        assert_eq!(format_time(Some(&dt)), "08:30 PM");
    }
}
