//! Date helper functions

use chrono::{DateTime, TimeZone, Utc};

/// Format a date using a Moment.js-compatible format string
///
/// # Examples
/// ```ignore
/// format_date(&date, "MMMM D, YYYY") // -> "November 25, 2024"
/// ```
pub fn format_date<Tz: TimeZone>(date: &DateTime<Tz>, format: &str) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let chrono_format = moment_to_chrono_format(format);
    date.format(&chrono_format).to_string()
}

/// Format date in full format (like "January 1, 2024")
pub fn full_date<Tz: TimeZone>(date: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    date.format("%B %-d, %Y").to_string()
}

/// Relative time between `date` and `now` (like "2 hours ago")
pub fn relative_date(date: &DateTime<Utc>, now: DateTime<Utc>) -> String {
    let duration = now.signed_duration_since(*date);

    if duration.num_seconds() < 0 {
        return "in the future".to_string();
    }

    let minutes = duration.num_minutes();
    let hours = duration.num_hours();
    let days = duration.num_days();

    if minutes < 1 {
        "just now".to_string()
    } else if minutes < 60 {
        plural(minutes, "minute")
    } else if hours < 24 {
        plural(hours, "hour")
    } else if days == 1 {
        "yesterday".to_string()
    } else if days < 30 {
        format!("{} days ago", days)
    } else if days < 365 {
        plural(days / 30, "month")
    } else {
        plural(days / 365, "year")
    }
}

fn plural(n: i64, unit: &str) -> String {
    if n == 1 {
        format!("1 {} ago", unit)
    } else {
        format!("{} {}s ago", n, unit)
    }
}

/// Convert Moment.js format to chrono format
fn moment_to_chrono_format(format: &str) -> String {
    // Longest patterns first within each field
    let replacements = [
        ("YYYY", "%Y"),
        ("YY", "%y"),
        ("MMMM", "%B"),
        ("MMM", "%b"),
        ("MM", "%m"),
        ("DDDD", "%j"),
        ("DD", "%d"),
        ("D", "%-d"),
        ("HH", "%H"),
        ("hh", "%I"),
        ("mm", "%M"),
        ("ss", "%S"),
        ("dddd", "%A"),
        ("ddd", "%a"),
        ("ZZ", "%z"),
    ];

    // literal percent signs must not reach chrono as specifiers
    let mut result = format.replace('%', "%%");

    for (from, to) in replacements {
        result = result.replace(from, to);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn date() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 11, 5, 10, 30, 0).unwrap()
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date(&date(), "YYYY-MM-DD"), "2024-11-05");
        assert_eq!(format_date(&date(), "MMMM D, YYYY"), "November 5, 2024");
        assert_eq!(format_date(&date(), "MMM DD HH:mm"), "Nov 05 10:30");
    }

    #[test]
    fn test_format_date_with_percent() {
        assert_eq!(format_date(&date(), "DD/MM (100%)"), "05/11 (100%)");
        assert_eq!(format_date(&date(), "%Y YYYY"), "%Y 2024");
        assert_eq!(moment_to_chrono_format("50% D"), "50%% %-d");
    }

    #[test]
    fn test_full_date() {
        assert_eq!(full_date(&date()), "November 5, 2024");
    }

    #[test]
    fn test_relative_date() {
        let d = date();
        assert_eq!(relative_date(&d, d + Duration::seconds(20)), "just now");
        assert_eq!(relative_date(&d, d + Duration::minutes(1)), "1 minute ago");
        assert_eq!(relative_date(&d, d + Duration::hours(5)), "5 hours ago");
        assert_eq!(relative_date(&d, d + Duration::days(1)), "yesterday");
        assert_eq!(relative_date(&d, d + Duration::days(65)), "2 months ago");
        assert_eq!(relative_date(&d, d + Duration::days(400)), "1 year ago");
        assert_eq!(relative_date(&d, d - Duration::days(1)), "in the future");
    }

    #[test]
    fn test_moment_to_chrono() {
        assert_eq!(moment_to_chrono_format("YYYY-MM-DD"), "%Y-%m-%d");
        assert_eq!(moment_to_chrono_format("HH:mm:ss"), "%H:%M:%S");
        assert_eq!(moment_to_chrono_format("MMMM D, YYYY"), "%B %-d, %Y");
    }
}
