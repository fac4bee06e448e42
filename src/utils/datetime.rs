//! Date and time formatting helpers

use chrono::{DateTime, Datelike, FixedOffset, Local, NaiveDate, TimeZone};

/// Kickoff times read like "Sun, Jan 14, 1:00 PM"
pub const KICKOFF_FORMAT: &str = "%a, %b %-d, %-I:%M %p";

/// Short numeric date, e.g. "1/5/2024"
pub const SHORT_DATE_FORMAT: &str = "%-m/%-d/%Y";

/// Format a kickoff in the offset it carries
#[must_use]
pub fn format_kickoff(kickoff: &DateTime<FixedOffset>) -> String {
    kickoff.format(KICKOFF_FORMAT).to_string()
}

/// Format a timestamp as a short local calendar date
#[must_use]
pub fn format_short_date<Tz: TimeZone>(timestamp: &DateTime<Tz>) -> String {
    timestamp.with_timezone(&Local).format(SHORT_DATE_FORMAT).to_string()
}

/// Today's date on the local clock; the one place the crate reads it
#[must_use]
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Season label for a year, e.g. "2024 Season"
#[must_use]
pub fn season_label(year: i32) -> String {
    format!("{year} Season")
}

/// True when `date` falls on a weekend
#[must_use]
pub fn is_weekend(date: NaiveDate) -> bool {
    date.weekday().num_days_from_monday() >= 5
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kickoff_uses_twelve_hour_clock() {
        let kickoff = DateTime::parse_from_rfc3339("2024-01-14T13:00:00-05:00").unwrap();
        assert_eq!(format_kickoff(&kickoff), "Sun, Jan 14, 1:00 PM");
    }

    #[test]
    fn test_weekend() {
        assert!(is_weekend(NaiveDate::from_ymd_opt(2024, 1, 13).unwrap()));
        assert!(!is_weekend(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()));
    }
}
