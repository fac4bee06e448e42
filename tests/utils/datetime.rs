use chrono::{DateTime, NaiveDate};
use pickem_ui::utils::datetime::*;

#[test]
fn test_format_kickoff_keeps_offset() {
    let kickoff = DateTime::parse_from_rfc3339("2024-09-08T20:20:00-04:00").unwrap();
    assert_eq!(format_kickoff(&kickoff), "Sun, Sep 8, 8:20 PM");
}

#[test]
fn test_format_kickoff_morning() {
    let kickoff = DateTime::parse_from_rfc3339("2024-11-28T09:30:00-06:00").unwrap();
    assert_eq!(format_kickoff(&kickoff), "Thu, Nov 28, 9:30 AM");
}

#[test]
fn test_format_short_date_has_no_padding() {
    // Noon UTC stays on the same calendar day in every local zone
    let timestamp = DateTime::parse_from_rfc3339("2024-01-05T12:00:00+00:00").unwrap();
    assert_eq!(format_short_date(&timestamp), "1/5/2024");
}

#[test]
fn test_season_label() {
    assert_eq!(season_label(2024), "2024 Season");
}

#[test]
fn test_weekend_days() {
    let saturday = NaiveDate::from_ymd_opt(2024, 1, 6).unwrap();
    let sunday = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
    let monday = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();
    assert!(is_weekend(saturday));
    assert!(is_weekend(sunday));
    assert!(!is_weekend(monday));
}
