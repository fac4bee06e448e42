//! Date range value types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A possibly incomplete range of calendar dates.
///
/// Both ends are optional while the user is still picking. When both are set the
/// picker keeps `start <= end` by dropping whichever bound a click invalidated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    pub const EMPTY: DateRange = DateRange { start: None, end: None };

    #[must_use]
    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// Neither endpoint is set
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.start.is_none() && self.end.is_none()
    }

    /// Both endpoints are set
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// Inclusive containment; an incomplete range contains nothing
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        match (self.start, self.end) {
            (Some(start), Some(end)) => start <= date && date <= end,
            _ => false,
        }
    }

    /// The date the calendar should open on: start, then end, then nothing
    #[must_use]
    pub fn anchor(&self) -> Option<NaiveDate> {
        self.start.or(self.end)
    }
}

/// Which endpoint the next calendar click sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangePosition {
    #[default]
    Start,
    End,
}

impl RangePosition {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Start => Self::End,
            Self::End => Self::Start,
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Start => "Start Date",
            Self::End => "End Date",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn contains_is_inclusive() {
        let range = DateRange::new(Some(date(2024, 1, 10)), Some(date(2024, 1, 20)));
        assert!(range.contains(date(2024, 1, 10)));
        assert!(range.contains(date(2024, 1, 15)));
        assert!(range.contains(date(2024, 1, 20)));
        assert!(!range.contains(date(2024, 1, 21)));
    }

    #[test]
    fn incomplete_range_contains_nothing() {
        let range = DateRange::new(Some(date(2024, 1, 10)), None);
        assert!(!range.contains(date(2024, 1, 10)));
        assert!(!range.is_complete());
        assert!(!range.is_empty());
    }

    #[test]
    fn position_toggles() {
        assert_eq!(RangePosition::Start.toggled(), RangePosition::End);
        assert_eq!(RangePosition::End.toggled(), RangePosition::Start);
    }
}
