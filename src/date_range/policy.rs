//! Per-date selection policy

use std::fmt;
use std::sync::Arc;

use chrono::NaiveDate;

use super::range::RangePosition;

/// Caller-supplied predicate deciding whether a date is selectable for an endpoint
pub type DisablePredicate = Arc<dyn Fn(NaiveDate, RangePosition) -> bool + Send + Sync>;

/// Rules deciding which calendar days are disabled.
///
/// `today` is never read from the clock here; callers pass it in so the
/// outcome only depends on the arguments.
#[derive(Clone, Default)]
pub struct DatePolicy {
    pub min_date: Option<NaiveDate>,
    pub max_date: Option<NaiveDate>,
    pub disable_future: bool,
    pub disable_past: bool,
    pub should_disable_date: Option<DisablePredicate>,
}

impl fmt::Debug for DatePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatePolicy")
            .field("min_date", &self.min_date)
            .field("max_date", &self.max_date)
            .field("disable_future", &self.disable_future)
            .field("disable_past", &self.disable_past)
            .field("should_disable_date", &self.should_disable_date.is_some())
            .finish()
    }
}

impl DatePolicy {
    #[must_use]
    pub fn min_date(mut self, date: NaiveDate) -> Self {
        self.min_date = Some(date);
        self
    }

    #[must_use]
    pub fn max_date(mut self, date: NaiveDate) -> Self {
        self.max_date = Some(date);
        self
    }

    #[must_use]
    pub fn disable_future(mut self, disable: bool) -> Self {
        self.disable_future = disable;
        self
    }

    #[must_use]
    pub fn disable_past(mut self, disable: bool) -> Self {
        self.disable_past = disable;
        self
    }

    #[must_use]
    pub fn should_disable_date<F>(mut self, predicate: F) -> Self
    where
        F: Fn(NaiveDate, RangePosition) -> bool + Send + Sync + 'static,
    {
        self.should_disable_date = Some(Arc::new(predicate));
        self
    }

    /// Whether `date` can not be picked while editing `position`
    #[must_use]
    pub fn is_disabled(&self, date: NaiveDate, today: NaiveDate, position: RangePosition) -> bool {
        if self.disable_future && date > today {
            return true;
        }
        if self.disable_past && date < today {
            return true;
        }
        if self.min_date.is_some_and(|min| date < min) {
            return true;
        }
        if self.max_date.is_some_and(|max| date > max) {
            return true;
        }
        self.should_disable_date
            .as_ref()
            .is_some_and(|predicate| predicate(date, position))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Weekday};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn default_policy_allows_everything() {
        let policy = DatePolicy::default();
        assert!(!policy.is_disabled(date(1999, 12, 31), date(2024, 1, 1), RangePosition::Start));
    }

    #[test]
    fn today_is_never_past_or_future() {
        let today = date(2024, 3, 10);
        let policy = DatePolicy::default().disable_future(true).disable_past(true);
        assert!(!policy.is_disabled(today, today, RangePosition::Start));
        assert!(policy.is_disabled(date(2024, 3, 11), today, RangePosition::Start));
        assert!(policy.is_disabled(date(2024, 3, 9), today, RangePosition::Start));
    }

    #[test]
    fn bounds_are_inclusive() {
        let today = date(2024, 1, 1);
        let policy = DatePolicy::default().min_date(date(2024, 1, 5)).max_date(date(2024, 1, 25));
        assert!(!policy.is_disabled(date(2024, 1, 5), today, RangePosition::Start));
        assert!(!policy.is_disabled(date(2024, 1, 25), today, RangePosition::End));
        assert!(policy.is_disabled(date(2024, 1, 4), today, RangePosition::Start));
        assert!(policy.is_disabled(date(2024, 1, 26), today, RangePosition::End));
    }

    #[test]
    fn predicate_sees_position() {
        let policy = DatePolicy::default().should_disable_date(|d, position| {
            position == RangePosition::End && d.weekday() == Weekday::Sun
        });
        let sunday = date(2024, 1, 7);
        let today = date(2024, 1, 1);
        assert!(!policy.is_disabled(sunday, today, RangePosition::Start));
        assert!(policy.is_disabled(sunday, today, RangePosition::End));
    }
}
