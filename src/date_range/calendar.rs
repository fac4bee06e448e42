//! Month grid calculations for the calendar view

use chrono::{Datelike, Months, NaiveDate};

use super::policy::DatePolicy;
use super::range::{DateRange, RangePosition};

/// Cells in a fixed six week grid
pub const GRID_CELLS: usize = 42;

pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

pub const WEEKDAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// First day of the month containing `date`
#[must_use]
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Shift a month anchor by whole months, always landing on day 1
#[must_use]
pub fn add_months(date: NaiveDate, months: i32) -> NaiveDate {
    let first = first_of_month(date);
    let shifted = if months >= 0 {
        first.checked_add_months(Months::new(months.unsigned_abs()))
    } else {
        first.checked_sub_months(Months::new(months.unsigned_abs()))
    };
    shifted.unwrap_or(first)
}

/// Number of days in the month containing `date` (day 0 of the next month)
#[must_use]
pub fn days_in_month(date: NaiveDate) -> u32 {
    add_months(date, 1)
        .pred_opt()
        .map(|last| last.day())
        .unwrap_or(31)
}

/// Weekday of day 1 counted from Sunday = 0
#[must_use]
pub fn first_weekday_offset(date: NaiveDate) -> u32 {
    first_of_month(date).weekday().num_days_from_sunday()
}

/// Display name such as "January 2024"
#[must_use]
pub fn month_title(date: NaiveDate) -> String {
    format!("{} {}", MONTHS[date.month0() as usize], date.year())
}

/// Visual state of one day in the grid
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    pub is_today: bool,
    pub is_range_start: bool,
    pub is_range_end: bool,
    pub is_in_range: bool,
    pub is_disabled: bool,
    pub is_outside_month: bool,
}

impl DayCell {
    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.is_range_start || self.is_range_end
    }

    /// Whether a click on this cell should reach the selection engine
    #[must_use]
    pub fn is_clickable(&self, show_outside_days: bool) -> bool {
        !self.is_disabled && (!self.is_outside_month || show_outside_days)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CalendarCell {
    Blank,
    Day(DayCell),
}

impl CalendarCell {
    #[must_use]
    pub fn day(&self) -> Option<&DayCell> {
        match self {
            Self::Blank => None,
            Self::Day(cell) => Some(cell),
        }
    }
}

/// Inputs shared by every cell of a grid
#[derive(Debug, Clone, Copy)]
pub struct GridContext<'a> {
    pub range: DateRange,
    pub today: NaiveDate,
    pub position: RangePosition,
    pub policy: &'a DatePolicy,
    pub show_outside_days: bool,
}

/// One month laid out in seven columns, Sunday first
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    pub month: NaiveDate,
    pub cells: Vec<CalendarCell>,
}

impl MonthGrid {
    /// Build the grid for the month containing `anchor`.
    ///
    /// Without outside days the grid holds `offset` blanks followed by the month's
    /// days. With outside days it is always [`GRID_CELLS`] long, padded with the
    /// tail of the previous month and the head of the next one.
    #[must_use]
    pub fn build(anchor: NaiveDate, ctx: &GridContext<'_>) -> Self {
        let month = first_of_month(anchor);
        let offset = first_weekday_offset(month);
        let days = days_in_month(month);
        let mut cells = Vec::with_capacity(GRID_CELLS);

        if ctx.show_outside_days {
            let previous = add_months(month, -1);
            let previous_days = days_in_month(previous);
            for day in (previous_days - offset + 1)..=previous_days {
                if let Some(date) = previous.with_day(day) {
                    cells.push(CalendarCell::Day(Self::cell(date, true, ctx)));
                }
            }
        } else {
            cells.extend(std::iter::repeat(CalendarCell::Blank).take(offset as usize));
        }

        for day in 1..=days {
            if let Some(date) = month.with_day(day) {
                cells.push(CalendarCell::Day(Self::cell(date, false, ctx)));
            }
        }

        if ctx.show_outside_days {
            let next = add_months(month, 1);
            let remaining = GRID_CELLS.saturating_sub(cells.len()) as u32;
            for day in 1..=remaining {
                if let Some(date) = next.with_day(day) {
                    cells.push(CalendarCell::Day(Self::cell(date, true, ctx)));
                }
            }
        }

        Self { month, cells }
    }

    fn cell(date: NaiveDate, is_outside_month: bool, ctx: &GridContext<'_>) -> DayCell {
        DayCell {
            date,
            is_today: date == ctx.today,
            is_range_start: ctx.range.start == Some(date),
            is_range_end: ctx.range.end == Some(date),
            is_in_range: ctx.range.contains(date),
            is_disabled: ctx.policy.is_disabled(date, ctx.today, ctx.position),
            is_outside_month,
        }
    }

    /// Rows of seven cells; the last row may be shorter
    pub fn weeks(&self) -> impl Iterator<Item = &[CalendarCell]> {
        self.cells.chunks(7)
    }

    /// Number of cells that carry a date
    #[must_use]
    pub fn day_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.day().is_some()).count()
    }

    /// ISO week number of each row, taken from the first dated cell in it
    #[must_use]
    pub fn week_numbers(&self) -> Vec<Option<u32>> {
        self.weeks()
            .map(|week| week.iter().find_map(|cell| cell.day()).map(|day| day.date.iso_week().week()))
            .collect()
    }

    #[must_use]
    pub fn find(&self, date: NaiveDate) -> Option<&DayCell> {
        self.cells.iter().filter_map(|cell| cell.day()).find(|day| day.date == date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn ctx(policy: &DatePolicy, show_outside_days: bool) -> GridContext<'_> {
        GridContext {
            range: DateRange::EMPTY,
            today: date(2024, 1, 15),
            position: RangePosition::Start,
            policy,
            show_outside_days,
        }
    }

    #[test]
    fn days_in_month_handles_leap_years() {
        assert_eq!(days_in_month(date(2024, 2, 10)), 29);
        assert_eq!(days_in_month(date(2023, 2, 10)), 28);
        assert_eq!(days_in_month(date(2024, 12, 31)), 31);
        assert_eq!(days_in_month(date(2024, 4, 1)), 30);
    }

    #[test]
    fn offset_counts_from_sunday() {
        // 2024-09-01 is a Sunday, 2024-02-01 a Thursday
        assert_eq!(first_weekday_offset(date(2024, 9, 20)), 0);
        assert_eq!(first_weekday_offset(date(2024, 2, 1)), 4);
    }

    #[test]
    fn add_months_crosses_years() {
        assert_eq!(add_months(date(2024, 12, 31), 1), date(2025, 1, 1));
        assert_eq!(add_months(date(2024, 1, 31), -1), date(2023, 12, 1));
    }

    #[test]
    fn outside_days_come_from_adjacent_months() {
        let policy = DatePolicy::default();
        let grid = MonthGrid::build(date(2024, 2, 1), &ctx(&policy, true));
        let first = grid.cells[0].day().unwrap();
        assert_eq!(first.date, date(2024, 1, 28));
        assert!(first.is_outside_month);
        let last = grid.cells[GRID_CELLS - 1].day().unwrap();
        assert_eq!(last.date, date(2024, 3, 9));
    }

    #[test]
    fn week_numbers_follow_rows() {
        let policy = DatePolicy::default();
        let grid = MonthGrid::build(date(2024, 1, 1), &ctx(&policy, false));
        let numbers = grid.week_numbers();
        assert_eq!(numbers.len(), 5);
        assert_eq!(numbers[0], Some(1));
    }
}
