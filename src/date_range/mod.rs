//! Date range selection engine.
//!
//! Pure logic shared by every rendering of the date range picker: value types,
//! the disable policy, month grid math, display formatting/parsing and the
//! selection state machine. Nothing here reads the system clock; "today" is
//! always passed in.

pub mod calendar;
pub mod format;
pub mod policy;
pub mod range;
pub mod state;

pub use calendar::{CalendarCell, DayCell, GridContext, MonthGrid};
pub use format::{
    format_date, format_display_value, has_date_token, parse_date, parse_display_value, DEFAULT_FORMAT, RANGE_SEPARATOR,
};
pub use policy::{DatePolicy, DisablePredicate};
pub use range::{DateRange, RangePosition};
pub use state::{Controlled, DateRangeState, PickerEvent};
