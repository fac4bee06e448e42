//! Range selection state machine
//!
//! [`DateRangeState`] owns (or mirrors, when the host controls them) the open
//! flag, the endpoint being edited and the range itself. Every transition
//! returns the notifications it produced, in dispatch order, so a controlling
//! host can apply or override the next state.

use chrono::{Datelike, Days, NaiveDate};
use log::debug;

use super::calendar::{add_months, days_in_month, first_of_month, DayCell};
use super::format::parse_display_value;
use super::policy::DatePolicy;
use super::range::{DateRange, RangePosition};

/// Notification emitted by a picker transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerEvent {
    Open,
    Close,
    Change(DateRange),
    Accept(DateRange),
    RangePositionChange(RangePosition),
}

/// A value owned either by the host (controlled) or by the component.
///
/// Reads always prefer the host's value. Writes only land in the internal slot,
/// so a controlled value changes exclusively through [`Controlled::control`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Controlled<T> {
    external: Option<T>,
    internal: T,
}

impl<T> Controlled<T> {
    pub fn uncontrolled(initial: T) -> Self {
        Self {
            external: None,
            internal: initial,
        }
    }

    pub fn get(&self) -> &T {
        self.external.as_ref().unwrap_or(&self.internal)
    }

    pub fn is_controlled(&self) -> bool {
        self.external.is_some()
    }

    /// Internal write; a no-op while the host controls the value
    pub fn set(&mut self, value: T) {
        if self.external.is_none() {
            self.internal = value;
        }
    }

    /// Host write: `Some` takes control with that value, `None` hands it back
    pub fn control(&mut self, value: Option<T>) {
        self.external = value;
    }
}

impl<T: Default> Default for Controlled<T> {
    fn default() -> Self {
        Self::uncontrolled(T::default())
    }
}

/// Selection engine behind the date range picker
#[derive(Debug, Clone)]
pub struct DateRangeState {
    value: Controlled<DateRange>,
    open: Controlled<bool>,
    position: Controlled<RangePosition>,
    pub policy: DatePolicy,
    pub close_on_select: bool,
    pub show_outside_days: bool,
    pub disabled: bool,
    pub read_only: bool,
    /// When false nothing may empty a range once it has a value
    pub clearable: bool,
    /// Months shown side by side; the cursor never leaves them
    pub visible_months: u32,
    anchor: NaiveDate,
    cursor: NaiveDate,
}

impl DateRangeState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            value: Controlled::default(),
            open: Controlled::default(),
            position: Controlled::default(),
            policy: DatePolicy::default(),
            close_on_select: true,
            show_outside_days: false,
            disabled: false,
            read_only: false,
            clearable: true,
            visible_months: 1,
            anchor: first_of_month(today),
            cursor: today,
        }
    }

    #[must_use]
    pub fn with_default_value(mut self, value: DateRange) -> Self {
        self.value = Controlled::uncontrolled(value);
        if let Some(anchor) = value.anchor() {
            self.anchor = first_of_month(anchor);
            self.cursor = anchor;
        }
        self
    }

    pub fn value(&self) -> DateRange {
        *self.value.get()
    }

    pub fn is_open(&self) -> bool {
        *self.open.get()
    }

    pub fn range_position(&self) -> RangePosition {
        *self.position.get()
    }

    /// First day of the left-most visible month
    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    /// Day under the keyboard cursor
    pub fn cursor(&self) -> NaiveDate {
        self.cursor
    }

    pub fn control_value(&mut self, value: Option<DateRange>) {
        self.value.control(value);
    }

    pub fn control_open(&mut self, open: Option<bool>) {
        self.open.control(open);
    }

    pub fn control_range_position(&mut self, position: Option<RangePosition>) {
        self.position.control(position);
    }

    pub fn open(&mut self, today: NaiveDate) -> Vec<PickerEvent> {
        if self.disabled || self.read_only {
            debug!("date range picker: open ignored (disabled or read-only)");
            return Vec::new();
        }
        let focus = self.value().anchor().unwrap_or(today);
        self.anchor = first_of_month(focus);
        self.cursor = focus;
        self.open.set(true);
        debug!("date range picker: open, editing {:?}", self.range_position());
        vec![PickerEvent::Open]
    }

    /// Cancel, Escape and backdrop clicks all land here; partial picks are kept
    pub fn close(&mut self) -> Vec<PickerEvent> {
        self.open.set(false);
        debug!("date range picker: close");
        vec![PickerEvent::Close]
    }

    /// Apply a click on a rendered day cell
    pub fn select_cell(&mut self, cell: &DayCell, today: NaiveDate) -> Vec<PickerEvent> {
        if !cell.is_clickable(self.show_outside_days) {
            return Vec::new();
        }
        self.select_date(cell.date, today)
    }

    /// Set the endpoint being edited to `date` and flip to the other endpoint.
    ///
    /// A bound made stale by the click is dropped so a complete range always
    /// satisfies `start <= end`. Dates rejected by the policy change nothing.
    pub fn select_date(&mut self, date: NaiveDate, today: NaiveDate) -> Vec<PickerEvent> {
        if self.disabled {
            return Vec::new();
        }
        let position = self.range_position();
        if self.policy.is_disabled(date, today, position) {
            debug!("date range picker: {date} is disabled for {position:?}");
            return Vec::new();
        }

        let mut next = self.value();
        match position {
            RangePosition::Start => {
                next.start = Some(date);
                if next.end.is_some_and(|end| date > end) {
                    next.end = None;
                }
            }
            RangePosition::End => {
                next.end = Some(date);
                if next.start.is_some_and(|start| date < start) {
                    next.start = None;
                }
            }
        }

        self.cursor = date;
        let mut events = self.commit(next);
        let flipped = position.toggled();
        self.position.set(flipped);
        events.push(PickerEvent::RangePositionChange(flipped));
        events
    }

    fn commit(&mut self, next: DateRange) -> Vec<PickerEvent> {
        self.value.set(next);
        let mut events = vec![PickerEvent::Change(next)];
        if self.close_on_select && next.is_complete() {
            events.push(PickerEvent::Accept(next));
            if self.is_open() {
                events.extend(self.close());
            }
        }
        events
    }

    /// Reset both endpoints without closing
    pub fn clear(&mut self) -> Vec<PickerEvent> {
        if !self.clearable {
            return Vec::new();
        }
        self.value.set(DateRange::EMPTY);
        vec![PickerEvent::Change(DateRange::EMPTY)]
    }

    /// The OK action; only a complete range can be accepted
    pub fn accept(&mut self) -> Vec<PickerEvent> {
        let value = self.value();
        if !value.is_complete() {
            return Vec::new();
        }
        let mut events = vec![PickerEvent::Accept(value)];
        events.extend(self.close());
        events
    }

    pub fn set_range_position(&mut self, position: RangePosition) -> Vec<PickerEvent> {
        self.position.set(position);
        vec![PickerEvent::RangePositionChange(position)]
    }

    /// Move the visible window by whole months, dragging the cursor along
    pub fn shift_month(&mut self, months: i32) {
        self.anchor = add_months(self.anchor, months);
        let target = add_months(self.cursor, months);
        let day = self.cursor.day().min(days_in_month(target));
        self.cursor = target.with_day(day).unwrap_or(target);
    }

    /// Move the cursor by `days`, scrolling the window when it leaves it
    pub fn move_cursor(&mut self, days: i64) {
        let moved = if days >= 0 {
            self.cursor.checked_add_days(Days::new(days.unsigned_abs()))
        } else {
            self.cursor.checked_sub_days(Days::new(days.unsigned_abs()))
        };
        let Some(moved) = moved else {
            return;
        };
        self.cursor = moved;
        let last_visible = add_months(self.anchor, self.visible_months.max(1) as i32);
        if moved < self.anchor {
            self.anchor = first_of_month(moved);
        } else if moved >= last_visible {
            self.anchor = add_months(first_of_month(moved), 1 - self.visible_months.max(1) as i32);
        }
    }

    /// Free-text entry: replace the range with what `text` parses to.
    ///
    /// Unparseable text, reversed ranges and dates rejected by the policy are
    /// ignored, and so is blank text when the picker is not clearable.
    pub fn commit_text(&mut self, text: &str, today: NaiveDate) -> Vec<PickerEvent> {
        if self.disabled || self.read_only {
            return Vec::new();
        }
        let Some(next) = parse_display_value(text) else {
            debug!("date range picker: ignoring unparseable text {text:?}");
            return Vec::new();
        };
        if next.is_empty() && !self.clearable {
            debug!("date range picker: blank text ignored, not clearable");
            return Vec::new();
        }
        if let (Some(start), Some(end)) = (next.start, next.end) {
            if start > end {
                return Vec::new();
            }
        }
        let rejected = |date: Option<NaiveDate>, position| {
            date.is_some_and(|date| self.policy.is_disabled(date, today, position))
        };
        if rejected(next.start, RangePosition::Start) || rejected(next.end, RangePosition::End) {
            return Vec::new();
        }
        if let Some(anchor) = next.anchor() {
            self.anchor = first_of_month(anchor);
            self.cursor = anchor;
        }
        self.commit(next)
    }
}
