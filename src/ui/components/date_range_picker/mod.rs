//! Date range picker component
//!
//! [`DateRangePicker`] wires the selection engine in [`crate::date_range`] to a
//! text field and one of two surfaces: an anchored popover with up to three
//! calendars on wide terminals, or a full screen single calendar dialog below
//! the mobile breakpoint. The open surface draws over whatever was rendered
//! before it, so hosts render the picker after its siblings.

pub mod calendar;
pub mod date_input;
pub mod desktop_picker;
pub mod mobile_picker;
pub mod picker_panel;
pub mod range_position_indicator;

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use log::{info, warn};
use ratatui::{layout::Rect, Frame};

use crate::config::DatePickerConfig;
use crate::constants::{DEFAULT_CALENDARS, DEFAULT_MOBILE_BREAKPOINT, MAX_CALENDARS, MIN_CALENDARS};
use crate::date_range::calendar::add_months;
use crate::date_range::{
    format_display_value, DateRange, DateRangeState, GridContext, MonthGrid, PickerEvent, RangePosition,
    DEFAULT_FORMAT,
};
use crate::theme::{ClassList, Size, Theme};
use crate::ui::components::common::left_click;
use crate::ui::core::{Action, Component};

pub use calendar::CalendarView;
pub use date_input::{DateInput, EditOutcome, FieldState};
pub use desktop_picker::DesktopPicker;
pub use mobile_picker::MobilePicker;
pub use picker_panel::{PickerPanel, PickerView};
pub use range_position_indicator::RangePositionIndicator;

/// Clickable element of the picker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerHit {
    Day(NaiveDate),
    PreviousMonth,
    NextMonth,
    Position(RangePosition),
    Clear,
    Cancel,
    Accept,
    Field,
    OpenCalendar,
}

#[derive(Debug)]
pub struct DateRangePicker {
    state: DateRangeState,
    today: NaiveDate,
    input: DateInput,
    desktop: DesktopPicker,
    mobile: MobilePicker,
    pub format: String,
    /// Calendars shown side by side in the desktop popover, 1 to 3
    pub calendars: u8,
    pub display_week_number: bool,
    /// Frames narrower than this many columns use the mobile dialog
    pub mobile_breakpoint: u16,
    mobile_layout: bool,
    focused: bool,
}

impl DateRangePicker {
    pub fn new(today: NaiveDate) -> Self {
        let mut state = DateRangeState::new(today);
        state.visible_months = u32::from(DEFAULT_CALENDARS);
        Self {
            state,
            today,
            input: DateInput::new(),
            desktop: DesktopPicker::new(),
            mobile: MobilePicker::new(),
            format: DEFAULT_FORMAT.to_string(),
            calendars: DEFAULT_CALENDARS,
            display_week_number: false,
            mobile_breakpoint: DEFAULT_MOBILE_BREAKPOINT,
            mobile_layout: false,
            focused: false,
        }
    }

    /// Apply the `[date_picker]` configuration section
    #[must_use]
    pub fn with_config(self, config: &DatePickerConfig) -> Self {
        self.format(config.format.clone())
            .calendars(config.calendars)
            .close_on_select(config.close_on_select)
            .show_days_outside_current_month(config.show_days_outside_current_month)
            .display_week_number(config.display_week_number)
            .mobile_breakpoint(config.mobile_breakpoint)
    }

    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.input.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.input.placeholder = placeholder.into();
        self
    }

    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.state.disabled = disabled;
        self
    }

    #[must_use]
    pub fn read_only(mut self, read_only: bool) -> Self {
        self.state.read_only = read_only;
        self
    }

    #[must_use]
    pub fn required(mut self, required: bool) -> Self {
        self.input.required = required;
        self
    }

    #[must_use]
    pub fn error(mut self, error: bool) -> Self {
        self.input.error = error;
        self
    }

    #[must_use]
    pub fn error_message(mut self, message: impl Into<String>) -> Self {
        self.input.error_message = Some(message.into());
        self
    }

    #[must_use]
    pub fn helper_text(mut self, text: impl Into<String>) -> Self {
        self.input.helper_text = Some(text.into());
        self
    }

    #[must_use]
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    #[must_use]
    pub fn min_date(mut self, date: NaiveDate) -> Self {
        self.state.policy.min_date = Some(date);
        self
    }

    #[must_use]
    pub fn max_date(mut self, date: NaiveDate) -> Self {
        self.state.policy.max_date = Some(date);
        self
    }

    #[must_use]
    pub fn disable_future(mut self, disable: bool) -> Self {
        self.state.policy.disable_future = disable;
        self
    }

    #[must_use]
    pub fn disable_past(mut self, disable: bool) -> Self {
        self.state.policy.disable_past = disable;
        self
    }

    #[must_use]
    pub fn should_disable_date<F>(mut self, predicate: F) -> Self
    where
        F: Fn(NaiveDate, RangePosition) -> bool + Send + Sync + 'static,
    {
        self.state.policy = self.state.policy.should_disable_date(predicate);
        self
    }

    #[must_use]
    pub fn close_on_select(mut self, close: bool) -> Self {
        self.state.close_on_select = close;
        self
    }

    #[must_use]
    pub fn calendars(mut self, calendars: u8) -> Self {
        self.calendars = calendars.clamp(MIN_CALENDARS, MAX_CALENDARS);
        self.state.visible_months = u32::from(self.calendars);
        self
    }

    #[must_use]
    pub fn show_days_outside_current_month(mut self, show: bool) -> Self {
        self.state.show_outside_days = show;
        self
    }

    #[must_use]
    pub fn display_week_number(mut self, display: bool) -> Self {
        self.display_week_number = display;
        self
    }

    #[must_use]
    pub fn mobile_breakpoint(mut self, columns: u16) -> Self {
        self.mobile_breakpoint = columns;
        self
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.input.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.input.id = Some(id.into());
        self
    }

    /// `Sm` renders the compact field; anything else the bordered one
    #[must_use]
    pub fn size(mut self, size: Size) -> Self {
        self.input.size = if size == Size::Sm { Size::Sm } else { Size::Md };
        self
    }

    #[must_use]
    pub fn clearable(mut self, clearable: bool) -> Self {
        self.input.clearable = clearable;
        self.state.clearable = clearable;
        self
    }

    #[must_use]
    pub fn auto_focus(mut self, auto_focus: bool) -> Self {
        self.focused = auto_focus;
        self
    }

    #[must_use]
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.input.class_name = class_name.into();
        self
    }

    #[must_use]
    pub fn default_value(mut self, value: DateRange) -> Self {
        self.state = self.state.with_default_value(value);
        self
    }

    pub fn control_value(&mut self, value: Option<DateRange>) {
        self.state.control_value(value);
    }

    pub fn control_open(&mut self, open: Option<bool>) {
        self.state.control_open(open);
    }

    pub fn control_range_position(&mut self, position: Option<RangePosition>) {
        self.state.control_range_position(position);
    }

    pub fn set_today(&mut self, today: NaiveDate) {
        self.today = today;
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn state(&self) -> &DateRangeState {
        &self.state
    }

    pub fn value(&self) -> DateRange {
        self.state.value()
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn range_position(&self) -> RangePosition {
        self.state.range_position()
    }

    pub fn has_value(&self) -> bool {
        !self.value().is_empty()
    }

    pub fn display_value(&self) -> String {
        format_display_value(&self.value(), &self.format)
    }

    pub fn is_mobile_layout(&self) -> bool {
        self.mobile_layout
    }

    pub fn input(&self) -> &DateInput {
        &self.input
    }

    pub fn classes(&self) -> ClassList {
        ClassList::new("date-range-picker")
            .modifier_if(self.is_open(), "open")
            .modifier_if(self.mobile_layout, "mobile")
            .modifier_if(self.state.disabled, "disabled")
            .modifier_if(self.state.read_only, "read-only")
    }

    /// Months on screen for the current layout
    pub fn visible_months(&self) -> usize {
        if self.mobile_layout {
            1
        } else {
            usize::from(self.calendars.clamp(MIN_CALENDARS, MAX_CALENDARS))
        }
    }

    /// Grids for every visible month, each anchored one month after the previous
    pub fn grids(&self) -> Vec<MonthGrid> {
        let ctx = GridContext {
            range: self.value(),
            today: self.today,
            position: self.range_position(),
            policy: &self.state.policy,
            show_outside_days: self.state.show_outside_days,
        };
        (0..self.visible_months())
            .map(|index| MonthGrid::build(add_months(self.state.anchor(), index as i32), &ctx))
            .collect()
    }

    pub fn open(&mut self) -> Action {
        let events = self.state.open(self.today);
        self.emit(events)
    }

    pub fn close(&mut self) -> Action {
        let events = self.state.close();
        self.emit(events)
    }

    pub fn clear(&mut self) -> Action {
        let events = self.state.clear();
        self.emit(events)
    }

    pub fn accept(&mut self) -> Action {
        let events = self.state.accept();
        self.emit(events)
    }

    /// Pick `date` as if its calendar cell was clicked
    pub fn select(&mut self, date: NaiveDate) -> Action {
        let cell = self.grids().iter().find_map(|grid| grid.find(date).copied());
        let events = match cell {
            Some(cell) => self.state.select_cell(&cell, self.today),
            None => Vec::new(),
        };
        self.emit(events)
    }

    fn emit(&self, events: Vec<PickerEvent>) -> Action {
        for event in &events {
            if let PickerEvent::Accept(range) = event {
                info!("date range accepted: {}", format_display_value(range, &self.format));
            }
        }
        Action::from_picker_events(events)
    }

    fn apply_hit(&mut self, hit: PickerHit) -> Action {
        match hit {
            PickerHit::Day(date) => self.select(date),
            PickerHit::PreviousMonth => {
                self.state.shift_month(-1);
                Action::None
            }
            PickerHit::NextMonth => {
                self.state.shift_month(1);
                Action::None
            }
            PickerHit::Position(position) => {
                let events = self.state.set_range_position(position);
                self.emit(events)
            }
            PickerHit::Clear => self.clear(),
            PickerHit::Cancel => self.close(),
            PickerHit::Accept => self.accept(),
            PickerHit::Field | PickerHit::OpenCalendar => self.open(),
        }
    }

    fn handle_text_key(&mut self, key: KeyEvent) -> Action {
        match self.input.edit_key(key) {
            EditOutcome::Commit(text) => {
                let events = self.state.commit_text(&text, self.today);
                if events.is_empty() {
                    warn!("date range picker: could not use {text:?}");
                }
                self.emit(events)
            }
            EditOutcome::Editing | EditOutcome::Cancel => Action::None,
        }
    }

    fn handle_closed_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Down => self.open(),
            KeyCode::Delete if self.has_value() => self.clear(),
            KeyCode::Char(_) if !self.state.read_only && !key.modifiers.contains(KeyModifiers::CONTROL) => {
                let display = self.display_value();
                self.input.begin_edit(&display);
                self.handle_text_key(key)
            }
            _ => Action::None,
        }
    }
}

impl Component for DateRangePicker {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.state.disabled {
            return Action::None;
        }
        if self.input.is_editing() {
            return self.handle_text_key(key);
        }
        if !self.is_open() {
            return self.handle_closed_key(key);
        }
        match key.code {
            KeyCode::Left => self.state.move_cursor(-1),
            KeyCode::Right => self.state.move_cursor(1),
            KeyCode::Up => self.state.move_cursor(-7),
            KeyCode::Down => self.state.move_cursor(7),
            KeyCode::PageUp => self.state.shift_month(-1),
            KeyCode::PageDown => self.state.shift_month(1),
            KeyCode::Enter | KeyCode::Char(' ') => return self.select(self.state.cursor()),
            KeyCode::Tab | KeyCode::BackTab => {
                let events = self.state.set_range_position(self.range_position().toggled());
                return self.emit(events);
            }
            KeyCode::Char('c') => return self.clear(),
            KeyCode::Char('o') => return self.accept(),
            KeyCode::Esc => return self.close(),
            _ => {}
        }
        Action::None
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        if self.state.disabled {
            return Action::None;
        }
        let Some((column, row)) = left_click(&mouse) else {
            return Action::None;
        };
        if !self.is_open() {
            return match self.input.hit(column, row) {
                Some(hit) => self.apply_hit(hit),
                None => Action::None,
            };
        }
        let (hit, inside) = if self.mobile_layout {
            (self.mobile.hit(column, row), true)
        } else {
            (self.desktop.hit(column, row), self.desktop.contains(column, row))
        };
        match hit {
            Some(hit) => self.apply_hit(hit),
            None if !inside => self.close(),
            None => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, theme: &Theme) {
        let screen = f.area();
        self.mobile_layout = screen.width < self.mobile_breakpoint;
        self.state.visible_months = self.visible_months() as u32;

        let display = self.display_value();
        let field = FieldState {
            display: &display,
            has_value: self.has_value(),
            disabled: self.state.disabled,
            focused: self.focused || self.is_open(),
        };
        let field_rect = Rect::new(rect.x, rect.y, rect.width, self.input.height().min(rect.height));
        self.input.render(f, field_rect, &field, theme);

        if !self.is_open() {
            self.desktop.reset();
            self.mobile.reset();
            return;
        }
        let grids = self.grids();
        let view = PickerView {
            grids: &grids,
            cursor: self.state.cursor(),
            value: self.value(),
            position: self.range_position(),
            clearable: self.input.clearable,
            display_week_number: self.display_week_number,
        };
        if self.mobile_layout {
            self.desktop.reset();
            self.mobile.render(f, screen, &view, theme);
        } else {
            self.mobile.reset();
            self.desktop.render(f, self.input.field_area(), &view, theme);
        }
    }

    fn on_focus(&mut self) -> Action {
        self.focused = !self.state.disabled;
        Action::None
    }

    fn on_blur(&mut self) -> Action {
        self.focused = false;
        self.input.cancel_edit();
        Action::None
    }
}
