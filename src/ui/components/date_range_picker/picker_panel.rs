//! Body shared by the desktop popover and the mobile dialog

use chrono::NaiveDate;
use ratatui::{layout::Rect, Frame};

use super::calendar::{CalendarView, CALENDAR_HEIGHT};
use super::range_position_indicator::RangePositionIndicator;
use super::PickerHit;
use crate::date_range::{DateRange, MonthGrid, RangePosition};
use crate::theme::{ButtonVariant, Size, Theme};
use crate::ui::components::button::Button;
use crate::ui::components::common::{create_instructions_paragraph, shortcuts, InstructionShortcut};
use crate::ui::core::Component;
use crate::ui::layout::LayoutManager;

const CLEAR_SHORTCUT: InstructionShortcut = ("c", " Clear");
const ACCEPT_SHORTCUT: InstructionShortcut = ("o", " OK");
const POSITION_SHORTCUT: InstructionShortcut = ("Tab", " Start/End");

/// Snapshot of the picker state a surface draws
#[derive(Debug, Clone, Copy)]
pub struct PickerView<'a> {
    pub grids: &'a [MonthGrid],
    pub cursor: NaiveDate,
    pub value: DateRange,
    pub position: RangePosition,
    pub clearable: bool,
    pub display_week_number: bool,
}

impl PickerView<'_> {
    pub fn shows_clear(&self) -> bool {
        self.clearable && !self.value.is_empty()
    }
}

#[derive(Debug)]
pub struct PickerPanel {
    indicator: RangePositionIndicator,
    calendars: Vec<CalendarView>,
    clear: Button,
    cancel: Button,
    ok: Button,
    clear_visible: bool,
}

impl Default for PickerPanel {
    fn default() -> Self {
        Self {
            indicator: RangePositionIndicator::new(),
            calendars: Vec::new(),
            clear: Button::new("Clear").variant(ButtonVariant::Ghost).size(Size::Sm),
            cancel: Button::new("Cancel").variant(ButtonVariant::Secondary).size(Size::Sm),
            ok: Button::new("OK").variant(ButtonVariant::Primary).size(Size::Sm),
            clear_visible: false,
        }
    }
}

impl PickerPanel {
    /// Indicator, gap, calendars, gap, buttons, instructions
    pub const HEIGHT: u16 = 1 + 1 + CALENDAR_HEIGHT + 1 + 1 + 1;

    pub fn new() -> Self {
        Self::default()
    }

    /// Columns needed for `months` calendars side by side
    pub fn width(months: usize, display_week_number: bool) -> u16 {
        let months = u16::try_from(months.max(1)).unwrap_or(1);
        (CalendarView::width(display_week_number) * months + 2 * (months - 1)).max(RangePositionIndicator::width())
    }

    pub fn hit(&self, column: u16, row: u16) -> Option<PickerHit> {
        if let Some(hit) = self.indicator.hit(column, row) {
            return Some(hit);
        }
        if let Some(hit) = self.calendars.iter().find_map(|calendar| calendar.hit(column, row)) {
            return Some(hit);
        }
        if self.clear_visible && LayoutManager::hit(self.clear.area(), column, row) {
            Some(PickerHit::Clear)
        } else if LayoutManager::hit(self.cancel.area(), column, row) {
            Some(PickerHit::Cancel)
        } else if LayoutManager::hit(self.ok.area(), column, row) {
            Some(PickerHit::Accept)
        } else {
            None
        }
    }

    pub fn render(&mut self, f: &mut Frame, rect: Rect, view: &PickerView<'_>, theme: &Theme) {
        let rows = LayoutManager::stack(rect, &[1, 1, CALENDAR_HEIGHT, 1, 1, 1]);
        self.indicator.render(f, rows[0], view.position, theme);

        self.calendars.resize_with(view.grids.len(), CalendarView::new);
        let calendar_width = CalendarView::width(view.display_week_number);
        let total = Self::width(view.grids.len(), view.display_week_number).min(rows[2].width);
        let mut x = rows[2].x + (rows[2].width - total) / 2;
        let last = view.grids.len().saturating_sub(1);
        for (index, (calendar, grid)) in self.calendars.iter_mut().zip(view.grids).enumerate() {
            calendar.show_previous = index == 0;
            calendar.show_next = index == last;
            calendar.display_week_number = view.display_week_number;
            let width = calendar_width.min((rows[2].x + rows[2].width).saturating_sub(x));
            calendar.render(f, Rect::new(x, rows[2].y, width, rows[2].height), grid, view.cursor, theme);
            x += width + 2;
        }

        self.render_buttons(f, rows[4], view, theme);

        let mut instructions = vec![shortcuts::ENTER_SELECT, POSITION_SHORTCUT, shortcuts::PAGE_MONTH];
        if view.shows_clear() {
            instructions.push(CLEAR_SHORTCUT);
        }
        instructions.push(ACCEPT_SHORTCUT);
        instructions.push(shortcuts::ESC_CANCEL);
        f.render_widget(create_instructions_paragraph(&instructions, theme), rows[5]);
    }

    /// Right aligned action row: Clear, Cancel, OK
    fn render_buttons(&mut self, f: &mut Frame, row: Rect, view: &PickerView<'_>, theme: &Theme) {
        self.clear_visible = view.shows_clear();
        self.ok.disabled = !view.value.is_complete();

        let mut buttons: Vec<&mut Button> = Vec::with_capacity(3);
        if self.clear_visible {
            buttons.push(&mut self.clear);
        }
        buttons.push(&mut self.cancel);
        buttons.push(&mut self.ok);

        let total: u16 = buttons.iter().map(|button| button.width(theme) + 1).sum();
        let mut x = (row.x + row.width).saturating_sub(total).max(row.x);
        for button in buttons {
            let width = button.width(theme).min((row.x + row.width).saturating_sub(x));
            button.render(f, Rect::new(x, row.y, width, row.height), theme);
            x += width + 1;
        }
    }
}
