//! One month of the picker

use chrono::{Datelike, NaiveDate};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::PickerHit;
use crate::constants::{CALENDAR_WIDTH, WEEK_NUMBER_WIDTH};
use crate::date_range::calendar::{month_title, WEEKDAYS};
use crate::date_range::{CalendarCell, MonthGrid};
use crate::theme::Theme;
use crate::ui::layout::LayoutManager;

/// Title, weekday header and six week rows
pub const CALENDAR_HEIGHT: u16 = 8;

const DAY_WIDTH: u16 = 3;

/// Draws a [`MonthGrid`] and remembers where each day landed
#[derive(Debug, Default)]
pub struct CalendarView {
    pub show_previous: bool,
    pub show_next: bool,
    pub display_week_number: bool,
    days: Vec<(NaiveDate, Rect)>,
    previous_area: Rect,
    next_area: Rect,
}

impl CalendarView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn width(display_week_number: bool) -> u16 {
        if display_week_number {
            CALENDAR_WIDTH + WEEK_NUMBER_WIDTH
        } else {
            CALENDAR_WIDTH
        }
    }

    pub fn hit(&self, column: u16, row: u16) -> Option<PickerHit> {
        if self.show_previous && LayoutManager::hit(self.previous_area, column, row) {
            return Some(PickerHit::PreviousMonth);
        }
        if self.show_next && LayoutManager::hit(self.next_area, column, row) {
            return Some(PickerHit::NextMonth);
        }
        self.days
            .iter()
            .find(|(_, area)| LayoutManager::hit(*area, column, row))
            .map(|(date, _)| PickerHit::Day(*date))
    }

    pub fn render(&mut self, f: &mut Frame, rect: Rect, grid: &MonthGrid, cursor: NaiveDate, theme: &Theme) {
        let styles = theme.styles();
        let icons = theme.icons.icons().picker;
        self.days.clear();
        if rect.height < 2 || rect.width < 7 * DAY_WIDTH {
            return;
        }
        let offset = if self.display_week_number { WEEK_NUMBER_WIDTH } else { 0 };
        let body_x = rect.x + offset;
        let body_width = (7 * DAY_WIDTH).min(rect.width - offset);

        let title_row = Rect::new(body_x, rect.y, body_width, 1);
        f.render_widget(
            Paragraph::new(Span::styled(month_title(grid.month), styles.title())).alignment(Alignment::Center),
            title_row,
        );
        self.previous_area = Rect::new(title_row.x, title_row.y, 2, 1);
        self.next_area = Rect::new(title_row.x + title_row.width - 2, title_row.y, 2, 1);
        if self.show_previous {
            f.render_widget(Paragraph::new(Span::styled(icons.previous, styles.accent())), self.previous_area);
        }
        if self.show_next {
            let next = Paragraph::new(Span::styled(icons.next, styles.accent())).alignment(Alignment::Right);
            f.render_widget(next, self.next_area);
        }

        let header: Vec<Span> = WEEKDAYS
            .iter()
            .map(|name| Span::styled(format!("{:<3}", &name[..2]), styles.muted()))
            .collect();
        f.render_widget(Paragraph::new(Line::from(header)), Rect::new(body_x, rect.y + 1, body_width, 1));

        let week_numbers = grid.week_numbers();
        let bottom = rect.y + rect.height;
        for (index, week) in grid.weeks().enumerate() {
            let y = rect.y + 2 + index as u16;
            if y >= bottom {
                break;
            }
            if self.display_week_number {
                let label = week_numbers
                    .get(index)
                    .copied()
                    .flatten()
                    .map_or_else(String::new, |number| format!("{number:>2}"));
                f.render_widget(
                    Paragraph::new(Span::styled(label, styles.muted())),
                    Rect::new(rect.x, y, WEEK_NUMBER_WIDTH - 1, 1),
                );
            }
            for (column, cell) in week.iter().enumerate() {
                let CalendarCell::Day(day) = cell else {
                    continue;
                };
                let area = Rect::new(body_x + column as u16 * DAY_WIDTH, y, DAY_WIDTH, 1);
                if area.x + 2 > rect.x + rect.width {
                    continue;
                }
                let label = Span::styled(format!("{:>2}", day.date.day()), styles.day(day, day.date == cursor));
                f.render_widget(Paragraph::new(label), Rect::new(area.x, y, 2, 1));
                self.days.push((day.date, area));
            }
        }
    }
}
