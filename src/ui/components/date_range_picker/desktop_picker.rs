//! Popover anchored under the date field

use ratatui::{layout::Rect, widgets::Clear, Frame};

use super::picker_panel::{PickerPanel, PickerView};
use super::PickerHit;
use crate::theme::Theme;
use crate::ui::components::common::create_block;
use crate::ui::layout::LayoutManager;

#[derive(Debug, Default)]
pub struct DesktopPicker {
    panel: PickerPanel,
    area: Rect,
}

impl DesktopPicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    /// Outer size for `months` calendars, border and padding included
    pub fn size(months: usize, display_week_number: bool) -> (u16, u16) {
        (PickerPanel::width(months, display_week_number) + 4, PickerPanel::HEIGHT + 2)
    }

    pub fn hit(&self, column: u16, row: u16) -> Option<PickerHit> {
        self.panel.hit(column, row)
    }

    pub fn contains(&self, column: u16, row: u16) -> bool {
        LayoutManager::hit(self.area, column, row)
    }

    pub fn render(&mut self, f: &mut Frame, anchor: Rect, view: &PickerView<'_>, theme: &Theme) {
        let (width, height) = Self::size(view.grids.len(), view.display_week_number);
        self.area = LayoutManager::popover(anchor, width, height, f.area());
        let block = create_block(None, theme, true);
        let inner = LayoutManager::pad(block.inner(self.area), 1, 0);
        f.render_widget(Clear, self.area);
        f.render_widget(block, self.area);
        self.panel.render(f, inner, view, theme);
    }

    pub fn reset(&mut self) {
        self.area = Rect::default();
    }
}
