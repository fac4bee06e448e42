//! Full screen dialog with a single calendar

use ratatui::{layout::Rect, widgets::Clear, Frame};

use super::picker_panel::{PickerPanel, PickerView};
use super::PickerHit;
use crate::theme::Theme;
use crate::ui::components::common::create_block;
use crate::ui::layout::LayoutManager;

pub const MOBILE_TITLE: &str = "Select Date Range";

#[derive(Debug, Default)]
pub struct MobilePicker {
    panel: PickerPanel,
    area: Rect,
}

impl MobilePicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn hit(&self, column: u16, row: u16) -> Option<PickerHit> {
        self.panel.hit(column, row)
    }

    pub fn render(&mut self, f: &mut Frame, screen: Rect, view: &PickerView<'_>, theme: &Theme) {
        self.area = screen;
        let title = format!("{} {MOBILE_TITLE}", theme.icons.calendar());
        let block = create_block(Some(&title), theme, true);
        let inner = block.inner(screen);
        f.render_widget(Clear, screen);
        f.render_widget(block, screen);

        // Panel keeps its natural height, centered vertically
        let body = LayoutManager::centered_fixed(inner.width, PickerPanel::HEIGHT, inner);
        self.panel.render(f, LayoutManager::pad(body, 1, 0), view, theme);
    }

    pub fn reset(&mut self) {
        self.area = Rect::default();
    }
}
