//! Start/End chips showing which endpoint the next click sets

use ratatui::{layout::Rect, text::Span, widgets::Paragraph, Frame};

use super::PickerHit;
use crate::date_range::RangePosition;
use crate::theme::Theme;
use crate::ui::layout::LayoutManager;

const POSITIONS: [RangePosition; 2] = [RangePosition::Start, RangePosition::End];

#[derive(Debug, Default)]
pub struct RangePositionIndicator {
    chips: [Rect; 2],
}

impl RangePositionIndicator {
    pub fn new() -> Self {
        Self::default()
    }

    fn chip_label(position: RangePosition) -> String {
        format!(" {} ", position.label())
    }

    /// Columns taken by both chips and the gap between them
    pub fn width() -> u16 {
        let chips: usize = POSITIONS.iter().map(|p| Self::chip_label(*p).len()).sum();
        chips as u16 + 1
    }

    pub fn hit(&self, column: u16, row: u16) -> Option<PickerHit> {
        POSITIONS
            .iter()
            .zip(self.chips)
            .find(|(_, area)| LayoutManager::hit(*area, column, row))
            .map(|(position, _)| PickerHit::Position(*position))
    }

    /// Draw both chips centered in `rect`
    pub fn render(&mut self, f: &mut Frame, rect: Rect, active: RangePosition, theme: &Theme) {
        let styles = theme.styles();
        let row = LayoutManager::centered_fixed(Self::width(), 1, rect);
        let mut x = row.x;
        for (index, position) in POSITIONS.iter().enumerate() {
            let label = Self::chip_label(*position);
            let width = (label.len() as u16).min((row.x + row.width).saturating_sub(x));
            let area = Rect::new(x, row.y, width, row.height);
            f.render_widget(Paragraph::new(Span::styled(label, styles.chip(*position == active))), area);
            self.chips[index] = area;
            x += width + 1;
        }
    }
}
