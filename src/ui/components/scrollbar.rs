//! Vertical scrollbar for lists taller than their viewport

use ratatui::{
    layout::Rect,
    widgets::{Scrollbar, ScrollbarOrientation, ScrollbarState},
    Frame,
};

use crate::icons::IconTheme;
use crate::theme::Theme;

#[derive(Debug, Default)]
pub struct ListScrollbar {
    state: ScrollbarState,
}

impl ListScrollbar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update(&mut self, total_rows: usize, position: usize, viewport_rows: usize) {
        self.state = self
            .state
            .content_length(total_rows.saturating_sub(viewport_rows).saturating_add(1))
            .viewport_content_length(viewport_rows)
            .position(position);
    }

    pub fn is_needed(total_rows: usize, viewport_rows: usize) -> bool {
        total_rows > viewport_rows
    }

    /// Split `rect` into (content, scrollbar column) when the rows overflow
    pub fn split(rect: Rect, total_rows: usize) -> (Rect, Option<Rect>) {
        if !Self::is_needed(total_rows, usize::from(rect.height)) || rect.width < 2 {
            return (rect, None);
        }
        let content = Rect::new(rect.x, rect.y, rect.width - 1, rect.height);
        let bar = Rect::new(rect.x + rect.width - 1, rect.y, 1, rect.height);
        (content, Some(bar))
    }

    pub fn render(&mut self, f: &mut Frame, area: Option<Rect>, theme: &Theme) {
        let Some(area) = area else {
            return;
        };
        let styles = theme.styles();
        let (begin, end, track, thumb) = match theme.icons.theme() {
            IconTheme::Ascii => ("^", "v", "|", "#"),
            IconTheme::Unicode | IconTheme::Emoji => ("↑", "↓", "│", "█"),
        };
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some(begin))
            .end_symbol(Some(end))
            .track_symbol(Some(track))
            .thumb_symbol(thumb)
            .style(styles.muted())
            .thumb_style(styles.accent());
        f.render_stateful_widget(scrollbar, area, &mut self.state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_only_when_overflowing() {
        let rect = Rect::new(0, 0, 20, 5);
        assert_eq!(ListScrollbar::split(rect, 5), (rect, None));
        let (content, bar) = ListScrollbar::split(rect, 6);
        assert_eq!(content.width, 19);
        assert_eq!(bar, Some(Rect::new(19, 0, 1, 5)));
    }
}
