//! Layout management and calculations

use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

/// Manages layout calculations and constraints for the UI
pub struct LayoutManager;

impl LayoutManager {
    /// Calculate a centered rectangle within the given area
    #[must_use]
    pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
        let popup_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage((100 - percent_y) / 2),
                Constraint::Percentage(percent_y),
                Constraint::Percentage((100 - percent_y) / 2),
            ])
            .split(r);

        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage((100 - percent_x) / 2),
                Constraint::Percentage(percent_x),
                Constraint::Percentage((100 - percent_x) / 2),
            ])
            .split(popup_layout[1])[1]
    }

    /// Center a fixed size box inside `r`, shrinking it to fit
    #[must_use]
    pub fn centered_fixed(width: u16, height: u16, r: Rect) -> Rect {
        let width = width.min(r.width);
        let height = height.min(r.height);
        Rect::new(
            r.x + (r.width - width) / 2,
            r.y + (r.height - height) / 2,
            width,
            height,
        )
    }

    /// Place a popover of `width` x `height` under `anchor`, kept inside `bounds`.
    ///
    /// Flips above the anchor when there is no room below.
    #[must_use]
    pub fn popover(anchor: Rect, width: u16, height: u16, bounds: Rect) -> Rect {
        let width = width.min(bounds.width);
        let height = height.min(bounds.height);
        let right_limit = bounds.x + bounds.width;
        let x = anchor.x.min(right_limit.saturating_sub(width)).max(bounds.x);

        let below = anchor.y + anchor.height;
        let bottom_limit = bounds.y + bounds.height;
        let y = if below + height <= bottom_limit {
            below
        } else if anchor.y >= bounds.y + height {
            anchor.y - height
        } else {
            bottom_limit.saturating_sub(height).max(bounds.y)
        };
        Rect::new(x, y, width, height)
    }

    /// Split `area` into rows of the given heights; rows that do not fit are empty
    #[must_use]
    pub fn stack(area: Rect, heights: &[u16]) -> Vec<Rect> {
        let mut y = area.y;
        let bottom = area.y + area.height;
        heights
            .iter()
            .map(|&height| {
                let height = height.min(bottom.saturating_sub(y));
                let row = Rect::new(area.x, y, area.width, height);
                y += height;
                row
            })
            .collect()
    }

    /// Shrink `area` by `horizontal` columns and `vertical` rows on each side
    #[must_use]
    pub fn pad(area: Rect, horizontal: u16, vertical: u16) -> Rect {
        let width = area.width.saturating_sub(horizontal * 2);
        let height = area.height.saturating_sub(vertical * 2);
        if width == 0 || height == 0 {
            return Rect::new(area.x, area.y, 0, 0);
        }
        Rect::new(area.x + horizontal, area.y + vertical, width, height)
    }

    /// Whether a terminal cell lies inside `area`
    #[must_use]
    pub fn hit(area: Rect, column: u16, row: u16) -> bool {
        area.contains(Position::new(column, row))
    }
}
