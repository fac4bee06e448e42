//! Width-limited layout wrapper

use ratatui::layout::Rect;

use crate::theme::ClassList;
use crate::ui::layout::LayoutManager;

use super::card::Padding;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MaxWidth {
    Sm,
    Md,
    Lg,
    #[default]
    Xl,
    Xxl,
    Full,
}

impl MaxWidth {
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
            Self::Xxl => "2xl",
            Self::Full => "full",
        }
    }

    /// Column limit; `None` for full width
    pub fn columns(self) -> Option<u16> {
        match self {
            Self::Sm => Some(64),
            Self::Md => Some(80),
            Self::Lg => Some(100),
            Self::Xl => Some(128),
            Self::Xxl => Some(152),
            Self::Full => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Container {
    pub max_width: MaxWidth,
    pub padding: Padding,
    pub centered: bool,
}

impl Default for Container {
    fn default() -> Self {
        Self {
            max_width: MaxWidth::default(),
            padding: Padding::Md,
            centered: true,
        }
    }
}

impl Container {
    pub fn new(max_width: MaxWidth) -> Self {
        Self {
            max_width,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn centered(mut self, centered: bool) -> Self {
        self.centered = centered;
        self
    }

    pub fn classes(&self) -> ClassList {
        ClassList::new("container")
            .modifier(self.max_width.class_name())
            .modifier(&format!("padding-{}", self.padding.class_name()))
            .modifier_if(self.centered, "centered")
    }

    /// Content area inside `outer`
    pub fn area(&self, outer: Rect) -> Rect {
        let width = self.max_width.columns().map_or(outer.width, |limit| limit.min(outer.width));
        let x = if self.centered {
            outer.x + (outer.width - width) / 2
        } else {
            outer.x
        };
        let (horizontal, vertical) = self.padding.cells();
        LayoutManager::pad(Rect::new(x, outer.y, width, outer.height), horizontal, vertical)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centers_limited_width() {
        let container = Container::new(MaxWidth::Sm).padding(Padding::None);
        assert_eq!(container.area(Rect::new(0, 0, 100, 10)), Rect::new(18, 0, 64, 10));
    }

    #[test]
    fn full_width_keeps_outer_and_pads() {
        let container = Container::new(MaxWidth::Full).padding(Padding::Sm).centered(false);
        assert_eq!(container.area(Rect::new(2, 1, 50, 10)), Rect::new(3, 1, 48, 10));
    }
}
