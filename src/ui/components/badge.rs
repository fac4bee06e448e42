//! Small status label

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::theme::{BadgeVariant, ClassList, Size, Theme};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    pub text: String,
    pub variant: BadgeVariant,
    pub size: Size,
    pub rounded: bool,
    pub class_name: String,
}

impl Badge {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            variant: BadgeVariant::default(),
            size: Size::default(),
            rounded: false,
            class_name: String::new(),
        }
    }

    #[must_use]
    pub fn variant(mut self, variant: BadgeVariant) -> Self {
        self.variant = variant;
        self
    }

    #[must_use]
    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn rounded(mut self, rounded: bool) -> Self {
        self.rounded = rounded;
        self
    }

    pub fn classes(&self) -> ClassList {
        ClassList::new("badge")
            .modifier(self.variant.class_name())
            .modifier(self.size.class_name())
            .modifier_if(self.rounded, "rounded")
            .extra(&self.class_name)
    }

    /// Text as drawn, padding and end caps included
    pub fn label(&self) -> String {
        let pad = " ".repeat(usize::from(self.size.padding()));
        if self.rounded {
            format!("({pad}{}{pad})", self.text)
        } else {
            format!(" {pad}{}{pad} ", self.text)
        }
    }

    pub fn span(&self, theme: &Theme) -> Span<'static> {
        Span::styled(self.label(), self.style(theme))
    }

    pub fn style(&self, theme: &Theme) -> Style {
        theme.styles().badge(self.variant)
    }

    pub fn width(&self) -> u16 {
        u16::try_from(Span::raw(self.label()).width()).unwrap_or(u16::MAX)
    }

    pub fn render(&self, f: &mut Frame, rect: Rect, theme: &Theme) {
        f.render_widget(Paragraph::new(Line::from(self.span(theme))), rect);
    }
}

/// Shorthand for an inline badge span
pub fn badge_span(text: &str, variant: BadgeVariant, theme: &Theme) -> Span<'static> {
    Badge::new(text).variant(variant).size(Size::Sm).span(theme)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounded_badges_use_parentheses() {
        let badge = Badge::new("Live").variant(BadgeVariant::Warning).size(Size::Sm).rounded(true);
        assert_eq!(badge.label(), "(Live)");
        assert_eq!(badge.classes().to_string(), "badge badge--warning badge--sm badge--rounded");
    }
}
