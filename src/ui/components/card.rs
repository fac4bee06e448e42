//! Bordered surface with optional header and footer

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders},
    Frame,
};

use super::common::{is_activation, left_click};
use crate::theme::{ClassList, Theme};
use crate::ui::core::Action;
use crate::ui::layout::LayoutManager;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardVariant {
    #[default]
    Default,
    Elevated,
    Outlined,
}

impl CardVariant {
    fn class_name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Elevated => "elevated",
            Self::Outlined => "outlined",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Padding {
    None,
    Sm,
    #[default]
    Md,
    Lg,
    Xl,
}

impl Padding {
    pub fn class_name(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }

    /// (columns, rows) of padding on each side
    pub fn cells(self) -> (u16, u16) {
        match self {
            Self::None => (0, 0),
            Self::Sm => (1, 0),
            Self::Md => (2, 0),
            Self::Lg => (3, 1),
            Self::Xl => (4, 1),
        }
    }
}

/// Card frame; composite components draw their content into the returned body
#[derive(Debug, Clone, Default)]
pub struct Card {
    pub variant: CardVariant,
    pub padding: Padding,
    pub interactive: bool,
    pub header: Option<String>,
    pub footer: Option<String>,
    pub class_name: String,
    on_click: Option<Action>,
    focused: bool,
    area: Rect,
}

impl Card {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn variant(mut self, variant: CardVariant) -> Self {
        self.variant = variant;
        self
    }

    #[must_use]
    pub fn padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn header(mut self, header: impl Into<String>) -> Self {
        self.header = Some(header.into());
        self
    }

    #[must_use]
    pub fn footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    #[must_use]
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    /// Make the card focusable and pressable
    #[must_use]
    pub fn on_click(mut self, action: Action) -> Self {
        self.interactive = true;
        self.on_click = Some(action);
        self
    }

    pub fn set_on_click(&mut self, action: Option<Action>) {
        self.interactive = action.is_some();
        self.on_click = action;
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused && self.interactive;
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn classes(&self) -> ClassList {
        ClassList::new("card")
            .modifier(self.variant.class_name())
            .modifier(&format!("padding-{}", self.padding.class_name()))
            .modifier_if(self.interactive, "interactive")
            .extra(&self.class_name)
    }

    fn block(&self, theme: &Theme) -> Block<'static> {
        let styles = theme.styles();
        let (border_type, border_style) = match self.variant {
            CardVariant::Default => (styles.border_type(), styles.border(self.focused)),
            CardVariant::Elevated => (BorderType::Thick, styles.border(self.focused)),
            CardVariant::Outlined if self.focused => (BorderType::Plain, styles.border(true)),
            CardVariant::Outlined => (BorderType::Plain, styles.text()),
        };
        let mut block = Block::default()
            .borders(Borders::ALL)
            .border_type(border_type)
            .border_style(border_style);
        if let Some(header) = &self.header {
            block = block.title(Line::from(Span::styled(format!(" {header} "), styles.title())));
        }
        if let Some(footer) = &self.footer {
            block = block.title_bottom(Line::from(Span::styled(format!(" {footer} "), styles.muted())).right_aligned());
        }
        block
    }

    /// Draw the frame and return the padded body
    pub fn render_frame(&mut self, f: &mut Frame, rect: Rect, theme: &Theme) -> Rect {
        self.area = rect;
        let block = self.block(theme);
        let inner = block.inner(rect);
        f.render_widget(block, rect);
        let (horizontal, vertical) = self.padding.cells();
        LayoutManager::pad(inner, horizontal, vertical)
    }

    /// Same as [`Card::render_frame`] with a background fill for the body
    pub fn render_filled(&mut self, f: &mut Frame, rect: Rect, theme: &Theme, fill: Style) -> Rect {
        f.render_widget(Block::default().style(fill), rect);
        self.render_frame(f, rect, theme)
    }

    pub fn press(&self) -> Action {
        if self.interactive {
            self.on_click.clone().unwrap_or(Action::None)
        } else {
            Action::None
        }
    }

    pub fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if is_activation(&key) {
            self.press()
        } else {
            Action::None
        }
    }

    pub fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        match left_click(&mouse) {
            Some((column, row)) if LayoutManager::hit(self.area, column, row) => self.press(),
            _ => Action::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padding_class_and_cells() {
        let card = Card::new().padding(Padding::Lg);
        assert!(card.classes().contains("card--padding-lg"));
        assert_eq!(Padding::Lg.cells(), (3, 1));
    }

    #[test]
    fn static_card_ignores_presses() {
        let card = Card::new().header("Week 1");
        assert_eq!(card.press(), Action::None);
        let card = card.on_click(Action::Pressed("card".to_string()));
        assert_eq!(card.press(), Action::Pressed("card".to_string()));
    }
}
