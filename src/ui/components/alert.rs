//! Inline alert box

use crossterm::event::{KeyCode, KeyEvent, MouseEvent};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::common::{bold, left_click};
use crate::theme::{AlertVariant, ClassList, Size, Theme};
use crate::ui::core::{Action, Component};
use crate::ui::layout::LayoutManager;

#[derive(Debug, Clone)]
pub struct Alert {
    pub variant: AlertVariant,
    pub size: Size,
    pub title: Option<String>,
    pub messages: Vec<String>,
    pub show_icon: bool,
    pub dismissible: bool,
    pub class_name: String,
    on_dismiss: Option<Action>,
    dismiss_area: Rect,
}

impl Alert {
    pub fn new(variant: AlertVariant) -> Self {
        Self {
            variant,
            size: Size::default(),
            title: None,
            messages: Vec::new(),
            show_icon: true,
            dismissible: false,
            class_name: String::new(),
            on_dismiss: None,
            dismiss_area: Rect::default(),
        }
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.messages.push(message.into());
        self
    }

    #[must_use]
    pub fn messages(mut self, messages: Vec<String>) -> Self {
        self.messages = messages;
        self
    }

    #[must_use]
    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn show_icon(mut self, show_icon: bool) -> Self {
        self.show_icon = show_icon;
        self
    }

    /// Allow dismissing; the dismiss glyph also needs [`Alert::on_dismiss`]
    #[must_use]
    pub fn dismissible(mut self, dismissible: bool) -> Self {
        self.dismissible = dismissible;
        self
    }

    #[must_use]
    pub fn on_dismiss(mut self, action: Action) -> Self {
        self.on_dismiss = Some(action);
        self
    }

    pub fn can_dismiss(&self) -> bool {
        self.dismissible && self.on_dismiss.is_some()
    }

    pub fn classes(&self) -> ClassList {
        ClassList::new("alert")
            .modifier(self.variant.class_name())
            .modifier(self.size.class_name())
            .modifier_if(self.can_dismiss(), "dismissible")
            .extra(&self.class_name)
    }

    fn icon(&self, theme: &Theme) -> &'static str {
        let icons = theme.icons.icons().alert;
        match self.variant {
            AlertVariant::Info => icons.info,
            AlertVariant::Success => icons.success,
            AlertVariant::Warning => icons.warning,
            AlertVariant::Error => icons.error,
        }
    }

    pub fn lines(&self, theme: &Theme) -> Vec<Line<'static>> {
        let styles = theme.styles();
        let style = styles.alert(self.variant);
        let mut lines = Vec::new();
        let prefix = if self.show_icon {
            format!("{} ", self.icon(theme))
        } else {
            String::new()
        };
        match &self.title {
            Some(title) => {
                lines.push(Line::from(Span::styled(format!("{prefix}{title}"), bold(style))));
                lines.extend(self.messages.iter().map(|m| Line::from(Span::styled(m.clone(), styles.text()))));
            }
            None => {
                for (index, message) in self.messages.iter().enumerate() {
                    let lead = if index == 0 { prefix.clone() } else { " ".repeat(prefix.chars().count()) };
                    lines.push(Line::from(vec![
                        Span::styled(lead, style),
                        Span::styled(message.clone(), styles.text()),
                    ]));
                }
            }
        }
        lines
    }

    /// Rows needed at `width` columns, borders included
    pub fn height(&self) -> u16 {
        let body = self.messages.len() + usize::from(self.title.is_some());
        u16::try_from(body).unwrap_or(u16::MAX).saturating_add(2 + 2 * self.size.padding().min(1))
    }

    fn dismiss(&self) -> Action {
        if self.can_dismiss() {
            self.on_dismiss.clone().unwrap_or(Action::None)
        } else {
            Action::None
        }
    }
}

impl Component for Alert {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Esc | KeyCode::Char('x') => self.dismiss(),
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        match left_click(&mouse) {
            Some((column, row)) if LayoutManager::hit(self.dismiss_area, column, row) => self.dismiss(),
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, theme: &Theme) {
        let styles = theme.styles();
        let style = styles.alert(self.variant);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(styles.border_type())
            .border_style(style);
        let inner = LayoutManager::pad(block.inner(rect), 1, self.size.padding().min(1));
        f.render_widget(Clear, rect);
        f.render_widget(block, rect);
        f.render_widget(Paragraph::new(self.lines(theme)).wrap(Wrap { trim: false }), inner);

        self.dismiss_area = if self.can_dismiss() && rect.width > 4 {
            let glyph = Rect::new(rect.x + rect.width - 3, rect.y + 1, 1, 1);
            f.render_widget(Paragraph::new(Span::styled(theme.icons.close(), style)), glyph);
            glyph
        } else {
            Rect::default()
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    #[test]
    fn dismiss_requires_both_flag_and_action() {
        let mut alert = Alert::new(AlertVariant::Warning).dismissible(true);
        assert!(!alert.can_dismiss());
        assert_eq!(alert.handle_key_events(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)), Action::None);

        let mut alert = alert.on_dismiss(Action::AlertDismissed);
        assert!(alert.classes().contains("alert--dismissible"));
        assert_eq!(
            alert.handle_key_events(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)),
            Action::AlertDismissed
        );
    }

    #[test]
    fn icon_prefixes_first_message() {
        let theme = Theme::default();
        let alert = Alert::new(AlertVariant::Error).message("Please select a team").message("Second");
        let lines = alert.lines(&theme);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].spans[0].content, "x ");
        assert_eq!(lines[1].spans[0].content, "  ");
    }
}
