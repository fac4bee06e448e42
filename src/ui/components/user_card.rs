//! Compact user profile card

use crossterm::event::{KeyCode, KeyEvent, MouseEvent};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::avatar::Avatar;
use super::badge::badge_span;
use super::button::Button;
use super::card::{Card, Padding};
use super::common::{bold, left_click};
use crate::entities::User;
use crate::theme::{BadgeVariant, ClassList, ExtendedSize, Theme};
use crate::ui::core::{Action, Component};
use crate::ui::layout::LayoutManager;
use crate::utils::datetime::format_short_date;

#[derive(Debug, Clone)]
pub struct UserCard {
    pub user: User,
    pub show_details: bool,
    pub clickable: bool,
    pub class_name: String,
    /// Extra buttons under the profile; Tab cycles through them
    pub actions: Vec<Button>,
    card: Card,
    focused_action: Option<usize>,
}

impl UserCard {
    pub fn new(user: User) -> Self {
        Self {
            user,
            show_details: false,
            clickable: false,
            class_name: String::new(),
            actions: Vec::new(),
            card: Card::new().padding(Padding::Sm),
            focused_action: None,
        }
    }

    #[must_use]
    pub fn show_details(mut self, show_details: bool) -> Self {
        self.show_details = show_details;
        self
    }

    #[must_use]
    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    #[must_use]
    pub fn action(mut self, button: Button) -> Self {
        self.actions.push(button);
        self
    }

    pub fn classes(&self) -> ClassList {
        ClassList::new("user-card")
            .modifier_if(self.clickable, "clickable")
            .extra(&self.class_name)
    }

    fn select(&self) -> Action {
        if self.clickable {
            Action::UserSelected(Box::new(self.user.clone()))
        } else {
            Action::None
        }
    }

    pub fn lines(&self, theme: &Theme) -> Vec<Line<'static>> {
        let styles = theme.styles();
        let display_name = self.user.display_name();
        let avatar = Avatar::new()
            .src(self.user.avatar_url.clone())
            .fallback(display_name.clone())
            .size(ExtendedSize::Lg);
        let indent = " ".repeat(usize::from(avatar.width(theme)) + 1);

        let mut name = vec![avatar.span(theme), Span::raw(" "), Span::styled(display_name, bold(styles.text()))];
        if self.user.is_active == Some(false) {
            name.push(Span::raw(" "));
            name.push(badge_span("Inactive", BadgeVariant::Warning, theme));
        }
        let mut lines = vec![
            Line::from(name),
            Line::from(vec![
                Span::raw(indent.clone()),
                Span::styled(format!("@{}", self.user.username), styles.muted()),
            ]),
        ];
        if self.show_details {
            if let Some(email) = &self.user.email {
                lines.push(Line::from(vec![Span::raw(indent.clone()), Span::styled(email.clone(), styles.text())]));
            }
            if let Some(created_at) = &self.user.created_at {
                lines.push(Line::from(vec![
                    Span::raw(indent),
                    Span::styled(format!("Joined {}", format_short_date(created_at)), styles.muted()),
                ]));
            }
        }
        lines
    }

    /// Rows including the card border
    pub fn height(&self, theme: &Theme) -> u16 {
        let body = self.lines(theme).len() + usize::from(!self.actions.is_empty());
        u16::try_from(body).unwrap_or(u16::MAX) + 2
    }
}

impl Component for UserCard {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Tab if !self.actions.is_empty() => {
                let next = self.focused_action.map_or(0, |index| (index + 1) % self.actions.len());
                self.focused_action = Some(next);
                for (index, button) in self.actions.iter_mut().enumerate() {
                    button.set_focused(index == next);
                }
                Action::None
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.focused_action.and_then(|index| self.actions.get_mut(index)) {
                Some(button) => button.handle_key_events(key),
                None => self.select(),
            },
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        let Some((column, row)) = left_click(&mouse) else {
            return Action::None;
        };
        if let Some(button) = self
            .actions
            .iter_mut()
            .find(|button| LayoutManager::hit(button.area(), column, row))
        {
            return button.handle_mouse_events(mouse);
        }
        if LayoutManager::hit(self.card.area(), column, row) {
            self.select()
        } else {
            Action::None
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, theme: &Theme) {
        self.card.interactive = self.clickable;
        let body = self.card.render_frame(f, rect, theme);
        let lines = self.lines(theme);
        let text_height = u16::try_from(lines.len()).unwrap_or(u16::MAX);
        let rows = LayoutManager::stack(body, &[text_height, 1]);
        f.render_widget(Paragraph::new(lines), rows[0]);

        let mut x = rows[1].x;
        let right = rows[1].x + rows[1].width;
        for button in &mut self.actions {
            let width = button.width(theme).min(right.saturating_sub(x));
            button.render(f, Rect::new(x, rows[1].y, width, rows[1].height), theme);
            x += width + 1;
        }
    }

    fn on_focus(&mut self) -> Action {
        self.card.set_focused(self.clickable);
        Action::None
    }

    fn on_blur(&mut self) -> Action {
        self.card.set_focused(false);
        self.focused_action = None;
        for button in &mut self.actions {
            button.set_focused(false);
        }
        Action::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn user(is_active: Option<bool>) -> User {
        User {
            id: 7,
            username: "msmith".to_string(),
            email: Some("m@example.com".to_string()),
            first_name: None,
            last_name: None,
            avatar_url: None,
            is_active,
            created_at: None,
        }
    }

    #[test]
    fn inactive_users_get_a_badge() {
        let theme = Theme::default();
        let card = UserCard::new(user(Some(false)));
        let first = card.lines(&theme)[0].to_string();
        assert!(first.contains("msmith"));
        assert!(first.contains("Inactive"));
    }

    #[test]
    fn details_are_opt_in() {
        let theme = Theme::default();
        assert_eq!(UserCard::new(user(None)).lines(&theme).len(), 2);
        assert_eq!(UserCard::new(user(None)).show_details(true).lines(&theme).len(), 3);
    }

    #[test]
    fn click_requires_clickable() {
        let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
        let mut card = UserCard::new(user(None));
        assert_eq!(card.handle_key_events(enter), Action::None);
        let mut card = card.clickable(true);
        assert_eq!(card.handle_key_events(enter), Action::UserSelected(Box::new(user(None))));
    }
}
