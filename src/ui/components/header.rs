//! Application header: brand, navigation and account controls

use crossterm::event::{KeyCode, KeyEvent, MouseEvent};
use log::debug;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::avatar::Avatar;
use super::button::Button;
use super::common::{bold, create_block, left_click};
use crate::constants::DEFAULT_HEADER_TITLE;
use crate::entities::User;
use crate::theme::{ButtonVariant, ClassList, ExtendedSize, Size, Theme};
use crate::ui::core::{Action, Component};
use crate::ui::layout::LayoutManager;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    pub label: String,
    pub href: String,
    pub active: bool,
}

impl NavItem {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            active: false,
        }
    }

    #[must_use]
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }
}

/// Focusable element of the header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderTarget {
    Nav(usize),
    UserMenu,
    Logout,
    Login,
}

#[derive(Debug, Clone)]
pub struct Header {
    pub title: String,
    pub show_logo: bool,
    pub nav_items: Vec<NavItem>,
    pub user: Option<User>,
    pub is_authenticated: bool,
    /// Show the Logout button next to the user menu
    pub logout_enabled: bool,
    pub class_name: String,
    menu_open: bool,
    menu_anchor: Rect,
    focus: Option<usize>,
    hit_areas: Vec<(HeaderTarget, Rect)>,
}

impl Default for Header {
    fn default() -> Self {
        Self {
            title: DEFAULT_HEADER_TITLE.to_string(),
            show_logo: false,
            nav_items: Vec::new(),
            user: None,
            is_authenticated: false,
            logout_enabled: false,
            class_name: String::new(),
            menu_open: false,
            menu_anchor: Rect::default(),
            focus: None,
            hit_areas: Vec::new(),
        }
    }
}

impl Header {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    #[must_use]
    pub fn show_logo(mut self, show_logo: bool) -> Self {
        self.show_logo = show_logo;
        self
    }

    #[must_use]
    pub fn nav_items(mut self, items: Vec<NavItem>) -> Self {
        self.nav_items = items;
        self
    }

    /// Signed in user; `None` signs out
    #[must_use]
    pub fn user(mut self, user: Option<User>) -> Self {
        self.is_authenticated = user.is_some();
        self.user = user;
        self
    }

    #[must_use]
    pub fn logout_enabled(mut self, enabled: bool) -> Self {
        self.logout_enabled = enabled;
        self
    }

    /// Account block is shown only for an authenticated user
    pub fn signed_in_user(&self) -> Option<&User> {
        self.user.as_ref().filter(|_| self.is_authenticated)
    }

    pub fn display_name(&self) -> String {
        self.user.as_ref().map_or_else(|| "User".to_string(), User::display_name)
    }

    pub fn is_menu_open(&self) -> bool {
        self.menu_open
    }

    /// Where the host should anchor its user menu
    pub fn menu_anchor(&self) -> Rect {
        self.menu_anchor
    }

    pub fn focused_target(&self) -> Option<HeaderTarget> {
        self.focus.and_then(|index| self.targets().get(index).copied())
    }

    pub fn classes(&self) -> ClassList {
        ClassList::new("header")
            .modifier_if(self.signed_in_user().is_some(), "authenticated")
            .extra(&self.class_name)
    }

    /// Focus order: nav links, then the account controls
    pub fn targets(&self) -> Vec<HeaderTarget> {
        let mut targets: Vec<HeaderTarget> = (0..self.nav_items.len()).map(HeaderTarget::Nav).collect();
        if self.signed_in_user().is_some() {
            targets.push(HeaderTarget::UserMenu);
            if self.logout_enabled {
                targets.push(HeaderTarget::Logout);
            }
        } else {
            targets.push(HeaderTarget::Login);
        }
        targets
    }

    pub fn activate(&mut self, target: HeaderTarget) -> Action {
        match target {
            HeaderTarget::Nav(index) => self
                .nav_items
                .get(index)
                .map_or(Action::None, |item| Action::Navigate(item.href.clone())),
            HeaderTarget::UserMenu => {
                self.menu_open = !self.menu_open;
                debug!("header: user menu {}", if self.menu_open { "opened" } else { "closed" });
                Action::UserMenuToggled(self.menu_open)
            }
            HeaderTarget::Logout => {
                self.menu_open = false;
                Action::Logout
            }
            HeaderTarget::Login => Action::Login,
        }
    }

    fn move_focus(&mut self, forward: bool) {
        let count = self.targets().len();
        if count == 0 {
            return;
        }
        self.focus = Some(match (self.focus, forward) {
            (None, true) => 0,
            (None, false) => count - 1,
            (Some(index), true) => (index + 1) % count,
            (Some(index), false) => (index + count - 1) % count,
        });
    }

    fn account_spans(&self, theme: &Theme) -> Vec<(HeaderTarget, Vec<Span<'static>>)> {
        let styles = theme.styles();
        let focused = self.focused_target();
        match self.signed_in_user() {
            Some(user) => {
                let avatar = Avatar::new()
                    .src(user.avatar_url.clone())
                    .fallback(self.display_name())
                    .size(ExtendedSize::Sm);
                let name_style = if focused == Some(HeaderTarget::UserMenu) {
                    styles.selection()
                } else {
                    styles.text()
                };
                let mut blocks = vec![(
                    HeaderTarget::UserMenu,
                    vec![
                        avatar.span(theme),
                        Span::raw(" "),
                        Span::styled(self.display_name(), name_style),
                        Span::styled(format!(" {}", theme.icons.icons().ui.dropdown), styles.muted()),
                    ],
                )];
                if self.logout_enabled {
                    let mut logout = Button::new("Logout").variant(ButtonVariant::Ghost).size(Size::Sm);
                    logout.set_focused(focused == Some(HeaderTarget::Logout));
                    blocks.push((HeaderTarget::Logout, logout.line(theme).spans));
                }
                blocks
            }
            None => {
                let mut login = Button::new("Login").variant(ButtonVariant::Primary).size(Size::Sm);
                login.set_focused(focused == Some(HeaderTarget::Login));
                vec![(HeaderTarget::Login, login.line(theme).spans)]
            }
        }
    }

    fn brand(&self, theme: &Theme) -> Vec<Span<'static>> {
        let styles = theme.styles();
        let mut spans = Vec::new();
        if self.show_logo {
            spans.push(Span::styled(format!("{} ", theme.icons.icons().ui.logo), styles.accent()));
        }
        spans.push(Span::styled(self.title.clone(), bold(styles.title())));
        spans
    }
}

fn spans_width(spans: &[Span<'_>]) -> u16 {
    u16::try_from(spans.iter().map(Span::width).sum::<usize>()).unwrap_or(u16::MAX)
}

impl Component for Header {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Right | KeyCode::Tab => {
                self.move_focus(true);
                Action::None
            }
            KeyCode::Left | KeyCode::BackTab => {
                self.move_focus(false);
                Action::None
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.focused_target() {
                Some(target) => self.activate(target),
                None => Action::None,
            },
            KeyCode::Esc if self.menu_open => {
                self.menu_open = false;
                Action::UserMenuToggled(false)
            }
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        let Some((column, row)) = left_click(&mouse) else {
            return Action::None;
        };
        let hit = self
            .hit_areas
            .iter()
            .find(|(_, area)| LayoutManager::hit(*area, column, row))
            .map(|(target, _)| *target);
        match hit {
            Some(target) => {
                self.focus = self.targets().iter().position(|t| *t == target);
                self.activate(target)
            }
            None => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, theme: &Theme) {
        let styles = theme.styles();
        let block = create_block(None, theme, false);
        let inner = LayoutManager::pad(block.inner(rect), 1, 0);
        f.render_widget(block, rect);
        self.hit_areas.clear();
        if inner.height == 0 {
            return;
        }
        let row = Rect::new(inner.x, inner.y, inner.width, 1);

        let brand = self.brand(theme);
        let brand_width = spans_width(&brand);
        f.render_widget(Paragraph::new(Line::from(brand)), row);

        // Navigation starts two columns after the brand
        let focused = self.focused_target();
        let mut x = row.x + brand_width + 2;
        let right = row.x + row.width;
        for (index, item) in self.nav_items.iter().enumerate() {
            let style = if focused == Some(HeaderTarget::Nav(index)) {
                styles.selection()
            } else {
                styles.link(item.active)
            };
            let span = Span::styled(item.label.clone(), style);
            let width = spans_width(std::slice::from_ref(&span));
            if x + width > right {
                break;
            }
            let area = Rect::new(x, row.y, width, 1);
            f.render_widget(Paragraph::new(span), area);
            self.hit_areas.push((HeaderTarget::Nav(index), area));
            x += width + 2;
        }

        // Account controls are right aligned
        let account = self.account_spans(theme);
        let total: u16 = account.iter().map(|(_, spans)| spans_width(spans) + 1).sum();
        let mut x = right.saturating_sub(total).max(row.x);
        for (target, spans) in account {
            let width = spans_width(&spans).min(right.saturating_sub(x));
            let area = Rect::new(x, row.y, width, 1);
            f.render_widget(Paragraph::new(Line::from(spans)), area);
            if target == HeaderTarget::UserMenu {
                self.menu_anchor = area;
            }
            self.hit_areas.push((target, area));
            x += width + 1;
        }
    }

    fn on_blur(&mut self) -> Action {
        self.focus = None;
        Action::None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn user() -> User {
        User {
            id: 1,
            username: "jdoe".to_string(),
            email: None,
            first_name: Some("John".to_string()),
            last_name: Some("Doe".to_string()),
            avatar_url: None,
            is_active: Some(true),
            created_at: None,
        }
    }

    #[test]
    fn anonymous_header_offers_login() {
        let mut header = Header::new().nav_items(vec![NavItem::new("Leagues", "/leagues")]);
        assert_eq!(header.targets(), vec![HeaderTarget::Nav(0), HeaderTarget::Login]);
        header.handle_key_events(key(KeyCode::Left));
        assert_eq!(header.handle_key_events(key(KeyCode::Enter)), Action::Login);
    }

    #[test]
    fn user_menu_toggles() {
        let mut header = Header::new().user(Some(user())).logout_enabled(true);
        assert_eq!(header.display_name(), "John Doe");
        header.handle_key_events(key(KeyCode::Right));
        assert_eq!(header.handle_key_events(key(KeyCode::Enter)), Action::UserMenuToggled(true));
        assert_eq!(header.handle_key_events(key(KeyCode::Enter)), Action::UserMenuToggled(false));
        header.handle_key_events(key(KeyCode::Right));
        assert_eq!(header.handle_key_events(key(KeyCode::Enter)), Action::Logout);
    }

    #[test]
    fn nav_item_navigates() {
        let mut header = Header::new().nav_items(vec![NavItem::new("Picks", "/picks").active(true)]);
        assert_eq!(header.activate(HeaderTarget::Nav(0)), Action::Navigate("/picks".to_string()));
        assert_eq!(header.classes().to_string(), "header");
    }
}
