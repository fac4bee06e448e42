//! League summary card

use crossterm::event::{KeyCode, KeyEvent, MouseEvent};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::entities::League;
use crate::theme::{BadgeVariant, ClassList, Size, Theme};
use crate::ui::components::badge::badge_span;
use crate::ui::components::common::{bold, left_click};
use crate::ui::components::{Button, Card};
use crate::ui::core::{Action, Component};
use crate::ui::layout::LayoutManager;
use crate::utils::text::format_currency;

/// What the join area offers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinState {
    Member,
    Full,
    CanJoin,
    CannotJoin,
}

#[derive(Debug, Clone)]
pub struct LeagueCard {
    pub league: League,
    pub clickable: bool,
    pub show_join_button: bool,
    pub is_member: bool,
    pub class_name: String,
    card: Card,
    join: Button,
}

impl LeagueCard {
    pub fn new(league: League) -> Self {
        let join = Button::new("Join League")
            .size(Size::Sm)
            .on_press(Action::JoinLeague(Box::new(league.clone())));
        Self {
            league,
            clickable: false,
            show_join_button: false,
            is_member: false,
            class_name: String::new(),
            card: Card::new(),
            join,
        }
    }

    #[must_use]
    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    #[must_use]
    pub fn show_join_button(mut self, show: bool) -> Self {
        self.show_join_button = show;
        self
    }

    #[must_use]
    pub fn is_member(mut self, is_member: bool) -> Self {
        self.is_member = is_member;
        self
    }

    pub fn join_state(&self) -> JoinState {
        if self.is_member {
            JoinState::Member
        } else if self.league.is_full() {
            JoinState::Full
        } else if self.league.is_active {
            JoinState::CanJoin
        } else {
            JoinState::CannotJoin
        }
    }

    pub fn classes(&self) -> ClassList {
        ClassList::new("league-card")
            .modifier_if(self.clickable, "clickable")
            .extra(&self.class_name)
    }

    fn select(&self) -> Action {
        if self.clickable {
            Action::LeagueSelected(Box::new(self.league.clone()))
        } else {
            Action::None
        }
    }

    fn join_available(&self) -> bool {
        self.show_join_button && self.join_state() == JoinState::CanJoin
    }

    pub fn lines(&self, theme: &Theme) -> Vec<Line<'static>> {
        let styles = theme.styles();
        let league = &self.league;

        let mut title = vec![Span::styled(league.name.clone(), bold(styles.title())), Span::raw(" ")];
        let (visibility, variant) = if league.is_public {
            ("Public", BadgeVariant::Success)
        } else {
            ("Private", BadgeVariant::Warning)
        };
        title.push(badge_span(visibility, variant, theme));
        title.push(Span::raw(" "));
        title.push(badge_span(league.scoring_type.label(), BadgeVariant::Info, theme));
        if !league.is_active {
            title.push(Span::raw(" "));
            title.push(badge_span("Inactive", BadgeVariant::Error, theme));
        }
        if league.entry_fee > 0.0 {
            title.push(Span::styled(format!("  {}", format_currency(league.entry_fee)), styles.accent()));
        }

        let mut lines = vec![Line::from(title)];
        if let Some(description) = &league.description {
            lines.push(Line::from(Span::styled(description.clone(), styles.muted())));
        }

        let mut details = vec![
            Span::styled("Season: ", styles.label()),
            Span::styled(league.season_year.to_string(), styles.text()),
            Span::styled("  Participants: ", styles.label()),
            Span::styled(
                format!("{} / {}", league.current_participants.unwrap_or(0), league.max_participants),
                styles.text(),
            ),
        ];
        if let Some(commissioner) = &league.commissioner {
            details.push(Span::styled("  Commissioner: ", styles.label()));
            details.push(Span::styled(format!("@{}", commissioner.username), styles.text()));
        }
        lines.push(Line::from(details));
        lines
    }

    /// Rows including the border and the join area
    pub fn height(&self, theme: &Theme) -> u16 {
        let body = self.lines(theme).len() + usize::from(self.show_join_button);
        u16::try_from(body).unwrap_or(u16::MAX) + 2
    }

    fn join_badge(&self, theme: &Theme) -> Option<Span<'static>> {
        match self.join_state() {
            JoinState::Member => Some(badge_span("Member", BadgeVariant::Success, theme)),
            JoinState::Full => Some(badge_span("Full", BadgeVariant::Warning, theme)),
            JoinState::CannotJoin => Some(badge_span("Cannot Join", BadgeVariant::Error, theme)),
            JoinState::CanJoin => None,
        }
    }
}

impl Component for LeagueCard {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Tab if self.join_available() => {
                let focused = !self.join.is_focused();
                self.join.set_focused(focused);
                self.card.set_focused(!focused && self.clickable);
                Action::None
            }
            KeyCode::Enter | KeyCode::Char(' ') if self.join.is_focused() && self.join_available() => {
                self.join.press()
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.select(),
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        let Some((column, row)) = left_click(&mouse) else {
            return Action::None;
        };
        if self.join_available() && LayoutManager::hit(self.join.area(), column, row) {
            self.join.press()
        } else if LayoutManager::hit(self.card.area(), column, row) {
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
        let rows = LayoutManager::stack(body, &[text_height, u16::from(self.show_join_button)]);
        f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }), rows[0]);

        if !self.show_join_button {
            return;
        }
        match self.join_badge(theme) {
            Some(badge) => f.render_widget(Paragraph::new(badge), rows[1]),
            None => self.join.render(f, rows[1], theme),
        }
    }

    fn on_focus(&mut self) -> Action {
        self.card.set_focused(self.clickable);
        Action::None
    }

    fn on_blur(&mut self) -> Action {
        self.card.set_focused(false);
        self.join.set_focused(false);
        Action::None
    }
}
