//! Two team tiles for picking a winner

use crossterm::event::{KeyCode, KeyEvent, MouseEvent};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::entities::{Game, Team, UserPick};
use crate::theme::{BadgeVariant, ClassList, Theme};
use crate::ui::components::badge::badge_span;
use crate::ui::components::common::{bold, left_click};
use crate::ui::core::{Action, Component};
use crate::ui::layout::LayoutManager;
use crate::utils::datetime::format_kickoff;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Away,
    Home,
}

#[derive(Debug, Clone)]
pub struct GamePick {
    pub game: Game,
    pub user_pick: Option<UserPick>,
    pub locked: bool,
    pub show_results: bool,
    pub class_name: String,
    focus: Option<Side>,
    away_area: Rect,
    home_area: Rect,
}

impl GamePick {
    pub fn new(game: Game) -> Self {
        Self {
            game,
            user_pick: None,
            locked: false,
            show_results: false,
            class_name: String::new(),
            focus: None,
            away_area: Rect::default(),
            home_area: Rect::default(),
        }
    }

    #[must_use]
    pub fn user_pick(mut self, pick: Option<UserPick>) -> Self {
        self.user_pick = pick;
        self
    }

    #[must_use]
    pub fn locked(mut self, locked: bool) -> Self {
        self.locked = locked;
        self
    }

    #[must_use]
    pub fn show_results(mut self, show_results: bool) -> Self {
        self.show_results = show_results;
        self
    }

    pub fn can_pick(&self) -> bool {
        !self.locked && !self.show_results
    }

    pub fn focused(&self) -> Option<Side> {
        self.focus
    }

    pub fn team_id(&self, side: Side) -> u32 {
        match side {
            Side::Away => self.game.away_team_id,
            Side::Home => self.game.home_team_id,
        }
    }

    fn team(&self, side: Side) -> Option<&Team> {
        match side {
            Side::Away => self.game.away_team.as_ref(),
            Side::Home => self.game.home_team.as_ref(),
        }
    }

    pub fn is_picked(&self, side: Side) -> bool {
        self.user_pick
            .as_ref()
            .is_some_and(|pick| pick.picked_team_id == self.team_id(side))
    }

    pub fn is_winner(&self, side: Side) -> bool {
        self.show_results && self.game.is_winner(self.team_id(side))
    }

    pub fn team_classes(&self, side: Side) -> ClassList {
        ClassList::new("game-pick__team")
            .modifier_if(self.can_pick(), "clickable")
            .modifier_if(self.is_picked(side), "picked")
            .modifier_if(self.is_winner(side), "winner")
            .modifier_if(self.show_results && !self.is_winner(side), "loser")
    }

    pub fn pick(&self, side: Side) -> Action {
        if !self.can_pick() {
            return Action::None;
        }
        Action::PickTeam {
            game_id: self.game.id,
            team_id: self.team_id(side),
        }
    }

    /// Locked or result badge above the tiles
    fn header(&self, theme: &Theme) -> Option<Line<'static>> {
        let icons = theme.icons.icons().pick;
        if self.show_results {
            let pick = self.user_pick.as_ref()?;
            let badge = if pick.is_correct == Some(true) {
                badge_span(&format!("{} Correct", icons.correct), BadgeVariant::Success, theme)
            } else {
                badge_span(&format!("{} Incorrect", icons.incorrect), BadgeVariant::Error, theme)
            };
            Some(Line::from(badge))
        } else if self.locked {
            Some(Line::from(badge_span(&format!("{} Locked", icons.locked), BadgeVariant::Warning, theme)))
        } else {
            None
        }
    }

    fn render_tile(&self, f: &mut Frame, area: Rect, side: Side, theme: &Theme) {
        let styles = theme.styles();
        let icons = theme.icons.icons().pick;
        let focused = self.focus == Some(side) && self.can_pick();
        let border = if self.is_picked(side) {
            styles.highlight()
        } else {
            styles.border(focused)
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(styles.border_type())
            .border_style(border);

        let (city, name) = self
            .team(side)
            .map_or((String::new(), String::new()), |team| (team.city.clone(), team.name.clone()));
        let name_style = if self.is_winner(side) {
            bold(styles.badge(BadgeVariant::Success))
        } else if self.show_results {
            styles.muted()
        } else {
            bold(styles.text())
        };
        let mut first = vec![Span::styled(city, name_style)];
        if self.is_winner(side) {
            first.push(Span::styled(format!(" {}", icons.winner), styles.accent()));
        }
        let mut second = vec![Span::styled(name, styles.muted())];
        if self.show_results {
            if let Some(score) = self.game.score(self.team_id(side)) {
                second.push(Span::styled(format!("  {score}"), bold(styles.text())));
            }
        } else if self.is_picked(side) {
            second.push(Span::styled(format!("  {}", icons.picked), styles.accent()));
        }
        let paragraph = Paragraph::new(vec![Line::from(first), Line::from(second)])
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(paragraph, area);
    }
}

impl Component for GamePick {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Left => {
                self.focus = Some(Side::Away);
                Action::None
            }
            KeyCode::Right => {
                self.focus = Some(Side::Home);
                Action::None
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.focus.map_or(Action::None, |side| self.pick(side)),
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        let Some((column, row)) = left_click(&mouse) else {
            return Action::None;
        };
        let side = if LayoutManager::hit(self.away_area, column, row) {
            Side::Away
        } else if LayoutManager::hit(self.home_area, column, row) {
            Side::Home
        } else {
            return Action::None;
        };
        self.focus = Some(side);
        self.pick(side)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, theme: &Theme) {
        let styles = theme.styles();
        let header = self.header(theme);
        let rows = LayoutManager::stack(rect, &[u16::from(header.is_some()), 4, 1]);
        if let Some(header) = header {
            f.render_widget(Paragraph::new(header), rows[0]);
        }

        let tiles = rows[1];
        let tile_width = tiles.width.saturating_sub(3) / 2;
        self.away_area = Rect::new(tiles.x, tiles.y, tile_width, tiles.height);
        self.home_area = Rect::new(tiles.x + tiles.width - tile_width, tiles.y, tile_width, tiles.height);
        self.render_tile(f, self.away_area, Side::Away, theme);
        self.render_tile(f, self.home_area, Side::Home, theme);
        let vs = Rect::new(tiles.x + tile_width, tiles.y + tiles.height / 2, tiles.width - 2 * tile_width, 1);
        f.render_widget(
            Paragraph::new(Span::styled("@", styles.muted())).alignment(Alignment::Center),
            vs,
        );

        let kickoff = Span::styled(format_kickoff(&self.game.kickoff), styles.muted());
        f.render_widget(Paragraph::new(kickoff).alignment(Alignment::Center), rows[2]);
    }

    fn on_focus(&mut self) -> Action {
        if self.focus.is_none() {
            self.focus = Some(Side::Away);
        }
        Action::None
    }

    fn on_blur(&mut self) -> Action {
        self.focus = None;
        Action::None
    }
}
