//! Matchup card with odds and the user's pick

use crossterm::event::{KeyCode, KeyEvent, MouseEvent};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::entities::{Game, GameStatus, Team, UserPick};
use crate::theme::{BadgeVariant, ClassList, Size, Theme};
use crate::ui::components::badge::badge_span;
use crate::ui::components::common::{bold, left_click};
use crate::ui::components::{Button, Card};
use crate::ui::core::{Action, Component};
use crate::ui::layout::LayoutManager;
use crate::utils::datetime::format_kickoff;
use crate::utils::text::format_spread;

/// What the pick area shows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickArea {
    Picked(UserPick),
    MakePick,
    Started,
    Empty,
}

pub fn status_variant(status: GameStatus) -> BadgeVariant {
    match status {
        GameStatus::Scheduled => BadgeVariant::Info,
        GameStatus::InProgress => BadgeVariant::Warning,
        GameStatus::Final => BadgeVariant::Success,
    }
}

#[derive(Debug, Clone)]
pub struct GameCard {
    pub game: Game,
    pub show_pick_actions: bool,
    /// The user picked this game, even if the pick itself was not supplied
    pub has_pick: bool,
    pub user_pick: Option<UserPick>,
    pub clickable: bool,
    pub class_name: String,
    card: Card,
    make_pick: Button,
}

impl GameCard {
    pub fn new(game: Game) -> Self {
        let make_pick = Button::new("Make Pick")
            .size(Size::Sm)
            .on_press(Action::PickGame(Box::new(game.clone())));
        Self {
            game,
            show_pick_actions: false,
            has_pick: false,
            user_pick: None,
            clickable: false,
            class_name: String::new(),
            card: Card::new(),
            make_pick,
        }
    }

    #[must_use]
    pub fn show_pick_actions(mut self, show: bool) -> Self {
        self.show_pick_actions = show;
        self
    }

    #[must_use]
    pub fn user_pick(mut self, pick: Option<UserPick>) -> Self {
        self.has_pick = pick.is_some();
        self.user_pick = pick;
        self
    }

    #[must_use]
    pub fn clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    pub fn classes(&self) -> ClassList {
        ClassList::new("game-card")
            .modifier_if(self.clickable, "clickable")
            .extra(&self.class_name)
    }

    pub fn pick_area(&self) -> PickArea {
        let started = self.game.status.has_started();
        match &self.user_pick {
            Some(pick) if self.has_pick => PickArea::Picked(pick.clone()),
            _ if !started && !self.has_pick => PickArea::MakePick,
            _ if started => PickArea::Started,
            _ => PickArea::Empty,
        }
    }

    /// "Spread: +3.5  O/U: 47.5"; zero or missing odds are left out
    pub fn odds(&self) -> Option<String> {
        let spread = self.game.spread.filter(|s| *s != 0.0).map(|s| format!("Spread: {}", format_spread(s)));
        let total = self.game.over_under.filter(|t| *t != 0.0).map(|t| format!("O/U: {t}"));
        match (spread, total) {
            (None, None) => None,
            (spread, total) => Some(spread.into_iter().chain(total).collect::<Vec<_>>().join("  ")),
        }
    }

    fn team_line(&self, team: Option<&Team>, score: Option<u32>, theme: &Theme) -> Line<'static> {
        let styles = theme.styles();
        let (name, abbreviation) = team.map_or((String::new(), String::new()), |team| {
            (team.full_name(), team.abbreviation.clone())
        });
        let score = score.map_or_else(|| "-".to_string(), |score| score.to_string());
        Line::from(vec![
            Span::styled(format!("{name:<24}"), styles.text()),
            Span::styled(format!("{abbreviation:<5}"), styles.muted()),
            Span::styled(format!("{score:>3}"), bold(styles.text())),
        ])
    }

    pub fn lines(&self, theme: &Theme) -> Vec<Line<'static>> {
        let styles = theme.styles();
        let game = &self.game;
        let mut lines = vec![
            Line::from(vec![
                Span::styled(format!("Week {} ", game.week), styles.label()),
                badge_span(game.status.label(), status_variant(game.status), theme),
            ]),
            self.team_line(game.away_team.as_ref(), game.away_score, theme),
            Line::from(Span::styled("@", styles.muted())),
            self.team_line(game.home_team.as_ref(), game.home_score, theme),
        ];
        let mut details = vec![Span::styled(format_kickoff(&game.kickoff), styles.muted())];
        if let Some(odds) = self.odds() {
            details.push(Span::styled(format!("  {odds}"), styles.text()));
        }
        lines.push(Line::from(details));
        lines
    }

    fn picked_line(&self, pick: &UserPick, theme: &Theme) -> Line<'static> {
        let styles = theme.styles();
        let team = if pick.picked_team_id == self.game.home_team_id {
            self.game.home_team.as_ref()
        } else {
            self.game.away_team.as_ref()
        };
        let abbreviation = team.map(|t| t.abbreviation.clone()).unwrap_or_default();
        let mut detail = pick.pick_type.label().to_string();
        if let Some(points) = pick.confidence_points {
            detail.push_str(&format!(" ({points} pts)"));
        }
        Line::from(vec![
            badge_span(&format!("Picked: {abbreviation}"), BadgeVariant::Success, theme),
            Span::styled(format!(" {detail}"), styles.muted()),
        ])
    }

    pub fn height(&self, theme: &Theme) -> u16 {
        let body = self.lines(theme).len() + usize::from(self.show_pick_actions);
        u16::try_from(body).unwrap_or(u16::MAX) + 2
    }

    fn select(&self) -> Action {
        if self.clickable {
            Action::GameSelected(Box::new(self.game.clone()))
        } else {
            Action::None
        }
    }

    fn can_pick(&self) -> bool {
        self.show_pick_actions && self.pick_area() == PickArea::MakePick
    }
}

impl Component for GameCard {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('p') if self.can_pick() => self.make_pick.press(),
            KeyCode::Enter | KeyCode::Char(' ') => self.select(),
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        let Some((column, row)) = left_click(&mouse) else {
            return Action::None;
        };
        if self.can_pick() && LayoutManager::hit(self.make_pick.area(), column, row) {
            self.make_pick.press()
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
        let rows = LayoutManager::stack(body, &[text_height, u16::from(self.show_pick_actions)]);
        f.render_widget(Paragraph::new(lines), rows[0]);

        if !self.show_pick_actions {
            return;
        }
        match self.pick_area() {
            PickArea::Picked(pick) => f.render_widget(Paragraph::new(self.picked_line(&pick, theme)), rows[1]),
            PickArea::MakePick => self.make_pick.render(f, rows[1], theme),
            PickArea::Started => {
                f.render_widget(Paragraph::new(badge_span("Game Started", BadgeVariant::Warning, theme)), rows[1]);
            }
            PickArea::Empty => {}
        }
    }

    fn on_focus(&mut self) -> Action {
        self.card.set_focused(self.clickable);
        self.make_pick.set_focused(self.can_pick());
        Action::None
    }

    fn on_blur(&mut self) -> Action {
        self.card.set_focused(false);
        self.make_pick.set_focused(false);
        Action::None
    }
}
