//! Showcase state: the stories, the active theme and the event panel

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use log::debug;
use ratatui::{
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::{List, ListItem, Paragraph},
    Frame,
};

use crate::config::Config;
use crate::logger::ActionLog;
use crate::theme::Theme;
use crate::ui::components::common::{create_block, create_instructions_paragraph, InstructionShortcut};
use crate::ui::core::{Action, EventType};

use super::fixtures::Fixtures;
use super::stories::{self, StoryComponent};

const EVENT_PANEL_WIDTH: u16 = 44;

const SHORTCUTS: [InstructionShortcut; 5] = [
    ("^N/^P", " Story"),
    ("F4", " Focus"),
    ("F2", " Skin"),
    ("F3", " Icons"),
    ("q", " Quit"),
];

pub struct ShowcaseApp {
    stories: Vec<Box<dyn StoryComponent>>,
    current: usize,
    pub theme: Theme,
    pub mouse_enabled: bool,
    log: ActionLog,
    should_quit: bool,
}

impl ShowcaseApp {
    pub fn new(config: &Config, fixtures: &Fixtures) -> Self {
        let mut app = Self {
            stories: stories::all(fixtures, config),
            current: 0,
            theme: config.theme(),
            mouse_enabled: config.ui.mouse_enabled,
            log: ActionLog::new(),
            should_quit: false,
        };
        let entered = app.current_story_mut().map_or(Action::None, |story| story.enter());
        app.record(entered);
        app
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn story_titles(&self) -> Vec<&'static str> {
        self.stories.iter().map(|story| story.title()).collect()
    }

    pub fn action_log(&self) -> &ActionLog {
        &self.log
    }

    fn current_story_mut(&mut self) -> Option<&mut Box<dyn StoryComponent>> {
        self.stories.get_mut(self.current)
    }

    fn is_editing(&self) -> bool {
        self.stories.get(self.current).is_some_and(|story| story.is_editing())
    }

    /// Move to the next or previous story, wrapping around
    pub fn switch_story(&mut self, forward: bool) {
        if self.stories.is_empty() {
            return;
        }
        let left = self.current_story_mut().map_or(Action::None, |story| story.leave());
        self.record(left);
        let len = self.stories.len();
        self.current = if forward {
            (self.current + 1) % len
        } else {
            (self.current + len - 1) % len
        };
        let entered = self.current_story_mut().map_or(Action::None, |story| story.enter());
        self.record(entered);
        debug!("showcase: story {}", self.current);
    }

    /// Append every notification inside `action` to the event panel
    fn record(&mut self, action: Action) {
        for action in action.into_vec() {
            if action == Action::Quit {
                self.should_quit = true;
            }
            self.log.log(describe(&action));
        }
    }

    pub fn handle_event(&mut self, event: EventType) {
        match event {
            EventType::Key(key) => self.handle_key(key),
            EventType::Mouse(mouse) if self.mouse_enabled => self.handle_mouse(mouse),
            _ => {}
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('n') if ctrl => self.switch_story(true),
            KeyCode::Char('p') if ctrl => self.switch_story(false),
            KeyCode::F(2) => {
                self.theme.cycle_skin();
                debug!("showcase: skin {:?}", self.theme.skin());
            }
            KeyCode::F(3) => {
                self.theme.icons.cycle_icon_theme();
                debug!("showcase: icons {:?}", self.theme.icons.theme());
            }
            KeyCode::Char('q') if !self.is_editing() => self.should_quit = true,
            _ => {
                let action = self
                    .current_story_mut()
                    .map_or(Action::None, |story| story.handle_key_events(key));
                self.record(action);
            }
        }
    }

    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        let action = self
            .current_story_mut()
            .map_or(Action::None, |story| story.handle_mouse_events(mouse));
        self.record(action);
    }

    fn render_tabs(&self, f: &mut Frame, area: Rect) {
        let styles = self.theme.styles();
        let mut spans = Vec::new();
        for (index, title) in self.story_titles().into_iter().enumerate() {
            let style = if index == self.current {
                styles.link(true)
            } else {
                styles.link(false)
            };
            spans.push(Span::styled(format!(" {title} "), style));
            spans.push(Span::styled("|", styles.muted()));
        }
        spans.pop();
        f.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_events(&self, f: &mut Frame, area: Rect) {
        let styles = self.theme.styles();
        let items: Vec<ListItem> = self
            .log
            .get_logs()
            .into_iter()
            .take(usize::from(area.height))
            .map(|entry| ListItem::new(Span::styled(entry, styles.text())))
            .collect();
        let list = List::new(items).block(create_block(Some("Events"), &self.theme, false));
        f.render_widget(list, area);
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect) {
        let rows = Layout::vertical([Constraint::Length(1), Constraint::Min(5), Constraint::Length(1)]).split(area);
        self.render_tabs(f, rows[0]);

        let columns = Layout::horizontal([Constraint::Min(30), Constraint::Length(EVENT_PANEL_WIDTH)]).split(rows[1]);
        self.render_events(f, columns[1]);

        let theme = self.theme.clone();
        if let Some(story) = self.current_story_mut() {
            story.render(f, columns[0], &theme);
        }

        f.render_widget(create_instructions_paragraph(&SHORTCUTS, &self.theme), rows[2]);
    }
}

/// One line per notification in the event panel
pub fn describe(action: &Action) -> String {
    match action {
        Action::Pressed(label) => format!("pressed {label}"),
        Action::InputChanged { name, value } => format!("{name} = {value:?}"),
        Action::InputFocused(name) => format!("focus {name}"),
        Action::InputBlurred(name) => format!("blur {name}"),
        Action::SelectChanged { name, value } => format!("{name} -> {value}"),
        Action::Navigate(href) => format!("navigate {href}"),
        Action::UserMenuToggled(open) => format!("user menu open={open}"),
        Action::UserSelected(user) => format!("user {}", user.username),
        Action::LeagueSelected(league) => format!("league {}", league.name),
        Action::JoinLeague(league) => format!("join {}", league.name),
        Action::GameSelected(game) => format!("game {}", game.matchup()),
        Action::PickGame(game) => format!("make pick {}", game.matchup()),
        Action::PickTeam { game_id, team_id } => format!("pick team {team_id} in game {game_id}"),
        Action::SubmitPick(data) => format!(
            "submit team {} {} conf={:?}",
            data.team_id,
            data.pick_type.key(),
            data.confidence_points
        ),
        Action::StandingsRowSelected(entry) => format!("row #{} {}", entry.rank, entry.username),
        Action::DateRange(event) => format!("date range {event:?}"),
        other => format!("{other:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> ShowcaseApp {
        let fixtures = Fixtures::bundled().unwrap();
        ShowcaseApp::new(&Config::default(), &fixtures)
    }

    fn press(app: &mut ShowcaseApp, code: KeyCode, modifiers: KeyModifiers) {
        app.handle_key(KeyEvent::new(code, modifiers));
    }

    #[test]
    fn story_switching_wraps() {
        let mut app = app();
        let count = app.story_titles().len();
        press(&mut app, KeyCode::Char('p'), KeyModifiers::CONTROL);
        assert_eq!(app.current(), count - 1);
        press(&mut app, KeyCode::Char('n'), KeyModifiers::CONTROL);
        assert_eq!(app.current(), 0);
    }

    #[test]
    fn focused_button_press_is_logged() {
        let mut app = app();
        let before = app.action_log().len();
        press(&mut app, KeyCode::Enter, KeyModifiers::NONE);
        assert_eq!(app.action_log().len(), before + 1);
        assert!(app.action_log().get_logs()[0].ends_with("pressed Primary"));
    }

    #[test]
    fn q_types_into_text_fields() {
        let mut app = app();
        press(&mut app, KeyCode::Char('n'), KeyModifiers::CONTROL);
        press(&mut app, KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(!app.should_quit());
        assert!(app.action_log().get_logs()[0].ends_with("email = \"q\""));

        press(&mut app, KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(app.should_quit());
    }

    #[test]
    fn q_quits_outside_text_fields() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'), KeyModifiers::NONE);
        assert!(app.should_quit());
    }

    #[test]
    fn describe_pick_actions() {
        assert_eq!(
            describe(&Action::PickTeam { game_id: 7, team_id: 3 }),
            "pick team 3 in game 7"
        );
        assert_eq!(describe(&Action::Logout), "Logout");
    }
}
