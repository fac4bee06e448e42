//! League standings table
//!
//! Rows arrive ranked and pre-computed; the table only formats them. Each
//! participant takes two terminal rows: name, record and totals on the first,
//! handle and pick count on the second.

use crossterm::event::{KeyCode, KeyEvent, MouseEvent};
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::config::StandingsConfig;
use crate::constants::{STANDINGS_EMPTY, STANDINGS_LOADING, STANDINGS_TITLE};
use crate::entities::StandingsEntry;
use crate::theme::{BadgeVariant, ClassList, ExtendedSize, Theme};
use crate::ui::components::badge::badge_span;
use crate::ui::components::common::{bold, create_block, left_click};
use crate::ui::components::{Avatar, ListScrollbar, Loading};
use crate::ui::core::{Action, Component};
use crate::ui::layout::LayoutManager;
use crate::utils::text::{format_percentage, group_thousands, ordinal, pluralize};

const ROW_HEIGHT: u16 = 2;

pub fn rank_variant(rank: u32) -> BadgeVariant {
    match rank {
        1 => BadgeVariant::Success,
        2 | 3 => BadgeVariant::Warning,
        _ => BadgeVariant::Default,
    }
}

/// "7-3 (10 total)"
pub fn record(entry: &StandingsEntry) -> String {
    format!("{}-{} ({} total)", entry.correct_picks, entry.losses(), entry.total_picks)
}

#[derive(Debug, Clone)]
pub struct StandingsTable {
    pub standings: Vec<StandingsEntry>,
    pub show_avatars: bool,
    pub highlight_current_user: bool,
    pub loading: bool,
    /// Rows emit `StandingsRowSelected` when activated
    pub row_click: bool,
    pub class_name: String,
    loader: Loading,
    state: TableState,
    body_area: Rect,
    focused: bool,
}

impl StandingsTable {
    pub fn new(standings: Vec<StandingsEntry>) -> Self {
        Self {
            standings,
            show_avatars: true,
            highlight_current_user: true,
            loading: false,
            row_click: false,
            class_name: String::new(),
            loader: Loading::new().text(STANDINGS_LOADING),
            state: TableState::default(),
            body_area: Rect::default(),
            focused: false,
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: &StandingsConfig) -> Self {
        self.show_avatars = config.show_avatars;
        self.highlight_current_user = config.highlight_current_user;
        self
    }

    #[must_use]
    pub fn show_avatars(mut self, show: bool) -> Self {
        self.show_avatars = show;
        self
    }

    #[must_use]
    pub fn highlight_current_user(mut self, highlight: bool) -> Self {
        self.highlight_current_user = highlight;
        self
    }

    #[must_use]
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    #[must_use]
    pub fn row_click(mut self, enabled: bool) -> Self {
        self.row_click = enabled;
        self
    }

    pub fn set_standings(&mut self, standings: Vec<StandingsEntry>) {
        self.standings = standings;
        if self.selected().is_none() {
            self.state.select(None);
        }
    }

    pub fn selected(&self) -> Option<&StandingsEntry> {
        self.state.selected().and_then(|index| self.standings.get(index))
    }

    /// Advance the loading animation
    pub fn tick(&mut self) {
        self.loader.tick();
    }

    pub fn classes(&self) -> ClassList {
        ClassList::new("standings-table")
            .modifier_if(self.loading, "loading")
            .modifier_if(!self.loading && self.standings.is_empty(), "empty")
            .extra(&self.class_name)
    }

    pub fn row_classes(&self, entry: &StandingsEntry) -> ClassList {
        ClassList::new("standings-table__tr")
            .modifier_if(entry.is_current_user && self.highlight_current_user, "current-user")
            .modifier_if(self.row_click, "clickable")
    }

    /// "12 participants"
    pub fn subtitle(&self) -> String {
        pluralize(self.standings.len(), "participant", "participants")
    }

    fn move_selection(&mut self, delta: isize) {
        if self.standings.is_empty() {
            return;
        }
        let last = self.standings.len() - 1;
        let next = match self.state.selected() {
            None => 0,
            Some(index) => index.saturating_add_signed(delta).min(last),
        };
        self.state.select(Some(next));
    }

    fn activate(&self) -> Action {
        match self.selected() {
            Some(entry) if self.row_click => Action::StandingsRowSelected(Box::new(entry.clone())),
            _ => Action::None,
        }
    }

    fn user_cell(&self, entry: &StandingsEntry, theme: &Theme) -> Cell<'static> {
        let styles = theme.styles();
        let mut first = Vec::new();
        if self.show_avatars {
            let avatar = Avatar::new()
                .src(entry.avatar_url.clone())
                .fallback(entry.avatar_name())
                .size(ExtendedSize::Sm);
            first.push(avatar.span(theme));
            first.push(Span::raw(" "));
        }
        first.push(Span::styled(entry.display_name(), bold(styles.text())));
        let mut lines = vec![Line::from(first)];
        if entry.full_name().is_some() {
            let indent = if self.show_avatars { "     " } else { "" };
            lines.push(Line::from(Span::styled(
                format!("{indent}@{}", entry.username),
                styles.muted(),
            )));
        }
        Cell::from(lines)
    }

    fn row(&self, entry: &StandingsEntry, theme: &Theme) -> Row<'static> {
        let styles = theme.styles();
        let record_lines = vec![
            Line::from(Span::styled(
                format!("{}-{}", entry.correct_picks, entry.losses()),
                styles.text(),
            )),
            Line::from(Span::styled(format!("({} total)", entry.total_picks), styles.muted())),
        ];
        let row = Row::new(vec![
            Cell::from(badge_span(&ordinal(entry.rank), rank_variant(entry.rank), theme)),
            self.user_cell(entry, theme),
            Cell::from(record_lines),
            Cell::from(Line::from(format_percentage(entry.win_percentage)).alignment(Alignment::Right)),
            Cell::from(
                Line::from(Span::styled(group_thousands(entry.confidence_points), bold(styles.text())))
                    .alignment(Alignment::Right),
            ),
        ])
        .height(ROW_HEIGHT);
        if entry.is_current_user && self.highlight_current_user {
            row.style(styles.highlight())
        } else {
            row
        }
    }

    fn render_message(&mut self, f: &mut Frame, rect: Rect, theme: &Theme) {
        let block = create_block(Some(STANDINGS_TITLE), theme, self.focused);
        let inner = block.inner(rect);
        f.render_widget(block, rect);
        let line_area = Rect::new(inner.x, inner.y + inner.height.saturating_sub(1) / 2, inner.width, inner.height.min(1));
        if self.loading {
            self.loader.render(f, inner, theme);
        } else {
            let text = Span::styled(STANDINGS_EMPTY, theme.styles().muted());
            f.render_widget(Paragraph::new(text).alignment(Alignment::Center), line_area);
        }
    }
}

impl Component for StandingsTable {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_selection(1);
                Action::None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_selection(-1);
                Action::None
            }
            KeyCode::Home => {
                self.state.select((!self.standings.is_empty()).then_some(0));
                Action::None
            }
            KeyCode::End => {
                self.state.select(self.standings.len().checked_sub(1));
                Action::None
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(),
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        let Some((column, row)) = left_click(&mouse) else {
            return Action::None;
        };
        if self.loading || !LayoutManager::hit(self.body_area, column, row) {
            return Action::None;
        }
        let index = usize::from((row - self.body_area.y) / ROW_HEIGHT) + self.state.offset();
        if index >= self.standings.len() {
            return Action::None;
        }
        self.state.select(Some(index));
        self.activate()
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, theme: &Theme) {
        if self.loading || self.standings.is_empty() {
            self.body_area = Rect::default();
            self.render_message(f, rect, theme);
            return;
        }
        let styles = theme.styles();
        let block = create_block(Some(STANDINGS_TITLE), theme, self.focused)
            .title_top(Line::from(Span::styled(format!(" {} ", self.subtitle()), styles.muted())).right_aligned());
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let total_rows = self.standings.len() * usize::from(ROW_HEIGHT);
        let (content, bar) = ListScrollbar::split(inner, total_rows + 1);
        let header = Row::new(["Rank", "User", "Record", "Win %", "Points"]).style(bold(styles.label()));
        let rows: Vec<Row> = self.standings.iter().map(|entry| self.row(entry, theme)).collect();
        let table = Table::new(
            rows,
            [
                Constraint::Length(6),
                Constraint::Min(16),
                Constraint::Length(12),
                Constraint::Length(7),
                Constraint::Length(8),
            ],
        )
        .header(header)
        .column_spacing(1)
        .row_highlight_style(styles.selection());
        f.render_stateful_widget(table, content, &mut self.state);
        self.body_area = Rect::new(content.x, content.y + 1, content.width, content.height.saturating_sub(1));

        let position = self.state.offset() * usize::from(ROW_HEIGHT);
        let mut scrollbar = ListScrollbar::new();
        scrollbar.update(total_rows, position, usize::from(self.body_area.height));
        scrollbar.render(f, bar, theme);
    }

    fn on_focus(&mut self) -> Action {
        self.focused = true;
        if self.state.selected().is_none() && !self.standings.is_empty() {
            self.state.select(Some(0));
        }
        Action::None
    }

    fn on_blur(&mut self) -> Action {
        self.focused = false;
        Action::None
    }
}
