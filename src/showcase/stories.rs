//! One story per component family
//!
//! A story lays out a handful of components, routes input to the focused one
//! and hands every emitted action back to the showcase.

use crossterm::event::{KeyCode, KeyEvent, MouseEvent};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::config::Config;
use crate::entities::PickType;
use crate::theme::{AlertVariant, BadgeVariant, ButtonVariant, ExtendedSize, LoadingColor, Size, Theme};
use crate::ui::components::common::{create_block, left_click};
use crate::ui::components::{
    Alert, Avatar, AvatarShape, Badge, Button, Card, CardVariant, Container, DateRangePicker, Header, Input,
    InputKind, Loading, LoadingVariant, MaxWidth, Modal, ModalSize, NavItem, Padding, Select, SelectOption, Textarea,
    UserCard,
};
use crate::ui::core::{Action, Component};
use crate::ui::layout::LayoutManager;
use crate::ui::pickem::{GameCard, GamePick, LeagueCard, PickForm, StandingsTable};
use crate::utils::datetime::today;

use super::fixtures::Fixtures;

type DisplayFn = Box<dyn FnMut(&mut Frame, Rect, &Theme)>;

enum Slot {
    Interactive {
        component: Box<dyn Component>,
        text_entry: bool,
    },
    Display(DisplayFn),
}

struct Child {
    height: u16,
    slot: Slot,
}

/// Components stacked top to bottom, `F4` moving focus between the interactive ones
pub struct Story {
    pub title: &'static str,
    children: Vec<Child>,
    focus: Option<usize>,
}

impl Story {
    pub fn new(title: &'static str) -> Self {
        Self {
            title,
            children: Vec::new(),
            focus: None,
        }
    }

    #[must_use]
    pub fn with(mut self, height: u16, component: impl Component + 'static) -> Self {
        self.children.push(Child {
            height,
            slot: Slot::Interactive {
                component: Box::new(component),
                text_entry: false,
            },
        });
        self
    }

    /// Like [`Story::with`] for components that take typed text
    #[must_use]
    pub fn with_text(mut self, height: u16, component: impl Component + 'static) -> Self {
        self.children.push(Child {
            height,
            slot: Slot::Interactive {
                component: Box::new(component),
                text_entry: true,
            },
        });
        self
    }

    #[must_use]
    pub fn display(mut self, height: u16, render: impl FnMut(&mut Frame, Rect, &Theme) + 'static) -> Self {
        self.children.push(Child {
            height,
            slot: Slot::Display(Box::new(render)),
        });
        self
    }

    fn interactive(&self) -> Vec<usize> {
        self.children
            .iter()
            .enumerate()
            .filter(|(_, child)| matches!(child.slot, Slot::Interactive { .. }))
            .map(|(index, _)| index)
            .collect()
    }

    fn component(&mut self, index: usize) -> Option<&mut Box<dyn Component>> {
        match self.children.get_mut(index).map(|child| &mut child.slot) {
            Some(Slot::Interactive { component, .. }) => Some(component),
            _ => None,
        }
    }

    /// Typed characters belong to the focused component
    pub fn is_editing(&self) -> bool {
        self.focus
            .and_then(|index| self.children.get(index))
            .is_some_and(|child| matches!(child.slot, Slot::Interactive { text_entry: true, .. }))
    }

    pub fn focus_index(&self) -> Option<usize> {
        self.focus
    }

    fn set_focus(&mut self, next: Option<usize>) -> Action {
        if self.focus == next {
            return Action::None;
        }
        let mut actions = Vec::new();
        if let Some(component) = self.focus.and_then(|index| self.component(index)) {
            actions.push(component.on_blur());
        }
        self.focus = next;
        if let Some(component) = next.and_then(|index| self.component(index)) {
            actions.push(component.on_focus());
        }
        Action::batch(actions)
    }

    pub fn cycle_focus(&mut self) -> Action {
        let interactive = self.interactive();
        if interactive.is_empty() {
            return Action::None;
        }
        let next = match self.focus.and_then(|focus| interactive.iter().position(|index| *index == focus)) {
            Some(position) => interactive[(position + 1) % interactive.len()],
            None => interactive[0],
        };
        self.set_focus(Some(next))
    }

    /// Focus the first interactive component when the story is shown
    pub fn enter(&mut self) -> Action {
        if self.focus.is_some() {
            return Action::None;
        }
        self.cycle_focus()
    }

    pub fn leave(&mut self) -> Action {
        self.set_focus(None)
    }
}

impl Component for Story {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if key.code == KeyCode::F(4) {
            return self.cycle_focus();
        }
        match self.focus.and_then(|index| self.component(index)) {
            Some(component) => component.handle_key_events(key),
            None => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        let clicked = left_click(&mouse).is_some();
        let mut actions = Vec::new();
        for index in self.interactive() {
            if let Some(component) = self.component(index) {
                actions.push(component.handle_mouse_events(mouse));
            }
            if clicked && !actions.last().is_some_and(Action::is_none) && self.focus != Some(index) {
                actions.push(self.set_focus(Some(index)));
            }
        }
        Action::batch(actions)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, theme: &Theme) {
        let block = create_block(Some(self.title), theme, false);
        let inner = LayoutManager::pad(block.inner(rect), 1, 0);
        f.render_widget(block, rect);

        let heights: Vec<u16> = self.children.iter().map(|child| child.height).collect();
        let rows = LayoutManager::stack(inner, &heights);
        // Render bottom-up so popovers opened by upper components stay on top
        for (child, row) in self.children.iter_mut().zip(rows).rev() {
            match &mut child.slot {
                Slot::Interactive { component, .. } => component.render(f, row, theme),
                Slot::Display(render) => render(f, row, theme),
            }
        }
    }
}

/// Overlay story: a card inside a container, with a modal opened by `m`
pub struct OverlayStory {
    container: Container,
    card: Card,
    modal: Modal,
    open_button: Button,
}

impl OverlayStory {
    pub fn new() -> Self {
        Self {
            container: Container::new(MaxWidth::Sm).padding(Padding::Sm),
            card: Card::new()
                .variant(CardVariant::Elevated)
                .padding(Padding::Lg)
                .header("Card header")
                .footer("Card footer")
                .on_click(Action::Pressed("Card".to_string())),
            modal: Modal::new("Confirm pick").size(ModalSize::Sm),
            open_button: Button::new("Open modal").on_press(Action::Pressed("Open modal".to_string())),
        }
    }

    fn open_modal(&mut self) {
        self.modal.open = true;
    }
}

impl Default for OverlayStory {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for OverlayStory {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.modal.open {
            return self.modal.handle_key_events(key);
        }
        match key.code {
            KeyCode::Char('m') => {
                self.open_modal();
                Action::Pressed("Open modal".to_string())
            }
            _ => self.card.handle_key_events(key),
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        if self.modal.open {
            return self.modal.handle_mouse_events(mouse);
        }
        let pressed = self.open_button.handle_mouse_events(mouse);
        if !pressed.is_none() {
            self.open_modal();
            return pressed;
        }
        self.card.handle_mouse_events(mouse)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, theme: &Theme) {
        let styles = theme.styles();
        let block = create_block(Some("Card, Container & Modal"), theme, false);
        let inner = block.inner(rect);
        f.render_widget(block, rect);

        let area = self.container.area(inner);
        let rows = LayoutManager::stack(area, &[7, 1, 1]);
        let body = self.card.render_frame(f, rows[0], theme);
        let text = vec![
            Line::from(Span::styled(self.card.classes().to_string(), styles.muted())),
            Line::from(Span::styled(self.container.classes().to_string(), styles.muted())),
        ];
        f.render_widget(Paragraph::new(text), body);
        self.open_button.render(f, rows[2], theme);

        if let Some(body) = self.modal.render_frame(f, f.area(), 3, theme) {
            let lines = vec![
                Line::from(Span::styled("Lock in Kansas City over Buffalo?", styles.text())),
                Line::from(""),
                Line::from(Span::styled("Esc closes, so does a click outside", styles.muted())),
            ];
            f.render_widget(Paragraph::new(lines), body);
        }
    }

    fn on_focus(&mut self) -> Action {
        self.card.set_focused(true);
        self.open_button.set_focused(true);
        Action::None
    }

    fn on_blur(&mut self) -> Action {
        self.card.set_focused(false);
        self.open_button.set_focused(false);
        Action::None
    }
}

fn primitives() -> Story {
    let variants = [
        ButtonVariant::Primary,
        ButtonVariant::Secondary,
        ButtonVariant::Outline,
        ButtonVariant::Ghost,
        ButtonVariant::Danger,
    ];
    let mut story = Story::new("Buttons, Badges & Avatars");
    for variant in variants {
        let label = format!("{variant:?}");
        story = story.with(1, Button::new(label).variant(variant).size(Size::Sm));
    }
    let mut saving = Button::new("Saving").loading(true);
    let badges = [
        Badge::new("Default"),
        Badge::new("Primary").variant(BadgeVariant::Primary),
        Badge::new("Success").variant(BadgeVariant::Success),
        Badge::new("Warning").variant(BadgeVariant::Warning),
        Badge::new("Error").variant(BadgeVariant::Error),
        Badge::new("Info").variant(BadgeVariant::Info).rounded(true),
    ];
    let avatars = [
        Avatar::new().fallback("John Doe").size(ExtendedSize::Xs),
        Avatar::new().fallback("Mary Smith").size(ExtendedSize::Md).shape(AvatarShape::Square),
        Avatar::new().fallback("Gridiron Guru").size(ExtendedSize::Xl).shape(AvatarShape::Rounded),
        Avatar::new().src(Some("https://example.com/a.png".to_string())).alt("Photo"),
    ];
    story
        .display(1, move |f, rect, theme| {
            saving.tick();
            f.render_widget(Paragraph::new(saving.line(theme)), rect);
        })
        .display(1, |_, _, _| {})
        .display(1, move |f, rect, theme| {
            let mut spans = Vec::new();
            for badge in &badges {
                spans.push(badge.span(theme));
                spans.push(Span::raw(" "));
            }
            f.render_widget(Paragraph::new(Line::from(spans)), rect);
        })
        .display(1, move |f, rect, theme| {
            let mut spans = Vec::new();
            for avatar in &avatars {
                spans.push(avatar.span(theme));
                spans.push(Span::raw("  "));
            }
            f.render_widget(Paragraph::new(Line::from(spans)), rect);
        })
}

fn form_fields() -> Story {
    let email = Input::new("email")
        .kind(InputKind::Email)
        .label("Email")
        .placeholder("you@example.com")
        .helper_text("We never share it")
        .required(true);
    let entry_fee = Input::new("entryFee")
        .kind(InputKind::Number)
        .label("Entry fee")
        .error_message("Must be a number");
    let notes = Textarea::new("notes").label("Notes").placeholder("Trash talk goes here").max_length(140);
    let options = PickType::ALL
        .into_iter()
        .map(|pick_type| SelectOption::new(pick_type.key(), pick_type.option_label()))
        .collect();
    let pick_type = Select::new("pickType", options)
        .label("Pick type")
        .placeholder("Choose one");
    Story::new("Input, Textarea & Select")
        .with_text(email.height(), email)
        .with_text(entry_fee.height(), entry_fee)
        .with_text(notes.height(), notes)
        .with(pick_type.height(), pick_type)
}

fn feedback() -> Story {
    let variants = [
        (AlertVariant::Info, "Picks lock at kickoff."),
        (AlertVariant::Success, "Your pick was saved."),
        (AlertVariant::Warning, "Two games start in 10 minutes."),
    ];
    let mut story = Story::new("Alerts & Loading");
    for (variant, message) in variants {
        let alert = Alert::new(variant).message(message);
        story = story.with(alert.height(), alert);
    }
    let dismissible = Alert::new(AlertVariant::Error)
        .title("Sync failed")
        .message("Standings could not be refreshed.")
        .message("Press x or Esc to dismiss.")
        .dismissible(true)
        .on_dismiss(Action::AlertDismissed);
    let mut loaders = [
        Loading::new().variant(LoadingVariant::Spinner).text("Loading games..."),
        Loading::new().variant(LoadingVariant::Dots).color(LoadingColor::Secondary),
        Loading::new().variant(LoadingVariant::Pulse).size(ExtendedSize::Lg).color(LoadingColor::White),
    ];
    story.with(dismissible.height(), dismissible).display(3, move |f, rect, theme| {
        let rows = LayoutManager::stack(rect, &[1, 1, 1]);
        for (loader, row) in loaders.iter_mut().zip(rows) {
            loader.tick();
            loader.render(f, row, theme);
        }
    })
}

fn account(fixtures: &Fixtures) -> Story {
    let user = fixtures.users.first().cloned();
    let nav = vec![
        NavItem::new("Leagues", "/leagues").active(true),
        NavItem::new("Picks", "/picks"),
        NavItem::new("Standings", "/standings"),
    ];
    let signed_in = Header::new().nav_items(nav.clone()).user(user.clone()).logout_enabled(true);
    let signed_out = Header::new().title("Pickem").show_logo(false).nav_items(nav);
    let mut story = Story::new("Header & User Card").with(3, signed_in).with(3, signed_out);
    for user in fixtures.users.iter().cloned() {
        let card = UserCard::new(user)
            .show_details(true)
            .clickable(true)
            .action(Button::new("Message").size(Size::Sm).variant(ButtonVariant::Outline));
        story = story.with(8, card);
    }
    story
}

fn date_range(config: &Config) -> Story {
    let today = today();
    let picker = DateRangePicker::new(today)
        .with_config(&config.date_picker)
        .label("Season window")
        .helper_text("Type MM/dd/yyyy - MM/dd/yyyy or press Enter")
        .required(true);
    let past_only = DateRangePicker::new(today)
        .label("Past games")
        .disable_future(true)
        .calendars(1)
        .size(Size::Sm);
    let weekends = DateRangePicker::new(today)
        .label("Weekend games")
        .should_disable_date(|date, _| !crate::utils::datetime::is_weekend(date))
        .display_week_number(true)
        .close_on_select(false);
    let height = |picker: &DateRangePicker| picker.input().height();
    Story::new("Date Range Picker")
        .with_text(height(&picker), picker)
        .with_text(height(&past_only), past_only)
        .with_text(height(&weekends), weekends)
}

fn games(fixtures: &Fixtures) -> Story {
    let mut story = Story::new("Game Card & Game Pick");
    for game in fixtures.games.iter().take(2) {
        let card = GameCard::new(game.clone())
            .show_pick_actions(true)
            .user_pick(fixtures.pick_for(game.id))
            .clickable(true);
        story = story.with(8, card);
    }
    for (game, (locked, results)) in fixtures.games.iter().zip([(false, false), (true, false), (false, true)]) {
        let pick = GamePick::new(game.clone())
            .user_pick(fixtures.pick_for(game.id))
            .locked(locked)
            .show_results(results);
        story = story.with(6, pick);
    }
    story
}

fn leagues(fixtures: &Fixtures) -> Story {
    let mut story = Story::new("League Card");
    for (index, league) in fixtures.leagues.iter().enumerate() {
        let card = LeagueCard::new(league.clone())
            .clickable(true)
            .show_join_button(true)
            .is_member(index > 0);
        story = story.with(11, card);
    }
    story
}

fn pick_form(fixtures: &Fixtures, config: &Config) -> Story {
    let mut story = Story::new("Pick Form");
    if let Some(game) = fixtures.games.first() {
        let form = PickForm::new(game.clone(), &fixtures.teams)
            .with_config(&config.pick_form)
            .cancel_enabled(true);
        story = story.with(form.height(), form);
    }
    story
}

fn standings(fixtures: &Fixtures, config: &Config) -> Story {
    let table = StandingsTable::new(fixtures.standings.clone())
        .with_config(&config.standings)
        .row_click(true);
    let mut loading = StandingsTable::new(Vec::new()).loading(true);
    let mut empty = StandingsTable::new(Vec::new());
    Story::new("Standings Table")
        .with(14, table)
        .display(5, move |f, rect, theme| {
            loading.tick();
            loading.render(f, rect, theme);
        })
        .display(5, move |f, rect, theme| empty.render(f, rect, theme))
}

/// Every story, in tab order
pub fn all(fixtures: &Fixtures, config: &Config) -> Vec<Box<dyn StoryComponent>> {
    vec![
        Box::new(primitives()),
        Box::new(form_fields()),
        Box::new(feedback()),
        Box::new(Titled::new("Card, Container & Modal", OverlayStory::new())),
        Box::new(account(fixtures)),
        Box::new(date_range(config)),
        Box::new(games(fixtures)),
        Box::new(leagues(fixtures)),
        Box::new(pick_form(fixtures, config)),
        Box::new(standings(fixtures, config)),
    ]
}

/// What the showcase needs from a story
pub trait StoryComponent: Component {
    fn title(&self) -> &'static str;

    fn is_editing(&self) -> bool {
        false
    }

    fn enter(&mut self) -> Action {
        self.on_focus()
    }

    fn leave(&mut self) -> Action {
        self.on_blur()
    }
}

impl StoryComponent for Story {
    fn title(&self) -> &'static str {
        self.title
    }

    fn is_editing(&self) -> bool {
        Story::is_editing(self)
    }

    fn enter(&mut self) -> Action {
        Story::enter(self)
    }

    fn leave(&mut self) -> Action {
        Story::leave(self)
    }
}

/// A single component shown as a story of its own
pub struct Titled<C> {
    title: &'static str,
    inner: C,
}

impl<C: Component> Titled<C> {
    pub fn new(title: &'static str, inner: C) -> Self {
        Self { title, inner }
    }
}

impl<C: Component> Component for Titled<C> {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        self.inner.handle_key_events(key)
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        self.inner.handle_mouse_events(mouse)
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, theme: &Theme) {
        self.inner.render(f, rect, theme);
    }

    fn on_focus(&mut self) -> Action {
        self.inner.on_focus()
    }

    fn on_blur(&mut self) -> Action {
        self.inner.on_blur()
    }
}

impl<C: Component> StoryComponent for Titled<C> {
    fn title(&self) -> &'static str {
        self.title
    }
}
