//! Push button

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::common::{is_activation, left_click};
use crate::icons::IconService;
use crate::theme::{ButtonVariant, ClassList, ControlState, Size, Theme};
use crate::ui::core::{Action, Component};
use crate::ui::layout::LayoutManager;

/// Role of the button inside a form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonKind {
    #[default]
    Button,
    Submit,
    Reset,
}

#[derive(Debug, Clone)]
pub struct Button {
    pub label: String,
    pub variant: ButtonVariant,
    pub size: Size,
    pub kind: ButtonKind,
    pub disabled: bool,
    pub loading: bool,
    pub full_width: bool,
    pub class_name: String,
    on_press: Option<Action>,
    focused: bool,
    tick: usize,
    area: Rect,
}

impl Button {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            variant: ButtonVariant::default(),
            size: Size::default(),
            kind: ButtonKind::default(),
            disabled: false,
            loading: false,
            full_width: false,
            class_name: String::new(),
            on_press: None,
            focused: false,
            tick: 0,
            area: Rect::default(),
        }
    }

    #[must_use]
    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    #[must_use]
    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn kind(mut self, kind: ButtonKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    #[must_use]
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    #[must_use]
    pub fn full_width(mut self, full_width: bool) -> Self {
        self.full_width = full_width;
        self
    }

    #[must_use]
    pub fn class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = class_name.into();
        self
    }

    /// Action emitted on press; without one a press emits `Pressed(label)`
    #[must_use]
    pub fn on_press(mut self, action: Action) -> Self {
        self.on_press = Some(action);
        self
    }

    pub fn is_pressable(&self) -> bool {
        !self.disabled && !self.loading
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn set_focused(&mut self, focused: bool) {
        self.focused = focused;
    }

    /// Area of the last render
    pub fn area(&self) -> Rect {
        self.area
    }

    pub fn press(&self) -> Action {
        if !self.is_pressable() {
            return Action::None;
        }
        self.on_press
            .clone()
            .unwrap_or_else(|| Action::Pressed(self.label.clone()))
    }

    /// Advance the loading spinner
    pub fn tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    pub fn classes(&self) -> ClassList {
        ClassList::new("btn")
            .modifier(self.variant.class_name())
            .modifier(self.size.class_name())
            .modifier_if(self.full_width, "full-width")
            .modifier_if(self.loading, "loading")
            .modifier_if(self.disabled, "disabled")
            .extra(&self.class_name)
    }

    fn content(&self, theme: &Theme) -> String {
        let pad = " ".repeat(usize::from(self.size.padding()) + 1);
        if self.loading {
            let spinner = IconService::frame(theme.icons.icons().loading.spinner, self.tick);
            format!("{pad}{spinner} {}{pad}", self.label)
        } else {
            format!("{pad}{}{pad}", self.label)
        }
    }

    /// Columns needed to draw the button without truncation
    pub fn width(&self, theme: &Theme) -> u16 {
        u16::try_from(Span::raw(self.content(theme)).width()).unwrap_or(u16::MAX)
    }

    pub fn line(&self, theme: &Theme) -> Line<'static> {
        let state = ControlState::new(self.focused, !self.is_pressable(), false);
        Line::from(Span::styled(
            self.content(theme),
            theme.styles().button(self.variant, state),
        ))
    }
}

impl Component for Button {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if is_activation(&key) {
            self.press()
        } else {
            Action::None
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        match left_click(&mouse) {
            Some((column, row)) if LayoutManager::hit(self.area, column, row) => self.press(),
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, theme: &Theme) {
        let width = if self.full_width {
            rect.width
        } else {
            self.width(theme).min(rect.width)
        };
        self.area = Rect::new(rect.x, rect.y, width, rect.height.min(1));
        let state = ControlState::new(self.focused, !self.is_pressable(), false);
        let paragraph = Paragraph::new(self.line(theme))
            .style(theme.styles().button(self.variant, state))
            .alignment(Alignment::Center);
        f.render_widget(paragraph, self.area);
    }

    fn on_focus(&mut self) -> Action {
        self.focused = true;
        Action::None
    }

    fn on_blur(&mut self) -> Action {
        self.focused = false;
        Action::None
    }
}
