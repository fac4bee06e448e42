//! Single line text input

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Padding, Paragraph},
    Frame,
};

use super::common::{create_block, helper_line, label_line, left_click, TextEdit};
use crate::constants::INPUT_CURSOR;
use crate::date_range::Controlled;
use crate::theme::{ClassList, ControlState, Size, Theme};
use crate::ui::core::{Action, Component};
use crate::ui::layout::LayoutManager;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputKind {
    #[default]
    Text,
    Email,
    Password,
    Number,
    Tel,
    Url,
    Search,
}

impl InputKind {
    #[must_use]
    pub fn class_name(self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Email => "email",
            Self::Password => "password",
            Self::Number => "number",
            Self::Tel => "tel",
            Self::Url => "url",
            Self::Search => "search",
        }
    }

    /// Characters the field lets through
    #[must_use]
    pub fn accepts(self, c: char) -> bool {
        match self {
            Self::Number => c.is_ascii_digit() || matches!(c, '.' | '-' | 'e' | 'E' | '+'),
            Self::Tel => c.is_ascii_digit() || matches!(c, '+' | '-' | ' ' | '(' | ')' | '.'),
            Self::Email | Self::Url => !c.is_whitespace() && !c.is_control(),
            Self::Text | Self::Password | Self::Search => !c.is_control(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Input {
    pub name: String,
    pub id: Option<String>,
    pub kind: InputKind,
    pub label: Option<String>,
    pub placeholder: Option<String>,
    pub helper_text: Option<String>,
    pub error: bool,
    pub error_message: Option<String>,
    pub required: bool,
    pub disabled: bool,
    pub size: Size,
    pub class_name: String,
    value: Controlled<String>,
    cursor: usize,
    focused: bool,
    area: Rect,
}

impl Input {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: None,
            kind: InputKind::default(),
            label: None,
            placeholder: None,
            helper_text: None,
            error: false,
            error_message: None,
            required: false,
            disabled: false,
            size: Size::default(),
            class_name: String::new(),
            value: Controlled::default(),
            cursor: 0,
            focused: false,
            area: Rect::default(),
        }
    }

    #[must_use]
    pub fn kind(mut self, kind: InputKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = Some(placeholder.into());
        self
    }

    #[must_use]
    pub fn helper_text(mut self, text: impl Into<String>) -> Self {
        self.helper_text = Some(text.into());
        self
    }

    #[must_use]
    pub fn error_message(mut self, message: impl Into<String>) -> Self {
        self.error_message = Some(message.into());
        self
    }

    #[must_use]
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    #[must_use]
    pub fn size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Initial value of an uncontrolled input
    #[must_use]
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        let value = value.into();
        self.cursor = value.chars().count();
        self.value = Controlled::uncontrolled(value);
        self
    }

    /// Hand the value to the host (`Some`) or take it back (`None`)
    pub fn control_value(&mut self, value: Option<String>) {
        if let Some(value) = &value {
            self.cursor = value.chars().count();
        }
        self.value.control(value);
    }

    pub fn value(&self) -> &str {
        self.value.get()
    }

    pub fn id(&self) -> String {
        self.id.clone().unwrap_or_else(|| format!("input-{}", self.name))
    }

    pub fn has_error(&self) -> bool {
        self.error || self.error_message.is_some()
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn classes(&self) -> ClassList {
        ClassList::new("input")
            .modifier(self.size.class_name())
            .modifier_if(self.has_error(), "error")
            .modifier_if(self.disabled, "disabled")
            .modifier_if(self.focused, "focused")
            .extra(&self.class_name)
    }

    /// Rows taken by label, field box and helper line
    pub fn height(&self) -> u16 {
        let helper = self.error_message.is_some() || self.helper_text.is_some();
        u16::from(self.label.is_some()) + 3 + u16::from(helper)
    }

    fn display_value(&self) -> String {
        let value = self.value();
        let shown = match self.kind {
            InputKind::Password => "*".repeat(value.chars().count()),
            _ => value.to_string(),
        };
        if self.focused {
            TextEdit::new(&shown, self.cursor).with_cursor(INPUT_CURSOR)
        } else {
            shown
        }
    }
}

impl Component for Input {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.disabled {
            return Action::None;
        }
        let mut edit = TextEdit::new(self.value(), self.cursor);
        let changed = match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) && self.kind.accepts(c) => {
                edit.insert(c);
                true
            }
            KeyCode::Backspace => edit.backspace(),
            KeyCode::Delete => edit.delete(),
            KeyCode::Left => {
                edit.left();
                false
            }
            KeyCode::Right => {
                edit.right();
                false
            }
            KeyCode::Home => {
                edit.home();
                false
            }
            KeyCode::End => {
                edit.end();
                false
            }
            _ => false,
        };
        self.cursor = edit.cursor;
        if !changed {
            return Action::None;
        }
        self.value.set(edit.text.clone());
        Action::InputChanged {
            name: self.name.clone(),
            value: edit.text,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        let Some((column, row)) = left_click(&mouse) else {
            return Action::None;
        };
        let inside = LayoutManager::hit(self.area, column, row);
        match (inside, self.focused) {
            (true, false) => self.on_focus(),
            (false, true) => self.on_blur(),
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, theme: &Theme) {
        let styles = theme.styles();
        let helper = helper_line(self.helper_text.as_deref(), self.error_message.as_deref(), theme);
        let rows = LayoutManager::stack(rect, &[u16::from(self.label.is_some()), 3, u16::from(helper.is_some())]);

        if let Some(label) = &self.label {
            f.render_widget(Paragraph::new(label_line(label, self.required, theme)), rows[0]);
        }

        let state = ControlState::new(self.focused, self.disabled, self.has_error());
        let mut block = create_block(None, theme, self.focused).padding(Padding::horizontal(self.size.padding()));
        if self.has_error() {
            block = block.border_style(styles.helper(true));
        }
        let line = match &self.placeholder {
            Some(placeholder) if self.value().is_empty() && !self.focused => {
                Line::from(Span::styled(placeholder.clone(), styles.muted()))
            }
            _ => Line::from(Span::styled(self.display_value(), styles.field(state))),
        };
        self.area = rows[1];
        f.render_widget(Paragraph::new(line).block(block), rows[1]);

        if let Some(helper) = helper {
            f.render_widget(Paragraph::new(helper), rows[2]);
        }
    }

    fn on_focus(&mut self) -> Action {
        if self.disabled {
            return Action::None;
        }
        self.focused = true;
        self.cursor = self.value().chars().count();
        Action::InputFocused(self.name.clone())
    }

    fn on_blur(&mut self) -> Action {
        if !self.focused {
            return Action::None;
        }
        self.focused = false;
        Action::InputBlurred(self.name.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn typing_emits_full_value() {
        let mut input = Input::new("email").default_value("ab");
        let action = input.handle_key_events(key(KeyCode::Char('c')));
        assert_eq!(
            action,
            Action::InputChanged {
                name: "email".to_string(),
                value: "abc".to_string()
            }
        );
    }

    #[test]
    fn controlled_value_is_not_overwritten() {
        let mut input = Input::new("city");
        input.control_value(Some("Denver".to_string()));
        let action = input.handle_key_events(key(KeyCode::Backspace));
        assert_eq!(
            action,
            Action::InputChanged {
                name: "city".to_string(),
                value: "Denve".to_string()
            }
        );
        assert_eq!(input.value(), "Denver");
    }

    #[test]
    fn number_field_rejects_letters() {
        let mut input = Input::new("age").kind(InputKind::Number);
        assert_eq!(input.handle_key_events(key(KeyCode::Char('x'))), Action::None);
        assert_eq!(input.value(), "");
    }

    #[test]
    fn id_defaults_from_name() {
        assert_eq!(Input::new("username").id(), "input-username");
    }
}
