//! Drop-down select

use std::fmt;

use crossterm::event::{KeyCode, KeyEvent, MouseEvent};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Clear, List, ListItem, ListState, Padding, Paragraph},
    Frame,
};
use serde::{Deserialize, Serialize};

use super::common::{create_block, helper_line, label_line, left_click};
use crate::date_range::Controlled;
use crate::theme::{ClassList, ControlState, Size, Theme};
use crate::ui::core::{Action, Component};
use crate::ui::layout::LayoutManager;

/// Option values are either numbers or text
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SelectValue {
    Int(i64),
    Text(String),
}

impl SelectValue {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(value) => Some(*value),
            Self::Text(text) => text.parse().ok(),
        }
    }
}

impl fmt::Display for SelectValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Text(text) => f.write_str(text),
        }
    }
}

impl From<i64> for SelectValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<u32> for SelectValue {
    fn from(value: u32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<&str> for SelectValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SelectOption {
    pub value: SelectValue,
    pub label: String,
    pub disabled: bool,
}

impl SelectOption {
    pub fn new(value: impl Into<SelectValue>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }

    #[must_use]
    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }
}

#[derive(Debug, Clone)]
pub struct Select {
    pub name: String,
    pub id: Option<String>,
    pub label: Option<String>,
    /// Shown while nothing is selected; never selectable itself
    pub placeholder: Option<String>,
    pub options: Vec<SelectOption>,
    pub helper_text: Option<String>,
    pub error: bool,
    pub error_message: Option<String>,
    pub required: bool,
    pub disabled: bool,
    pub size: Size,
    pub class_name: String,
    value: Controlled<Option<SelectValue>>,
    focused: bool,
    expanded: bool,
    area: Rect,
    list_area: Rect,
    list_state: ListState,
}

impl Select {
    pub fn new(name: impl Into<String>, options: Vec<SelectOption>) -> Self {
        Self {
            name: name.into(),
            id: None,
            label: None,
            placeholder: None,
            options,
            helper_text: None,
            error: false,
            error_message: None,
            required: false,
            disabled: false,
            size: Size::default(),
            class_name: String::new(),
            value: Controlled::default(),
            focused: false,
            expanded: false,
            area: Rect::default(),
            list_area: Rect::default(),
            list_state: ListState::default(),
        }
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
    pub fn default_value(mut self, value: impl Into<SelectValue>) -> Self {
        self.value = Controlled::uncontrolled(Some(value.into()));
        self
    }

    pub fn control_value(&mut self, value: Option<Option<SelectValue>>) {
        self.value.control(value);
    }

    pub fn value(&self) -> Option<&SelectValue> {
        self.value.get().as_ref()
    }

    /// Forget the selection of an uncontrolled select
    pub fn reset(&mut self) {
        self.value.set(None);
    }

    pub fn set_options(&mut self, options: Vec<SelectOption>) {
        self.options = options;
    }

    pub fn id(&self) -> String {
        self.id.clone().unwrap_or_else(|| format!("select-{}", self.name))
    }

    pub fn has_error(&self) -> bool {
        self.error || self.error_message.is_some()
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn classes(&self) -> ClassList {
        ClassList::new("select")
            .modifier(self.size.class_name())
            .modifier_if(self.has_error(), "error")
            .modifier_if(self.disabled, "disabled")
            .modifier_if(self.expanded, "open")
            .extra(&self.class_name)
    }

    pub fn height(&self) -> u16 {
        let helper = self.error_message.is_some() || self.helper_text.is_some();
        u16::from(self.label.is_some()) + 3 + u16::from(helper)
    }

    fn selected_index(&self) -> Option<usize> {
        let value = self.value()?;
        self.options.iter().position(|option| &option.value == value)
    }

    pub fn selected_label(&self) -> Option<&str> {
        self.selected_index().map(|index| self.options[index].label.as_str())
    }

    /// Next enabled option in `direction` from the current one
    fn step(&self, forward: bool) -> Option<usize> {
        let len = self.options.len();
        let enabled = |index: &usize| !self.options[*index].disabled;
        match (self.selected_index(), forward) {
            (None, true) => (0..len).find(enabled),
            (None, false) => (0..len).rev().find(enabled),
            (Some(current), true) => (current + 1..len).find(enabled),
            (Some(current), false) => (0..current).rev().find(enabled),
        }
    }

    fn choose(&mut self, index: usize) -> Action {
        let Some(option) = self.options.get(index) else {
            return Action::None;
        };
        if option.disabled || self.value() == Some(&option.value) {
            return Action::None;
        }
        let value = option.value.clone();
        self.value.set(Some(value.clone()));
        Action::SelectChanged {
            name: self.name.clone(),
            value,
        }
    }
}

impl Component for Select {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.disabled {
            return Action::None;
        }
        match key.code {
            KeyCode::Down => self.step(true).map_or(Action::None, |index| self.choose(index)),
            KeyCode::Up => self.step(false).map_or(Action::None, |index| self.choose(index)),
            KeyCode::Home => (0..self.options.len())
                .find(|&index| !self.options[index].disabled)
                .map_or(Action::None, |index| self.choose(index)),
            KeyCode::End => (0..self.options.len())
                .rev()
                .find(|&index| !self.options[index].disabled)
                .map_or(Action::None, |index| self.choose(index)),
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.expanded = !self.expanded;
                Action::None
            }
            KeyCode::Esc if self.expanded => {
                self.expanded = false;
                Action::None
            }
            _ => Action::None,
        }
    }

    fn handle_mouse_events(&mut self, mouse: MouseEvent) -> Action {
        let Some((column, row)) = left_click(&mouse) else {
            return Action::None;
        };
        if self.disabled {
            return Action::None;
        }
        if self.expanded && LayoutManager::hit(self.list_area, column, row) {
            let index = usize::from(row - self.list_area.y).saturating_sub(1) + self.list_state.offset();
            self.expanded = false;
            return self.choose(index);
        }
        if LayoutManager::hit(self.area, column, row) {
            self.expanded = !self.expanded;
            if !self.focused {
                self.focused = true;
                return Action::InputFocused(self.name.clone());
            }
        } else {
            self.expanded = false;
        }
        Action::None
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
        let dropdown = theme.icons.icons().ui.dropdown;
        let shown = match (self.selected_label(), &self.placeholder) {
            (Some(label), _) => Span::styled(label.to_string(), styles.field(state)),
            (None, Some(placeholder)) => Span::styled(placeholder.clone(), styles.muted()),
            (None, None) => Span::raw(""),
        };
        let inner_width = usize::from(rows[1].width.saturating_sub(4 + self.size.padding() * 2));
        let gap = inner_width.saturating_sub(shown.width() + dropdown.chars().count());
        let line = Line::from(vec![
            shown,
            Span::raw(" ".repeat(gap)),
            Span::styled(dropdown, styles.muted()),
        ]);
        self.area = rows[1];
        f.render_widget(Paragraph::new(line).block(block), rows[1]);

        if let Some(helper) = helper {
            f.render_widget(Paragraph::new(helper), rows[2]);
        }

        if self.expanded {
            let height = u16::try_from(self.options.len()).unwrap_or(u16::MAX).saturating_add(2);
            let list_area = LayoutManager::popover(rows[1], rows[1].width, height, f.area());
            let items: Vec<ListItem> = self
                .options
                .iter()
                .map(|option| {
                    let style = if option.disabled {
                        styles.muted()
                    } else {
                        styles.text()
                    };
                    ListItem::new(Span::styled(option.label.clone(), style))
                })
                .collect();
            self.list_state.select(self.selected_index());
            let list = List::new(items)
                .block(create_block(None, theme, true))
                .highlight_style(styles.selection());
            self.list_area = list_area;
            f.render_widget(Clear, list_area);
            f.render_stateful_widget(list, list_area, &mut self.list_state);
        } else {
            self.list_area = Rect::default();
        }
    }

    fn on_focus(&mut self) -> Action {
        if self.disabled {
            return Action::None;
        }
        self.focused = true;
        Action::InputFocused(self.name.clone())
    }

    fn on_blur(&mut self) -> Action {
        self.expanded = false;
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
    use crossterm::event::KeyModifiers;

    fn options() -> Vec<SelectOption> {
        vec![
            SelectOption::new(1_i64, "One"),
            SelectOption::new(2_i64, "Two").disabled(true),
            SelectOption::new(3_i64, "Three"),
        ]
    }

    #[test]
    fn arrows_skip_disabled_options() {
        let mut select = Select::new("count", options());
        let down = KeyEvent::new(KeyCode::Down, KeyModifiers::NONE);
        assert_eq!(
            select.handle_key_events(down),
            Action::SelectChanged {
                name: "count".to_string(),
                value: SelectValue::Int(1)
            }
        );
        assert_eq!(
            select.handle_key_events(down),
            Action::SelectChanged {
                name: "count".to_string(),
                value: SelectValue::Int(3)
            }
        );
        assert_eq!(select.handle_key_events(down), Action::None);
    }

    #[test]
    fn placeholder_is_not_a_value() {
        let select = Select::new("count", options()).placeholder("Pick one");
        assert_eq!(select.value(), None);
        assert_eq!(select.selected_label(), None);
    }
}
