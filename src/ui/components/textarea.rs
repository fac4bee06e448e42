//! Multi line text input

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span, Text},
    widgets::{Padding, Paragraph, Wrap},
    Frame,
};

use super::common::{create_block, helper_line, label_line, left_click, TextEdit};
use crate::constants::{DEFAULT_TEXTAREA_ROWS, INPUT_CURSOR};
use crate::date_range::Controlled;
use crate::theme::{ClassList, ControlState, Size, Theme};
use crate::ui::core::{Action, Component};
use crate::ui::layout::LayoutManager;

#[derive(Debug, Clone)]
pub struct Textarea {
    pub name: String,
    pub id: Option<String>,
    pub label: Option<String>,
    pub placeholder: Option<String>,
    pub helper_text: Option<String>,
    pub error: bool,
    pub error_message: Option<String>,
    pub required: bool,
    pub disabled: bool,
    pub size: Size,
    pub rows: u16,
    /// Grow the box with the number of lines instead of scrolling
    pub auto_resize: bool,
    pub max_length: Option<usize>,
    pub class_name: String,
    value: Controlled<String>,
    cursor: usize,
    focused: bool,
    area: Rect,
}

impl Textarea {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id: None,
            label: None,
            placeholder: None,
            helper_text: None,
            error: false,
            error_message: None,
            required: false,
            disabled: false,
            size: Size::default(),
            rows: DEFAULT_TEXTAREA_ROWS,
            auto_resize: false,
            max_length: None,
            class_name: String::new(),
            value: Controlled::default(),
            cursor: 0,
            focused: false,
            area: Rect::default(),
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
    pub fn rows(mut self, rows: u16) -> Self {
        self.rows = rows.max(1);
        self
    }

    #[must_use]
    pub fn auto_resize(mut self, auto_resize: bool) -> Self {
        self.auto_resize = auto_resize;
        self
    }

    #[must_use]
    pub fn max_length(mut self, max_length: usize) -> Self {
        self.max_length = Some(max_length);
        self
    }

    #[must_use]
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        let value = value.into();
        self.cursor = value.chars().count();
        self.value = Controlled::uncontrolled(value);
        self
    }

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
        self.id.clone().unwrap_or_else(|| format!("textarea-{}", self.name))
    }

    pub fn has_error(&self) -> bool {
        self.error || self.error_message.is_some()
    }

    pub fn classes(&self) -> ClassList {
        ClassList::new("textarea")
            .modifier(self.size.class_name())
            .modifier_if(self.has_error(), "error")
            .modifier_if(self.disabled, "disabled")
            .modifier_if(self.auto_resize, "auto-resize")
            .extra(&self.class_name)
    }

    fn line_count(&self) -> u16 {
        u16::try_from(self.value().split('\n').count()).unwrap_or(u16::MAX)
    }

    /// Visible text rows inside the box
    pub fn visible_rows(&self) -> u16 {
        if self.auto_resize {
            self.rows.max(self.line_count())
        } else {
            self.rows
        }
    }

    pub fn height(&self) -> u16 {
        let footer = self.error_message.is_some() || self.helper_text.is_some() || self.max_length.is_some();
        u16::from(self.label.is_some()) + self.visible_rows() + 2 + u16::from(footer)
    }

    fn at_capacity(&self) -> bool {
        self.max_length
            .is_some_and(|max| self.value().chars().count() >= max)
    }

    /// (line, column) of a character offset
    fn locate(text: &str, cursor: usize) -> (usize, usize) {
        let before: String = text.chars().take(cursor).collect();
        let line = before.matches('\n').count();
        let column = before.rsplit('\n').next().map_or(0, |tail| tail.chars().count());
        (line, column)
    }

    fn offset_of(text: &str, line: usize, column: usize) -> usize {
        let mut offset = 0;
        for (index, content) in text.split('\n').enumerate() {
            let length = content.chars().count();
            if index == line {
                return offset + column.min(length);
            }
            offset += length + 1;
        }
        offset.saturating_sub(1)
    }

    fn move_vertically(&mut self, down: bool) {
        let text = self.value().to_string();
        let (line, column) = Self::locate(&text, self.cursor);
        let last_line = text.matches('\n').count();
        let target = if down {
            (line + 1).min(last_line)
        } else {
            line.saturating_sub(1)
        };
        self.cursor = Self::offset_of(&text, target, column);
    }
}

impl Component for Textarea {
    fn handle_key_events(&mut self, key: KeyEvent) -> Action {
        if self.disabled {
            return Action::None;
        }
        let mut edit = TextEdit::new(self.value(), self.cursor);
        let changed = match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) && !self.at_capacity() => {
                edit.insert(c);
                true
            }
            KeyCode::Enter if !self.at_capacity() => {
                edit.insert('\n');
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
            KeyCode::Up | KeyCode::Down => {
                self.move_vertically(key.code == KeyCode::Down);
                return Action::None;
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
        match (LayoutManager::hit(self.area, column, row), self.focused) {
            (true, false) => self.on_focus(),
            (false, true) => self.on_blur(),
            _ => Action::None,
        }
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, theme: &Theme) {
        let styles = theme.styles();
        let helper = helper_line(self.helper_text.as_deref(), self.error_message.as_deref(), theme);
        let footer = helper.is_some() || self.max_length.is_some();
        let rows = LayoutManager::stack(
            rect,
            &[u16::from(self.label.is_some()), self.visible_rows() + 2, u16::from(footer)],
        );

        if let Some(label) = &self.label {
            f.render_widget(Paragraph::new(label_line(label, self.required, theme)), rows[0]);
        }

        let state = ControlState::new(self.focused, self.disabled, self.has_error());
        let mut block = create_block(None, theme, self.focused).padding(Padding::horizontal(self.size.padding()));
        if self.has_error() {
            block = block.border_style(styles.helper(true));
        }
        let text = match &self.placeholder {
            Some(placeholder) if self.value().is_empty() && !self.focused => {
                Text::from(Span::styled(placeholder.clone(), styles.muted()))
            }
            _ => {
                let shown = if self.focused {
                    TextEdit::new(self.value(), self.cursor).with_cursor(INPUT_CURSOR)
                } else {
                    self.value().to_string()
                };
                Text::from(shown.split('\n').map(|line| Line::from(line.to_string())).collect::<Vec<_>>())
                    .style(styles.field(state))
            }
        };
        let (cursor_line, _) = Self::locate(self.value(), self.cursor);
        let scroll = u16::try_from(cursor_line)
            .unwrap_or(u16::MAX)
            .saturating_sub(self.visible_rows().saturating_sub(1));
        self.area = rows[1];
        f.render_widget(
            Paragraph::new(text).block(block).wrap(Wrap { trim: false }).scroll((scroll, 0)),
            rows[1],
        );

        if let Some(helper) = helper {
            f.render_widget(Paragraph::new(helper), rows[2]);
        }
        if let Some(max) = self.max_length {
            let counter = format!("{} / {max}", self.value().chars().count());
            f.render_widget(
                Paragraph::new(Span::styled(counter, styles.muted())).alignment(Alignment::Right),
                rows[2],
            );
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
    fn max_length_caps_input() {
        let mut textarea = Textarea::new("notes").max_length(3).default_value("abc");
        assert_eq!(textarea.handle_key_events(key(KeyCode::Char('d'))), Action::None);
        assert_eq!(textarea.value(), "abc");
    }

    #[test]
    fn auto_resize_follows_line_count() {
        let textarea = Textarea::new("notes").rows(2).auto_resize(true).default_value("a\nb\nc\nd");
        assert_eq!(textarea.visible_rows(), 4);
        assert_eq!(Textarea::new("notes").rows(2).default_value("a\nb\nc").visible_rows(), 2);
    }

    #[test]
    fn vertical_moves_keep_column() {
        let mut textarea = Textarea::new("notes").default_value("abcd\nxy");
        textarea.handle_key_events(key(KeyCode::Up));
        assert_eq!(textarea.cursor, 2);
        textarea.handle_key_events(key(KeyCode::Down));
        assert_eq!(textarea.cursor, 7);
        assert_eq!(textarea.id(), "textarea-notes");
    }
}
