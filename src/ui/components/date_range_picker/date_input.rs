//! Text field showing the formatted range

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Padding, Paragraph},
    Frame,
};

use super::PickerHit;
use crate::constants::{DEFAULT_PICKER_PLACEHOLDER, INPUT_CURSOR};
use crate::theme::{ClassList, ControlState, Size, Theme};
use crate::ui::components::common::{create_block, helper_line, label_line, TextEdit};
use crate::ui::layout::LayoutManager;

/// Result of a key press while the field is in text mode
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    Editing,
    Commit(String),
    Cancel,
}

/// What the field draws this frame
#[derive(Debug, Clone, Copy)]
pub struct FieldState<'a> {
    pub display: &'a str,
    pub has_value: bool,
    pub disabled: bool,
    pub focused: bool,
}

#[derive(Debug, Clone)]
pub struct DateInput {
    pub label: Option<String>,
    pub placeholder: String,
    pub required: bool,
    pub error: bool,
    pub error_message: Option<String>,
    pub helper_text: Option<String>,
    /// `Sm` draws a borderless single row
    pub size: Size,
    pub clearable: bool,
    pub name: Option<String>,
    pub id: Option<String>,
    pub class_name: String,
    edit: Option<TextEdit>,
    field_area: Rect,
    clear_area: Rect,
    calendar_area: Rect,
}

impl Default for DateInput {
    fn default() -> Self {
        Self {
            label: None,
            placeholder: DEFAULT_PICKER_PLACEHOLDER.to_string(),
            required: false,
            error: false,
            error_message: None,
            helper_text: None,
            size: Size::Md,
            clearable: true,
            name: None,
            id: None,
            class_name: String::new(),
            edit: None,
            field_area: Rect::default(),
            clear_area: Rect::default(),
            calendar_area: Rect::default(),
        }
    }
}

impl DateInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_error(&self) -> bool {
        self.error || self.error_message.is_some()
    }

    pub fn is_small(&self) -> bool {
        self.size == Size::Sm
    }

    pub fn classes(&self, state: &FieldState<'_>) -> ClassList {
        ClassList::new("date-input")
            .modifier(if self.is_small() { "small" } else { "medium" })
            .modifier_if(self.has_error(), "error")
            .modifier_if(state.disabled, "disabled")
            .modifier_if(self.edit.is_some(), "editing")
            .extra(&self.class_name)
    }

    /// Field box, used as the popover anchor
    pub fn field_area(&self) -> Rect {
        self.field_area
    }

    pub fn height(&self) -> u16 {
        let helper = self.error_message.is_some() || self.helper_text.is_some();
        let field = if self.is_small() { 1 } else { 3 };
        u16::from(self.label.is_some()) + field + u16::from(helper)
    }

    pub fn is_editing(&self) -> bool {
        self.edit.is_some()
    }

    /// Enter text mode seeded with the current display value
    pub fn begin_edit(&mut self, display: &str) {
        self.edit = Some(TextEdit::new(display, display.chars().count()));
    }

    pub fn cancel_edit(&mut self) {
        self.edit = None;
    }

    pub fn edit_text(&self) -> Option<&str> {
        self.edit.as_ref().map(|edit| edit.text.as_str())
    }

    pub fn edit_key(&mut self, key: KeyEvent) -> EditOutcome {
        let Some(edit) = self.edit.as_mut() else {
            return EditOutcome::Cancel;
        };
        match key.code {
            KeyCode::Enter => {
                let text = edit.text.clone();
                self.edit = None;
                return EditOutcome::Commit(text);
            }
            KeyCode::Esc => {
                self.edit = None;
                return EditOutcome::Cancel;
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => edit.insert(c),
            KeyCode::Backspace => {
                edit.backspace();
            }
            KeyCode::Delete => {
                edit.delete();
            }
            KeyCode::Left => edit.left(),
            KeyCode::Right => edit.right(),
            KeyCode::Home => edit.home(),
            KeyCode::End => edit.end(),
            _ => {}
        }
        EditOutcome::Editing
    }

    pub fn hit(&self, column: u16, row: u16) -> Option<PickerHit> {
        if LayoutManager::hit(self.clear_area, column, row) {
            Some(PickerHit::Clear)
        } else if LayoutManager::hit(self.calendar_area, column, row) {
            Some(PickerHit::OpenCalendar)
        } else if LayoutManager::hit(self.field_area, column, row) {
            Some(PickerHit::Field)
        } else {
            None
        }
    }

    fn adornments(&self, state: &FieldState<'_>, theme: &Theme) -> (Option<&'static str>, &'static str) {
        let clear = (self.clearable && state.has_value && !state.disabled).then(|| theme.icons.clear());
        (clear, theme.icons.calendar())
    }

    pub fn render(&mut self, f: &mut Frame, rect: Rect, state: &FieldState<'_>, theme: &Theme) {
        let styles = theme.styles();
        let helper = helper_line(self.helper_text.as_deref(), self.error_message.as_deref(), theme);
        let field_height = if self.is_small() { 1 } else { 3 };
        let rows = LayoutManager::stack(
            rect,
            &[u16::from(self.label.is_some()), field_height, u16::from(helper.is_some())],
        );

        if let Some(label) = &self.label {
            f.render_widget(Paragraph::new(label_line(label, self.required, theme)), rows[0]);
        }

        let control = ControlState::new(state.focused, state.disabled, self.has_error());
        let text = match &self.edit {
            Some(edit) => Span::styled(edit.with_cursor(INPUT_CURSOR), styles.field(control)),
            None if state.display.is_empty() => Span::styled(self.placeholder.clone(), styles.muted()),
            None => Span::styled(state.display.to_string(), styles.field(control)),
        };

        self.field_area = rows[1];
        let content = if self.is_small() {
            rows[1]
        } else {
            let mut block = create_block(None, theme, state.focused).padding(Padding::horizontal(1));
            if self.has_error() {
                block = block.border_style(styles.helper(true));
            }
            let inner = block.inner(rows[1]);
            f.render_widget(block, rows[1]);
            inner
        };
        f.render_widget(Paragraph::new(Line::from(text)), content);

        // Adornments sit at the right edge of the field: [clear] [calendar]
        let (clear, calendar) = self.adornments(state, theme);
        let right = content.x + content.width;
        let calendar_width = Span::raw(calendar).width() as u16;
        self.calendar_area = Rect::new(right.saturating_sub(calendar_width), content.y, calendar_width, content.height.min(1));
        f.render_widget(Paragraph::new(Span::styled(calendar, styles.accent())), self.calendar_area);
        self.clear_area = match clear {
            Some(glyph) => {
                let width = Span::raw(glyph).width() as u16;
                let area = Rect::new(self.calendar_area.x.saturating_sub(width + 1), content.y, width, self.calendar_area.height);
                f.render_widget(Paragraph::new(Span::styled(glyph, styles.muted())), area);
                area
            }
            None => Rect::default(),
        };

        if let Some(helper) = helper {
            f.render_widget(Paragraph::new(helper), rows[2]);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn edit_mode_commits_on_enter() {
        let mut input = DateInput::new();
        input.begin_edit("01/15/2024 - ");
        input.edit_key(key(KeyCode::Char('0')));
        assert_eq!(input.edit_text(), Some("01/15/2024 - 0"));
        assert_eq!(input.edit_key(key(KeyCode::Enter)), EditOutcome::Commit("01/15/2024 - 0".to_string()));
        assert!(!input.is_editing());
    }

    #[test]
    fn small_field_is_one_row() {
        let mut input = DateInput::new();
        input.size = Size::Sm;
        input.label = Some("Dates".to_string());
        assert_eq!(input.height(), 2);
    }
}
