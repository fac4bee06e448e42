//! Building blocks shared by the field and overlay components

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::Alignment,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::theme::Theme;

/// Bordered block styled by the active stylesheet
pub fn create_block<'a>(title: Option<&'a str>, theme: &Theme, focused: bool) -> Block<'a> {
    let styles = theme.styles();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(styles.border_type())
        .border_style(styles.border(focused));
    match title {
        Some(title) => block.title(format!(" {title} ")).title_style(styles.title()),
        None => block,
    }
}

/// Field label with a required marker
pub fn label_line(label: &str, required: bool, theme: &Theme) -> Line<'static> {
    let styles = theme.styles();
    let mut spans = vec![Span::styled(label.to_string(), styles.label())];
    if required {
        spans.push(Span::styled(" *", styles.helper(true)));
    }
    Line::from(spans)
}

/// Helper line below a field; error messages take precedence over helper text
pub fn helper_line(helper_text: Option<&str>, error_message: Option<&str>, theme: &Theme) -> Option<Line<'static>> {
    let styles = theme.styles();
    match (error_message, helper_text) {
        (Some(message), _) => Some(Line::from(Span::styled(message.to_string(), styles.helper(true)))),
        (None, Some(text)) => Some(Line::from(Span::styled(text.to_string(), styles.helper(false)))),
        (None, None) => None,
    }
}

/// Instruction shortcut definition: (key, description)
pub type InstructionShortcut = (&'static str, &'static str);

/// Creates a paragraph with highlighted instruction shortcuts
pub fn create_instructions_paragraph<'a>(instructions: &[InstructionShortcut], theme: &Theme) -> Paragraph<'a> {
    let styles = theme.styles();
    let mut instruction_text = Vec::new();
    for (index, (key, desc)) in instructions.iter().enumerate() {
        if index > 0 {
            instruction_text.push(Span::styled(" • ", styles.muted()));
        }
        instruction_text.push(Span::styled(*key, styles.accent()));
        instruction_text.push(Span::styled(*desc, styles.muted()));
    }

    Paragraph::new(Line::from(instruction_text)).alignment(Alignment::Center)
}

/// Common instruction shortcuts
pub mod shortcuts {
    use super::InstructionShortcut;

    pub const ESC_CANCEL: InstructionShortcut = ("Esc", " Cancel");
    pub const ENTER_SELECT: InstructionShortcut = ("Enter", " Select");
    pub const TAB_NEXT: InstructionShortcut = ("Tab", " Next");
    pub const ARROWS_MOVE: InstructionShortcut = ("←↑↓→", " Move");
    pub const PAGE_MONTH: InstructionShortcut = ("PgUp/PgDn", " Month");
}

/// Inline button look used inside composite components
pub fn button_span(label: &str, style: Style) -> Span<'static> {
    Span::styled(format!("[ {label} ]"), style)
}

/// Emphasize a span without changing its colors
pub fn bold(style: Style) -> Style {
    style.add_modifier(Modifier::BOLD)
}

/// Enter and Space press the focused element
pub fn is_activation(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Enter | KeyCode::Char(' '))
}

/// Position of a left button press, if this event is one
pub fn left_click(mouse: &MouseEvent) -> Option<(u16, u16)> {
    matches!(mouse.kind, MouseEventKind::Down(MouseButton::Left)).then_some((mouse.column, mouse.row))
}

/// Single line text buffer with a character cursor
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextEdit {
    pub text: String,
    /// Cursor position in characters
    pub cursor: usize,
}

impl TextEdit {
    pub fn new(text: &str, cursor: usize) -> Self {
        let cursor = cursor.min(text.chars().count());
        Self {
            text: text.to_string(),
            cursor,
        }
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map_or(self.text.len(), |(index, _)| index)
    }

    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
    }

    /// Delete before the cursor; false when nothing changed
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.text.remove(at);
        true
    }

    /// Delete under the cursor; false when nothing changed
    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.len() {
            return false;
        }
        let at = self.byte_index(self.cursor);
        self.text.remove(at);
        true
    }

    pub fn left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.len());
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.len();
    }

    /// Text with the cursor glyph drawn at the cursor position
    pub fn with_cursor(&self, cursor_glyph: &str) -> String {
        let at = self.byte_index(self.cursor);
        format!("{}{cursor_glyph}{}", &self.text[..at], &self.text[at..])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn edits_multibyte_text_by_character() {
        let mut edit = TextEdit::new("café", 4);
        assert!(edit.backspace());
        assert_eq!(edit.text, "caf");
        edit.home();
        edit.insert('é');
        assert_eq!(edit.text, "écaf");
        assert_eq!(edit.with_cursor("|"), "é|caf");
        edit.end();
        assert!(!edit.delete());
    }
}
