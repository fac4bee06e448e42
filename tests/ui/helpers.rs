use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use pickem_ui::showcase::Fixtures;
use pickem_ui::theme::Theme;
use pickem_ui::ui::Component;
use ratatui::{backend::TestBackend, layout::Rect, Terminal};

pub fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn click(column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

pub fn fixtures() -> Fixtures {
    Fixtures::bundled().expect("bundled fixtures should load")
}

/// Render `component` into a `width` x `height` buffer and return its rows as text
pub fn render<C: Component + ?Sized>(component: &mut C, width: u16, height: u16) -> Vec<String> {
    let theme = Theme::default();
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal
        .draw(|f| component.render(f, Rect::new(0, 0, width, height), &theme))
        .unwrap();
    let buffer = terminal.backend().buffer();
    (0..height)
        .map(|y| (0..width).map(|x| buffer[(x, y)].symbol().to_string()).collect::<String>())
        .collect()
}

pub fn contains(rows: &[String], needle: &str) -> bool {
    rows.iter().any(|row| row.contains(needle))
}

/// Column and row of the first `needle` on or below row `from`
pub fn position_below(rows: &[String], from: usize, needle: &str) -> (u16, u16) {
    rows.iter()
        .enumerate()
        .skip(from)
        .find_map(|(y, row)| {
            row.find(needle)
                .map(|byte| (row[..byte].chars().count() as u16, y as u16))
        })
        .expect("text should be on screen")
}

pub fn position_of(rows: &[String], needle: &str) -> (u16, u16) {
    position_below(rows, 0, needle)
}
