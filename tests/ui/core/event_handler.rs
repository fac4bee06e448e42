use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use pickem_ui::ui::core::event_handler::{EventHandler, EventType};
use std::time::Duration;

#[test]
fn test_key_presses_are_forwarded() {
    let event = Event::Key(KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE));
    assert!(matches!(EventType::from(event), EventType::Key(key) if key.code == KeyCode::Char('q')));
}

#[test]
fn test_key_releases_are_ignored() {
    let release = KeyEvent {
        code: KeyCode::Enter,
        modifiers: KeyModifiers::NONE,
        kind: KeyEventKind::Release,
        state: KeyEventState::NONE,
    };
    assert!(matches!(EventType::from(Event::Key(release)), EventType::Other));
}

#[test]
fn test_mouse_and_resize_events() {
    let mouse = MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: 4,
        row: 2,
        modifiers: KeyModifiers::NONE,
    };
    assert!(matches!(EventType::from(Event::Mouse(mouse)), EventType::Mouse(m) if m.column == 4));
    assert!(matches!(EventType::from(Event::Resize(120, 40)), EventType::Resize(120, 40)));
    assert!(matches!(EventType::from(Event::FocusGained), EventType::Other));
}

#[test]
fn test_tick_is_due_after_tick_rate() {
    let handler = EventHandler::with_tick_rate(Duration::from_millis(0));
    assert!(handler.tick_due());
    let slow = EventHandler::with_tick_rate(Duration::from_secs(3600));
    assert!(!slow.tick_due());
}
