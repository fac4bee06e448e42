use super::actions::Action;
use crate::theme::Theme;
use crossterm::event::{Event, KeyEvent, MouseEvent};
use ratatui::{layout::Rect, Frame};

pub trait Component {
    fn handle_events(&mut self, event: Option<Event>) -> Action {
        match event {
            Some(Event::Key(key)) => self.handle_key_events(key),
            Some(Event::Mouse(mouse)) => self.handle_mouse_events(mouse),
            _ => Action::None,
        }
    }

    fn handle_key_events(&mut self, key: KeyEvent) -> Action;

    /// Mouse positions are matched against the area of the last render
    fn handle_mouse_events(&mut self, _mouse: MouseEvent) -> Action {
        Action::None
    }

    fn render(&mut self, f: &mut Frame, rect: Rect, theme: &Theme);

    // Optional lifecycle methods
    fn on_focus(&mut self) -> Action {
        Action::None
    }

    fn on_blur(&mut self) -> Action {
        Action::None
    }
}
