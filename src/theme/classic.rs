//! Hand written styling with the terminal's named colors

use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::BorderType;

use super::variants::{AlertVariant, BadgeVariant, ButtonVariant, ControlState, LoadingColor};
use super::StyleSheet;
use crate::date_range::DayCell;

#[derive(Debug, Clone, Copy, Default)]
pub struct ClassicStyleSheet;

impl StyleSheet for ClassicStyleSheet {
    fn name(&self) -> &'static str {
        "classic"
    }

    fn text(&self) -> Style {
        Style::default().fg(Color::White)
    }

    fn muted(&self) -> Style {
        Style::default().fg(Color::Gray)
    }

    fn title(&self) -> Style {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    }

    fn border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        }
    }

    fn border_type(&self) -> BorderType {
        BorderType::Rounded
    }

    fn button(&self, variant: ButtonVariant, state: ControlState) -> Style {
        if state.disabled {
            return Style::default().fg(Color::DarkGray).bg(Color::Black);
        }
        let base = match variant {
            ButtonVariant::Primary => Style::default().fg(Color::Black).bg(Color::Blue),
            ButtonVariant::Secondary => Style::default().fg(Color::Black).bg(Color::Gray),
            ButtonVariant::Outline => Style::default().fg(Color::Blue),
            ButtonVariant::Ghost => Style::default().fg(Color::White),
            ButtonVariant::Danger => Style::default().fg(Color::White).bg(Color::Red),
        };
        if state.focused {
            base.add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else {
            base.add_modifier(Modifier::BOLD)
        }
    }

    fn badge(&self, variant: BadgeVariant) -> Style {
        let (fg, bg) = match variant {
            BadgeVariant::Default => (Color::Black, Color::Gray),
            BadgeVariant::Primary => (Color::Black, Color::Blue),
            BadgeVariant::Success => (Color::Black, Color::Green),
            BadgeVariant::Warning => (Color::Black, Color::Yellow),
            BadgeVariant::Error => (Color::White, Color::Red),
            BadgeVariant::Info => (Color::Black, Color::Cyan),
        };
        Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD)
    }

    fn alert(&self, variant: AlertVariant) -> Style {
        let color = match variant {
            AlertVariant::Info => Color::Cyan,
            AlertVariant::Success => Color::Green,
            AlertVariant::Warning => Color::Yellow,
            AlertVariant::Error => Color::Red,
        };
        Style::default().fg(color)
    }

    fn field(&self, state: ControlState) -> Style {
        if state.disabled {
            Style::default().fg(Color::DarkGray)
        } else if state.error {
            Style::default().fg(Color::LightRed)
        } else {
            Style::default().fg(Color::White)
        }
    }

    fn label(&self) -> Style {
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
    }

    fn helper(&self, error: bool) -> Style {
        if error {
            Style::default().fg(Color::Red)
        } else {
            Style::default().fg(Color::Gray)
        }
    }

    fn loading(&self, color: LoadingColor) -> Style {
        match color {
            LoadingColor::Primary => Style::default().fg(Color::Blue),
            LoadingColor::Secondary => Style::default().fg(Color::Gray),
            LoadingColor::White => Style::default().fg(Color::White),
        }
    }

    fn day(&self, cell: &DayCell, cursor: bool) -> Style {
        let mut style = if cell.is_disabled {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
        } else if cell.is_selected() {
            Style::default().fg(Color::Black).bg(Color::Blue).add_modifier(Modifier::BOLD)
        } else if cell.is_in_range {
            Style::default().fg(Color::White).bg(Color::DarkGray)
        } else if cell.is_outside_month {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::White)
        };
        if cell.is_today {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        if cursor {
            style = style.add_modifier(Modifier::REVERSED);
        }
        style
    }

    fn chip(&self, active: bool) -> Style {
        if active {
            Style::default().fg(Color::Black).bg(Color::Blue).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        }
    }

    fn highlight(&self) -> Style {
        Style::default().bg(Color::Blue).fg(Color::White)
    }

    fn selection(&self) -> Style {
        Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD)
    }

    fn link(&self, active: bool) -> Style {
        if active {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(Color::Gray)
        }
    }

    fn accent(&self) -> Style {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    }
}
