//! Styling delegated to the Material design palette shipped with ratatui

use ratatui::style::palette::material::{self, AccentedPalette};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::BorderType;

use super::variants::{AlertVariant, BadgeVariant, ButtonVariant, ControlState, LoadingColor};
use super::StyleSheet;
use crate::date_range::DayCell;

#[derive(Debug, Clone, Copy, Default)]
pub struct MaterialStyleSheet;

impl MaterialStyleSheet {
    const PRIMARY: AccentedPalette = material::INDIGO;
    const SECONDARY: AccentedPalette = material::TEAL;

    fn tone(palette: &AccentedPalette) -> Style {
        Style::default().fg(material::WHITE).bg(palette.c500)
    }
}

impl StyleSheet for MaterialStyleSheet {
    fn name(&self) -> &'static str {
        "material"
    }

    fn text(&self) -> Style {
        Style::default().fg(material::GRAY.c50)
    }

    fn muted(&self) -> Style {
        Style::default().fg(material::GRAY.c500)
    }

    fn title(&self) -> Style {
        Style::default().fg(Self::PRIMARY.c200).add_modifier(Modifier::BOLD)
    }

    fn border(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(Self::PRIMARY.a200)
        } else {
            Style::default().fg(material::GRAY.c700)
        }
    }

    fn border_type(&self) -> BorderType {
        BorderType::Plain
    }

    fn button(&self, variant: ButtonVariant, state: ControlState) -> Style {
        if state.disabled {
            return Style::default().fg(material::GRAY.c600).bg(material::GRAY.c800);
        }
        let base = match variant {
            ButtonVariant::Primary => Self::tone(&Self::PRIMARY),
            ButtonVariant::Secondary => Self::tone(&Self::SECONDARY),
            ButtonVariant::Outline => Style::default().fg(Self::PRIMARY.c300),
            ButtonVariant::Ghost => Style::default().fg(material::GRAY.c300),
            ButtonVariant::Danger => Self::tone(&material::RED),
        };
        if state.focused {
            base.add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            base.add_modifier(Modifier::BOLD)
        }
    }

    fn badge(&self, variant: BadgeVariant) -> Style {
        let palette = match variant {
            BadgeVariant::Default => return Style::default().fg(material::BLACK).bg(material::GRAY.c300),
            BadgeVariant::Primary => Self::PRIMARY,
            BadgeVariant::Success => material::GREEN,
            BadgeVariant::Warning => material::AMBER,
            BadgeVariant::Error => material::RED,
            BadgeVariant::Info => material::LIGHT_BLUE,
        };
        Style::default().fg(material::BLACK).bg(palette.c200)
    }

    fn alert(&self, variant: AlertVariant) -> Style {
        let palette = match variant {
            AlertVariant::Info => material::LIGHT_BLUE,
            AlertVariant::Success => material::GREEN,
            AlertVariant::Warning => material::AMBER,
            AlertVariant::Error => material::RED,
        };
        Style::default().fg(palette.c300)
    }

    fn field(&self, state: ControlState) -> Style {
        if state.disabled {
            Style::default().fg(material::GRAY.c600)
        } else if state.error {
            Style::default().fg(material::RED.c300)
        } else {
            Style::default().fg(material::GRAY.c50)
        }
    }

    fn label(&self) -> Style {
        Style::default().fg(material::GRAY.c300)
    }

    fn helper(&self, error: bool) -> Style {
        if error {
            Style::default().fg(material::RED.a200)
        } else {
            Style::default().fg(material::GRAY.c500)
        }
    }

    fn loading(&self, color: LoadingColor) -> Style {
        match color {
            LoadingColor::Primary => Style::default().fg(Self::PRIMARY.a200),
            LoadingColor::Secondary => Style::default().fg(Self::SECONDARY.a200),
            LoadingColor::White => Style::default().fg(material::WHITE),
        }
    }

    fn day(&self, cell: &DayCell, cursor: bool) -> Style {
        let mut style = if cell.is_disabled {
            Style::default().fg(material::GRAY.c700)
        } else if cell.is_selected() {
            Self::tone(&Self::PRIMARY).add_modifier(Modifier::BOLD)
        } else if cell.is_in_range {
            Style::default().fg(material::GRAY.c50).bg(Self::PRIMARY.c900)
        } else if cell.is_outside_month {
            Style::default().fg(material::GRAY.c600)
        } else {
            Style::default().fg(material::GRAY.c100)
        };
        if cell.is_today {
            style = style.fg(Self::SECONDARY.a200).add_modifier(Modifier::BOLD);
        }
        if cursor {
            style = style.add_modifier(Modifier::REVERSED);
        }
        style
    }

    fn chip(&self, active: bool) -> Style {
        if active {
            Style::default().fg(material::BLACK).bg(Self::PRIMARY.c200)
        } else {
            Style::default().fg(material::GRAY.c400).bg(material::GRAY.c800)
        }
    }

    fn highlight(&self) -> Style {
        Style::default().bg(Self::PRIMARY.c900).fg(material::WHITE)
    }

    fn selection(&self) -> Style {
        Style::default().bg(material::GRAY.c800).add_modifier(Modifier::BOLD)
    }

    fn link(&self, active: bool) -> Style {
        if active {
            Style::default().fg(Self::PRIMARY.a100).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(material::GRAY.c400)
        }
    }

    fn accent(&self) -> Style {
        Style::default().fg(material::AMBER.a200).add_modifier(Modifier::BOLD)
    }
}
