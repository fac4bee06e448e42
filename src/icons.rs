//! Icon service for managing different icon themes
//!
//! Every glyph a component draws comes from here, so a terminal without emoji
//! or box drawing support can fall back to plain ASCII.

use serde::{Deserialize, Serialize};

/// Icon theme variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconTheme {
    /// Emoji icons (colorful, modern look)
    Emoji,
    /// Unicode symbols (clean, native look)
    Unicode,
    /// ASCII characters (maximum compatibility)
    #[default]
    Ascii,
}

/// Alert severity icons
#[derive(Debug, Clone)]
pub struct AlertIcons {
    pub info: &'static str,
    pub success: &'static str,
    pub warning: &'static str,
    pub error: &'static str,
}

/// Pick state markers
#[derive(Debug, Clone)]
pub struct PickIcons {
    pub picked: &'static str,
    pub locked: &'static str,
    pub correct: &'static str,
    pub incorrect: &'static str,
    pub winner: &'static str,
}

/// Date picker glyphs
#[derive(Debug, Clone)]
pub struct PickerIcons {
    pub calendar: &'static str,
    pub clear: &'static str,
    pub previous: &'static str,
    pub next: &'static str,
}

/// Animation frames for loading indicators
#[derive(Debug, Clone)]
pub struct LoadingIcons {
    pub spinner: &'static [&'static str],
    pub dots: &'static [&'static str],
    pub pulse: &'static [&'static str],
}

/// General UI glyphs
#[derive(Debug, Clone)]
pub struct UiIcons {
    pub logo: &'static str,
    pub close: &'static str,
    pub image: &'static str,
    pub dropdown: &'static str,
    pub selected: &'static str,
}

/// Complete icon set for a specific theme
#[derive(Debug, Clone)]
pub struct IconSet {
    pub alert: AlertIcons,
    pub pick: PickIcons,
    pub picker: PickerIcons,
    pub loading: LoadingIcons,
    pub ui: UiIcons,
}

/// Icon service for managing themes and providing icons
#[derive(Debug, Clone, Default)]
pub struct IconService {
    current_theme: IconTheme,
}

impl IconService {
    /// Create a new icon service with the specified theme
    #[must_use]
    pub fn new(theme: IconTheme) -> Self {
        Self { current_theme: theme }
    }

    /// Get the current theme
    #[must_use]
    pub fn theme(&self) -> IconTheme {
        self.current_theme
    }

    /// Set the current theme
    pub fn set_theme(&mut self, theme: IconTheme) {
        self.current_theme = theme;
    }

    /// Cycle to the next icon theme in the sequence: Ascii -> Unicode -> Emoji -> Ascii
    pub fn cycle_icon_theme(&mut self) {
        self.current_theme = match self.current_theme {
            IconTheme::Ascii => IconTheme::Unicode,
            IconTheme::Unicode => IconTheme::Emoji,
            IconTheme::Emoji => IconTheme::Ascii,
        };
    }

    /// Get the complete icon set for the current theme
    #[must_use]
    pub fn icons(&self) -> IconSet {
        match self.current_theme {
            IconTheme::Emoji => Self::emoji_icons(),
            IconTheme::Unicode => Self::unicode_icons(),
            IconTheme::Ascii => Self::ascii_icons(),
        }
    }

    fn emoji_icons() -> IconSet {
        IconSet {
            alert: AlertIcons {
                info: "ℹ️",
                success: "✅",
                warning: "⚠️",
                error: "❌",
            },
            pick: PickIcons {
                picked: "✅",
                locked: "🔒",
                correct: "✅",
                incorrect: "❌",
                winner: "🏆",
            },
            picker: PickerIcons {
                calendar: "📅",
                clear: "✖",
                previous: "◀",
                next: "▶",
            },
            loading: LoadingIcons {
                spinner: &["🕐", "🕑", "🕒", "🕓", "🕔", "🕕", "🕖", "🕗", "🕘", "🕙", "🕚", "🕛"],
                dots: &["●○○", "○●○", "○○●"],
                pulse: &["⚪", "🔵"],
            },
            ui: UiIcons {
                logo: "🏈",
                close: "✖",
                image: "🖼️",
                dropdown: "🔽",
                selected: "👉",
            },
        }
    }

    fn unicode_icons() -> IconSet {
        IconSet {
            alert: AlertIcons {
                info: "ⓘ",
                success: "✓",
                warning: "⚠",
                error: "✕",
            },
            pick: PickIcons {
                picked: "✓",
                locked: "⊘",
                correct: "✓",
                incorrect: "✗",
                winner: "★",
            },
            picker: PickerIcons {
                calendar: "▦",
                clear: "×",
                previous: "‹",
                next: "›",
            },
            loading: LoadingIcons {
                spinner: &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"],
                dots: &["•··", "·•·", "··•"],
                pulse: &["○", "◎", "●", "◎"],
            },
            ui: UiIcons {
                logo: "◆",
                close: "×",
                image: "▣",
                dropdown: "▾",
                selected: "▸",
            },
        }
    }

    fn ascii_icons() -> IconSet {
        IconSet {
            alert: AlertIcons {
                info: "i",
                success: "+",
                warning: "!",
                error: "x",
            },
            pick: PickIcons {
                picked: "*",
                locked: "#",
                correct: "+",
                incorrect: "x",
                winner: "W",
            },
            picker: PickerIcons {
                calendar: "[=]",
                clear: "x",
                previous: "<",
                next: ">",
            },
            loading: LoadingIcons {
                spinner: &["|", "/", "-", "\\"],
                dots: &[".  ", ".. ", "..."],
                pulse: &["o", "O"],
            },
            ui: UiIcons {
                logo: "@",
                close: "x",
                image: "[img]",
                dropdown: "v",
                selected: ">",
            },
        }
    }

    #[must_use]
    pub fn calendar(&self) -> &'static str {
        self.icons().picker.calendar
    }

    #[must_use]
    pub fn clear(&self) -> &'static str {
        self.icons().picker.clear
    }

    #[must_use]
    pub fn close(&self) -> &'static str {
        self.icons().ui.close
    }

    #[must_use]
    pub fn locked(&self) -> &'static str {
        self.icons().pick.locked
    }

    /// Frame `tick` of a looping animation
    #[must_use]
    pub fn frame(frames: &'static [&'static str], tick: usize) -> &'static str {
        if frames.is_empty() {
            ""
        } else {
            frames[tick % frames.len()]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme() {
        let service = IconService::default();
        assert_eq!(service.theme(), IconTheme::Ascii);
    }

    #[test]
    fn test_frames_wrap() {
        let frames = IconService::new(IconTheme::Ascii).icons().loading.spinner;
        assert_eq!(IconService::frame(frames, 0), "|");
        assert_eq!(IconService::frame(frames, 5), "/");
        assert_eq!(IconService::frame(&[], 3), "");
    }
}
