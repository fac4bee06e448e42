//! Rendering backends
//!
//! Components never pick colors themselves. They classify what they draw
//! (a danger button, a disabled field, a day at the start of the range) and ask
//! the active [`StyleSheet`] for the matching [`Style`]. Two sheets ship with the
//! crate; [`Skin`] selects one at startup.

pub mod classes;
pub mod classic;
pub mod material;
pub mod variants;

use std::fmt;
use std::sync::Arc;

use ratatui::style::Style;
use ratatui::widgets::BorderType;
use serde::{Deserialize, Serialize};

use crate::date_range::DayCell;
use crate::icons::{IconService, IconTheme};

pub use classes::ClassList;
pub use classic::ClassicStyleSheet;
pub use material::MaterialStyleSheet;
pub use variants::{AlertVariant, BadgeVariant, ButtonVariant, ControlState, ExtendedSize, LoadingColor, Size};

/// Maps semantic classifications to terminal styles
pub trait StyleSheet: Send + Sync {
    fn name(&self) -> &'static str;

    /// Body text
    fn text(&self) -> Style;
    /// Secondary text: helper lines, captions, placeholders
    fn muted(&self) -> Style;
    fn title(&self) -> Style;
    fn border(&self, focused: bool) -> Style;
    fn border_type(&self) -> BorderType;

    fn button(&self, variant: ButtonVariant, state: ControlState) -> Style;
    fn badge(&self, variant: BadgeVariant) -> Style;
    fn alert(&self, variant: AlertVariant) -> Style;

    /// Text inside an input, select or textarea
    fn field(&self, state: ControlState) -> Style;
    fn label(&self) -> Style;
    fn helper(&self, error: bool) -> Style;
    fn loading(&self, color: LoadingColor) -> Style;

    /// One calendar day; `cursor` marks the keyboard position
    fn day(&self, cell: &DayCell, cursor: bool) -> Style;
    /// Range position chip
    fn chip(&self, active: bool) -> Style;

    /// Row belonging to the signed in user
    fn highlight(&self) -> Style;
    /// Row or tile under the cursor
    fn selection(&self) -> Style;
    fn link(&self, active: bool) -> Style;
    fn accent(&self) -> Style;
}

/// Which [`StyleSheet`] renders the components
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Skin {
    #[default]
    Classic,
    Material,
}

impl Skin {
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            Self::Classic => Self::Material,
            Self::Material => Self::Classic,
        }
    }

    #[must_use]
    pub fn stylesheet(self) -> Arc<dyn StyleSheet> {
        match self {
            Self::Classic => Arc::new(ClassicStyleSheet),
            Self::Material => Arc::new(MaterialStyleSheet),
        }
    }
}

/// Everything a component needs to draw itself: styles and glyphs
#[derive(Clone)]
pub struct Theme {
    skin: Skin,
    styles: Arc<dyn StyleSheet>,
    pub icons: IconService,
}

impl fmt::Debug for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Theme")
            .field("skin", &self.skin)
            .field("styles", &self.styles.name())
            .field("icons", &self.icons)
            .finish()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(Skin::default(), IconTheme::default())
    }
}

impl Theme {
    #[must_use]
    pub fn new(skin: Skin, icon_theme: IconTheme) -> Self {
        Self {
            skin,
            styles: skin.stylesheet(),
            icons: IconService::new(icon_theme),
        }
    }

    /// Use a custom stylesheet, e.g. a host's brand colors
    #[must_use]
    pub fn with_stylesheet(mut self, styles: Arc<dyn StyleSheet>) -> Self {
        self.styles = styles;
        self
    }

    #[must_use]
    pub fn skin(&self) -> Skin {
        self.skin
    }

    #[must_use]
    pub fn styles(&self) -> &dyn StyleSheet {
        self.styles.as_ref()
    }

    pub fn set_skin(&mut self, skin: Skin) {
        self.skin = skin;
        self.styles = skin.stylesheet();
    }

    pub fn cycle_skin(&mut self) {
        self.set_skin(self.skin.next());
    }
}
