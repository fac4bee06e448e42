//! pickem-ui - terminal components for a football pick'em product
//!
//! Components render with Ratatui, take crossterm input and report every
//! interaction as an [`ui::Action`]. The host owns all data and decides what
//! an action means.
//!
//! # Modules
//!
//! * [`config`] - Defaults loaded from `pickem-ui.toml`
//! * [`date_range`] - Calendar math and the range selection engine
//! * [`entities`] - Teams, games, leagues, users and standings
//! * [`theme`] - Stylesheets and semantic variants
//! * [`ui`] - Primitive, date picker and pick'em components
//! * [`showcase`] - The storybook binary's stories and runtime

/// Configuration module for managing application settings
pub mod config;

/// Application constants and default values
pub mod constants;

/// Calendar grids, date policies and range selection
pub mod date_range;

/// Domain records rendered by the pick'em components
pub mod entities;

/// Icon definitions for visual representation in the TUI
pub mod icons;

/// Logging setup and the showcase's action log
pub mod logger;

/// Component gallery run by the `pickem-ui` binary
pub mod showcase;

/// Stylesheets and variant classifications
pub mod theme;

/// Terminal user interface components and rendering
pub mod ui;

/// Text and date formatting helpers
pub mod utils;
