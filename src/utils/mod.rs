//! Utility modules for pickem-ui.
//!
//! - [`datetime`] - Kickoff and join date formatting
//! - [`text`] - Initials, ordinals and number formatting used by the display components

pub mod datetime;
pub mod text;
