//! Core UI functionality.
//!
//! - [`actions`] - Notifications returned by components
//! - [`component`] - Base component trait
//! - [`event_handler`] - Terminal event polling for the showcase runtime
//!
//! Components implement [`Component`]: the host feeds them terminal events and
//! a render area, and receives [`Action`]s back. Components never reach into
//! host state.

pub mod actions;
pub mod component;
pub mod event_handler;

pub use actions::Action;
pub use component::Component;
pub use event_handler::{EventHandler, EventType};
