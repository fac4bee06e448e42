//! Terminal components and the pieces they share.
//!
//! - [`core`] - Component trait, actions and event polling
//! - [`components`] - General purpose primitives and the date range picker
//! - [`pickem`] - Football pick'em components
//! - [`layout`] - Rect arithmetic

pub mod components;
pub mod core;
pub mod layout;
pub mod pickem;

pub use self::core::{Action, Component};
pub use layout::LayoutManager;
