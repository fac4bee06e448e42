//! Storybook-style terminal app exercising every component
//!
//! - [`fixtures`] - Sample teams, games, leagues and standings
//! - [`stories`] - One story per component family
//! - [`app`] - Story switching, theme cycling and the event panel
//! - [`renderer`] - Terminal setup and the event loop

pub mod app;
pub mod fixtures;
pub mod renderer;
pub mod stories;

pub use app::ShowcaseApp;
pub use fixtures::{FixtureError, Fixtures};
pub use renderer::run_app;
