//! Pick'em domain components built from the primitives in [`crate::ui::components`]

pub mod game_card;
pub mod game_pick;
pub mod league_card;
pub mod pick_form;
pub mod standings_table;

pub use game_card::{GameCard, PickArea};
pub use game_pick::{GamePick, Side};
pub use league_card::{JoinState, LeagueCard};
pub use pick_form::{PickForm, PickFormField, PickValidationError};
pub use standings_table::StandingsTable;
