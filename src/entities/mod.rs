//! Domain records rendered by the pick'em components.
//!
//! These are plain values owned by the host application; components only read
//! them and hand clones back inside actions.

pub mod game;
pub mod league;
pub mod pick;
pub mod standings;
pub mod team;
pub mod user;

pub use game::{Game, GameStatus};
pub use league::{Commissioner, League, ScoringType};
pub use pick::{PickFormData, PickType, UserPick};
pub use standings::StandingsEntry;
pub use team::{Conference, Team};
pub use user::User;
