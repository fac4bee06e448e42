//! Notifications emitted by components
//!
//! A component never calls back into the host. Every interaction returns an
//! [`Action`] describing what happened, carrying complete values rather than
//! deltas. Interactions that raise several notifications return them in
//! dispatch order inside [`Action::Batch`].

use crate::date_range::PickerEvent;
use crate::entities::{Game, League, PickFormData, StandingsEntry, User};
use crate::ui::components::select::SelectValue;

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Action {
    #[default]
    None,
    Batch(Vec<Action>),
    Quit,

    // Buttons and generic presses
    Pressed(String),

    // Form fields
    InputChanged {
        name: String,
        value: String,
    },
    InputFocused(String),
    InputBlurred(String),
    SelectChanged {
        name: String,
        value: SelectValue,
    },

    // Header and overlays
    Navigate(String),
    Login,
    Logout,
    UserMenuToggled(bool),
    ModalClosed,
    AlertDismissed,

    // Date range picker
    DateRange(PickerEvent),

    // Domain components
    UserSelected(Box<User>),
    LeagueSelected(Box<League>),
    JoinLeague(Box<League>),
    GameSelected(Box<Game>),
    PickGame(Box<Game>),
    PickTeam {
        game_id: u32,
        team_id: u32,
    },
    SubmitPick(PickFormData),
    CancelPick,
    StandingsRowSelected(Box<StandingsEntry>),
}

impl Action {
    /// Combine actions in order, flattening nested batches and dropping `None`.
    ///
    /// An empty result is `None` and a single action is returned as is.
    pub fn batch(actions: impl IntoIterator<Item = Action>) -> Action {
        let mut flat = Vec::new();
        for action in actions {
            flat.extend(action.into_vec());
        }
        match flat.len() {
            0 => Action::None,
            1 => flat.remove(0),
            _ => Action::Batch(flat),
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Action::None)
    }

    /// The individual notifications, in dispatch order
    pub fn into_vec(self) -> Vec<Action> {
        match self {
            Action::None => Vec::new(),
            Action::Batch(actions) => actions.into_iter().flat_map(Action::into_vec).collect(),
            action => vec![action],
        }
    }

    /// Wrap date picker notifications
    pub fn from_picker_events(events: Vec<PickerEvent>) -> Action {
        Action::batch(events.into_iter().map(Action::DateRange))
    }
}
