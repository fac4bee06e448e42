use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PickType {
    Spread,
    OverUnder,
    #[default]
    Straight,
}

impl PickType {
    pub const ALL: [PickType; 3] = [PickType::Straight, PickType::Spread, PickType::OverUnder];

    /// Short label used on game cards
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Spread => "Spread",
            Self::OverUnder => "Over/Under",
            Self::Straight => "Straight",
        }
    }

    /// Long label used in the pick form selector
    #[must_use]
    pub fn option_label(self) -> &'static str {
        match self {
            Self::Spread => "Against Spread",
            Self::OverUnder => "Over/Under",
            Self::Straight => "Straight Up",
        }
    }

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Spread => "spread",
            Self::OverUnder => "over_under",
            Self::Straight => "straight",
        }
    }

    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|pick_type| pick_type.key() == key)
    }
}

/// A pick the user already made for a game
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPick {
    pub picked_team_id: u32,
    #[serde(default)]
    pub pick_type: PickType,
    #[serde(default)]
    pub confidence_points: Option<u32>,
    /// Known once the game is final
    #[serde(default)]
    pub is_correct: Option<bool>,
}

/// What the pick form hands back on a valid submit
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PickFormData {
    pub team_id: u32,
    pub pick_type: PickType,
    /// Only present when the form asks for confidence points
    #[serde(default)]
    pub confidence_points: Option<u32>,
}
