use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoringType {
    Confidence,
    Straight,
    Survivor,
}

impl ScoringType {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Confidence => "Confidence",
            Self::Straight => "Straight Up",
            Self::Survivor => "Survivor",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commissioner {
    pub id: u32,
    pub username: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct League {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub commissioner_id: u32,
    pub is_public: bool,
    pub max_participants: u32,
    pub entry_fee: f64,
    pub scoring_type: ScoringType,
    pub season_year: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub current_participants: Option<u32>,
    #[serde(default)]
    pub commissioner: Option<Commissioner>,
}

impl League {
    /// An unknown or zero participant count never counts as full
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.current_participants
            .is_some_and(|count| count > 0 && count >= self.max_participants)
    }
}
