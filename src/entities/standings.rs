use serde::{Deserialize, Serialize};

use super::user::full_name;

/// One participant's line in a league table; rank and percentages come pre-computed
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StandingsEntry {
    pub user_id: u32,
    pub username: String,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    pub correct_picks: u32,
    pub total_picks: u32,
    pub confidence_points: i64,
    /// Fraction in `0.0..=1.0`
    pub win_percentage: f64,
    pub rank: u32,
    #[serde(default)]
    pub is_current_user: bool,
}

impl StandingsEntry {
    #[must_use]
    pub fn full_name(&self) -> Option<String> {
        full_name(self.first_name.as_deref(), self.last_name.as_deref())
    }

    #[must_use]
    pub fn display_name(&self) -> String {
        self.full_name().unwrap_or_else(|| self.username.clone())
    }

    /// Name used for avatar initials: trimmed "first last", falling back to the username
    #[must_use]
    pub fn avatar_name(&self) -> String {
        let joined = format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or_default(),
            self.last_name.as_deref().unwrap_or_default()
        );
        let trimmed = joined.trim();
        if trimmed.is_empty() {
            self.username.clone()
        } else {
            trimmed.to_string()
        }
    }

    #[must_use]
    pub fn losses(&self) -> u32 {
        self.total_picks.saturating_sub(self.correct_picks)
    }
}
