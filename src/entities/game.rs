use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

use super::team::Team;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    Scheduled,
    InProgress,
    Final,
}

impl GameStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Scheduled => "Scheduled",
            Self::InProgress => "Live",
            Self::Final => "Final",
        }
    }

    /// Picks are only taken before kickoff
    #[must_use]
    pub fn has_started(self) -> bool {
        self != Self::Scheduled
    }
}

/// A scheduled or played matchup. Team records are optional joins supplied by the host.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: u32,
    pub home_team_id: u32,
    pub away_team_id: u32,
    /// Kickoff, displayed in the offset it carries
    pub kickoff: DateTime<FixedOffset>,
    pub week: u32,
    pub season_year: i32,
    #[serde(default)]
    pub home_score: Option<u32>,
    #[serde(default)]
    pub away_score: Option<u32>,
    #[serde(default)]
    pub spread: Option<f64>,
    #[serde(default)]
    pub over_under: Option<f64>,
    pub status: GameStatus,
    #[serde(default)]
    pub home_team: Option<Team>,
    #[serde(default)]
    pub away_team: Option<Team>,
}

impl Game {
    #[must_use]
    pub fn involves(&self, team_id: u32) -> bool {
        team_id == self.home_team_id || team_id == self.away_team_id
    }

    #[must_use]
    pub fn team(&self, team_id: u32) -> Option<&Team> {
        if team_id == self.home_team_id {
            self.home_team.as_ref()
        } else if team_id == self.away_team_id {
            self.away_team.as_ref()
        } else {
            None
        }
    }

    #[must_use]
    pub fn score(&self, team_id: u32) -> Option<u32> {
        if team_id == self.home_team_id {
            self.home_score
        } else if team_id == self.away_team_id {
            self.away_score
        } else {
            None
        }
    }

    /// Whether `team_id` outscored its opponent; false until both scores are known
    #[must_use]
    pub fn is_winner(&self, team_id: u32) -> bool {
        let (Some(home), Some(away)) = (self.home_score, self.away_score) else {
            return false;
        };
        if team_id == self.home_team_id {
            home > away
        } else {
            away > home
        }
    }

    /// "KC @ BUF"; unknown teams render empty
    #[must_use]
    pub fn matchup(&self) -> String {
        let abbr = |team: &Option<Team>| team.as_ref().map(|t| t.abbreviation.clone()).unwrap_or_default();
        format!("{} @ {}", abbr(&self.away_team), abbr(&self.home_team))
    }
}
