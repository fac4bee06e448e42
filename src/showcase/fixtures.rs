//! Sample data shown by the showcase stories

use serde::Deserialize;
use thiserror::Error;

use crate::entities::{Game, League, StandingsEntry, Team, User, UserPick};

const BUNDLED: &str = include_str!("../../assets/fixtures.json");

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("invalid fixture data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("game {game_id} refers to unknown team {team_id}")]
    UnknownTeam { game_id: u32, team_id: u32 },
    #[error("pick refers to unknown game {0}")]
    UnknownGame(u32),
    #[error("fixture data has no {0}")]
    Missing(&'static str),
}

/// A user's pick together with the game it belongs to
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct FixturePick {
    pub game_id: u32,
    #[serde(flatten)]
    pub pick: UserPick,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Fixtures {
    pub teams: Vec<Team>,
    pub games: Vec<Game>,
    pub leagues: Vec<League>,
    pub users: Vec<User>,
    pub standings: Vec<StandingsEntry>,
    #[serde(default)]
    pub picks: Vec<FixturePick>,
}

impl Fixtures {
    /// The data compiled into the binary
    pub fn bundled() -> Result<Self, FixtureError> {
        Self::from_json(BUNDLED)
    }

    /// Parse fixtures and join every game to its two teams
    pub fn from_json(json: &str) -> Result<Self, FixtureError> {
        let mut fixtures: Fixtures = serde_json::from_str(json)?;
        fixtures.attach_teams()?;
        fixtures.check()?;
        Ok(fixtures)
    }

    fn attach_teams(&mut self) -> Result<(), FixtureError> {
        for game in &mut self.games {
            let find = |team_id: u32| {
                self.teams
                    .iter()
                    .find(|team| team.id == team_id)
                    .cloned()
                    .ok_or(FixtureError::UnknownTeam {
                        game_id: game.id,
                        team_id,
                    })
            };
            let home = find(game.home_team_id)?;
            let away = find(game.away_team_id)?;
            game.home_team = Some(home);
            game.away_team = Some(away);
        }
        Ok(())
    }

    fn check(&self) -> Result<(), FixtureError> {
        if self.games.is_empty() {
            return Err(FixtureError::Missing("games"));
        }
        if self.leagues.is_empty() {
            return Err(FixtureError::Missing("leagues"));
        }
        if self.users.is_empty() {
            return Err(FixtureError::Missing("users"));
        }
        if let Some(pick) = self.picks.iter().find(|pick| self.game(pick.game_id).is_none()) {
            return Err(FixtureError::UnknownGame(pick.game_id));
        }
        Ok(())
    }

    pub fn game(&self, game_id: u32) -> Option<&Game> {
        self.games.iter().find(|game| game.id == game_id)
    }

    pub fn pick_for(&self, game_id: u32) -> Option<UserPick> {
        self.picks
            .iter()
            .find(|pick| pick.game_id == game_id)
            .map(|pick| pick.pick.clone())
    }
}
