use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::value_objects::GameScore;
use crate::domain::errors::{ValidationError, ValidationResult};
use crate::domain::team::{Team, TeamSide};

/// A played game: the two teams as they were picked and the final score
///
/// # Invariants
/// - `red_team` is labelled Red and `yellow_team` is labelled Yellows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    id: Uuid,
    date: NaiveDate,
    red_team: Team,
    yellow_team: Team,
    score: GameScore,
    recorded_at: DateTime<Utc>,
}

impl Game {
    /// Creates a new Game
    ///
    /// # Arguments
    /// * `date` - Day the game was played
    /// * `red_team` - Team labelled Red
    /// * `yellow_team` - Team labelled Yellows
    /// * `score` - Final score
    ///
    /// # Returns
    /// * `Ok(Game)` - With a fresh id and the current timestamp
    /// * `Err(ValidationError::TeamSideMismatch)` - If a team has the wrong label
    pub fn new(
        date: NaiveDate,
        red_team: Team,
        yellow_team: Team,
        score: GameScore,
    ) -> ValidationResult<Self> {
        Self::check_side(&red_team, TeamSide::Red)?;
        Self::check_side(&yellow_team, TeamSide::Yellows)?;

        Ok(Self {
            id: Uuid::new_v4(),
            date,
            red_team,
            yellow_team,
            score,
            recorded_at: Utc::now(),
        })
    }

    fn check_side(team: &Team, expected: TeamSide) -> ValidationResult<()> {
        if team.side() != expected {
            return Err(ValidationError::TeamSideMismatch {
                expected: expected.to_string(),
                actual: team.side().to_string(),
            });
        }
        Ok(())
    }

    /// Side the named player played on, if any
    ///
    /// Red is checked first, so a name listed on both sides counts as Red.
    pub fn side_of(&self, player_name: &str) -> Option<TeamSide> {
        if self.red_team.contains(player_name) {
            Some(TeamSide::Red)
        } else if self.yellow_team.contains(player_name) {
            Some(TeamSide::Yellows)
        } else {
            None
        }
    }

    // ===== Getters =====

    /// Returns the game's ID
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the day the game was played
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn red_team(&self) -> &Team {
        &self.red_team
    }

    pub fn yellow_team(&self) -> &Team {
        &self.yellow_team
    }

    /// Returns the final score
    pub fn score(&self) -> GameScore {
        self.score
    }

    /// Returns when the game was recorded
    pub fn recorded_at(&self) -> DateTime<Utc> {
        self.recorded_at
    }
}
