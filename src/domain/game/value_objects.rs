use serde::{Deserialize, Serialize};

use crate::domain::team::TeamSide;

/// Final score of a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameScore {
    pub red_score: u32,
    pub yellow_score: u32,
}

impl GameScore {
    pub fn new(red_score: u32, yellow_score: u32) -> Self {
        Self {
            red_score,
            yellow_score,
        }
    }

    /// Goals scored by the given side
    pub fn goals_for(&self, side: TeamSide) -> u32 {
        match side {
            TeamSide::Red => self.red_score,
            TeamSide::Yellows => self.yellow_score,
        }
    }

    /// Result from the point of view of one side
    ///
    /// Only a strictly higher score is a win; a draw is a loss for both sides.
    ///
    /// # Example
    /// ```
    /// use football_teams::domain::game::{GameOutcome, GameScore};
    /// use football_teams::domain::team::TeamSide;
    ///
    /// let score = GameScore::new(3, 2);
    /// assert_eq!(score.outcome_for(TeamSide::Red), GameOutcome::Win);
    /// assert_eq!(score.outcome_for(TeamSide::Yellows), GameOutcome::Loss);
    /// ```
    pub fn outcome_for(&self, side: TeamSide) -> GameOutcome {
        if self.goals_for(side) > self.goals_for(side.opponent()) {
            GameOutcome::Win
        } else {
            GameOutcome::Loss
        }
    }
}

impl std::fmt::Display for GameScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Red {} - {} Yellows", self.red_score, self.yellow_score)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    Win,
    Loss,
}
