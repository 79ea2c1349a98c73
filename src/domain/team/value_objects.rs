use serde::{Deserialize, Serialize};

/// The two sides picked for every game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeamSide {
    /// Receives the players at even positions of the ranking
    Red,
    /// Receives the players at odd positions of the ranking
    Yellows,
}

impl TeamSide {
    /// Returns the opposing side
    ///
    /// # Example
    /// ```
    /// use football_teams::domain::team::TeamSide;
    ///
    /// assert_eq!(TeamSide::Red.opponent(), TeamSide::Yellows);
    /// ```
    pub fn opponent(&self) -> TeamSide {
        match self {
            TeamSide::Red => TeamSide::Yellows,
            TeamSide::Yellows => TeamSide::Red,
        }
    }

    /// Side assigned to a 0-indexed position in the skill ranking
    pub fn for_rank(position: usize) -> TeamSide {
        if position % 2 == 0 {
            TeamSide::Red
        } else {
            TeamSide::Yellows
        }
    }
}

impl std::fmt::Display for TeamSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TeamSide::Red => write!(f, "Red"),
            TeamSide::Yellows => write!(f, "Yellows"),
        }
    }
}
