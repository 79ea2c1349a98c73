use serde::{Deserialize, Serialize};

use super::value_objects::{PlayerAttributes, PlayerName};
use crate::domain::errors::ValidationResult;

fn default_available() -> bool {
    true
}

/// A player who can be picked for a game
///
/// Players are plain values: balancing and game recording copy them into
/// teams and never mutate the caller's list.
///
/// # Example
/// ```
/// use football_teams::domain::player::Player;
///
/// let player = Player::new("Glenn", [7, 7, 6, 8]).expect("valid player");
/// assert_eq!(player.skill_score(), 28);
/// assert!(player.is_available());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Player {
    name: PlayerName,
    attributes: PlayerAttributes,
    #[serde(default = "default_available")]
    available: bool,
}

impl Player {
    /// Creates an available player
    ///
    /// # Arguments
    /// * `name` - Player name (cannot be blank)
    /// * `ratings` - `[attacking, defending, goalkeeping, energy]`, each 1-10
    pub fn new(name: impl Into<String>, ratings: [u8; 4]) -> ValidationResult<Self> {
        let [attacking, defending, goalkeeping, energy] = ratings;
        Ok(Self {
            name: PlayerName::new(name)?,
            attributes: PlayerAttributes::new(attacking, defending, goalkeeping, energy)?,
            available: true,
        })
    }

    /// Returns a copy of this player with the given availability
    pub fn with_availability(mut self, available: bool) -> Self {
        self.available = available;
        self
    }

    /// Sum of the four skill attributes
    pub fn skill_score(&self) -> u32 {
        self.attributes.total()
    }

    // ===== Getters =====

    /// Returns the player's name
    pub fn name(&self) -> &PlayerName {
        &self.name
    }

    /// Returns the player's skill attributes
    pub fn attributes(&self) -> &PlayerAttributes {
        &self.attributes
    }

    /// Whether the player can be picked this week
    pub fn is_available(&self) -> bool {
        self.available
    }
}
