use serde::{Deserialize, Serialize};

use super::value_objects::TeamSide;
use crate::domain::player::Player;

/// One side of a game and the players picked for it
///
/// Teams are created fresh by every balancing call and are not persisted
/// on their own; recorded games keep a copy.
///
/// # Example
/// ```
/// use football_teams::domain::player::Player;
/// use football_teams::domain::team::{Team, TeamSide};
///
/// let team = Team::with_players(
///     TeamSide::Red,
///     vec![Player::new("Dylan", [9, 9, 7, 9]).expect("valid player")],
/// );
///
/// assert_eq!(team.side(), TeamSide::Red);
/// assert_eq!(team.total_skill(), 34);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    #[serde(rename = "name")]
    side: TeamSide,
    #[serde(default)]
    players: Vec<Player>,
}

impl Team {
    /// Creates an empty team for the given side
    pub fn new(side: TeamSide) -> Self {
        Self {
            side,
            players: Vec::new(),
        }
    }

    /// Creates a team from an existing list of players
    pub fn with_players(side: TeamSide, players: Vec<Player>) -> Self {
        Self { side, players }
    }

    /// Adds a player to the end of the team list
    pub fn add_player(&mut self, player: Player) {
        self.players.push(player);
    }

    /// Returns which side this team plays for
    pub fn side(&self) -> TeamSide {
        self.side
    }

    /// Returns the players in pick order
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Sum of every player's skill score
    pub fn total_skill(&self) -> u32 {
        self.players.iter().map(Player::skill_score).sum()
    }

    /// Whether a player with this name is on the team
    pub fn contains(&self, name: &str) -> bool {
        self.players.iter().any(|player| *player.name() == *name)
    }
}
