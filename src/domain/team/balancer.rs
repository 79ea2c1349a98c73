use serde::{Deserialize, Serialize};
use std::cmp::Reverse;

use super::team::Team;
use super::value_objects::TeamSide;
use crate::domain::errors::{BalanceError, BalanceResult};
use crate::domain::player::Player;

/// The two teams produced by a balancing run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BalancedTeams {
    pub red_team: Team,
    pub yellow_team: Team,
}

impl BalancedTeams {
    /// Absolute difference between the two teams' total skill
    pub fn skill_difference(&self) -> u32 {
        self.red_team.total_skill().abs_diff(self.yellow_team.total_skill())
    }

    /// Splits into `(red, yellow)`
    pub fn into_pair(self) -> (Team, Team) {
        (self.red_team, self.yellow_team)
    }
}

/// Splits available players into two equal teams of similar total skill
///
/// Players are ranked by skill score, highest first, and dealt out
/// alternately: Red takes ranks 1, 3, 5, ... and Yellows takes 2, 4, 6, ...
/// Equal scores keep their input order, so the same input always produces
/// the same teams. This is a greedy heuristic, not an optimal partition.
///
/// The balancer is a pure function of its input: it never mutates the
/// caller's list and holds no state between calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct TeamBalancer;

impl TeamBalancer {
    pub fn new() -> Self {
        Self
    }

    /// Balances the available players into Red and Yellows
    ///
    /// # Arguments
    /// * `players` - Full player list; unavailable players are ignored
    ///
    /// # Returns
    /// * `Ok(BalancedTeams)` - Two teams of 5 (10 available) or 6 (12 available)
    /// * `Err(BalanceError::InvalidPlayerCount)` - Any other available count
    ///
    /// # Example
    /// ```
    /// use football_teams::domain::player::Player;
    /// use football_teams::domain::team::TeamBalancer;
    ///
    /// let players: Vec<Player> = (1..=10)
    ///     .map(|i| Player::new(format!("Player {}", i), [5, 5, 5, 5]).expect("valid player"))
    ///     .collect();
    ///
    /// let teams = TeamBalancer::new().balance(&players).expect("10 available players");
    /// assert_eq!(teams.red_team.len(), 5);
    /// assert_eq!(teams.yellow_team.len(), 5);
    /// ```
    pub fn balance(&self, players: &[Player]) -> BalanceResult<BalancedTeams> {
        let available: Vec<&Player> = players.iter().filter(|p| p.is_available()).collect();

        let team_size = match available.len() {
            10 => 5,
            12 => 6,
            count => return Err(BalanceError::InvalidPlayerCount(count)),
        };

        let mut ranked: Vec<(&Player, u32)> = available
            .into_iter()
            .map(|player| (player, player.skill_score()))
            .collect();

        // Stable sort: equal scores keep input order
        ranked.sort_by_key(|&(_, score)| Reverse(score));

        let mut red_team = Team::with_players(TeamSide::Red, Vec::with_capacity(team_size));
        let mut yellow_team = Team::with_players(TeamSide::Yellows, Vec::with_capacity(team_size));

        for (position, (player, _)) in ranked.into_iter().enumerate() {
            match TeamSide::for_rank(position) {
                TeamSide::Red => red_team.add_player(player.clone()),
                TeamSide::Yellows => yellow_team.add_player(player.clone()),
            }
        }

        Ok(BalancedTeams {
            red_team,
            yellow_team,
        })
    }
}

/// Balances players with a default [`TeamBalancer`], returning `(red, yellow)`
pub fn balance_teams(players: &[Player]) -> BalanceResult<(Team, Team)> {
    TeamBalancer::new().balance(players).map(BalancedTeams::into_pair)
}
