use serde::{Deserialize, Serialize};

use super::game::Game;
use super::value_objects::GameOutcome;

/// Win/loss record of a single player across recorded games
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PlayerPerformance {
    pub total_games: u32,
    pub wins: u32,
    pub losses: u32,
    pub win_rate: f64,
}

impl PlayerPerformance {
    /// Tallies every game the named player appeared in
    pub fn from_games<'a>(player_name: &str, games: impl IntoIterator<Item = &'a Game>) -> Self {
        let mut performance = Self::default();

        for game in games {
            let Some(side) = game.side_of(player_name) else {
                continue;
            };

            performance.total_games += 1;
            match game.score().outcome_for(side) {
                GameOutcome::Win => performance.wins += 1,
                GameOutcome::Loss => performance.losses += 1,
            }
        }

        if performance.total_games > 0 {
            performance.win_rate = f64::from(performance.wins) / f64::from(performance.total_games);
        }

        performance
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::game::GameScore;
    use crate::domain::player::Player;
    use crate::domain::team::{Team, TeamSide};
    use chrono::NaiveDate;

    fn game(red: &[&str], yellow: &[&str], score: GameScore) -> Game {
        let side = |side, names: &[&str]| {
            Team::with_players(
                side,
                names.iter().map(|n| Player::new(*n, [5, 5, 5, 5]).unwrap()).collect(),
            )
        };
        Game::new(
            NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            side(TeamSide::Red, red),
            side(TeamSide::Yellows, yellow),
            score,
        )
        .unwrap()
    }

    #[test]
    fn no_games_means_zero_rate() {
        let performance = PlayerPerformance::from_games("Player1", &Vec::<Game>::new());

        assert_eq!(performance.total_games, 0);
        assert_eq!(performance.win_rate, 0.0);
    }

    #[test]
    fn counts_wins_and_losses_on_both_sides() {
        let games = vec![
            game(&["Player1"], &["Player2"], GameScore::new(3, 2)),
            game(&["Player2"], &["Player1"], GameScore::new(0, 1)),
            game(&["Player1"], &["Player2"], GameScore::new(1, 4)),
            game(&["Player3"], &["Player2"], GameScore::new(1, 0)),
        ];

        let performance = PlayerPerformance::from_games("Player1", &games);

        assert_eq!(performance.total_games, 3);
        assert_eq!(performance.wins, 2);
        assert_eq!(performance.losses, 1);
        assert!((performance.win_rate - 2.0 / 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn draw_counts_as_loss() {
        let games = vec![game(&["Player1"], &["Player2"], GameScore::new(2, 2))];

        let red = PlayerPerformance::from_games("Player1", &games);
        let yellow = PlayerPerformance::from_games("Player2", &games);

        assert_eq!(red.losses, 1);
        assert_eq!(yellow.losses, 1);
        assert_eq!(red.wins + yellow.wins, 0);
    }
}
