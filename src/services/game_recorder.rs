use chrono::NaiveDate;

use super::errors::RecorderResult;
use crate::domain::game::{Game, GameScore, PlayerPerformance};
use crate::domain::repositories::GameRepository;
use crate::domain::team::Team;
use crate::infrastructure::repositories::InMemoryGameRepository;

/// Records played games and answers simple win/loss questions about them
///
/// Generic over the storage adapter so callers can swap the in-memory
/// repository for another implementation of [`GameRepository`].
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use football_teams::domain::game::GameScore;
/// use football_teams::domain::player::Player;
/// use football_teams::domain::team::{Team, TeamSide};
/// use football_teams::services::GameRecorder;
///
/// let mut recorder = GameRecorder::in_memory();
/// let red = Team::with_players(TeamSide::Red, vec![Player::new("Liam", [10, 6, 4, 7]).unwrap()]);
/// let yellow = Team::new(TeamSide::Yellows);
///
/// recorder
///     .record_game(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(), red, yellow, GameScore::new(3, 2))
///     .expect("game recorded");
///
/// let stats = recorder.player_performance("Liam").expect("stats");
/// assert_eq!(stats.wins, 1);
/// ```
#[derive(Debug)]
pub struct GameRecorder<R: GameRepository> {
    repository: R,
}

impl GameRecorder<InMemoryGameRepository> {
    /// Creates a recorder backed by an empty in-memory repository
    pub fn in_memory() -> Self {
        Self::new(InMemoryGameRepository::new())
    }
}

impl Default for GameRecorder<InMemoryGameRepository> {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl<R: GameRepository> GameRecorder<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Returns the underlying repository
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Records a new game with its teams and score
    ///
    /// # Returns
    /// * `Ok(Game)` - The stored game
    /// * `Err(RecorderError::InvalidGame)` - If the teams carry the wrong labels
    /// * `Err(RecorderError::Repository)` - If the repository rejects the game
    pub fn record_game(
        &mut self,
        date: NaiveDate,
        red_team: Team,
        yellow_team: Team,
        score: GameScore,
    ) -> RecorderResult<Game> {
        let game = Game::new(date, red_team, yellow_team, score)?;
        self.repository.save(game.clone())?;

        tracing::info!(
            game_id = %game.id(),
            date = %game.date(),
            "Recorded game: {}",
            game.score()
        );

        Ok(game)
    }

    /// All recorded games, oldest first
    ///
    /// Games on the same date stay in the order they were recorded.
    pub fn game_history(&self) -> RecorderResult<Vec<Game>> {
        let mut games = self.repository.find_all()?;
        games.sort_by_key(Game::date);
        Ok(games)
    }

    /// Win/loss statistics for one player across every recorded game
    pub fn player_performance(&self, player_name: &str) -> RecorderResult<PlayerPerformance> {
        let games = self.repository.find_all()?;
        let performance = PlayerPerformance::from_games(player_name, &games);

        tracing::debug!(
            player = player_name,
            total_games = performance.total_games,
            wins = performance.wins,
            "Computed player performance"
        );

        Ok(performance)
    }
}
