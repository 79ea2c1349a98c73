use uuid::Uuid;

use crate::domain::errors::RepositoryResult;
use crate::domain::game::Game;

/// Repository trait for recorded games
///
/// Defines the contract for storing and retrieving games.
/// Implementations decide where games live; ordering of `find_all`
/// is insertion order.
pub trait GameRepository {
    /// Save a newly recorded game
    fn save(&mut self, game: Game) -> RepositoryResult<()>;

    /// Find a game by its ID
    fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Game>>;

    /// All recorded games in the order they were saved
    fn find_all(&self) -> RepositoryResult<Vec<Game>>;
}
