use crate::domain::errors::RepositoryResult;
use crate::domain::player::Player;

/// Repository trait for the player registry
///
/// Players are keyed by name; names are unique within a repository.
pub trait PlayerRepository {
    /// Save a new player, failing if the name is already taken
    fn save(&mut self, player: Player) -> RepositoryResult<()>;

    /// Find a player by name
    fn find_by_name(&self, name: &str) -> RepositoryResult<Option<Player>>;

    /// All players in the order they were saved
    fn find_all(&self) -> RepositoryResult<Vec<Player>>;

    /// Replace an existing player with the same name
    fn update(&mut self, player: Player) -> RepositoryResult<()>;
}
