use super::errors::{RegistryError, RegistryResult};
use crate::domain::errors::ValidationResult;
use crate::domain::player::Player;
use crate::domain::repositories::PlayerRepository;
use crate::infrastructure::repositories::InMemoryPlayerRepository;

/// Regular squad with their current ratings:
/// `(name, [attacking, defending, goalkeeping, energy])`
const DEFAULT_SQUAD: [(&str, [u8; 4]); 23] = [
    ("Dermot", [4, 8, 6, 8]),
    ("Tom", [3, 7, 4, 7]),
    ("Connor", [5, 9, 6, 7]),
    ("Rodney", [5, 7, 7, 8]),
    ("Danny G", [8, 7, 6, 6]),
    ("Jamie Sully", [9, 4, 4, 7]),
    ("Glenn", [7, 7, 6, 8]),
    ("Joseph Smash", [7, 7, 6, 5]),
    ("David", [7, 5, 4, 5]),
    ("Zenon", [6, 6, 6, 7]),
    ("Dylan", [9, 9, 7, 9]),
    ("Matt", [9, 9, 7, 9]),
    ("Will", [8, 8, 9, 6]),
    ("Dom", [9, 8, 7, 8]),
    ("Liam", [10, 6, 4, 7]),
    ("Mikael", [5, 8, 8, 8]),
    ("Callum", [7, 6, 7, 7]),
    ("Adulai", [9, 7, 6, 8]),
    ("Ringer1", [5, 5, 5, 5]),
    ("Ringer2", [5, 5, 5, 5]),
    ("Ringer3", [5, 5, 5, 5]),
    ("Ringer4", [5, 5, 5, 5]),
    ("Ringer5", [5, 5, 5, 5]),
];

/// The regular squad, all marked available
pub fn default_squad() -> ValidationResult<Vec<Player>> {
    DEFAULT_SQUAD
        .iter()
        .map(|(name, ratings)| Player::new(*name, *ratings))
        .collect()
}

/// Registry of known players, keyed by name
///
/// # Example
/// ```
/// use football_teams::domain::player::Player;
/// use football_teams::services::PlayerRegistry;
///
/// let mut registry = PlayerRegistry::in_memory();
/// registry.create_player(Player::new("Callum", [7, 6, 7, 7]).unwrap()).unwrap();
///
/// let updated = Player::new("Callum", [7, 6, 7, 7]).unwrap().with_availability(false);
/// registry.update_player("Callum", updated).unwrap();
///
/// assert!(registry.available_players().unwrap().is_empty());
/// ```
#[derive(Debug)]
pub struct PlayerRegistry<R: PlayerRepository> {
    repository: R,
}

impl PlayerRegistry<InMemoryPlayerRepository> {
    /// Creates a registry backed by an empty in-memory repository
    pub fn in_memory() -> Self {
        Self::new(InMemoryPlayerRepository::new())
    }
}

impl Default for PlayerRegistry<InMemoryPlayerRepository> {
    fn default() -> Self {
        Self::in_memory()
    }
}

impl<R: PlayerRepository> PlayerRegistry<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Registers a new player
    ///
    /// # Returns
    /// * `Ok(Player)` - The stored player
    /// * `Err(RegistryError::Repository)` - If the name is already registered
    pub fn create_player(&mut self, player: Player) -> RegistryResult<Player> {
        self.repository.save(player.clone())?;
        tracing::info!(player = %player.name(), "Registered player");
        Ok(player)
    }

    /// Looks up a player by name
    pub fn get_player(&self, name: &str) -> RegistryResult<Option<Player>> {
        Ok(self.repository.find_by_name(name)?)
    }

    /// All registered players in registration order
    pub fn list_players(&self) -> RegistryResult<Vec<Player>> {
        Ok(self.repository.find_all()?)
    }

    /// Registered players flagged as available, ready for balancing
    pub fn available_players(&self) -> RegistryResult<Vec<Player>> {
        let mut players = self.repository.find_all()?;
        players.retain(Player::is_available);
        Ok(players)
    }

    /// Replaces the player registered under `name`
    ///
    /// # Returns
    /// * `Ok(Player)` - The updated player
    /// * `Err(RegistryError::PlayerNameMismatch)` - If `name` differs from the player's name
    /// * `Err(RegistryError::Repository)` - If no player is registered under `name`
    pub fn update_player(&mut self, name: &str, player: Player) -> RegistryResult<Player> {
        if *player.name() != *name {
            return Err(RegistryError::PlayerNameMismatch {
                given: name.to_string(),
                actual: player.name().to_string(),
            });
        }

        self.repository.update(player.clone())?;
        tracing::info!(player = name, available = player.is_available(), "Updated player");
        Ok(player)
    }

    /// Registers the default squad when the registry is empty
    ///
    /// Returns the number of players added; a registry that already has
    /// players is left untouched.
    pub fn seed_defaults(&mut self) -> RegistryResult<usize> {
        let existing = self.repository.find_all()?.len();
        if existing > 0 {
            tracing::info!("Registry already contains {} players, skipping seed", existing);
            return Ok(0);
        }

        let squad = default_squad()?;
        let added = squad.len();
        for player in squad {
            self.repository.save(player)?;
        }

        tracing::info!("Seeded registry with {} default players", added);
        Ok(added)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;

    fn player(name: &str, ratings: [u8; 4]) -> Player {
        Player::new(name, ratings).unwrap()
    }

    #[test]
    fn default_squad_is_valid() {
        let squad = default_squad().unwrap();

        assert_eq!(squad.len(), 23);
        assert!(squad.iter().all(Player::is_available));
        assert_eq!(squad[0].name().as_str(), "Dermot");
    }

    #[test]
    fn create_and_list_players() {
        let mut registry = PlayerRegistry::in_memory();
        registry.create_player(player("Glenn", [7, 7, 6, 8])).unwrap();
        registry.create_player(player("David", [7, 5, 4, 5])).unwrap();

        let players = registry.list_players().unwrap();

        assert_eq!(players.len(), 2);
        assert_eq!(players[1].name().as_str(), "David");
    }

    #[test]
    fn create_duplicate_fails() {
        let mut registry = PlayerRegistry::in_memory();
        registry.create_player(player("Glenn", [7, 7, 6, 8])).unwrap();

        let result = registry.create_player(player("Glenn", [1, 1, 1, 1]));

        assert!(matches!(
            result,
            Err(RegistryError::Repository(RepositoryError::DuplicatePlayer(_)))
        ));
    }

    #[test]
    fn update_with_mismatched_name_fails() {
        let mut registry = PlayerRegistry::in_memory();
        registry.create_player(player("Liam", [10, 6, 4, 7])).unwrap();

        let result = registry.update_player("Liam", player("Matt", [9, 9, 7, 9]));

        assert!(matches!(result, Err(RegistryError::PlayerNameMismatch { .. })));
        assert!(registry.get_player("Matt").unwrap().is_none());
    }

    #[test]
    fn update_unknown_player_fails() {
        let mut registry = PlayerRegistry::in_memory();

        let result = registry.update_player("Ghost", player("Ghost", [5, 5, 5, 5]));

        assert!(matches!(
            result,
            Err(RegistryError::Repository(RepositoryError::PlayerNotFound(_)))
        ));
    }

    #[test]
    fn update_changes_availability() {
        let mut registry = PlayerRegistry::in_memory();
        registry.create_player(player("Mikael", [5, 8, 8, 8])).unwrap();
        registry.create_player(player("Callum", [7, 6, 7, 7])).unwrap();

        registry
            .update_player("Mikael", player("Mikael", [5, 8, 8, 8]).with_availability(false))
            .unwrap();

        let available = registry.available_players().unwrap();
        assert_eq!(available.len(), 1);
        assert_eq!(available[0].name().as_str(), "Callum");
    }

    #[test]
    fn seed_only_fills_empty_registry() {
        let mut registry = PlayerRegistry::in_memory();

        assert_eq!(registry.seed_defaults().unwrap(), 23);
        assert_eq!(registry.seed_defaults().unwrap(), 0);
        assert_eq!(registry.list_players().unwrap().len(), 23);
    }

    #[test]
    fn seed_skips_registry_with_players() {
        let mut registry = PlayerRegistry::in_memory();
        registry.create_player(player("Dermot", [1, 1, 1, 1])).unwrap();

        assert_eq!(registry.seed_defaults().unwrap(), 0);
        let dermot = registry.get_player("Dermot").unwrap().unwrap();
        assert_eq!(dermot.skill_score(), 4);
    }
}
