use crate::domain::errors::{RepositoryError, RepositoryResult};
use crate::domain::player::Player;
use crate::domain::repositories::PlayerRepository;

/// In-memory implementation of PlayerRepository
#[derive(Debug, Default)]
pub struct InMemoryPlayerRepository {
    players: Vec<Player>,
}

impl InMemoryPlayerRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.players.iter().position(|p| *p.name() == *name)
    }
}

impl PlayerRepository for InMemoryPlayerRepository {
    fn save(&mut self, player: Player) -> RepositoryResult<()> {
        if self.position(player.name().as_str()).is_some() {
            return Err(RepositoryError::DuplicatePlayer(player.name().to_string()));
        }

        self.players.push(player);
        Ok(())
    }

    fn find_by_name(&self, name: &str) -> RepositoryResult<Option<Player>> {
        Ok(self.position(name).map(|i| self.players[i].clone()))
    }

    fn find_all(&self) -> RepositoryResult<Vec<Player>> {
        Ok(self.players.clone())
    }

    fn update(&mut self, player: Player) -> RepositoryResult<()> {
        let index = self
            .position(player.name().as_str())
            .ok_or_else(|| RepositoryError::PlayerNotFound(player.name().to_string()))?;

        self.players[index] = player;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(name: &str, ratings: [u8; 4]) -> Player {
        Player::new(name, ratings).unwrap()
    }

    #[test]
    fn save_and_find_by_name() {
        let mut repo = InMemoryPlayerRepository::new();
        repo.save(player("Dermot", [4, 8, 6, 8])).unwrap();

        let found = repo.find_by_name("Dermot").unwrap().unwrap();
        assert_eq!(found.skill_score(), 26);
        assert!(repo.find_by_name("Tom").unwrap().is_none());
    }

    #[test]
    fn duplicate_name_is_rejected() {
        let mut repo = InMemoryPlayerRepository::new();
        repo.save(player("Tom", [3, 7, 4, 7])).unwrap();

        let result = repo.save(player("Tom", [5, 5, 5, 5]));

        assert_eq!(result.unwrap_err(), RepositoryError::DuplicatePlayer("Tom".to_string()));
        assert_eq!(repo.find_all().unwrap().len(), 1);
    }

    #[test]
    fn update_replaces_existing_player() {
        let mut repo = InMemoryPlayerRepository::new();
        repo.save(player("Connor", [5, 9, 6, 7])).unwrap();

        repo.update(player("Connor", [6, 9, 6, 7]).with_availability(false)).unwrap();

        let found = repo.find_by_name("Connor").unwrap().unwrap();
        assert_eq!(found.attributes().attacking.value(), 6);
        assert!(!found.is_available());
    }

    #[test]
    fn update_missing_player_fails() {
        let mut repo = InMemoryPlayerRepository::new();

        let result = repo.update(player("Ghost", [5, 5, 5, 5]));

        assert_eq!(result.unwrap_err(), RepositoryError::PlayerNotFound("Ghost".to_string()));
    }

    #[test]
    fn find_all_keeps_insertion_order() {
        let mut repo = InMemoryPlayerRepository::new();
        repo.save(player("Zenon", [6, 6, 6, 7])).unwrap();
        repo.save(player("Adulai", [9, 7, 6, 8])).unwrap();

        let names: Vec<String> = repo
            .find_all()
            .unwrap()
            .iter()
            .map(|p| p.name().to_string())
            .collect();
        assert_eq!(names, vec!["Zenon", "Adulai"]);
    }
}
