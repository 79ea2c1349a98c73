use uuid::Uuid;

use crate::domain::errors::{RepositoryError, RepositoryResult};
use crate::domain::game::Game;
use crate::domain::repositories::GameRepository;

/// In-memory implementation of GameRepository
///
/// Keeps games in a `Vec` in the order they were saved. Nothing survives
/// the process.
#[derive(Debug, Default)]
pub struct InMemoryGameRepository {
    games: Vec<Game>,
}

impl InMemoryGameRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

impl GameRepository for InMemoryGameRepository {
    fn save(&mut self, game: Game) -> RepositoryResult<()> {
        if self.games.iter().any(|g| g.id() == game.id()) {
            return Err(RepositoryError::DuplicateGame(game.id()));
        }

        self.games.push(game);
        Ok(())
    }

    fn find_by_id(&self, id: Uuid) -> RepositoryResult<Option<Game>> {
        Ok(self.games.iter().find(|g| g.id() == id).cloned())
    }

    fn find_all(&self) -> RepositoryResult<Vec<Game>> {
        Ok(self.games.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::game::GameScore;
    use crate::domain::team::{Team, TeamSide};
    use chrono::NaiveDate;

    fn game(day: u32) -> Game {
        Game::new(
            NaiveDate::from_ymd_opt(2024, 1, day).unwrap(),
            Team::new(TeamSide::Red),
            Team::new(TeamSide::Yellows),
            GameScore::new(1, 0),
        )
        .unwrap()
    }

    #[test]
    fn save_and_find_by_id() {
        let mut repo = InMemoryGameRepository::new();
        let game = game(15);
        let id = game.id();

        repo.save(game).unwrap();

        let found = repo.find_by_id(id).unwrap();
        assert_eq!(found.map(|g| g.id()), Some(id));
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn find_missing_returns_none() {
        let repo = InMemoryGameRepository::new();

        assert!(repo.is_empty());
        assert!(repo.find_by_id(Uuid::new_v4()).unwrap().is_none());
    }

    #[test]
    fn duplicate_id_is_rejected() {
        let mut repo = InMemoryGameRepository::new();
        let game = game(15);
        let id = game.id();

        repo.save(game.clone()).unwrap();
        let result = repo.save(game);

        assert_eq!(result.unwrap_err(), RepositoryError::DuplicateGame(id));
        assert_eq!(repo.len(), 1);
    }

    #[test]
    fn find_all_keeps_insertion_order() {
        let mut repo = InMemoryGameRepository::new();
        let later = game(22);
        let earlier = game(15);
        let ids = vec![later.id(), earlier.id()];

        repo.save(later).unwrap();
        repo.save(earlier).unwrap();

        let all: Vec<Uuid> = repo.find_all().unwrap().iter().map(|g| g.id()).collect();
        assert_eq!(all, ids);
    }
}
