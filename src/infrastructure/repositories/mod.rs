// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod in_memory_game_repository;
pub mod in_memory_player_repository;

pub use in_memory_game_repository::InMemoryGameRepository;
pub use in_memory_player_repository::InMemoryPlayerRepository;
