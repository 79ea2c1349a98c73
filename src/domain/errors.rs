use thiserror::Error;

/// Errors raised when constructing domain values
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Skill rating must be between 1 and 10, got {0}")]
    SkillOutOfRange(u8),

    #[error("Player name cannot be empty")]
    EmptyPlayerName,

    #[error("Expected {expected} team, got {actual}")]
    TeamSideMismatch { expected: String, actual: String },
}

/// Errors raised by the team balancer
///
/// The balancer has a single failure mode: the number of available players
/// must be exactly 10 or 12.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BalanceError {
    #[error("Expected 10 or 12 available players, got {0}")]
    InvalidPlayerCount(usize),
}

/// Errors raised by game and player repositories
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error("Game already recorded: {0}")]
    DuplicateGame(uuid::Uuid),

    #[error("Player already exists: {0}")]
    DuplicatePlayer(String),

    #[error("Player not found: {0}")]
    PlayerNotFound(String),
}

pub type ValidationResult<T> = Result<T, ValidationError>;
pub type BalanceResult<T> = Result<T, BalanceError>;
pub type RepositoryResult<T> = Result<T, RepositoryError>;
