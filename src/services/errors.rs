use thiserror::Error;

use crate::domain::errors::{RepositoryError, ValidationError};

/// Errors that can occur while recording or querying games
#[derive(Debug, Error)]
pub enum RecorderError {
    #[error("Invalid game: {0}")]
    InvalidGame(#[from] ValidationError),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Errors that can occur while managing registered players
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Player name {given} does not match player data {actual}")]
    PlayerNameMismatch { given: String, actual: String },

    #[error("Invalid player: {0}")]
    InvalidPlayer(#[from] ValidationError),

    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),
}

/// Errors that can occur while loading a roster file
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("Failed to read roster {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse roster: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type RecorderResult<T> = Result<T, RecorderError>;
pub type RegistryResult<T> = Result<T, RegistryError>;
pub type RosterResult<T> = Result<T, RosterError>;
