// Game domain module
// Contains recorded games, scores, and per-player statistics

#![allow(clippy::module_inception)]

pub mod game;
pub mod stats;
pub mod value_objects;

// Re-export main types for convenience
pub use game::Game;
pub use stats::PlayerPerformance;
pub use value_objects::{GameOutcome, GameScore};
