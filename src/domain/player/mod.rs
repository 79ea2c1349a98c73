// Player domain module
// Contains the player entity and its validated value objects

#![allow(clippy::module_inception)]

pub mod player;
pub mod value_objects;

// Re-export main types for convenience
pub use player::Player;
pub use value_objects::{PlayerAttributes, PlayerName, SkillRating};
