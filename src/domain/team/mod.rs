// Team domain module
// Contains the team entity, its side label, and the balancer that picks teams

#![allow(clippy::module_inception)]

pub mod balancer;
pub mod team;
pub mod value_objects;

// Re-export main types for convenience
pub use balancer::{balance_teams, BalancedTeams, TeamBalancer};
pub use team::Team;
pub use value_objects::TeamSide;
