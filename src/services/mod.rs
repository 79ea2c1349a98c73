// Application services
//
// Orchestrate domain types and repositories: recording games, managing
// registered players, loading rosters, and picking teams from a roster file.

pub mod errors;
pub mod game_recorder;
pub mod player_registry;
pub mod roster;
pub mod team_picker;

// Re-export main types
pub use errors::{RecorderError, RegistryError, RosterError};
pub use game_recorder::GameRecorder;
pub use player_registry::{default_squad, PlayerRegistry};
pub use roster::{load_roster, parse_roster};
pub use team_picker::{pick_teams, render_teams, PickError};
