use std::fs;
use std::path::Path;

use super::errors::{RosterError, RosterResult};
use crate::domain::player::Player;

/// Parses a roster from a JSON array of players
///
/// Ratings and names are validated while parsing, so a roster with an
/// out-of-range attribute or a blank name is rejected as a whole.
pub fn parse_roster(json: &str) -> RosterResult<Vec<Player>> {
    let players: Vec<Player> = serde_json::from_str(json)?;
    Ok(players)
}

/// Loads a roster file from disk
///
/// # Arguments
/// * `path` - JSON file holding an array of players
///
/// # Returns
/// * `Ok(Vec<Player>)` - Players in file order
/// * `Err(RosterError::Io)` - If the file cannot be read
/// * `Err(RosterError::Parse)` - If the contents are not a valid roster
pub fn load_roster(path: impl AsRef<Path>) -> RosterResult<Vec<Player>> {
    let path = path.as_ref();
    tracing::debug!("Loading roster from {}", path.display());

    let contents = fs::read_to_string(path).map_err(|source| RosterError::Io {
        path: path.display().to_string(),
        source,
    })?;

    let players = parse_roster(&contents)?;
    let available = players.iter().filter(|p| p.is_available()).count();
    tracing::info!(
        total = players.len(),
        available,
        "Loaded roster from {}",
        path.display()
    );

    Ok(players)
}
