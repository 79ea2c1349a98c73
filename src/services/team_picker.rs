use std::path::Path;

use thiserror::Error;

use super::errors::RosterError;
use super::roster::load_roster;
use crate::domain::errors::BalanceError;
use crate::domain::team::{BalancedTeams, TeamBalancer};

/// Errors that stop the picker from producing teams
#[derive(Debug, Error)]
pub enum PickError {
    #[error(transparent)]
    Roster(#[from] RosterError),

    #[error(transparent)]
    Balance(#[from] BalanceError),

    #[error("Failed to serialize teams: {0}")]
    Render(#[from] serde_json::Error),
}

pub type PickResult<T> = Result<T, PickError>;

/// Loads a roster file and balances its available players
pub fn pick_teams(roster_path: impl AsRef<Path>) -> PickResult<BalancedTeams> {
    let players = load_roster(roster_path)?;
    let teams = TeamBalancer::new().balance(&players)?;

    tracing::info!(
        red_total = teams.red_team.total_skill(),
        yellow_total = teams.yellow_team.total_skill(),
        difference = teams.skill_difference(),
        "Balanced {} players per side",
        teams.red_team.len()
    );

    Ok(teams)
}

/// Pretty JSON with `red_team` and `yellow_team` keys
pub fn render_teams(teams: &BalancedTeams) -> PickResult<String> {
    Ok(serde_json::to_string_pretty(teams)?)
}
