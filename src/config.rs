use clap::Parser;
use std::path::PathBuf;

/// Runtime configuration for the command-line picker
///
/// Values come from the command line first, then the environment (load a
/// `.env` file with `dotenv::dotenv()` before parsing), then defaults.
#[derive(Debug, Clone, PartialEq, Eq, Parser)]
#[command(name = "football-teams")]
#[command(about = "Pick two balanced teams from a JSON roster", long_about = None)]
pub struct Config {
    /// JSON roster file to balance
    #[arg(env = "ROSTER_PATH", default_value = "players.json")]
    pub roster_path: PathBuf,
}
