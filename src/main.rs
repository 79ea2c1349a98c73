use clap::Parser;

use football_teams::config::Config;
use football_teams::services::{pick_teams, render_teams};

fn main() {
    // Logs go to stderr so stdout carries only the teams JSON
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    // Load environment variables
    dotenv::dotenv().ok();

    let config = Config::parse();

    let output = pick_teams(&config.roster_path).and_then(|teams| render_teams(&teams));
    match output {
        Ok(json) => println!("{}", json),
        Err(e) => {
            tracing::error!("Failed to pick teams: {}", e);
            std::process::exit(1);
        }
    }
}
