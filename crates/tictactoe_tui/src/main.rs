//! Tic-tac-toe in the terminal.

use std::path::Path;

use anyhow::Result;
use clap::Parser;
use tictactoe_tui::{Cli, DEFAULT_CONFIG_PATH, Settings, init_logging, run};
use tracing::{error, info};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let default_path = Path::new(DEFAULT_CONFIG_PATH);
    let explicit = cli.config.as_deref();
    let settings = cli.apply_to(Settings::load_with_default(explicit, default_path)?);

    // Settings name the log file, so anything logged while loading them is
    // reported here instead.
    init_logging(&settings)?;
    match Settings::source(explicit, default_path) {
        Some(path) => info!(path = %path.display(), "Settings file loaded"),
        None => info!("No settings file, using defaults"),
    }
    info!(?settings, "Settings resolved");

    let result = run(&settings);
    if let Err(err) = &result {
        error!(error = ?err, "Game loop error");
    }
    result
}
