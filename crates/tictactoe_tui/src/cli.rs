//! Command-line interface for tictactoe.

use std::path::PathBuf;

use clap::Parser;
use tictactoe_engine::Player;

use crate::settings::Settings;

/// Two-player tic-tac-toe with running scores
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file (defaults to ./tictactoe.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Player who opens the first round (X or O)
    #[arg(long)]
    pub first_player: Option<Player>,

    /// File that receives log output
    #[arg(long)]
    pub log_file: Option<PathBuf>,

    /// Disable mouse capture (keyboard only)
    #[arg(long)]
    pub no_mouse: bool,
}

impl Cli {
    /// Applies command-line overrides on top of file settings.
    pub fn apply_to(&self, settings: Settings) -> Settings {
        let settings = match self.first_player {
            Some(player) => settings.with_first_player(player),
            None => settings,
        };
        let settings = match &self.log_file {
            Some(path) => settings.with_log_file(path.clone()),
            None => settings,
        };
        if self.no_mouse {
            settings.with_mouse(false)
        } else {
            settings
        }
    }
}
