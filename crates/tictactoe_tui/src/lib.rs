//! Terminal front end for two-player tic-tac-toe.
//!
//! # Architecture
//!
//! - **App**: owns the one [`tictactoe_engine::Session`] and the keyboard cursor
//! - **Input**: maps keys and clicks to [`Action`]s
//! - **UI**: draws the app as a pure projection and reports the [`ScreenLayout`]
//!   used for mouse hit-testing
//! - **Runner**: terminal setup and the blocking event loop

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod cli;
mod input;
mod logging;
mod runner;
mod settings;
mod ui;

pub use app::App;
pub use cli::Cli;
pub use input::{Action, Direction, action_for_key, action_for_mouse, move_cursor};
pub use logging::init_logging;
pub use runner::run;
pub use settings::{ConfigError, DEFAULT_CONFIG_PATH, Settings};
pub use ui::{ScreenLayout, Target, draw};
