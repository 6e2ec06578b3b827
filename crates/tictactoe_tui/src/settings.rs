//! User settings loaded from TOML.

use std::path::{Path, PathBuf};

use derive_getters::Getters;
use derive_more::{Display, Error};
use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use tictactoe_engine::Player;
use tracing::{debug, info, instrument};

/// Settings file read when no `--config` path is given.
pub const DEFAULT_CONFIG_PATH: &str = "tictactoe.toml";

/// User-configurable settings for a session.
///
/// Every key is optional in the file; missing keys keep their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Setters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
#[setters(prefix = "with_")]
pub struct Settings {
    /// Player who opens the first round.
    first_player: Player,

    /// File receiving log output (the terminal is owned by the UI).
    log_file: PathBuf,

    /// Log filter used when `RUST_LOG` is unset.
    log_filter: String,

    /// Whether to capture mouse clicks.
    mouse: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            first_player: Player::X,
            log_file: PathBuf::from("tictactoe.log"),
            log_filter: "info".to_string(),
            mouse: true,
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read settings file: {}", e)))?;

        let settings = Self::from_toml(&content)?;
        info!(first_player = %settings.first_player, "Settings loaded");
        Ok(settings)
    }

    /// Parses settings from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse settings: {}", e)))
    }

    /// Resolves settings for startup.
    ///
    /// An explicit path must exist. Without one, [`DEFAULT_CONFIG_PATH`] is
    /// read if present and defaults are used otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_default(explicit, Path::new(DEFAULT_CONFIG_PATH))
    }

    /// Like [`Settings::load`], with `default_path` standing in for
    /// [`DEFAULT_CONFIG_PATH`].
    #[instrument(skip(default_path), fields(default_path = %default_path.display()))]
    pub fn load_with_default(
        explicit: Option<&Path>,
        default_path: &Path,
    ) -> Result<Self, ConfigError> {
        match Self::source(explicit, default_path) {
            Some(path) => Self::from_file(path),
            None => {
                debug!("No settings file, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// File that [`Settings::load_with_default`] reads, if any.
    pub fn source<'a>(explicit: Option<&'a Path>, default_path: &'a Path) -> Option<&'a Path> {
        explicit.or_else(|| default_path.exists().then_some(default_path))
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
