//! Tracing setup.

use std::fs::File;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use crate::settings::Settings;

/// Installs a file-backed tracing subscriber.
///
/// The terminal belongs to the UI, so logs go to the configured file without
/// ANSI colours. `RUST_LOG` takes precedence over the configured filter.
pub fn init_logging(settings: &Settings) -> Result<()> {
    let log_file = File::create(settings.log_file()).with_context(|| {
        format!("Failed to create log file {}", settings.log_file().display())
    })?;

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(settings.log_filter()))
        .with_context(|| format!("Invalid log filter {:?}", settings.log_filter()))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))
}
