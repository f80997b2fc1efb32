//! Logging initialization
//!
//! The codebase logs through the `log` facade. This module installs a
//! `tracing-subscriber` registry as the global subscriber (console output,
//! plus an optional plain-text log file) and bridges `log` records into it.

use anyhow::{Context, Result};
use std::fs::File;
use std::sync::Arc;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, EnvFilter};

/// Default filter when RUST_LOG is not set
const DEFAULT_FILTER: &str = "info";

/// Build the filter from RUST_LOG, falling back to `info`
fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Initialize logger for console and (optionally) file output
///
/// # Arguments
/// * `log_file_path` - Path to the log file; `None` logs to the console only
///
/// # Returns
/// * `Ok(())` - Logger initialized successfully
/// * `Err(anyhow::Error)` - Log file could not be created or a logger is already installed
pub fn init_logger(log_file_path: Option<&str>) -> Result<()> {
    let file_layer = match log_file_path {
        Some(path) => {
            let file = File::create(path).with_context(|| format!("Failed to create log file {}", path))?;
            Some(fmt::layer().with_ansi(false).with_writer(Arc::new(file)))
        }
        None => None,
    };

    let subscriber = tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt::layer())
        .with(file_layer);

    tracing::subscriber::set_global_default(subscriber).context("Failed to install tracing subscriber")?;
    tracing_log::LogTracer::init().context("Failed to bridge log records into tracing")?;

    Ok(())
}
