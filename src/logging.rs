//! Tracing subscriber setup.
//!
//! The TUI owns the terminal, so it logs to a file in the config directory.
//! CLI commands and the web server log to stderr. `RUST_LOG` overrides the
//! default level in both cases.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::constants::LOG_FILE_NAME;

fn env_filter(verbose: bool) -> EnvFilter {
    let default = if verbose { "debug" } else { "info" };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Default log file location.
pub fn default_log_path() -> Result<PathBuf> {
    Ok(Config::config_dir()?.join(LOG_FILE_NAME))
}

/// Appends log records to `path`, creating parent directories as needed.
///
/// Does nothing if a global subscriber is already installed.
pub fn init_file_logging(path: &Path, verbose: bool) -> Result<()> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir)
            .context(format!("Failed to create log directory: {}", dir.display()))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .context(format!("Failed to open log file: {}", path.display()))?;

    let _ = tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(Mutex::new(file))
                .with_ansi(false),
        )
        .try_init();

    Ok(())
}

/// Logs to stderr, keeping stdout clean for command output.
pub fn init_stderr_logging(verbose: bool) {
    let _ = tracing_subscriber::registry()
        .with(env_filter(verbose))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}
