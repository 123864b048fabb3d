//! Shared CLI plumbing: error type, exit codes, data loading.

use std::fmt;

use serde::Serialize;
use tracing::debug;

use crate::config::Config;
use crate::error::PaletteError;
use crate::models::SchoolData;
use crate::services::loader;

/// Process exit codes for CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// IO, fetch, parse or clipboard failure
    IoError = 1,
    /// Bad arguments or an empty result the command refuses to emit
    ValidationError = 2,
    /// Unknown conference or school
    NotFound = 3,
}

impl ExitCode {
    /// Numeric code passed to `std::process::exit`.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by CLI commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Exit code to report
    pub exit_code: ExitCode,
    /// Message printed to stderr
    pub message: String,
}

impl CliError {
    /// IO-class error (exit code 1).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::IoError,
            message: message.into(),
        }
    }

    /// Validation error (exit code 2).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::ValidationError,
            message: message.into(),
        }
    }

    /// Not-found error (exit code 3).
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            exit_code: ExitCode::NotFound,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

impl From<PaletteError> for CliError {
    fn from(err: PaletteError) -> Self {
        match err {
            PaletteError::NotFound(_) => Self::not_found(err.to_string()),
            PaletteError::Fetch { .. } | PaletteError::Parse(_) | PaletteError::Clipboard(_) => {
                Self::io(err.to_string())
            }
        }
    }
}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Loads school data from `override_source`, else the configured source.
pub fn load_school_data(override_source: Option<&str>) -> CliResult<SchoolData> {
    let config = Config::load()
        .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;
    let source = config
        .data_source(override_source)
        .map_err(|e| CliError::validation(format!("{e:#}")))?;

    debug!("Loading school data from {source}");
    Ok(loader::load(&source)?)
}

/// Prints `value` as pretty JSON on stdout.
pub fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    let json = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_errors_map_to_exit_codes() {
        let not_found: CliError = PaletteError::NotFound("XYZ".to_string()).into();
        assert_eq!(not_found.exit_code, ExitCode::NotFound);
        assert_eq!(not_found.exit_code.code(), 3);

        let fetch: CliError = PaletteError::fetch("x.json", "missing").into();
        assert_eq!(fetch.exit_code, ExitCode::IoError);

        let clipboard: CliError = PaletteError::Clipboard("denied".to_string()).into();
        assert_eq!(clipboard.exit_code.code(), 1);
    }
}
