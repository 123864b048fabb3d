//! CLI command handlers for Team Colors.
//!
//! Headless, scriptable access to the school data and the color export for
//! automation and tests.

pub mod common;
pub mod conferences;
pub mod config;
pub mod export;
pub mod show;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use conferences::ConferencesArgs;
pub use config::ConfigArgs;
pub use export::ExportArgs;
pub use show::ShowArgs;
