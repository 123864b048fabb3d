//! Error taxonomy for palette operations.
//!
//! Every variant is recoverable: callers log it and leave the affected view
//! unchanged. Nothing here is retried automatically.

use thiserror::Error;

/// Failure raised by the loader, renderer, or clipboard bridge.
#[derive(Debug, Error)]
pub enum PaletteError {
    /// The school document could not be retrieved (IO or network failure).
    #[error("failed to fetch school data from {source_name}: {message}")]
    Fetch {
        /// Human-readable description of the data source
        source_name: String,
        /// Underlying failure
        message: String,
    },

    /// The retrieved document is not well-formed.
    #[error("failed to parse school data: {0}")]
    Parse(#[from] serde_json::Error),

    /// A requested conference (or the conference map itself) is absent.
    #[error("not found: {0}")]
    NotFound(String),

    /// The platform clipboard refused the write or is unavailable.
    #[error("clipboard unavailable: {0}")]
    Clipboard(String),
}

impl PaletteError {
    /// Builds a [`PaletteError::Fetch`] for the given source.
    pub fn fetch(source_name: impl Into<String>, message: impl std::fmt::Display) -> Self {
        Self::Fetch {
            source_name: source_name.into(),
            message: message.to_string(),
        }
    }
}

/// Result alias for palette operations.
pub type PaletteResult<T> = Result<T, PaletteError>;
