//! Service layer: loading, view building and clipboard access.
//!
//! Services are shared by the TUI, the CLI and the web API so all three
//! surfaces agree on what a conference looks like.

pub mod clipboard;
pub mod loader;
pub mod renderer;

// Re-export commonly used types and functions
pub use clipboard::{copy_color, export_selection, ClipboardBridge, MemoryClipboard, SystemClipboard};
pub use loader::{load, DataSource, LoadState, LoadStatus};
pub use renderer::{
    format_color_name, list_conferences, select_conference, ConferenceSummary, ConferenceView,
    SchoolCard, Swatch,
};
