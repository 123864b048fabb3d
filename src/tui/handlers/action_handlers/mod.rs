//! Action handlers organized by category

/// Card, swatch and conference navigation handlers
pub mod navigation;

/// Selected colors handlers (pick, remove, copy, clear, format)
pub mod selection;

/// Panel, theme, help and quit handlers
pub mod view;
