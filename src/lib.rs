//! Team Colors Library
//!
//! Browses school color palettes grouped by athletic conference, collects
//! picked colors into an ordered, deduplicated selection, and exports that
//! selection as text. The terminal UI, the CLI commands and the optional web
//! API are thin layers over the same models and services.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod logging;
pub mod models;
pub mod services;
pub mod shortcuts;
pub mod tui;
#[cfg(feature = "web")]
pub mod web;
