//! Data models for school palettes and the selected-colors list.
//!
//! Models are independent of UI and IO; loaders and views live in
//! `services` and `tui`.

pub mod rgb;
pub mod school;
pub mod selection;

// Re-export all model types
pub use rgb::RgbColor;
pub use school::{Conference, School, SchoolColors, SchoolData};
pub use selection::{ColorEntry, ColorKey, DisplayFormat, SelectionSet};
