//! Shared test fixtures for integration tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use std::fs;
use std::path::{Path, PathBuf};

use teamcolors::models::SchoolData;
use teamcolors::services::loader;

/// Small school document: two conferences, one school with additional colors.
pub const SAMPLE_JSON: &str = r##"{
  "conferences": {
    "SEC": {
      "fullName": "Southeastern Conference",
      "schools": [
        {
          "fullName": "Test U",
          "colors": { "primary": "#FF0000", "secondary": "#0000FF" }
        },
        {
          "fullName": "Orange State",
          "colors": {
            "primary": "#FF8200",
            "secondary": "#FFFFFF",
            "additional": { "smokey_gray": "#58595B", "river_blue": "#006C93" }
          }
        }
      ]
    },
    "ACC": {
      "fullName": "Atlantic Coast Conference",
      "schools": [
        { "fullName": "Blue Tech", "colors": { "primary": "#003087", "secondary": "#B3A369" } }
      ]
    }
  }
}"##;

/// Parsed [`SAMPLE_JSON`].
pub fn sample_data() -> SchoolData {
    loader::parse(SAMPLE_JSON).expect("sample data parses")
}

/// Writes [`SAMPLE_JSON`] into `dir` and returns the file path.
pub fn write_sample_data(dir: &Path) -> PathBuf {
    let path = dir.join("schools.json");
    fs::write(&path, SAMPLE_JSON).expect("Failed to write sample data");
    path
}
