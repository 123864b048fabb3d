//! School palette document.
//!
//! Mirrors the static `schools.json` document: conferences keyed by a short
//! identifier, each holding a list of schools and their colors. Map order is
//! preserved as written so tabs and swatches appear in document order.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Root of the school document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchoolData {
    /// Conferences keyed by identifier (e.g., "SEC").
    ///
    /// Optional so that a document without this map still loads; asking for a
    /// conference then reports not-found instead of failing the load.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conferences: Option<IndexMap<String, Conference>>,
}

/// A named grouping of schools.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conference {
    /// Display name (e.g., "Southeastern Conference")
    pub full_name: String,
    /// Member schools in display order
    #[serde(default)]
    pub schools: Vec<School>,
}

/// One school and its palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct School {
    /// Display name
    pub full_name: String,
    /// Palette
    #[serde(default)]
    pub colors: SchoolColors,
}

/// Palette of a school. Every role is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchoolColors {
    /// Primary color value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary: Option<String>,
    /// Secondary color value
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary: Option<String>,
    /// Extra named colors keyed by `_`-separated token (e.g., "smokey_gray")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub additional: Option<IndexMap<String, String>>,
}

impl SchoolData {
    /// Bundled copy of the school document.
    pub const EMBEDDED_JSON: &'static str = include_str!("../../data/schools.json");

    /// Looks up a conference by key.
    #[must_use]
    pub fn conference(&self, key: &str) -> Option<&Conference> {
        self.conferences.as_ref()?.get(key)
    }

    /// Conference keys in document order.
    #[must_use]
    pub fn conference_keys(&self) -> Vec<&str> {
        self.conferences
            .as_ref()
            .map(|map| map.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }
}
