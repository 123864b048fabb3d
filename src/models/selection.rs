//! Selected-colors accumulator.
//!
//! A [`SelectionSet`] collects the swatches a user has picked, keyed by
//! `(school, hex)` and kept in pick order. It renders itself in one of two
//! textual formats and exports the rendered lines as a single string for the
//! clipboard.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How selected colors are rendered and exported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DisplayFormat {
    /// Just the color value, e.g. `#9E1B32`
    #[default]
    #[serde(alias = "hex")]
    HexOnly,
    /// School, role, and value, e.g. `Alabama - Primary - #9E1B32`
    Detailed,
}

impl DisplayFormat {
    /// Canonical token for this format.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::HexOnly => "hex-only",
            Self::Detailed => "detailed",
        }
    }

    /// Human-readable name used in panel titles.
    #[must_use]
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::HexOnly => "Hex Only",
            Self::Detailed => "Detailed",
        }
    }

    /// The other format.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::HexOnly => Self::Detailed,
            Self::Detailed => Self::HexOnly,
        }
    }
}

impl fmt::Display for DisplayFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisplayFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "hex-only" | "hex_only" | "hex" => Ok(Self::HexOnly),
            "detailed" | "detail" => Ok(Self::Detailed),
            other => Err(format!(
                "unknown display format '{other}' (expected 'hex-only' or 'detailed')"
            )),
        }
    }
}

/// Identity of a selected color: the same hex picked from two schools is two entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColorKey {
    /// School display name
    pub school: String,
    /// Color value
    pub hex: String,
}

impl ColorKey {
    /// Creates a key from a school name and color value.
    pub fn new(school: impl Into<String>, hex: impl Into<String>) -> Self {
        Self {
            school: school.into(),
            hex: hex.into(),
        }
    }
}

impl fmt::Display for ColorKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.school, self.hex)
    }
}

/// One user-selected color.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorEntry {
    /// Color value as declared by the swatch (not validated)
    pub hex: String,
    /// School the color was picked from
    pub school: String,
    /// Role within the school's palette ("Primary", "Secondary", or an additional color name)
    #[serde(rename = "type")]
    pub color_type: String,
}

impl ColorEntry {
    /// The `(school, hex)` identity of this entry.
    #[must_use]
    pub fn key(&self) -> ColorKey {
        ColorKey::new(&self.school, &self.hex)
    }

    /// Renders this entry in the given format.
    #[must_use]
    pub fn render(&self, format: DisplayFormat) -> String {
        match format {
            DisplayFormat::HexOnly => self.hex.clone(),
            DisplayFormat::Detailed => {
                format!("{} - {} - {}", self.school, self.color_type, self.hex)
            }
        }
    }
}

/// Insertion-ordered, deduplicated collection of picked colors.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionSet {
    entries: IndexMap<ColorKey, ColorEntry>,
}

impl SelectionSet {
    /// Creates an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a color unless `(school, hex)` is already present.
    ///
    /// An existing entry is left untouched, including its role label.
    /// Returns `true` when a new entry was appended.
    pub fn add(
        &mut self,
        hex: impl Into<String>,
        school: impl Into<String>,
        color_type: impl Into<String>,
    ) -> bool {
        let hex = hex.into();
        let school = school.into();
        let key = ColorKey::new(school.clone(), hex.clone());
        if self.entries.contains_key(&key) {
            return false;
        }

        self.entries.insert(
            key,
            ColorEntry {
                hex,
                school,
                color_type: color_type.into(),
            },
        );
        true
    }

    /// Removes the entry with this key, keeping the order of the rest.
    ///
    /// Returns `true` if something was removed.
    pub fn remove(&mut self, key: &ColorKey) -> bool {
        self.entries.shift_remove(key).is_some()
    }

    /// Removes every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of selected colors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether this key is selected.
    #[must_use]
    pub fn contains(&self, key: &ColorKey) -> bool {
        self.entries.contains_key(key)
    }

    /// Entry at a position in pick order.
    #[must_use]
    pub fn get_index(&self, index: usize) -> Option<&ColorEntry> {
        self.entries.get_index(index).map(|(_, entry)| entry)
    }

    /// Entries in pick order.
    pub fn iter(&self) -> impl Iterator<Item = &ColorEntry> + Clone + '_ {
        self.entries.values()
    }

    /// Display strings, one per entry, in pick order.
    ///
    /// The iterator is lazy and can be cloned to walk the selection again.
    pub fn render(&self, format: DisplayFormat) -> impl Iterator<Item = String> + Clone + '_ {
        self.entries.values().map(move |entry| entry.render(format))
    }

    /// Rendered entries joined by newlines. An empty selection exports as `""`.
    #[must_use]
    pub fn export(&self, format: DisplayFormat) -> String {
        self.render(format).collect::<Vec<_>>().join("\n")
    }
}

impl<'a> IntoIterator for &'a SelectionSet {
    type Item = &'a ColorEntry;
    type IntoIter = indexmap::map::Values<'a, ColorKey, ColorEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_is_idempotent() {
        let mut set = SelectionSet::new();
        assert!(set.add("#FF0000", "Test U", "Primary"));
        let once = set.clone();
        assert!(!set.add("#FF0000", "Test U", "Primary"));
        assert_eq!(set, once);
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_same_hex_different_school_is_distinct() {
        let mut set = SelectionSet::new();
        set.add("#FFFFFF", "Alabama", "Secondary");
        set.add("#FFFFFF", "Arkansas", "Secondary");
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_duplicate_key_keeps_first_label() {
        let mut set = SelectionSet::new();
        set.add("#000000", "Test U", "Primary");
        set.add("#000000", "Test U", "Secondary");
        assert_eq!(set.get_index(0).unwrap().color_type, "Primary");
    }

    #[test]
    fn test_remove_then_readd_goes_to_end() {
        let mut set = SelectionSet::new();
        set.add("#111111", "A", "Primary");
        set.add("#222222", "B", "Primary");
        set.add("#333333", "C", "Primary");

        assert!(set.remove(&ColorKey::new("A", "#111111")));
        set.add("#111111", "A", "Primary");

        let hexes: Vec<String> = set.render(DisplayFormat::HexOnly).collect();
        assert_eq!(hexes, vec!["#222222", "#333333", "#111111"]);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut set = SelectionSet::new();
        set.add("#111111", "A", "Primary");
        assert!(!set.remove(&ColorKey::new("B", "#111111")));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn test_render_is_restartable() {
        let mut set = SelectionSet::new();
        set.add("#111111", "A", "Primary");
        set.add("#222222", "B", "Secondary");

        let lines = set.render(DisplayFormat::Detailed);
        let first: Vec<String> = lines.clone().collect();
        let second: Vec<String> = lines.collect();
        assert_eq!(first, second);
        assert_eq!(first[1], "B - Secondary - #222222");
    }

    #[test]
    fn test_export_empty_is_empty_string() {
        let set = SelectionSet::new();
        assert_eq!(set.export(DisplayFormat::HexOnly), "");
        assert_eq!(set.export(DisplayFormat::Detailed), "");
    }

    #[test]
    fn test_display_format_parse() {
        assert_eq!("hex".parse::<DisplayFormat>(), Ok(DisplayFormat::HexOnly));
        assert_eq!("hex-only".parse::<DisplayFormat>(), Ok(DisplayFormat::HexOnly));
        assert_eq!("Detailed".parse::<DisplayFormat>(), Ok(DisplayFormat::Detailed));
        assert!("rgb".parse::<DisplayFormat>().is_err());
    }

    #[test]
    fn test_display_format_serde_tokens() {
        let json = serde_json::to_string(&DisplayFormat::HexOnly).unwrap();
        assert_eq!(json, "\"hex-only\"");
        let parsed: DisplayFormat = serde_json::from_str("\"hex\"").unwrap();
        assert_eq!(parsed, DisplayFormat::HexOnly);
    }

    #[test]
    fn test_color_entry_serializes_type_field() {
        let entry = ColorEntry {
            hex: "#FF0000".to_string(),
            school: "Test U".to_string(),
            color_type: "Primary".to_string(),
        };
        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["type"], "Primary");
    }
}
