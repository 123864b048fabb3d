//! Conference view builder.
//!
//! Turns the loaded document and a conference key into a list of school
//! cards. Pure: the caller decides what to do with the view (the TUI swaps
//! it in wholesale, the CLI prints it, the web API serializes it).

use serde::Serialize;
use tracing::debug;

use crate::error::{PaletteError, PaletteResult};
use crate::models::{School, SchoolData};

/// Label of a school's primary color.
pub const PRIMARY_LABEL: &str = "Primary";
/// Label of a school's secondary color.
pub const SECONDARY_LABEL: &str = "Secondary";

/// One selectable color on a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Swatch {
    /// Role label ("Primary", "Secondary", or a formatted additional name)
    pub label: String,
    /// Color value as declared in the document
    pub hex: String,
}

impl Swatch {
    /// Creates a swatch.
    pub fn new(label: impl Into<String>, hex: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            hex: hex.into(),
        }
    }

    /// Hover text: label and value.
    #[must_use]
    pub fn tooltip(&self) -> String {
        format!("{} • {}", self.label, self.hex)
    }
}

/// A school with its swatches in display order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchoolCard {
    /// School display name
    pub school: String,
    /// Primary, secondary, then additional colors
    pub swatches: Vec<Swatch>,
}

impl SchoolCard {
    /// Builds the card for a school.
    #[must_use]
    pub fn from_school(school: &School) -> Self {
        let colors = &school.colors;
        let mut swatches = Vec::new();

        if let Some(primary) = &colors.primary {
            swatches.push(Swatch::new(PRIMARY_LABEL, primary));
        }
        if let Some(secondary) = &colors.secondary {
            swatches.push(Swatch::new(SECONDARY_LABEL, secondary));
        }
        if let Some(additional) = &colors.additional {
            swatches.extend(
                additional
                    .iter()
                    .map(|(token, hex)| Swatch::new(format_color_name(token), hex)),
            );
        }

        Self {
            school: school.full_name.clone(),
            swatches,
        }
    }
}

/// Everything displayed for one conference tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConferenceView {
    /// Conference key (e.g., "SEC")
    pub key: String,
    /// Conference display name
    pub full_name: String,
    /// One card per school, in document order
    pub cards: Vec<SchoolCard>,
}

impl ConferenceView {
    /// Total swatches across all cards.
    #[must_use]
    pub fn swatch_count(&self) -> usize {
        self.cards.iter().map(|card| card.swatches.len()).sum()
    }
}

/// Short description of a conference for tab bars and listings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConferenceSummary {
    /// Conference key
    pub key: String,
    /// Conference display name
    pub full_name: String,
    /// Number of member schools
    pub school_count: usize,
}

/// Builds the view for one conference.
///
/// # Errors
///
/// Returns [`PaletteError::NotFound`] when no data is loaded, when the
/// document has no `conferences` map, or when `key` isn't in it.
pub fn select_conference(data: Option<&SchoolData>, key: &str) -> PaletteResult<ConferenceView> {
    let data = data.ok_or_else(|| PaletteError::NotFound("no school data loaded".to_string()))?;
    let conferences = data
        .conferences
        .as_ref()
        .ok_or_else(|| PaletteError::NotFound("school data has no conferences".to_string()))?;
    let conference = conferences
        .get(key)
        .ok_or_else(|| PaletteError::NotFound(format!("conference '{key}'")))?;

    let cards: Vec<SchoolCard> = conference.schools.iter().map(SchoolCard::from_school).collect();
    debug!("Built {} school cards for {key}", cards.len());

    Ok(ConferenceView {
        key: key.to_string(),
        full_name: conference.full_name.clone(),
        cards,
    })
}

/// Lists conferences in document order. Empty when nothing is loaded.
#[must_use]
pub fn list_conferences(data: Option<&SchoolData>) -> Vec<ConferenceSummary> {
    data.and_then(|d| d.conferences.as_ref())
        .map(|conferences| {
            conferences
                .iter()
                .map(|(key, conference)| ConferenceSummary {
                    key: key.clone(),
                    full_name: conference.full_name.clone(),
                    school_count: conference.schools.len(),
                })
                .collect()
        })
        .unwrap_or_default()
}

/// Turns a `_`-separated color token into a label.
///
/// Each word gets its first character uppercased; the rest is kept as is.
///
/// # Examples
///
/// ```
/// use teamcolors::services::renderer::format_color_name;
///
/// assert_eq!(format_color_name("smokey_gray"), "Smokey Gray");
/// assert_eq!(format_color_name("white"), "White");
/// ```
#[must_use]
pub fn format_color_name(token: &str) -> String {
    token
        .split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Conference, SchoolColors};
    use indexmap::IndexMap;

    fn test_data() -> SchoolData {
        let mut additional = IndexMap::new();
        additional.insert("smokey_gray".to_string(), "#58595B".to_string());
        additional.insert("valley_blue".to_string(), "#006C93".to_string());

        let mut conferences = IndexMap::new();
        conferences.insert(
            "SEC".to_string(),
            Conference {
                full_name: "Southeastern Conference".to_string(),
                schools: vec![
                    School {
                        full_name: "Test U".to_string(),
                        colors: SchoolColors {
                            primary: Some("#FF0000".to_string()),
                            secondary: Some("#0000FF".to_string()),
                            additional: None,
                        },
                    },
                    School {
                        full_name: "Orange State".to_string(),
                        colors: SchoolColors {
                            primary: Some("#FF8200".to_string()),
                            secondary: None,
                            additional: Some(additional),
                        },
                    },
                ],
            },
        );

        SchoolData {
            conferences: Some(conferences),
        }
    }

    #[test]
    fn test_select_conference_builds_cards() {
        let data = test_data();
        let view = select_conference(Some(&data), "SEC").unwrap();
        assert_eq!(view.full_name, "Southeastern Conference");
        assert_eq!(view.cards.len(), 2);
        assert_eq!(
            view.cards[0].swatches,
            vec![
                Swatch::new("Primary", "#FF0000"),
                Swatch::new("Secondary", "#0000FF"),
            ]
        );
    }

    #[test]
    fn test_missing_roles_are_skipped_and_additional_ordered() {
        let data = test_data();
        let view = select_conference(Some(&data), "SEC").unwrap();
        let labels: Vec<&str> = view.cards[1]
            .swatches
            .iter()
            .map(|s| s.label.as_str())
            .collect();
        assert_eq!(labels, vec!["Primary", "Smokey Gray", "Valley Blue"]);
        assert_eq!(view.swatch_count(), 5);
    }

    #[test]
    fn test_unknown_conference_not_found() {
        let data = test_data();
        let err = select_conference(Some(&data), "XYZ").unwrap_err();
        assert!(matches!(err, PaletteError::NotFound(_)));
    }

    #[test]
    fn test_no_data_not_found() {
        assert!(matches!(
            select_conference(None, "SEC"),
            Err(PaletteError::NotFound(_))
        ));
        let empty = SchoolData::default();
        assert!(matches!(
            select_conference(Some(&empty), "SEC"),
            Err(PaletteError::NotFound(_))
        ));
    }

    #[test]
    fn test_list_conferences() {
        let data = test_data();
        let summaries = list_conferences(Some(&data));
        assert_eq!(summaries.len(), 1);
        assert_eq!(summaries[0].key, "SEC");
        assert_eq!(summaries[0].school_count, 2);
        assert!(list_conferences(None).is_empty());
    }

    #[test]
    fn test_format_color_name() {
        assert_eq!(format_color_name("smokey_gray"), "Smokey Gray");
        assert_eq!(format_color_name("hokie_stone"), "Hokie Stone");
        assert_eq!(format_color_name("PMS_186"), "PMS 186");
        assert_eq!(format_color_name("navy"), "Navy");
        assert_eq!(format_color_name(""), "");
    }

    #[test]
    fn test_swatch_tooltip() {
        let swatch = Swatch::new("Primary", "#9E1B32");
        assert_eq!(swatch.tooltip(), "Primary • #9E1B32");
    }
}
