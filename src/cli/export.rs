//! `export` command: build a selection from filters and print it.
//!
//! The selection is filled the same way picking swatches in the UI fills it,
//! so deduplication and ordering behave identically.

use clap::Args;
use std::fs;
use std::path::PathBuf;

use crate::cli::common::{load_school_data, CliError, CliResult};
use crate::constants::CLIPBOARD_HOLD;
use crate::models::{DisplayFormat, SelectionSet};
use crate::services::clipboard::{export_selection, SystemClipboard};
use crate::services::renderer::{select_conference, ConferenceView};

/// Export colors of a conference as text
#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    /// Conference key, e.g. SEC
    #[arg(short, long, value_name = "KEY")]
    pub conference: String,

    /// Only schools with this exact name (repeatable)
    #[arg(long, value_name = "NAME")]
    pub school: Vec<String>,

    /// Only swatches with this label, case-insensitive (repeatable)
    #[arg(long, value_name = "LABEL")]
    pub role: Vec<String>,

    /// Output format (hex-only or detailed)
    #[arg(short, long, value_name = "FORMAT", default_value = "hex-only")]
    pub format: DisplayFormat,

    /// Write to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Copy to the system clipboard instead of stdout (on Linux, waits until
    /// another application takes the text, at most 30 seconds)
    #[arg(long, conflicts_with = "output")]
    pub copy: bool,
}

impl ExportArgs {
    /// Picks every swatch of `view` that passes the filters, in card order.
    #[must_use]
    pub fn build_selection(&self, view: &ConferenceView) -> SelectionSet {
        let mut selection = SelectionSet::new();
        for card in &view.cards {
            if !self.school.is_empty() && !self.school.iter().any(|s| *s == card.school) {
                continue;
            }
            for swatch in &card.swatches {
                if !self.role.is_empty()
                    && !self.role.iter().any(|r| r.eq_ignore_ascii_case(&swatch.label))
                {
                    continue;
                }
                selection.add(swatch.hex.as_str(), card.school.as_str(), swatch.label.as_str());
            }
        }
        selection
    }

    /// Execute the export command
    pub fn execute(&self, data_source: Option<&str>) -> CliResult<()> {
        let data = load_school_data(data_source)?;
        let view = select_conference(Some(&data), &self.conference)?;
        let selection = self.build_selection(&view);

        if selection.is_empty() {
            return Err(CliError::validation("No colors selected"));
        }

        if self.copy {
            // Returns once another application owns the text, or after the hold
            let mut clipboard = SystemClipboard::holding(CLIPBOARD_HOLD);
            let count = export_selection(&mut clipboard, &selection, self.format)?;
            eprintln!("Copied {count} colors to the clipboard");
            return Ok(());
        }

        let text = selection.export(self.format);
        match &self.output {
            Some(path) => {
                fs::write(path, format!("{text}\n")).map_err(|e| {
                    CliError::io(format!("Failed to write {}: {e}", path.display()))
                })?;
                eprintln!("Exported {} colors to {}", selection.len(), path.display());
            }
            None => println!("{text}"),
        }
        Ok(())
    }
}
