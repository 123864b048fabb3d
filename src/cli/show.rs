//! `show` command: print the school cards of one conference.

use clap::Args;

use crate::cli::common::{load_school_data, print_json, CliResult};
use crate::services::renderer::select_conference;

/// Show every school and swatch of a conference
#[derive(Debug, Clone, Args)]
pub struct ShowArgs {
    /// Conference key, e.g. SEC
    #[arg(value_name = "CONFERENCE")]
    pub conference: String,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

impl ShowArgs {
    /// Execute the show command
    pub fn execute(&self, data_source: Option<&str>) -> CliResult<()> {
        let data = load_school_data(data_source)?;
        let view = select_conference(Some(&data), &self.conference)?;

        if self.json {
            return print_json(&view);
        }

        println!("{} ({})", view.full_name, view.key);
        println!("{}", "=".repeat(view.full_name.len() + view.key.len() + 3));
        for card in &view.cards {
            println!();
            println!("{}", card.school);
            let label_width = card.swatches.iter().map(|s| s.label.len()).max().unwrap_or(0);
            for swatch in &card.swatches {
                println!("  {:<label_width$}  {}", swatch.label, swatch.hex);
            }
        }
        Ok(())
    }
}
