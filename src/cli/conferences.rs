//! `conferences` command: list every conference in the data source.

use clap::Args;
use serde::Serialize;

use crate::cli::common::{load_school_data, print_json, CliResult};
use crate::services::renderer::{list_conferences, ConferenceSummary};

/// List conferences with their school counts
#[derive(Debug, Clone, Args)]
pub struct ConferencesArgs {
    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct ConferencesResponse {
    conferences: Vec<ConferenceSummary>,
    count: usize,
}

impl ConferencesArgs {
    /// Execute the conferences command
    pub fn execute(&self, data_source: Option<&str>) -> CliResult<()> {
        let data = load_school_data(data_source)?;
        let conferences = list_conferences(Some(&data));

        if self.json {
            let count = conferences.len();
            return print_json(&ConferencesResponse { conferences, count });
        }

        if conferences.is_empty() {
            println!("No conferences found.");
            return Ok(());
        }

        let key_width = conferences.iter().map(|c| c.key.len()).max().unwrap_or(0);
        for conference in &conferences {
            println!(
                "{:<key_width$}  {} ({} schools)",
                conference.key, conference.full_name, conference.school_count
            );
        }
        Ok(())
    }
}
