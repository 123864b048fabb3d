//! Configuration management CLI commands.

use crate::cli::common::{print_json, CliError, CliResult};
use crate::config::{Config, ThemeMode};
use crate::services::loader::DataSource;
use clap::{Args, Subcommand};
use serde::Serialize;

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Print the configuration file path
    Path,
    /// Set the theme mode (light, dark, or auto)
    SetTheme(SetThemeArgs),
    /// Set the school data source (file path, http(s) URL, or "embedded")
    SetData(SetDataArgs),
    /// Set the conference shown at startup
    SetDefaultConference(SetDefaultConferenceArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Set the theme mode
#[derive(Args, Debug)]
pub struct SetThemeArgs {
    /// Theme mode (light, dark, or auto)
    #[arg(value_name = "MODE")]
    mode: String,
}

/// Set the school data source
#[derive(Args, Debug)]
pub struct SetDataArgs {
    /// File path, http(s) URL, or "embedded"
    #[arg(value_name = "SOURCE")]
    source: String,
}

/// Set the startup conference
#[derive(Args, Debug)]
pub struct SetDefaultConferenceArgs {
    /// Conference key, e.g. SEC
    #[arg(value_name = "KEY")]
    key: String,
}

/// JSON-serializable configuration for output
#[derive(Serialize, Debug)]
struct ConfigOutput {
    paths: PathsOutput,
    ui: UiOutput,
}

#[derive(Serialize, Debug)]
struct PathsOutput {
    data_source: String,
}

#[derive(Serialize, Debug)]
struct UiOutput {
    theme: String,
    default_conference: String,
}

impl ConfigArgs {
    /// Execute config subcommand
    pub fn execute(&self) -> CliResult<()> {
        match &self.command {
            ConfigCommand::Show(args) => args.execute(),
            ConfigCommand::Path => {
                let path = Config::config_file_path().map_err(|e| CliError::io(format!("{e:#}")))?;
                println!("{}", path.display());
                Ok(())
            }
            ConfigCommand::SetTheme(args) => {
                let mode: ThemeMode = args.mode.parse().map_err(CliError::validation)?;
                update_config(|config| config.ui.theme_mode = mode)?;
                println!("Theme mode set to {mode}.");
                Ok(())
            }
            ConfigCommand::SetData(args) => {
                let source: DataSource = args.source.parse().map_err(CliError::validation)?;
                update_config(|config| {
                    config.paths.data_source = match &source {
                        DataSource::Embedded => None,
                        other => Some(other.to_string()),
                    };
                })?;
                println!("Data source set to {source}.");
                Ok(())
            }
            ConfigCommand::SetDefaultConference(args) => {
                let key = args.key.trim();
                if key.is_empty() {
                    return Err(CliError::validation("Conference key cannot be empty"));
                }
                update_config(|config| config.ui.default_conference = key.to_string())?;
                println!("Default conference set to {key}.");
                Ok(())
            }
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self) -> CliResult<()> {
        let config = Config::load()
            .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;

        if self.json {
            print_json(&config_output(&config))
        } else {
            output_human_readable(&config);
            Ok(())
        }
    }
}

/// Loads, modifies and saves the configuration file.
fn update_config(apply: impl FnOnce(&mut Config)) -> CliResult<()> {
    let mut config = Config::load()
        .map_err(|e| CliError::validation(format!("Failed to load configuration: {e:#}")))?;
    apply(&mut config);
    config
        .save()
        .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))
}

fn data_source_label(config: &Config) -> String {
    config
        .paths
        .data_source
        .clone()
        .unwrap_or_else(|| DataSource::Embedded.to_string())
}

fn config_output(config: &Config) -> ConfigOutput {
    ConfigOutput {
        paths: PathsOutput {
            data_source: data_source_label(config),
        },
        ui: UiOutput {
            theme: config.ui.theme_mode.to_string(),
            default_conference: config.ui.default_conference.clone(),
        },
    }
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config) {
    println!("Team Colors Configuration");
    println!("=========================");
    println!();

    println!("Paths:");
    println!("  Data Source: {}", data_source_label(config));
    println!();

    println!("UI:");
    println!("  Theme Mode: {}", config.ui.theme_mode);
    println!("  Default Conference: {}", config.ui.default_conference);
    println!();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_output_defaults() {
        let output = config_output(&Config::new());
        assert_eq!(output.paths.data_source, "embedded");
        assert_eq!(output.ui.theme, "light");
        assert_eq!(output.ui.default_conference, "SEC");
    }
}
