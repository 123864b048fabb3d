//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::error;

use crate::services::loader::DataSource;

/// Environment variable that overrides the config directory.
pub const CONFIG_DIR_ENV: &str = "TEAMCOLORS_CONFIG_DIR";

/// Directory name under the platform config dir.
const CONFIG_DIR_NAME: &str = "TeamColors";

/// Conference shown first when the config doesn't name one.
pub const DEFAULT_CONFERENCE: &str = "SEC";

/// Theme display mode preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    /// Always use light theme
    #[default]
    Light,
    /// Always use dark theme
    Dark,
    /// Follow the OS theme
    Auto,
}

impl ThemeMode {
    /// Mode the theme toggle switches to.
    ///
    /// `Auto` resolves against the detected OS mode, so toggling always
    /// lands on an explicit mode.
    #[must_use]
    pub fn toggled(self, currently_dark: bool) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
            Self::Auto if currently_dark => Self::Light,
            Self::Auto => Self::Dark,
        }
    }

    /// Lowercase name used in the config file and CLI.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::Auto => "auto",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemeMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "auto" => Ok(Self::Auto),
            other => Err(format!(
                "Invalid theme mode '{other}'. Expected light, dark, or auto"
            )),
        }
    }
}

/// Where to read school data from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PathConfig {
    /// File path or http(s) URL of the school document; embedded copy when unset
    #[serde(default)]
    pub data_source: Option<String>,
}

/// UI preferences configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Theme mode preference (light, dark, auto)
    #[serde(default)]
    pub theme_mode: ThemeMode,
    /// Conference key shown at startup
    #[serde(default = "default_conference")]
    pub default_conference: String,
}

fn default_conference() -> String {
    DEFAULT_CONFERENCE.to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            theme_mode: ThemeMode::default(),
            default_conference: default_conference(),
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/TeamColors/config.toml`
/// - macOS: `~/Library/Application Support/TeamColors/config.toml`
/// - Windows: `%APPDATA%\TeamColors\config.toml`
///
/// `TEAMCOLORS_CONFIG_DIR` replaces the directory on every platform.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// Data locations
    #[serde(default)]
    pub paths: PathConfig,
    /// UI preferences
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the config directory, honoring `TEAMCOLORS_CONFIG_DIR`.
    pub fn config_dir() -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV).filter(|d| !d.is_empty()) {
            return Ok(PathBuf::from(dir));
        }

        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(CONFIG_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from an explicit path.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(config_path).context(format!(
            "Failed to read config file: {}",
            config_path.display()
        ))?;

        let config: Self = toml::from_str(&content).context(format!(
            "Failed to parse config file: {}",
            config_path.display()
        ))?;

        config.validate()?;
        Ok(config)
    }

    /// Loads the config for an interactive session.
    ///
    /// Returns the path later changes should be saved to. An unreadable or
    /// invalid file yields defaults and no path, so it is never overwritten.
    pub fn load_session(config_path: &Path) -> (Self, Option<PathBuf>) {
        match Self::load_from(config_path) {
            Ok(config) => (config, Some(config_path.to_path_buf())),
            Err(e) => {
                error!("Ignoring unreadable config, preferences won't be saved: {e:#}");
                (Self::new(), None)
            }
        }
    }

    /// Saves configuration to the config file using atomic write.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_file_path()?)
    }

    /// Saves configuration to an explicit path (temp file + rename).
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(config_dir) = config_path.parent() {
            fs::create_dir_all(config_dir).context(format!(
                "Failed to create config directory: {}",
                config_dir.display()
            ))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        let temp_path = config_path.with_extension("toml.tmp");

        fs::write(&temp_path, content).context(format!(
            "Failed to write temp config file: {}",
            temp_path.display()
        ))?;

        fs::rename(&temp_path, config_path).context(format!(
            "Failed to rename temp config file to: {}",
            config_path.display()
        ))?;

        Ok(())
    }

    /// Validates configuration values.
    ///
    /// Checks:
    /// - `default_conference` is not blank
    /// - `data_source` (if set) is not blank
    pub fn validate(&self) -> Result<()> {
        if self.ui.default_conference.trim().is_empty() {
            anyhow::bail!("ui.default_conference cannot be empty");
        }

        if let Some(source) = &self.paths.data_source {
            source
                .parse::<DataSource>()
                .map_err(|e| anyhow::anyhow!("paths.data_source is invalid: {e}"))?;
        }

        Ok(())
    }

    /// Resolved data source: explicit override, then config, then embedded.
    pub fn data_source(&self, override_source: Option<&str>) -> Result<DataSource> {
        match override_source.or(self.paths.data_source.as_deref()) {
            Some(source) => source
                .parse()
                .map_err(|e| anyhow::anyhow!("Invalid data source: {e}")),
            None => Ok(DataSource::Embedded),
        }
    }
}
