//! Help registry for centralized keybinding descriptions.
//!
//! Loaded from an embedded TOML file and queried by the status bar and the
//! help overlay. The bindings themselves live in [`crate::shortcuts`].

use indexmap::IndexMap;
use serde::Deserialize;
use tracing::error;

/// Embedded help definitions TOML file
const HELP_TOML: &str = include_str!("../../data/help.toml");

/// A single keybinding description
#[derive(Debug, Clone, Deserialize)]
pub struct Binding {
    /// Primary key(s) for this action
    pub keys: Vec<String>,
    /// Alternative keys (optional)
    #[serde(default)]
    pub alt_keys: Vec<String>,
    /// Full description of the action
    pub action: String,
    /// Short hint for status bar (bindings without one stay out of it)
    pub hint: Option<String>,
    /// Display order (lower first)
    #[serde(default = "default_priority")]
    pub priority: u32,
}

const fn default_priority() -> u32 {
    50
}

impl Binding {
    /// Keys joined for display, e.g. `"Enter (Space)"`.
    #[must_use]
    pub fn keys_label(&self) -> String {
        if self.alt_keys.is_empty() {
            self.keys.join("/")
        } else {
            format!("{} ({})", self.keys.join("/"), self.alt_keys.join("/"))
        }
    }
}

/// A context with its bindings
#[derive(Debug, Clone, Deserialize)]
pub struct Context {
    /// Human-readable name
    pub name: String,
    /// When this context is active
    pub description: String,
    /// Keybindings for this context
    pub bindings: Vec<Binding>,
}

/// Metadata about the help file
#[derive(Debug, Clone, Deserialize)]
pub struct HelpMeta {
    /// Version of the help file format
    pub version: String,
    /// Name of the application
    pub app_name: String,
}

#[derive(Debug, Clone, Deserialize)]
struct HelpFile {
    meta: HelpMeta,
    contexts: IndexMap<String, Context>,
}

/// Help registry providing access to keybinding descriptions
#[derive(Debug, Clone)]
pub struct HelpRegistry {
    meta: HelpMeta,
    contexts: IndexMap<String, Context>,
}

impl HelpRegistry {
    /// Load the help registry from the embedded TOML file
    pub fn load() -> Result<Self, toml::de::Error> {
        let help_file: HelpFile = toml::from_str(HELP_TOML)?;
        Ok(Self {
            meta: help_file.meta,
            contexts: help_file.contexts,
        })
    }

    /// Get the app name from metadata
    #[must_use]
    pub fn app_name(&self) -> &str {
        &self.meta.app_name
    }

    /// Contexts in file order.
    pub fn contexts(&self) -> impl Iterator<Item = (&str, &Context)> {
        self.contexts.iter().map(|(key, ctx)| (key.as_str(), ctx))
    }

    /// Get all bindings for a context, sorted by priority
    #[must_use]
    pub fn get_bindings(&self, context_name: &str) -> Vec<&Binding> {
        let mut bindings: Vec<&Binding> = self
            .contexts
            .get(context_name)
            .map(|context| context.bindings.iter().collect())
            .unwrap_or_default();
        bindings.sort_by_key(|b| b.priority);
        bindings
    }

    /// Status bar hints as `(key, hint)` pairs, most important first.
    #[must_use]
    pub fn format_status_bar_hints(
        &self,
        context_name: &str,
        max_hints: usize,
    ) -> Vec<(String, String)> {
        self.get_bindings(context_name)
            .into_iter()
            .filter_map(|b| {
                let hint = b.hint.as_ref()?;
                let key = b.keys.first().map_or("", String::as_str);
                Some((key.to_string(), hint.clone()))
            })
            .take(max_hints)
            .collect()
    }
}

impl Default for HelpRegistry {
    fn default() -> Self {
        Self::load().unwrap_or_else(|e| {
            error!("Embedded help.toml is invalid: {e}");
            Self {
                meta: HelpMeta {
                    version: String::new(),
                    app_name: crate::constants::APP_NAME.to_string(),
                },
                contexts: IndexMap::new(),
            }
        })
    }
}

/// Known context names
pub mod contexts {
    pub use crate::shortcuts::{CONTEXT_MAIN as MAIN, CONTEXT_PANEL as PANEL};

    /// Help overlay
    pub const HELP: &str = "help";
}
