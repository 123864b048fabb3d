//! Centralized shortcut and action system.
//!
//! Key bindings are declared once per context and looked up by the input
//! handlers, which dispatch the resulting [`Action`].

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Context for the school cards grid.
pub const CONTEXT_MAIN: &str = "main";
/// Context for the focused selected-colors panel.
pub const CONTEXT_PANEL: &str = "panel";

/// All possible actions in the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // === NAVIGATION ===
    /// Previous swatch (wraps to the previous card)
    NavigateUp,
    /// Next swatch (wraps to the next card)
    NavigateDown,
    /// Previous school card
    NavigateLeft,
    /// Next school card
    NavigateRight,

    // === CONFERENCES ===
    /// Next conference tab
    NextConference,
    /// Previous conference tab
    PreviousConference,
    /// Jump to the conference tab at this zero-based index
    SelectConference(usize),

    // === SELECTION ===
    /// Add the cursor swatch to the selection and copy it
    PickSwatch,
    /// Remove the entry under the panel cursor
    RemoveEntry,
    /// Copy every selected color
    CopyAll,
    /// Empty the selection
    ClearSelection,
    /// Switch between hex-only and detailed
    ToggleFormat,

    // === PANELS ===
    /// Show or hide the selected-colors panel
    TogglePanel,
    /// Move focus between cards and the panel
    FocusPanel,

    // === SYSTEM ===
    /// Flip light/dark and persist it
    ToggleTheme,
    /// Show or hide the help overlay
    ToggleHelp,
    /// Exit the application
    Quit,
    /// Dismiss the current overlay or focus
    Cancel,
}

impl Action {
    /// Stable identifier used in logs.
    #[must_use]
    pub const fn id(&self) -> &'static str {
        match self {
            Self::NavigateUp => "navigate_up",
            Self::NavigateDown => "navigate_down",
            Self::NavigateLeft => "navigate_left",
            Self::NavigateRight => "navigate_right",
            Self::NextConference => "next_conference",
            Self::PreviousConference => "previous_conference",
            Self::SelectConference(_) => "select_conference",
            Self::PickSwatch => "pick_swatch",
            Self::RemoveEntry => "remove_entry",
            Self::CopyAll => "copy_all",
            Self::ClearSelection => "clear_selection",
            Self::ToggleFormat => "toggle_format",
            Self::TogglePanel => "toggle_panel",
            Self::FocusPanel => "focus_panel",
            Self::ToggleTheme => "toggle_theme",
            Self::ToggleHelp => "toggle_help",
            Self::Quit => "quit",
            Self::Cancel => "cancel",
        }
    }
}

/// A key binding (key + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    /// Key code
    pub code: KeyCode,
    /// Required modifiers
    pub modifiers: KeyModifiers,
}

impl KeyBinding {
    /// Create a new key binding.
    #[must_use]
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Create a key binding from a KeyEvent.
    #[must_use]
    pub const fn from_event(event: KeyEvent) -> Self {
        Self {
            code: event.code,
            modifiers: event.modifiers,
        }
    }
}

/// Shortcut registry that maps key events to actions for a given context.
pub struct ShortcutRegistry {
    /// Maps (context, key_binding) to Action
    bindings: HashMap<(String, KeyBinding), Action>,
}

impl ShortcutRegistry {
    /// Create a new shortcut registry with default bindings.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self {
            bindings: HashMap::new(),
        };

        registry.register_main_shortcuts();
        registry.register_panel_shortcuts();
        registry
    }

    /// Register all shortcuts for the cards grid.
    fn register_main_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = CONTEXT_MAIN;

        // === NAVIGATION ===
        self.register(ctx, K::Up, M::NONE, Action::NavigateUp);
        self.register(ctx, K::Down, M::NONE, Action::NavigateDown);
        self.register(ctx, K::Left, M::NONE, Action::NavigateLeft);
        self.register(ctx, K::Right, M::NONE, Action::NavigateRight);
        self.register(ctx, K::Char('k'), M::NONE, Action::NavigateUp);
        self.register(ctx, K::Char('j'), M::NONE, Action::NavigateDown);
        self.register(ctx, K::Char('h'), M::NONE, Action::NavigateLeft);
        self.register(ctx, K::Char('l'), M::NONE, Action::NavigateRight);

        // === CONFERENCES ===
        self.register(ctx, K::Tab, M::NONE, Action::NextConference);
        self.register(ctx, K::BackTab, M::SHIFT, Action::PreviousConference);
        self.register(ctx, K::BackTab, M::NONE, Action::PreviousConference);
        for (index, digit) in ('1'..='9').enumerate() {
            self.register(ctx, K::Char(digit), M::NONE, Action::SelectConference(index));
        }

        // === SELECTION ===
        self.register(ctx, K::Enter, M::NONE, Action::PickSwatch);
        self.register(ctx, K::Char(' '), M::NONE, Action::PickSwatch);
        self.register_shared_selection(ctx);

        // === PANELS ===
        self.register(ctx, K::Char('p'), M::NONE, Action::TogglePanel);
        self.register(ctx, K::Char('s'), M::NONE, Action::FocusPanel);

        // === SYSTEM ===
        self.register(ctx, K::Char('t'), M::NONE, Action::ToggleTheme);
        self.register_shifted(ctx, '?', Action::ToggleHelp);
        self.register(ctx, K::Char('q'), M::NONE, Action::Quit);
        self.register(ctx, K::Char('q'), M::CONTROL, Action::Quit);
        self.register(ctx, K::Char('c'), M::CONTROL, Action::Quit);
        self.register(ctx, K::Esc, M::NONE, Action::Cancel);
    }

    /// Register all shortcuts for the focused selected-colors panel.
    fn register_panel_shortcuts(&mut self) {
        use KeyCode as K;
        use KeyModifiers as M;

        let ctx = CONTEXT_PANEL;

        self.register(ctx, K::Up, M::NONE, Action::NavigateUp);
        self.register(ctx, K::Down, M::NONE, Action::NavigateDown);
        self.register(ctx, K::Char('k'), M::NONE, Action::NavigateUp);
        self.register(ctx, K::Char('j'), M::NONE, Action::NavigateDown);

        self.register(ctx, K::Char('x'), M::NONE, Action::RemoveEntry);
        self.register(ctx, K::Delete, M::NONE, Action::RemoveEntry);
        self.register(ctx, K::Backspace, M::NONE, Action::RemoveEntry);
        self.register_shared_selection(ctx);

        self.register(ctx, K::Char('s'), M::NONE, Action::FocusPanel);
        self.register(ctx, K::Char('p'), M::NONE, Action::TogglePanel);
        self.register(ctx, K::Char('t'), M::NONE, Action::ToggleTheme);
        self.register_shifted(ctx, '?', Action::ToggleHelp);
        self.register(ctx, K::Char('q'), M::CONTROL, Action::Quit);
        self.register(ctx, K::Char('c'), M::CONTROL, Action::Quit);
        self.register(ctx, K::Esc, M::NONE, Action::Cancel);
    }

    /// Bindings that behave the same with or without panel focus.
    fn register_shared_selection(&mut self, ctx: &str) {
        self.register(ctx, KeyCode::Char('f'), KeyModifiers::NONE, Action::ToggleFormat);
        self.register(ctx, KeyCode::Char('y'), KeyModifiers::NONE, Action::CopyAll);
        self.register_shifted(ctx, 'X', Action::ClearSelection);
    }

    /// Terminals disagree on whether shifted characters carry SHIFT.
    fn register_shifted(&mut self, ctx: &str, c: char, action: Action) {
        self.register(ctx, KeyCode::Char(c), KeyModifiers::NONE, action);
        self.register(ctx, KeyCode::Char(c), KeyModifiers::SHIFT, action);
    }

    /// Register a shortcut binding.
    fn register(&mut self, context: &str, code: KeyCode, modifiers: KeyModifiers, action: Action) {
        let binding = KeyBinding::new(code, modifiers);
        self.bindings.insert((context.to_string(), binding), action);
    }

    /// Look up an action for a given context and key event.
    #[must_use]
    pub fn lookup(&self, context: &str, event: KeyEvent) -> Option<Action> {
        let binding = KeyBinding::from_event(event);
        self.bindings.get(&(context.to_string(), binding)).copied()
    }

    /// Check if a key event matches a specific action in the given context.
    #[must_use]
    pub fn matches(&self, context: &str, event: KeyEvent, action: Action) -> bool {
        self.lookup(context, event) == Some(action)
    }
}

impl Default for ShortcutRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_basic_lookup() {
        let registry = ShortcutRegistry::new();

        assert_eq!(
            registry.lookup(CONTEXT_MAIN, key(KeyCode::Up)),
            Some(Action::NavigateUp)
        );
        assert_eq!(
            registry.lookup(CONTEXT_MAIN, key(KeyCode::Enter)),
            Some(Action::PickSwatch)
        );
        assert_eq!(
            registry.lookup(CONTEXT_MAIN, key(KeyCode::Char(' '))),
            Some(Action::PickSwatch)
        );
        assert_eq!(
            registry.lookup(
                CONTEXT_MAIN,
                KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL)
            ),
            Some(Action::Quit)
        );
    }

    #[test]
    fn test_vim_navigation() {
        let registry = ShortcutRegistry::new();

        assert_eq!(
            registry.lookup(CONTEXT_MAIN, key(KeyCode::Char('h'))),
            Some(Action::NavigateLeft)
        );
        assert_eq!(
            registry.lookup(CONTEXT_MAIN, key(KeyCode::Char('j'))),
            Some(Action::NavigateDown)
        );
        assert_eq!(
            registry.lookup(CONTEXT_MAIN, key(KeyCode::Char('k'))),
            Some(Action::NavigateUp)
        );
        assert_eq!(
            registry.lookup(CONTEXT_MAIN, key(KeyCode::Char('l'))),
            Some(Action::NavigateRight)
        );
    }

    #[test]
    fn test_digit_jumps_to_conference() {
        let registry = ShortcutRegistry::new();
        assert_eq!(
            registry.lookup(CONTEXT_MAIN, key(KeyCode::Char('1'))),
            Some(Action::SelectConference(0))
        );
        assert_eq!(
            registry.lookup(CONTEXT_MAIN, key(KeyCode::Char('9'))),
            Some(Action::SelectConference(8))
        );
        assert_eq!(registry.lookup(CONTEXT_MAIN, key(KeyCode::Char('0'))), None);
    }

    #[test]
    fn test_shifted_keys_with_and_without_modifier() {
        let registry = ShortcutRegistry::new();
        assert!(registry.matches(
            CONTEXT_MAIN,
            KeyEvent::new(KeyCode::Char('X'), KeyModifiers::SHIFT),
            Action::ClearSelection
        ));
        assert!(registry.matches(
            CONTEXT_MAIN,
            key(KeyCode::Char('X')),
            Action::ClearSelection
        ));
        assert!(registry.matches(
            CONTEXT_MAIN,
            KeyEvent::new(KeyCode::Char('?'), KeyModifiers::SHIFT),
            Action::ToggleHelp
        ));
    }

    #[test]
    fn test_panel_context() {
        let registry = ShortcutRegistry::new();
        assert_eq!(
            registry.lookup(CONTEXT_PANEL, key(KeyCode::Delete)),
            Some(Action::RemoveEntry)
        );
        assert_eq!(
            registry.lookup(CONTEXT_PANEL, key(KeyCode::Char('x'))),
            Some(Action::RemoveEntry)
        );
        // Removing is panel-only; `x` does nothing over the cards
        assert_eq!(registry.lookup(CONTEXT_MAIN, key(KeyCode::Char('x'))), None);
        // Picking is cards-only
        assert_eq!(registry.lookup(CONTEXT_PANEL, key(KeyCode::Enter)), None);
    }
}
