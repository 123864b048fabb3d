//! Main UI input handler.

use anyhow::Result;
use crossterm::event;
use tracing::debug;

use crate::tui::AppState;

/// Handle input for the cards grid or the focused panel
pub fn handle_main_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    let context = state.input_context();

    if let Some(action) = state.shortcuts.lookup(context, key) {
        debug!("{context}: {:?} -> {}", key.code, action.id());
        super::dispatch_action(state, action)
    } else {
        // No action mapped - ignore key
        Ok(false)
    }
}
