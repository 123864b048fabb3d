// Selected colors action handlers

use crate::tui::AppState;
use anyhow::Result;

/// Handle pick swatch action (Enter/Space on a swatch)
pub fn handle_pick_swatch(state: &mut AppState) -> Result<bool> {
    if state.current_swatch().is_none() {
        state.set_status("Nothing to pick");
        return Ok(false);
    }
    state.pick_current_swatch();
    Ok(false)
}

/// Handle remove entry action
pub fn handle_remove_entry(state: &mut AppState) -> Result<bool> {
    state.remove_selected_entry();
    Ok(false)
}

/// Handle copy all action
pub fn handle_copy_all(state: &mut AppState) -> Result<bool> {
    state.copy_all();
    Ok(false)
}

/// Handle clear selection action
pub fn handle_clear_selection(state: &mut AppState) -> Result<bool> {
    if !state.selection.is_empty() {
        state.clear_selection();
    }
    Ok(false)
}

/// Handle display format toggle
pub fn handle_toggle_format(state: &mut AppState) -> Result<bool> {
    state.toggle_display_format();
    Ok(false)
}
