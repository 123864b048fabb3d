// View and system action handlers

use crate::tui::{AppState, Focus};
use anyhow::Result;
use tracing::info;

/// Handle panel visibility toggle
pub fn handle_toggle_panel(state: &mut AppState) -> Result<bool> {
    state.toggle_selection_panel();
    Ok(false)
}

/// Handle focus switch between cards and panel
pub fn handle_focus_panel(state: &mut AppState) -> Result<bool> {
    state.toggle_panel_focus();
    Ok(false)
}

/// Handle theme toggle
pub fn handle_toggle_theme(state: &mut AppState) -> Result<bool> {
    state.toggle_theme();
    Ok(false)
}

/// Handle help overlay toggle
pub fn handle_toggle_help(state: &mut AppState) -> Result<bool> {
    state.toggle_help();
    Ok(false)
}

/// Handle quit action
pub fn handle_quit(state: &mut AppState) -> Result<bool> {
    info!("Quit requested");
    state.should_quit = true;
    Ok(true)
}

/// Handle cancel (Escape): leave the panel, else clear the status line
pub fn handle_cancel(state: &mut AppState) -> Result<bool> {
    if state.focus == Focus::Panel {
        state.focus = Focus::Cards;
    } else {
        state.status_message.clear();
    }
    Ok(false)
}
