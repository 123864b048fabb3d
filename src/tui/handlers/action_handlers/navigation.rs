// Navigation action handlers

use crate::tui::{AppState, Focus};
use anyhow::Result;

/// Handle navigate up action
pub fn handle_navigate_up(state: &mut AppState) -> Result<bool> {
    match state.focus {
        Focus::Cards => state.move_swatch_up(),
        Focus::Panel => state.move_panel_up(),
    }
    Ok(false)
}

/// Handle navigate down action
pub fn handle_navigate_down(state: &mut AppState) -> Result<bool> {
    match state.focus {
        Focus::Cards => state.move_swatch_down(),
        Focus::Panel => state.move_panel_down(),
    }
    Ok(false)
}

/// Handle navigate left action
pub fn handle_navigate_left(state: &mut AppState) -> Result<bool> {
    state.move_card_prev();
    Ok(false)
}

/// Handle navigate right action
pub fn handle_navigate_right(state: &mut AppState) -> Result<bool> {
    state.move_card_next();
    Ok(false)
}

/// Handle next conference action
pub fn handle_next_conference(state: &mut AppState) -> Result<bool> {
    state.next_conference();
    Ok(false)
}

/// Handle previous conference action
pub fn handle_previous_conference(state: &mut AppState) -> Result<bool> {
    state.previous_conference();
    Ok(false)
}

/// Handle jump to conference by tab position
pub fn handle_select_conference(state: &mut AppState, index: usize) -> Result<bool> {
    if !state.select_conference_index(index) {
        state.set_status(format!("No conference at position {}", index + 1));
    }
    Ok(false)
}
