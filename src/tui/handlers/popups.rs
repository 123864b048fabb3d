//! Overlay input handlers.

use anyhow::Result;
use crossterm::event::{self, KeyCode};

use crate::tui::AppState;

/// Approximate visible height of the help overlay, for paging.
const HELP_PAGE: usize = 20;

/// Handle input for help overlay
pub fn handle_help_input(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    // Close help with Escape, '?' or 'q'
    if matches!(key.code, KeyCode::Esc | KeyCode::Char('?' | 'q')) {
        state.help_overlay = None;
        return Ok(false);
    }

    let Some(help) = state.help_overlay.as_mut() else {
        return Ok(false);
    };

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => help.scroll_up(),
        KeyCode::Down | KeyCode::Char('j') => help.scroll_down(),
        KeyCode::PageUp => help.page_up(HELP_PAGE),
        KeyCode::PageDown => help.page_down(HELP_PAGE),
        KeyCode::Home => help.scroll_to_top(),
        KeyCode::End => help.scroll_to_bottom(),
        _ => {}
    }
    Ok(false)
}
