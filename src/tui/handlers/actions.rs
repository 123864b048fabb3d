//! Action dispatch.

use anyhow::Result;

use crate::shortcuts::Action;
use crate::tui::AppState;

use super::action_handlers::{navigation, selection, view};

/// Dispatch action to appropriate handler
pub fn dispatch_action(state: &mut AppState, action: Action) -> Result<bool> {
    match action {
        // Navigation
        Action::NavigateUp => navigation::handle_navigate_up(state),
        Action::NavigateDown => navigation::handle_navigate_down(state),
        Action::NavigateLeft => navigation::handle_navigate_left(state),
        Action::NavigateRight => navigation::handle_navigate_right(state),

        // Conferences
        Action::NextConference => navigation::handle_next_conference(state),
        Action::PreviousConference => navigation::handle_previous_conference(state),
        Action::SelectConference(index) => navigation::handle_select_conference(state, index),

        // Selection
        Action::PickSwatch => selection::handle_pick_swatch(state),
        Action::RemoveEntry => selection::handle_remove_entry(state),
        Action::CopyAll => selection::handle_copy_all(state),
        Action::ClearSelection => selection::handle_clear_selection(state),
        Action::ToggleFormat => selection::handle_toggle_format(state),

        // Panels and system
        Action::TogglePanel => view::handle_toggle_panel(state),
        Action::FocusPanel => view::handle_focus_panel(state),
        Action::ToggleTheme => view::handle_toggle_theme(state),
        Action::ToggleHelp => view::handle_toggle_help(state),
        Action::Quit => view::handle_quit(state),
        Action::Cancel => view::handle_cancel(state),
    }
}
