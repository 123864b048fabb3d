//! Terminal user interface components and state management.
//!
//! This module contains the main TUI loop, `AppState`, event handling,
//! and all UI widgets using Ratatui.

// Input handlers use Result<bool> for consistency even when they never fail
#![allow(clippy::unnecessary_wraps)]
// Allow intentional type casts for terminal coordinates
#![allow(clippy::cast_possible_truncation)]

pub mod conference_tabs;
pub mod handlers;
pub mod help_overlay;
pub mod help_registry;
pub mod school_grid;
pub mod selection_panel;
pub mod status_bar;
pub mod theme;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io;
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{error, info, warn};

use crate::config::Config;
use crate::constants::{APP_NAME, TOOLTIP_DURATION};
use crate::error::PaletteResult;
use crate::models::{ColorKey, DisplayFormat, SchoolData, SelectionSet};
use crate::services::clipboard::{copy_color, export_selection, ClipboardBridge};
use crate::services::loader::{DataSource, LoadState};
use crate::services::renderer::{
    self, list_conferences, ConferenceSummary, ConferenceView, SchoolCard, Swatch,
};
use crate::shortcuts::{ShortcutRegistry, CONTEXT_MAIN, CONTEXT_PANEL};

pub use conference_tabs::ConferenceTabs;
pub use help_overlay::HelpOverlayState;
pub use school_grid::SchoolGrid;
pub use selection_panel::SelectionPanel;
pub use status_bar::StatusBar;
pub use theme::Theme;

/// Tooltip shown after a failed clipboard write.
pub const COPY_ERROR_TOOLTIP: &str = "Error copying color";
/// Tooltip shown after copying the whole selection.
pub const COPY_ALL_TOOLTIP: &str = "All colors copied!";

/// Which area receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// School cards of the active conference
    #[default]
    Cards,
    /// Selected colors panel
    Panel,
}

/// Transient feedback shown in the status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tooltip {
    /// Text to show
    pub message: String,
    /// Rendered in the error color when set
    pub is_error: bool,
    /// When the tooltip disappears
    pub expires_at: Instant,
}

/// Application state - single source of truth
///
/// All UI components read from this state immutably.
/// Only event handlers modify state explicitly.
pub struct AppState {
    // Core data
    /// Loaded school document, `None` until the loader reports success
    pub data: Option<SchoolData>,
    /// Background load in flight, if any
    pub load_state: Option<LoadState>,
    /// Conference tabs in document order
    pub conferences: Vec<ConferenceSummary>,
    /// Key of the displayed conference
    pub active_conference: Option<String>,
    /// Cards of the displayed conference
    pub view: Option<ConferenceView>,
    /// Colors picked so far
    pub selection: SelectionSet,
    /// Render mode for the selected panel and exports
    pub display_format: DisplayFormat,

    // UI state
    /// Current UI theme
    pub theme: Theme,
    /// Cursor card within `view.cards`
    pub card_index: usize,
    /// Cursor swatch within the current card
    pub swatch_index: usize,
    /// Whether the selected colors panel is shown
    pub show_selection_panel: bool,
    /// Area receiving navigation keys
    pub focus: Focus,
    /// Cursor within the selected colors panel
    pub panel_index: usize,
    /// Help overlay, when open
    pub help_overlay: Option<HelpOverlayState>,
    /// Transient feedback (copy confirmations)
    pub tooltip: Option<Tooltip>,
    /// Status bar message
    pub status_message: String,
    /// Current error message (if any)
    pub error_message: Option<String>,

    // System resources
    /// Application configuration
    pub config: Config,
    /// Where theme changes are persisted; nothing is written when unset
    pub config_path: Option<PathBuf>,
    /// Key bindings
    pub shortcuts: ShortcutRegistry,
    clipboard: Box<dyn ClipboardBridge>,

    // Control flags
    /// Whether application should exit
    pub should_quit: bool,
}

impl AppState {
    /// Creates an empty, unloaded state.
    pub fn new(
        config: Config,
        config_path: Option<PathBuf>,
        clipboard: Box<dyn ClipboardBridge>,
    ) -> Self {
        let theme = Theme::from_mode(config.ui.theme_mode);
        Self {
            data: None,
            load_state: None,
            conferences: Vec::new(),
            active_conference: None,
            view: None,
            selection: SelectionSet::new(),
            display_format: DisplayFormat::default(),
            theme,
            card_index: 0,
            swatch_index: 0,
            show_selection_panel: true,
            focus: Focus::default(),
            panel_index: 0,
            help_overlay: None,
            tooltip: None,
            status_message: String::new(),
            error_message: None,
            config,
            config_path,
            shortcuts: ShortcutRegistry::new(),
            clipboard,
            should_quit: false,
        }
    }

    /// Starts loading school data in the background.
    pub fn start_loading(&mut self, source: DataSource) {
        self.set_status(format!("Loading school data from {source}..."));
        self.load_state = Some(LoadState::start(source));
    }

    /// Whether the background load is still running.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.load_state.as_ref().is_some_and(LoadState::is_loading)
    }

    /// Per-iteration housekeeping: expire the tooltip and collect load results.
    pub fn tick(&mut self, now: Instant) {
        if self.tooltip.as_ref().is_some_and(|t| t.expires_at <= now) {
            self.tooltip = None;
        }

        let result = self.load_state.as_mut().and_then(LoadState::poll);
        if let Some(result) = result {
            self.apply_load_result(result);
        }
    }

    /// Stores a finished load and shows the default conference.
    ///
    /// Failures are logged and leave the application unloaded.
    pub fn apply_load_result(&mut self, result: PaletteResult<SchoolData>) {
        match result {
            Ok(data) => {
                self.conferences = list_conferences(Some(&data));
                self.data = Some(data);
                info!("Loaded {} conferences", self.conferences.len());

                let preferred = self.config.ui.default_conference.clone();
                let key = if self.conferences.iter().any(|c| c.key == preferred) {
                    Some(preferred)
                } else {
                    self.conferences.first().map(|c| c.key.clone())
                };

                match key {
                    Some(key) => {
                        self.select_conference(&key);
                    }
                    None => self.set_status("School data has no conferences"),
                }
            }
            Err(e) => {
                error!("Failed to load school data: {e}");
                self.set_error(format!("Failed to load school data: {e}"));
            }
        }
    }

    // === Conferences ===

    /// Replaces the displayed cards with those of `key`.
    ///
    /// On failure the display stays as it was and `false` is returned.
    pub fn select_conference(&mut self, key: &str) -> bool {
        match renderer::select_conference(self.data.as_ref(), key) {
            Ok(view) => {
                self.set_status(format!("{} ({} schools)", view.full_name, view.cards.len()));
                self.view = Some(view);
                self.active_conference = Some(key.to_string());
                self.card_index = 0;
                self.swatch_index = 0;
                true
            }
            Err(e) => {
                warn!("Cannot show conference {key}: {e}");
                false
            }
        }
    }

    /// Index of the displayed conference in the tab list.
    #[must_use]
    pub fn active_conference_index(&self) -> Option<usize> {
        let active = self.active_conference.as_deref()?;
        self.conferences.iter().position(|c| c.key == active)
    }

    /// Shows the conference at `index` in tab order.
    pub fn select_conference_index(&mut self, index: usize) -> bool {
        match self.conferences.get(index).map(|c| c.key.clone()) {
            Some(key) => self.select_conference(&key),
            None => false,
        }
    }

    /// Shows the next conference, wrapping around.
    pub fn next_conference(&mut self) -> bool {
        let count = self.conferences.len();
        if count == 0 {
            return false;
        }
        let next = self.active_conference_index().map_or(0, |i| (i + 1) % count);
        self.select_conference_index(next)
    }

    /// Shows the previous conference, wrapping around.
    pub fn previous_conference(&mut self) -> bool {
        let count = self.conferences.len();
        if count == 0 {
            return false;
        }
        let previous = self
            .active_conference_index()
            .map_or(count - 1, |i| (i + count - 1) % count);
        self.select_conference_index(previous)
    }

    // === Card cursor ===

    fn cards(&self) -> &[SchoolCard] {
        self.view.as_ref().map(|v| v.cards.as_slice()).unwrap_or_default()
    }

    /// Card under the cursor.
    #[must_use]
    pub fn current_card(&self) -> Option<&SchoolCard> {
        self.cards().get(self.card_index)
    }

    /// Swatch under the cursor.
    #[must_use]
    pub fn current_swatch(&self) -> Option<&Swatch> {
        self.current_card()?.swatches.get(self.swatch_index)
    }

    /// Hover text for the cursor swatch.
    #[must_use]
    pub fn hover_text(&self) -> Option<String> {
        let card = self.current_card()?;
        let swatch = card.swatches.get(self.swatch_index)?;
        Some(format!("{}: {}", card.school, swatch.tooltip()))
    }

    /// Next swatch, continuing into the next card.
    pub fn move_swatch_down(&mut self) {
        let card_count = self.cards().len();
        let Some(swatch_count) = self.current_card().map(|c| c.swatches.len()) else {
            return;
        };
        if self.swatch_index + 1 < swatch_count {
            self.swatch_index += 1;
        } else if self.card_index + 1 < card_count {
            self.card_index += 1;
            self.swatch_index = 0;
        }
    }

    /// Previous swatch, continuing into the previous card.
    pub fn move_swatch_up(&mut self) {
        if self.swatch_index > 0 {
            self.swatch_index -= 1;
        } else if self.card_index > 0 {
            self.card_index -= 1;
            self.swatch_index = self
                .current_card()
                .map_or(0, |c| c.swatches.len().saturating_sub(1));
        }
    }

    /// Next school card, keeping the swatch row where possible.
    pub fn move_card_next(&mut self) {
        if self.card_index + 1 < self.cards().len() {
            self.card_index += 1;
            self.clamp_swatch_index();
        }
    }

    /// Previous school card, keeping the swatch row where possible.
    pub fn move_card_prev(&mut self) {
        if self.card_index > 0 {
            self.card_index -= 1;
            self.clamp_swatch_index();
        }
    }

    fn clamp_swatch_index(&mut self) {
        let len = self.current_card().map_or(0, |c| c.swatches.len());
        self.swatch_index = self.swatch_index.min(len.saturating_sub(1));
    }

    // === Selection ===

    /// Copies the cursor swatch's value and adds it to the selection.
    ///
    /// A failed clipboard write leaves the selection untouched.
    pub fn pick_current_swatch(&mut self) -> bool {
        let Some((school, swatch)) = self
            .current_card()
            .and_then(|card| Some((card.school.clone(), card.swatches.get(self.swatch_index)?.clone())))
        else {
            return false;
        };

        if copy_color(self.clipboard.as_mut(), &swatch.hex).is_err() {
            self.show_tooltip(COPY_ERROR_TOOLTIP, true);
            return false;
        }

        self.show_tooltip(format!("Copied: {}", swatch.hex), false);
        let added = self.selection.add(&swatch.hex, &school, &swatch.label);
        if !added {
            info!("{school} {} already selected", swatch.hex);
        }
        added
    }

    /// Copies the whole selection in the current format.
    pub fn copy_all(&mut self) {
        if self.selection.is_empty() {
            self.set_status("No colors selected");
            return;
        }

        match export_selection(self.clipboard.as_mut(), &self.selection, self.display_format) {
            Ok(_) => self.show_tooltip(COPY_ALL_TOOLTIP, false),
            Err(_) => self.show_tooltip(COPY_ERROR_TOOLTIP, true),
        }
    }

    /// Empties the selection.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
        self.panel_index = 0;
        self.set_status("Selection cleared");
    }

    /// Key of the entry under the panel cursor.
    #[must_use]
    pub fn selected_entry_key(&self) -> Option<ColorKey> {
        self.selection.get_index(self.panel_index).map(|e| e.key())
    }

    /// Removes the entry under the panel cursor.
    pub fn remove_selected_entry(&mut self) -> bool {
        let Some(key) = self.selected_entry_key() else {
            return false;
        };
        let removed = self.selection.remove(&key);
        if removed {
            self.panel_index = self.panel_index.min(self.selection.len().saturating_sub(1));
            self.set_status(format!("Removed {key}"));
        }
        removed
    }

    /// Moves the panel cursor up.
    pub fn move_panel_up(&mut self) {
        self.panel_index = self.panel_index.saturating_sub(1);
    }

    /// Moves the panel cursor down.
    pub fn move_panel_down(&mut self) {
        if self.panel_index + 1 < self.selection.len() {
            self.panel_index += 1;
        }
    }

    /// Switches between hex only and detailed.
    pub fn toggle_display_format(&mut self) {
        self.display_format = self.display_format.toggled();
        self.set_status(format!("Format: {}", self.display_format.display_name()));
    }

    // === View ===

    /// Shows or hides the selected colors panel.
    pub fn toggle_selection_panel(&mut self) {
        self.show_selection_panel = !self.show_selection_panel;
        if !self.show_selection_panel {
            self.focus = Focus::Cards;
        }
    }

    /// Moves focus between the cards and the panel, opening the panel if needed.
    pub fn toggle_panel_focus(&mut self) {
        self.focus = match self.focus {
            Focus::Cards => {
                self.show_selection_panel = true;
                self.panel_index = self.panel_index.min(self.selection.len().saturating_sub(1));
                Focus::Panel
            }
            Focus::Panel => Focus::Cards,
        };
    }

    /// Flips light/dark and persists the choice.
    pub fn toggle_theme(&mut self) {
        let mode = self.config.ui.theme_mode.toggled(self.theme.is_dark());
        self.config.ui.theme_mode = mode;
        self.theme = Theme::from_mode(mode);

        if let Some(path) = &self.config_path {
            if let Err(e) = self.config.save_to(path) {
                warn!("Failed to save theme preference: {e:#}");
            }
        }
        self.set_status(format!("Theme: {mode}"));
    }

    /// Opens or closes the help overlay.
    pub fn toggle_help(&mut self) {
        self.help_overlay = match self.help_overlay {
            Some(_) => None,
            None => Some(HelpOverlayState::new()),
        };
    }

    /// Binding context for the current focus.
    #[must_use]
    pub const fn input_context(&self) -> &'static str {
        match self.focus {
            Focus::Cards => CONTEXT_MAIN,
            Focus::Panel => CONTEXT_PANEL,
        }
    }

    // === Messages ===

    /// Shows a transient message for [`TOOLTIP_DURATION`].
    pub fn show_tooltip(&mut self, message: impl Into<String>, is_error: bool) {
        self.tooltip = Some(Tooltip {
            message: message.into(),
            is_error,
            expires_at: Instant::now() + TOOLTIP_DURATION,
        });
    }

    /// Set status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.error_message = None;
    }

    /// Set error message
    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error_message = Some(error.into());
    }

    /// Clear error message
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}

/// Initialize terminal for TUI
pub fn setup_terminal() -> Result<Terminal<CrosstermBackend<io::Stdout>>> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend).context("Failed to create terminal")?;
    Ok(terminal)
}

/// Restore terminal to normal state
pub fn restore_terminal(mut terminal: Terminal<CrosstermBackend<io::Stdout>>) -> Result<()> {
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to leave alternate screen")?;
    terminal.show_cursor().context("Failed to show cursor")?;
    Ok(())
}

/// Sets up the terminal, runs the event loop and restores the terminal.
pub fn run(state: &mut AppState) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let result = run_tui(state, &mut terminal);
    restore_terminal(terminal)?;
    result
}

/// Main event loop
pub fn run_tui(
    state: &mut AppState,
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
) -> Result<()> {
    loop {
        state.tick(Instant::now());

        terminal.draw(|f| render(f, state))?;

        // Poll for events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_key_event(state, key)? {
                    break; // User quit
                }
            }
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

/// Render the UI from current state
fn render(f: &mut Frame, state: &AppState) {
    // Fill entire screen with theme background color first
    let full_bg = Block::default().style(Style::default().bg(state.theme.background));
    f.render_widget(full_bg, f.area());

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Title bar
            Constraint::Length(3), // Conference tabs
            Constraint::Min(8),    // Cards + selected panel
            Constraint::Length(5), // Status bar
        ])
        .split(f.area());

    render_title_bar(f, chunks[0], state);
    ConferenceTabs::render(f, chunks[1], state);
    render_main_content(f, chunks[2], state);
    StatusBar::render(f, chunks[3], state, &state.theme);

    if let Some(help) = &state.help_overlay {
        let area = f.area();
        help.render(f, area, &state.theme);
    }

    // Render error overlay on top of everything if error is present
    if let Some(ref error) = state.error_message {
        render_error_overlay(f, error, &state.theme);
    }
}

/// Render title bar with the active conference and selection count
fn render_title_bar(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let conference = state
        .view
        .as_ref()
        .map_or_else(String::new, |v| format!(" - {}", v.full_name));
    let count = state.selection.len();
    let plural = if count == 1 { "" } else { "s" };

    let title = Line::from(vec![
        Span::styled(
            format!(" {APP_NAME}"),
            Style::default()
                .fg(theme.chrome)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(conference, Style::default().fg(theme.text)),
        Span::styled(
            format!("  [{count} color{plural} selected]"),
            Style::default().fg(theme.text_muted),
        ),
    ]);

    let title_widget = Paragraph::new(title)
        .style(Style::default().bg(theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(theme.chrome))
                .style(Style::default().bg(theme.background)),
        );

    f.render_widget(title_widget, area);
}

/// Render school cards and, when visible, the selected colors panel
fn render_main_content(f: &mut Frame, area: Rect, state: &AppState) {
    let (cards_area, panel_area) = if state.show_selection_panel {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(area);
        (chunks[0], Some(chunks[1]))
    } else {
        (area, None)
    };

    if state.view.is_some() {
        SchoolGrid::render(f, cards_area, state);
    } else {
        render_placeholder(f, cards_area, state);
    }

    if let Some(panel_area) = panel_area {
        SelectionPanel::render(f, panel_area, state);
    }
}

/// Message shown while nothing is displayed
fn render_placeholder(f: &mut Frame, area: Rect, state: &AppState) {
    let theme = &state.theme;
    let message = if state.is_loading() {
        "Loading school data..."
    } else {
        "No school data loaded."
    };

    let placeholder = Paragraph::new(message)
        .style(Style::default().fg(theme.text_muted).bg(theme.background))
        .block(
            Block::default()
                .title(" Schools ")
                .borders(Borders::ALL)
                .style(Style::default().bg(theme.background)),
        );
    f.render_widget(placeholder, area);
}

/// Render error overlay on top of all other UI elements
fn render_error_overlay(f: &mut Frame, error: &str, theme: &Theme) {
    let area = centered_rect(60, 30, f.area());

    f.render_widget(Clear, area);

    let lines = vec![
        Line::from(Span::raw(error.to_string())),
        Line::from(""),
        Line::from(vec![
            Span::styled(
                "Enter/Esc",
                Style::default()
                    .fg(theme.hotkey)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" Dismiss"),
        ]),
    ];

    let error_text = Paragraph::new(lines)
        .style(Style::default().fg(theme.text).bg(theme.background))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" ERROR ")
                .border_style(Style::default().fg(theme.error))
                .style(Style::default().bg(theme.background)),
        )
        .wrap(Wrap { trim: true });
    f.render_widget(error_text, area);
}

/// Helper to create a centered rectangle
pub(crate) fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Handle keyboard input events
pub fn handle_key_event(state: &mut AppState, key: event::KeyEvent) -> Result<bool> {
    use crossterm::event::KeyCode;

    // If error overlay is shown, allow dismissing with Enter or Esc
    if state.error_message.is_some() {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
            state.clear_error();
        }
        // Block all other input while error is shown
        return Ok(false);
    }

    if state.help_overlay.is_some() {
        return handlers::handle_help_input(state, key);
    }

    handlers::handle_main_input(state, key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ThemeMode;
    use crate::services::clipboard::MemoryClipboard;
    use std::cell::RefCell;
    use std::rc::Rc;
    use tempfile::TempDir;

    const TEST_JSON: &str = r##"{
        "conferences": {
            "SEC": {
                "fullName": "Southeastern Conference",
                "schools": [
                    { "fullName": "Test U", "colors": { "primary": "#FF0000", "secondary": "#0000FF" } },
                    { "fullName": "Orange State", "colors": {
                        "primary": "#FF8200",
                        "additional": { "smokey_gray": "#58595B" } } }
                ]
            },
            "ACC": {
                "fullName": "Atlantic Coast Conference",
                "schools": [
                    { "fullName": "Blue Tech", "colors": { "primary": "#003087" } }
                ]
            }
        }
    }"##;

    fn loaded_state() -> (AppState, Rc<RefCell<MemoryClipboard>>) {
        let clipboard = Rc::new(RefCell::new(MemoryClipboard::new()));
        let mut state = AppState::new(Config::new(), None, Box::new(Rc::clone(&clipboard)));
        let data = crate::services::loader::parse(TEST_JSON).unwrap();
        state.apply_load_result(Ok(data));
        (state, clipboard)
    }

    #[test]
    fn test_load_selects_default_conference() {
        let (state, _) = loaded_state();
        assert_eq!(state.active_conference.as_deref(), Some("SEC"));
        assert_eq!(state.conferences.len(), 2);
        assert_eq!(state.view.as_ref().unwrap().cards.len(), 2);
    }

    #[test]
    fn test_load_falls_back_to_first_conference() {
        let mut config = Config::new();
        config.ui.default_conference = "PAC".to_string();
        let mut state = AppState::new(config, None, Box::new(MemoryClipboard::new()));
        state.apply_load_result(Ok(crate::services::loader::parse(TEST_JSON).unwrap()));
        assert_eq!(state.active_conference.as_deref(), Some("SEC"));
    }

    #[test]
    fn test_failed_load_stays_unloaded() {
        let mut state = AppState::new(Config::new(), None, Box::new(MemoryClipboard::new()));
        state.apply_load_result(Err(crate::error::PaletteError::fetch("x.json", "missing")));
        assert!(state.data.is_none());
        assert!(state.view.is_none());
        assert!(state.error_message.is_some());
    }

    #[test]
    fn test_unknown_conference_keeps_display() {
        let (mut state, _) = loaded_state();
        let before = state.view.clone();
        assert!(!state.select_conference("XYZ"));
        assert_eq!(state.view, before);
        assert_eq!(state.active_conference.as_deref(), Some("SEC"));
    }

    #[test]
    fn test_conference_cycling_wraps() {
        let (mut state, _) = loaded_state();
        assert!(state.next_conference());
        assert_eq!(state.active_conference.as_deref(), Some("ACC"));
        assert!(state.next_conference());
        assert_eq!(state.active_conference.as_deref(), Some("SEC"));
        assert!(state.previous_conference());
        assert_eq!(state.active_conference.as_deref(), Some("ACC"));
        assert!(!state.select_conference_index(5));
    }

    #[test]
    fn test_swatch_cursor_crosses_cards() {
        let (mut state, _) = loaded_state();
        state.move_swatch_down();
        assert_eq!(state.current_swatch().unwrap().label, "Secondary");
        state.move_swatch_down();
        assert_eq!(state.card_index, 1);
        assert_eq!(state.swatch_index, 0);
        state.move_swatch_down();
        assert_eq!(state.current_swatch().unwrap().label, "Smokey Gray");
        // End of the last card
        state.move_swatch_down();
        assert_eq!(state.current_swatch().unwrap().label, "Smokey Gray");

        state.move_card_prev();
        assert_eq!(state.card_index, 0);
        assert_eq!(state.swatch_index, 1);
        state.move_swatch_up();
        state.move_swatch_up();
        assert_eq!((state.card_index, state.swatch_index), (0, 0));
    }

    #[test]
    fn test_hover_text() {
        let (state, _) = loaded_state();
        assert_eq!(state.hover_text().as_deref(), Some("Test U: Primary • #FF0000"));
    }

    #[test]
    fn test_pick_adds_and_copies() {
        let (mut state, clipboard) = loaded_state();
        assert!(state.pick_current_swatch());
        assert_eq!(clipboard.borrow().contents.as_deref(), Some("#FF0000"));
        assert_eq!(state.tooltip.as_ref().unwrap().message, "Copied: #FF0000");

        // Second pick is a no-op for the selection but copies again
        assert!(!state.pick_current_swatch());
        assert_eq!(state.selection.len(), 1);
        assert_eq!(clipboard.borrow().writes, 2);
    }

    #[test]
    fn test_pick_with_failing_clipboard_leaves_selection() {
        let mut state = AppState::new(Config::new(), None, Box::new(MemoryClipboard::failing()));
        state.apply_load_result(Ok(crate::services::loader::parse(TEST_JSON).unwrap()));

        assert!(!state.pick_current_swatch());
        assert!(state.selection.is_empty());
        let tooltip = state.tooltip.as_ref().unwrap();
        assert_eq!(tooltip.message, COPY_ERROR_TOOLTIP);
        assert!(tooltip.is_error);
    }

    #[test]
    fn test_copy_all_uses_current_format() {
        let (mut state, clipboard) = loaded_state();
        state.pick_current_swatch();
        state.move_swatch_down();
        state.pick_current_swatch();
        state.toggle_display_format();
        state.copy_all();

        assert_eq!(
            clipboard.borrow().contents.as_deref(),
            Some("Test U - Primary - #FF0000\nTest U - Secondary - #0000FF")
        );
        assert_eq!(state.tooltip.as_ref().unwrap().message, COPY_ALL_TOOLTIP);
    }

    #[test]
    fn test_copy_all_empty_is_guarded() {
        let (mut state, clipboard) = loaded_state();
        state.copy_all();
        assert!(clipboard.borrow().contents.is_none());
        assert!(state.tooltip.is_none());
    }

    #[test]
    fn test_remove_selected_entry_clamps_cursor() {
        let (mut state, _) = loaded_state();
        state.pick_current_swatch();
        state.move_swatch_down();
        state.pick_current_swatch();

        state.toggle_panel_focus();
        assert_eq!(state.focus, Focus::Panel);
        state.move_panel_down();
        assert_eq!(state.panel_index, 1);

        assert!(state.remove_selected_entry());
        assert_eq!(state.panel_index, 0);
        assert_eq!(state.selection.len(), 1);
        assert_eq!(state.selection.get_index(0).unwrap().hex, "#FF0000");
    }

    #[test]
    fn test_clear_selection() {
        let (mut state, _) = loaded_state();
        state.pick_current_swatch();
        state.clear_selection();
        assert!(state.selection.is_empty());
        assert_eq!(state.selection.export(state.display_format), "");
    }

    #[test]
    fn test_hiding_panel_returns_focus_to_cards() {
        let (mut state, _) = loaded_state();
        state.toggle_panel_focus();
        state.toggle_selection_panel();
        assert!(!state.show_selection_panel);
        assert_eq!(state.focus, Focus::Cards);
        assert_eq!(state.input_context(), CONTEXT_MAIN);
    }

    #[test]
    fn test_toggle_theme_persists() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let mut state = AppState::new(
            Config::new(),
            Some(config_path.clone()),
            Box::new(MemoryClipboard::new()),
        );

        state.toggle_theme();
        assert_eq!(state.theme, Theme::dark());
        assert_eq!(
            Config::load_from(&config_path).unwrap().ui.theme_mode,
            ThemeMode::Dark
        );

        state.toggle_theme();
        assert_eq!(
            Config::load_from(&config_path).unwrap().ui.theme_mode,
            ThemeMode::Light
        );
    }

    #[test]
    fn test_toggle_theme_leaves_broken_config_alone() {
        let temp_dir = TempDir::new().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let broken = "[paths]\ndata_source = \"schools.json\"\n[ui\n";
        std::fs::write(&config_path, broken).unwrap();

        let (config, save_path) = Config::load_session(&config_path);
        let mut state = AppState::new(config, save_path, Box::new(MemoryClipboard::new()));
        state.toggle_theme();

        assert_eq!(state.theme, Theme::dark());
        assert_eq!(std::fs::read_to_string(&config_path).unwrap(), broken);
    }

    #[test]
    fn test_tooltip_expires() {
        let (mut state, _) = loaded_state();
        state.pick_current_swatch();
        state.tick(Instant::now());
        assert!(state.tooltip.is_some());
        state.tick(Instant::now() + TOOLTIP_DURATION + Duration::from_millis(1));
        assert!(state.tooltip.is_none());
    }

    fn press(state: &mut AppState, code: crossterm::event::KeyCode) -> bool {
        let key = event::KeyEvent::new(code, crossterm::event::KeyModifiers::NONE);
        handle_key_event(state, key).unwrap()
    }

    #[test]
    fn test_key_flow_pick_focus_remove() {
        use crossterm::event::KeyCode;
        let (mut state, clipboard) = loaded_state();

        assert!(!press(&mut state, KeyCode::Enter));
        assert!(!press(&mut state, KeyCode::Char('j')));
        assert!(!press(&mut state, KeyCode::Char(' ')));
        assert_eq!(state.selection.len(), 2);
        assert_eq!(clipboard.borrow().contents.as_deref(), Some("#0000FF"));

        press(&mut state, KeyCode::Char('s'));
        assert_eq!(state.focus, Focus::Panel);
        press(&mut state, KeyCode::Char('x'));
        assert_eq!(state.selection.len(), 1);
        press(&mut state, KeyCode::Esc);
        assert_eq!(state.focus, Focus::Cards);

        press(&mut state, KeyCode::Char('2'));
        assert_eq!(state.active_conference.as_deref(), Some("ACC"));

        assert!(press(&mut state, KeyCode::Char('q')));
        assert!(state.should_quit);
    }

    #[test]
    fn test_help_overlay_captures_keys() {
        use crossterm::event::KeyCode;
        let (mut state, _) = loaded_state();

        press(&mut state, KeyCode::Char('?'));
        assert!(state.help_overlay.is_some());
        // 'q' closes help instead of quitting
        assert!(!press(&mut state, KeyCode::Char('q')));
        assert!(state.help_overlay.is_none());
        assert!(!state.should_quit);
    }

    #[test]
    fn test_error_overlay_blocks_input() {
        use crossterm::event::KeyCode;
        let (mut state, _) = loaded_state();
        state.set_error("boom");

        assert!(!press(&mut state, KeyCode::Char('q')));
        assert!(state.error_message.is_some());
        press(&mut state, KeyCode::Esc);
        assert!(state.error_message.is_none());
    }
}
