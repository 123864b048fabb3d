//! Selected colors panel.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

use super::school_grid::{CHIP, UNKNOWN_CHIP};
use super::{AppState, Focus};
use crate::models::RgbColor;

/// Shown while nothing is selected.
pub const EMPTY_MESSAGE: &str =
    "No colors selected yet. Select any color swatch to add it here.";

/// Panel listing every selected color in the current display format
pub struct SelectionPanel;

impl SelectionPanel {
    /// Panel title, including the active format.
    #[must_use]
    pub fn title(state: &AppState) -> String {
        format!(
            " Selected Colors ({}) [{}] ",
            state.selection.len(),
            state.display_format.display_name()
        )
    }

    /// Render the panel
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;
        let focused = state.focus == Focus::Panel;

        let block = Block::default()
            .title(Self::title(state))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(if focused {
                theme.chrome
            } else {
                theme.idle
            }))
            .style(Style::default().bg(theme.background));
        let inner = block.inner(area);
        f.render_widget(block, area);

        if state.selection.is_empty() {
            let empty = Paragraph::new(EMPTY_MESSAGE)
                .style(Style::default().fg(theme.text_muted).bg(theme.background))
                .wrap(Wrap { trim: true });
            f.render_widget(empty, inner);
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(inner);

        let items: Vec<ListItem> = state
            .selection
            .iter()
            .map(|entry| {
                let chip = RgbColor::from_hex(&entry.hex).map_or_else(
                    |_| Span::styled(UNKNOWN_CHIP, Style::default().fg(theme.text_muted)),
                    |rgb| Span::styled(CHIP, Style::default().fg(rgb.to_ratatui_color())),
                );
                ListItem::new(Line::from(vec![
                    chip,
                    Span::raw(" "),
                    Span::styled(
                        entry.render(state.display_format),
                        Style::default().fg(theme.text),
                    ),
                ]))
            })
            .collect();

        let mut list = List::new(items);
        let mut list_state = ListState::default();
        if focused {
            list = list
                .highlight_style(
                    Style::default()
                        .bg(theme.cursor_bg)
                        .add_modifier(Modifier::BOLD),
                )
                .highlight_symbol("> ");
            list_state.select(Some(state.panel_index));
        }
        f.render_stateful_widget(list, chunks[0], &mut list_state);

        let hints = Line::from(vec![
            Span::styled("y", Style::default().fg(theme.hotkey)),
            Span::styled(" Copy All  ", Style::default().fg(theme.text_muted)),
            Span::styled("X", Style::default().fg(theme.hotkey)),
            Span::styled(" Clear All", Style::default().fg(theme.text_muted)),
        ]);
        f.render_widget(Paragraph::new(hints), chunks[1]);
    }
}
