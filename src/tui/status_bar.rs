//! Status bar widget for displaying feedback and contextual help

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::help_registry::{self, HelpRegistry};
use super::{AppState, Theme};

/// Hints shown on the bottom line.
const MAX_HELP_HINTS: usize = 5;

/// Status bar widget
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar with contextual help
    pub fn render(f: &mut Frame, area: Rect, state: &AppState, theme: &Theme) {
        let status_text = vec![
            Self::feedback_line(state, theme),
            Self::hover_line(state, theme),
            Self::get_contextual_help_line(state, theme),
        ];

        let status = Paragraph::new(status_text)
            .style(Style::default().fg(theme.text).bg(theme.background))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(" Status ")
                    .style(Style::default().bg(theme.background)),
            );

        f.render_widget(status, area);
    }

    /// Tooltip first, then error, then the status message.
    fn feedback_line<'a>(state: &'a AppState, theme: &Theme) -> Line<'a> {
        if let Some(tooltip) = &state.tooltip {
            let color = if tooltip.is_error {
                theme.error
            } else {
                theme.confirm
            };
            return Line::from(Span::styled(
                tooltip.message.as_str(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ));
        }

        if let Some(error) = &state.error_message {
            return Line::from(vec![
                Span::styled("ERROR: ", Style::default().fg(theme.error)),
                Span::raw(error.as_str()),
            ]);
        }

        Line::from(Span::styled(
            state.status_message.as_str(),
            Style::default().fg(theme.text_secondary),
        ))
    }

    /// Label and value of the swatch under the cursor.
    fn hover_line(state: &AppState, theme: &Theme) -> Line<'static> {
        match state.hover_text() {
            Some(hover) => Line::from(vec![
                Span::styled("Hover: ", Style::default().fg(theme.chrome)),
                Span::styled(hover, Style::default().fg(theme.text)),
            ]),
            None => Line::from(""),
        }
    }

    /// Get the current context name based on application state
    fn get_current_context(state: &AppState) -> &'static str {
        if state.help_overlay.is_some() {
            help_registry::contexts::HELP
        } else {
            state.input_context()
        }
    }

    /// Get contextual help line from help registry (bottom help line)
    fn get_contextual_help_line(state: &AppState, theme: &Theme) -> Line<'static> {
        let context_name = Self::get_current_context(state);
        let registry = HelpRegistry::default();
        let hints = registry.format_status_bar_hints(context_name, MAX_HELP_HINTS);

        let mut spans: Vec<Span<'static>> = Vec::new();
        spans.push(Span::styled("Help: ", Style::default().fg(theme.chrome)));

        if hints.is_empty() {
            spans.push(Span::raw("Press ? for help"));
            return Line::from(spans);
        }

        for (i, (key, action)) in hints.into_iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" | "));
            }
            spans.push(Span::styled(
                key,
                Style::default()
                    .fg(theme.hotkey)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::raw(": "));
            spans.push(Span::raw(action));
        }

        if context_name != help_registry::contexts::HELP {
            spans.push(Span::raw(" | "));
            spans.push(Span::styled("?", Style::default().fg(theme.hotkey)));
            spans.push(Span::raw(": Help"));
        }

        Line::from(spans)
    }
}
