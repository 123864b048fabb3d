//! Help overlay widget showing every keyboard shortcut grouped by context.
//!
//! The content comes from [`HelpRegistry`], so the overlay and the status bar
//! hints never disagree.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Borders, Clear, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, Wrap,
    },
    Frame,
};

use super::help_registry::HelpRegistry;
use super::{centered_rect, Theme};

/// Width of the key column.
const KEY_COLUMN_WIDTH: usize = 22;

/// State for the help overlay.
#[derive(Debug, Clone)]
pub struct HelpOverlayState {
    /// Current scroll offset (line number)
    pub scroll_offset: usize,
    /// Total number of content lines
    total_lines: usize,
}

impl Default for HelpOverlayState {
    fn default() -> Self {
        Self::new()
    }
}

impl HelpOverlayState {
    /// Creates a new help overlay state.
    #[must_use]
    pub fn new() -> Self {
        let total_lines = Self::get_help_content(&HelpRegistry::default(), &Theme::default()).len();
        Self {
            scroll_offset: 0,
            total_lines,
        }
    }

    /// Number of content lines.
    #[must_use]
    pub const fn total_lines(&self) -> usize {
        self.total_lines
    }

    /// Scroll up by one line.
    pub const fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }

    /// Scroll down by one line.
    pub const fn scroll_down(&mut self) {
        if self.scroll_offset + 1 < self.total_lines {
            self.scroll_offset += 1;
        }
    }

    /// Scroll to the top.
    pub const fn scroll_to_top(&mut self) {
        self.scroll_offset = 0;
    }

    /// Scroll to the bottom.
    pub const fn scroll_to_bottom(&mut self) {
        self.scroll_offset = self.total_lines.saturating_sub(1);
    }

    /// Scroll down by a page.
    pub fn page_down(&mut self, visible_height: usize) {
        self.scroll_offset =
            (self.scroll_offset + visible_height).min(self.total_lines.saturating_sub(1));
    }

    /// Scroll up by a page.
    pub const fn page_up(&mut self, visible_height: usize) {
        self.scroll_offset = self.scroll_offset.saturating_sub(visible_height);
    }

    /// Builds the overlay text: a header, then one section per context.
    fn get_help_content(registry: &HelpRegistry, theme: &Theme) -> Vec<Line<'static>> {
        let rule = "═".repeat(50);
        let mut lines = vec![
            Line::from(Span::styled(rule.clone(), Style::default().fg(theme.chrome))),
            Line::from(Span::styled(
                format!("{} - Help", registry.app_name()),
                Style::default()
                    .fg(theme.chrome)
                    .add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            Line::from(Span::styled(rule, Style::default().fg(theme.chrome))),
        ];

        for (key, context) in registry.contexts() {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("═══ {} ═══", context.name.to_uppercase()),
                Style::default()
                    .fg(theme.hotkey)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from(Span::styled(
                context.description.clone(),
                Style::default().fg(theme.text_muted),
            )));
            lines.push(Line::from(""));

            for binding in registry.get_bindings(key) {
                lines.push(Line::from(vec![
                    Span::raw("  "),
                    Span::styled(
                        format!("{:<KEY_COLUMN_WIDTH$}", binding.keys_label()),
                        Style::default().fg(theme.confirm),
                    ),
                    Span::styled(binding.action.clone(), Style::default().fg(theme.text)),
                ]));
            }
        }

        lines
    }

    /// Renders the overlay centered over `area`.
    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let overlay_area = centered_rect(60, 80, area);
        f.render_widget(Clear, overlay_area);

        let content = Self::get_help_content(&HelpRegistry::default(), theme);
        let scroll = u16::try_from(self.scroll_offset).unwrap_or(u16::MAX);

        let paragraph = Paragraph::new(content)
            .block(
                Block::default()
                    .title(" Help (↑↓ scroll, Esc close) ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(theme.chrome))
                    .style(Style::default().bg(theme.background)),
            )
            .style(Style::default().fg(theme.text).bg(theme.background))
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0));
        f.render_widget(paragraph, overlay_area);

        let mut scrollbar_state = ScrollbarState::new(self.total_lines).position(self.scroll_offset);
        let scrollbar = Scrollbar::new(ScrollbarOrientation::VerticalRight)
            .begin_symbol(Some("↑"))
            .end_symbol(Some("↓"));
        f.render_stateful_widget(scrollbar, overlay_area, &mut scrollbar_state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_covers_every_context() {
        let registry = HelpRegistry::default();
        let content = HelpOverlayState::get_help_content(&registry, &Theme::default());
        let text: Vec<String> = content.iter().map(ToString::to_string).collect();

        for (_, context) in registry.contexts() {
            let heading = format!("═══ {} ═══", context.name.to_uppercase());
            assert!(text.contains(&heading), "missing section {heading}");
        }
    }

    #[test]
    fn test_scroll_is_bounded() {
        let mut state = HelpOverlayState::new();
        assert!(state.total_lines() > 10);

        state.scroll_up();
        assert_eq!(state.scroll_offset, 0);

        state.scroll_to_bottom();
        let bottom = state.scroll_offset;
        state.scroll_down();
        assert_eq!(state.scroll_offset, bottom);

        state.page_up(5);
        assert_eq!(state.scroll_offset, bottom - 5);
        state.page_down(100);
        assert_eq!(state.scroll_offset, bottom);
        state.scroll_to_top();
        assert_eq!(state.scroll_offset, 0);
    }
}
