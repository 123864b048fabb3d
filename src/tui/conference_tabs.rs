//! Conference tab strip.

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Tabs},
    Frame,
};

use super::AppState;

/// One tab per conference, numbered for the 1-9 shortcuts.
pub struct ConferenceTabs;

impl ConferenceTabs {
    /// Tab labels in document order.
    #[must_use]
    pub fn titles(state: &AppState) -> Vec<String> {
        state
            .conferences
            .iter()
            .enumerate()
            .map(|(i, conference)| {
                if i < 9 {
                    format!("{} {}", i + 1, conference.key)
                } else {
                    conference.key.clone()
                }
            })
            .collect()
    }

    /// Render the tab strip
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;
        let block = Block::default()
            .title(" Conferences ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.idle))
            .style(Style::default().bg(theme.background));

        let titles: Vec<Line> = Self::titles(state).into_iter().map(Line::from).collect();

        let tabs = Tabs::new(titles)
            .block(block)
            .select(state.active_conference_index().unwrap_or(0))
            .style(Style::default().fg(theme.text_secondary).bg(theme.background))
            .highlight_style(
                Style::default()
                    .fg(theme.focus)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            )
            .divider("|");

        f.render_widget(tabs, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::services::clipboard::MemoryClipboard;
    use crate::services::renderer::ConferenceSummary;

    #[test]
    fn test_titles_are_numbered() {
        let mut state = AppState::new(Config::new(), None, Box::new(MemoryClipboard::new()));
        state.conferences = (0..10)
            .map(|i| ConferenceSummary {
                key: format!("C{i}"),
                full_name: format!("Conference {i}"),
                school_count: 0,
            })
            .collect();

        let titles = ConferenceTabs::titles(&state);
        assert_eq!(titles[0], "1 C0");
        assert_eq!(titles[8], "9 C8");
        assert_eq!(titles[9], "C9");
    }
}
