//! School card grid for the active conference.
//!
//! Cards flow left to right in rows. Each card lists its swatches as a color
//! chip, a label and the hex value. The grid scrolls by whole rows so that
//! the cursor card is always on screen.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::{AppState, Focus, Theme};
use crate::models::{ColorKey, RgbColor};
use crate::services::renderer::SchoolCard;

/// Minimum card width including borders.
pub const CARD_WIDTH: u16 = 30;
/// Chip drawn in the swatch color.
pub(crate) const CHIP: &str = "██";
/// Chip drawn when the hex value can't be painted.
pub(crate) const UNKNOWN_CHIP: &str = "??";
/// Marker for swatches already in the selection.
const SELECTED_MARK: &str = "✓";

/// Card grid widget
pub struct SchoolGrid;

impl SchoolGrid {
    /// Number of card columns that fit in `width`.
    #[must_use]
    pub fn columns_for_width(width: u16) -> usize {
        usize::from((width / CARD_WIDTH).max(1))
    }

    /// First row to draw so that `cursor_row` is visible.
    ///
    /// `row_heights` are the heights of every row in order; rows are only
    /// ever shown whole, except a single row taller than `available`.
    #[must_use]
    pub fn first_visible_row(row_heights: &[u16], cursor_row: usize, available: u16) -> usize {
        if row_heights.is_empty() {
            return 0;
        }
        let cursor_row = cursor_row.min(row_heights.len() - 1);
        let mut start = 0;
        loop {
            let used: u32 = row_heights[start..=cursor_row]
                .iter()
                .map(|h| u32::from(*h))
                .sum();
            if used <= u32::from(available) || start >= cursor_row {
                return start;
            }
            start += 1;
        }
    }

    /// Render the grid
    pub fn render(f: &mut Frame, area: Rect, state: &AppState) {
        let theme = &state.theme;
        let Some(view) = &state.view else {
            return;
        };

        let focused = state.focus == Focus::Cards;
        let outer = Block::default()
            .title(format!(" {} ({}) ", view.full_name, view.key))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(if focused {
                theme.chrome
            } else {
                theme.idle
            }))
            .style(Style::default().bg(theme.background));
        let inner = outer.inner(area);
        f.render_widget(outer, area);

        if view.cards.is_empty() {
            let empty = Paragraph::new("No schools in this conference.")
                .style(Style::default().fg(theme.text_muted).bg(theme.background));
            f.render_widget(empty, inner);
            return;
        }

        let columns = Self::columns_for_width(inner.width);
        let rows: Vec<&[SchoolCard]> = view.cards.chunks(columns).collect();
        let row_heights: Vec<u16> = rows
            .iter()
            .map(|row| {
                let tallest = row.iter().map(|c| c.swatches.len()).max().unwrap_or(0);
                u16::try_from(tallest).unwrap_or(u16::MAX).saturating_add(2)
            })
            .collect();

        let cursor_row = state.card_index / columns;
        let start = Self::first_visible_row(&row_heights, cursor_row, inner.height);

        let mut y = inner.y;
        for (row_index, row) in rows.iter().enumerate().skip(start) {
            let remaining = inner.bottom().saturating_sub(y);
            if remaining == 0 {
                break;
            }
            let height = row_heights[row_index].min(remaining);
            let row_area = Rect::new(inner.x, y, inner.width, height);

            let cells = Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
                .split(row_area);

            for (col, card) in row.iter().enumerate() {
                let card_index = row_index * columns + col;
                Self::render_card(f, cells[col], state, card, card_index, theme);
            }
            y = y.saturating_add(height);
        }
    }

    fn render_card(
        f: &mut Frame,
        area: Rect,
        state: &AppState,
        card: &SchoolCard,
        card_index: usize,
        theme: &Theme,
    ) {
        let is_cursor_card = card_index == state.card_index;
        let focused = state.focus == Focus::Cards;

        let border_color = if is_cursor_card && focused {
            theme.focus
        } else {
            theme.idle
        };

        let lines: Vec<Line> = card
            .swatches
            .iter()
            .enumerate()
            .map(|(i, swatch)| {
                let chip = match RgbColor::from_hex(&swatch.hex) {
                    Ok(rgb) => Span::styled(CHIP, Style::default().fg(rgb.to_ratatui_color())),
                    Err(_) => Span::styled(UNKNOWN_CHIP, Style::default().fg(theme.text_muted)),
                };
                let selected = state
                    .selection
                    .contains(&ColorKey::new(card.school.as_str(), swatch.hex.as_str()));

                let mut text_style = Style::default().fg(theme.text);
                if is_cursor_card && i == state.swatch_index && focused {
                    text_style = text_style
                        .bg(theme.cursor_bg)
                        .add_modifier(Modifier::BOLD);
                }

                Line::from(vec![
                    chip,
                    Span::raw(" "),
                    Span::styled(format!("{} {}", swatch.label, swatch.hex), text_style),
                    Span::styled(
                        if selected {
                            format!(" {SELECTED_MARK}")
                        } else {
                            String::new()
                        },
                        Style::default().fg(theme.confirm),
                    ),
                ])
            })
            .collect();

        let block = Block::default()
            .title(format!(" {} ", card.school))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color))
            .style(Style::default().bg(theme.background));

        f.render_widget(Paragraph::new(lines).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_columns_for_width() {
        assert_eq!(SchoolGrid::columns_for_width(10), 1);
        assert_eq!(SchoolGrid::columns_for_width(CARD_WIDTH * 3 + 5), 3);
    }

    #[test]
    fn test_first_visible_row_keeps_cursor_on_screen() {
        let heights = [5, 5, 5, 5];
        assert_eq!(SchoolGrid::first_visible_row(&heights, 0, 12), 0);
        assert_eq!(SchoolGrid::first_visible_row(&heights, 1, 12), 0);
        assert_eq!(SchoolGrid::first_visible_row(&heights, 2, 12), 1);
        assert_eq!(SchoolGrid::first_visible_row(&heights, 3, 12), 2);
    }

    #[test]
    fn test_first_visible_row_oversized_row() {
        let heights = [4, 30];
        assert_eq!(SchoolGrid::first_visible_row(&heights, 1, 10), 1);
    }
}
