//! Command input line rendering

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the single-line command editor. The trailing block glyph stands in
/// for a cursor; input is append-only editing (type + backspace).
pub fn render_input_line(frame: &mut Frame, area: Rect, buffer: &str) {
    let block = Block::default()
        .title(" Command ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.secondary));

    let line = Line::from(vec![
        Span::styled(
            "> ",
            Style::default()
                .fg(DEFAULT_THEME.secondary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(buffer, Style::default().fg(DEFAULT_THEME.fg)),
        Span::styled("█", Style::default().fg(DEFAULT_THEME.secondary)),
    ]);

    let paragraph = Paragraph::new(line).block(block);
    frame.render_widget(paragraph, area);
}
