//! Memory layout diagram pane rendering
//!
//! Pure consumer of the core's byte-occupancy array: one cell per byte,
//! grouped into word-sized rows with an offset gutter. `1` cells hold real
//! data, `0` cells are padding lost to alignment; trailing filler up to the
//! word boundary is drawn dimmed and counts toward nothing.

use crate::layout::bytes::USED;
use crate::session::LayoutView;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

/// Render the layout diagram pane
pub fn render_layout_pane(
    frame: &mut Frame,
    area: Rect,
    view: Option<&LayoutView>,
    word_size: usize,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Memory Layout ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let view = match view {
        Some(view) => view,
        None => {
            let paragraph = Paragraph::new("(no layout computed - try 'layout <name>')")
                .block(block)
                .style(Style::default().fg(DEFAULT_THEME.comment));
            frame.render_widget(paragraph, area);
            return;
        }
    };

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let mut all_items: Vec<ListItem> = Vec::new();

    // Header: strategy + target, then the byte accounting.
    all_items.push(ListItem::new(Line::from(vec![
        Span::styled(
            format!("{} layout of ", view.strategy),
            Style::default().fg(DEFAULT_THEME.fg),
        ),
        Span::styled(
            view.type_name.clone(),
            Style::default()
                .fg(DEFAULT_THEME.type_name)
                .add_modifier(Modifier::BOLD),
        ),
    ])));
    all_items.push(ListItem::new(Line::from(vec![
        Span::styled(
            format!("{} used", view.report.used),
            Style::default().fg(DEFAULT_THEME.used_byte),
        ),
        Span::styled(" + ", Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(
            format!("{} lost", view.report.wasted),
            Style::default().fg(DEFAULT_THEME.padding_byte),
        ),
        Span::styled(" = ", Style::default().fg(DEFAULT_THEME.comment)),
        Span::styled(
            format!("{} bytes", view.report.total),
            Style::default().fg(DEFAULT_THEME.primary),
        ),
    ])));
    all_items.push(ListItem::new(""));

    for line in diagram_rows(&view.report.bytes, word_size) {
        all_items.push(ListItem::new(line));
    }

    let total_items = all_items.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;

    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }

    let visible_items: Vec<ListItem> = all_items
        .into_iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .collect();

    let list = List::new(visible_items).block(block);
    frame.render_widget(list, area);
}

/// Build one styled row per word. The last row is filled out to the word
/// boundary with dimmed dots so every row has equal width.
fn diagram_rows(bytes: &[u8], word_size: usize) -> Vec<Line<'static>> {
    let word_size = word_size.max(1);
    let mut rows = Vec::new();

    if bytes.is_empty() {
        rows.push(Line::from(Span::styled(
            "(zero-sized layout)",
            Style::default().fg(DEFAULT_THEME.comment),
        )));
        return rows;
    }

    let mut offset = 0;
    while offset < bytes.len() {
        let mut spans = vec![Span::styled(
            format!("{:>4} │ ", offset),
            Style::default().fg(DEFAULT_THEME.offset_gutter),
        )];

        for slot in offset..offset + word_size {
            match bytes.get(slot) {
                Some(&cell) if cell == USED => spans.push(Span::styled(
                    "1 ",
                    Style::default()
                        .fg(DEFAULT_THEME.used_byte)
                        .add_modifier(Modifier::BOLD),
                )),
                Some(_) => spans.push(Span::styled(
                    "0 ",
                    Style::default().fg(DEFAULT_THEME.padding_byte),
                )),
                None => spans.push(Span::styled(
                    "· ",
                    Style::default().fg(DEFAULT_THEME.comment),
                )),
            }
        }

        spans.push(Span::styled(
            "│",
            Style::default().fg(DEFAULT_THEME.offset_gutter),
        ));
        rows.push(Line::from(spans));
        offset += word_size;
    }

    rows
}
