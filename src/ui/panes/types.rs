//! Registry listing pane rendering
//!
//! Shows every registered type in insertion order: kind, cached size and
//! alignment, and for composites the declared field list on a second,
//! dimmed line.

use crate::registry::Registry;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding},
    Frame,
};

/// Render the registered-types pane
pub fn render_types_pane(
    frame: &mut Frame,
    area: Rect,
    registry: &Registry,
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
        .title(format!(" Types ({}) ", registry.len()))
        .borders(Borders::ALL)
        .border_style(border_style)
        .padding(Padding::new(1, 0, 0, 0));

    let mut all_items: Vec<ListItem> = Vec::new();
    for name in registry.names() {
        let entry = match registry.get(name) {
            Some(entry) => entry,
            None => continue,
        };

        let header = Line::from(vec![
            Span::styled(
                entry.name().to_string(),
                Style::default()
                    .fg(DEFAULT_THEME.type_name)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(
                entry.kind().label().to_string(),
                Style::default().fg(DEFAULT_THEME.comment),
            ),
            Span::raw(" "),
            Span::styled(
                format!("size {} align {}", entry.size(), entry.align()),
                Style::default().fg(DEFAULT_THEME.primary),
            ),
        ]);
        all_items.push(ListItem::new(header));

        if !entry.fields().is_empty() {
            all_items.push(ListItem::new(Line::from(Span::styled(
                format!("  {{ {} }}", entry.fields().join(" ")),
                Style::default().fg(DEFAULT_THEME.comment),
            ))));
        }
    }

    if all_items.is_empty() {
        all_items.push(
            ListItem::new("(no types registered)").style(Style::default().fg(DEFAULT_THEME.comment)),
        );
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
