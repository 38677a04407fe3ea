//! Log pane rendering

use crate::logging::LogLine;
use crate::ui::theme::DEFAULT_THEME;
use log::Level;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

fn level_style(level: Level) -> Style {
    match level {
        Level::Error => Style::default().fg(DEFAULT_THEME.error),
        Level::Warn => Style::default().fg(DEFAULT_THEME.warning),
        Level::Info => Style::default().fg(DEFAULT_THEME.success),
        Level::Debug | Level::Trace => Style::default().fg(DEFAULT_THEME.comment),
    }
}

/// Render the log pane
pub fn render_log_pane(
    frame: &mut Frame,
    area: Rect,
    lines: &[LogLine],
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
        .title(" Log ")
        .borders(Borders::ALL)
        .border_style(border_style);

    if lines.is_empty() {
        let paragraph = Paragraph::new("(no messages)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let total_items = lines.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders, min 1

    // usize::MAX means "follow the newest line"
    if total_items > visible_height {
        let max_scroll = total_items - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }

    let visible_items: Vec<ListItem> = lines
        .iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|line| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<5} ", line.level), level_style(line.level)),
                Span::styled(line.text.clone(), Style::default().fg(DEFAULT_THEME.fg)),
            ]))
        })
        .collect();

    let list = List::new(visible_items).block(block);
    frame.render_widget(list, area);
}
