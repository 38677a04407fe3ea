//! Value table pane

use crate::sampling::SampleSet;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
    Frame,
};

/// Format a function value, spelling out the IEEE special cases
pub fn format_value(y: f64) -> String {
    if y.is_nan() {
        "undefined".to_string()
    } else if y.is_infinite() {
        if y > 0.0 { "+inf" } else { "-inf" }.to_string()
    } else {
        format!("{:.6}", y)
    }
}

/// Render the table pane
pub fn render_table_pane(
    frame: &mut Frame,
    area: Rect,
    samples: &SampleSet,
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
        .title(format!(" Values ({}) ", samples.len()))
        .borders(Borders::ALL)
        .border_style(border_style);

    if samples.is_empty() {
        let paragraph = Paragraph::new("(no values)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    // Borders and header take three rows
    let visible_height = area.height.saturating_sub(3).max(1) as usize;
    let total_rows = samples.len();
    if total_rows > visible_height {
        *scroll_offset = (*scroll_offset).min(total_rows - visible_height);
    } else {
        *scroll_offset = 0;
    }

    let rows: Vec<Row> = samples
        .points()
        .iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|s| {
            let value_style = if s.y.is_finite() {
                Style::default().fg(DEFAULT_THEME.fg)
            } else {
                Style::default().fg(DEFAULT_THEME.error)
            };
            Row::new(vec![
                Cell::from(format!("{:.4}", s.x)).style(Style::default().fg(DEFAULT_THEME.number)),
                Cell::from(format_value(s.y)).style(value_style),
            ])
        })
        .collect();

    let header = Row::new(vec!["x", "f(x)"]).style(
        Style::default()
            .fg(DEFAULT_THEME.primary)
            .add_modifier(Modifier::BOLD),
    );

    let table = Table::new(rows, [Constraint::Percentage(45), Constraint::Percentage(55)])
        .header(header)
        .block(block);

    frame.render_widget(table, area);
}
