//! Expression input pane with syntax highlighting
//!
//! The highlighter classifies characters directly instead of running the
//! lexer, so half-typed or invalid input still renders. When the last parse
//! failed, the character at the error position is underlined in red.

use crate::parser::ParseError;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Style for one character of expression text
fn char_style(c: char) -> Style {
    if c.is_ascii_alphabetic() {
        Style::default().fg(DEFAULT_THEME.function)
    } else if c.is_ascii_digit() || c == '.' {
        Style::default().fg(DEFAULT_THEME.number)
    } else if "+-*/^()".contains(c) {
        Style::default().fg(DEFAULT_THEME.operator)
    } else if c.is_whitespace() {
        Style::default()
    } else {
        Style::default().fg(DEFAULT_THEME.error)
    }
}

/// Highlight expression text, marking the character at `error_at`
fn highlight_expression(text: &str, error_at: Option<usize>) -> Line<'static> {
    let mut spans = Vec::new();
    let mut in_word = false;

    for (i, c) in text.chars().enumerate() {
        // 'x' is the variable unless it continues a function name
        let starts_variable = (c == 'x' || c == 'X') && !in_word;
        let mut style = if starts_variable {
            Style::default().fg(DEFAULT_THEME.variable)
        } else {
            char_style(c)
        };
        in_word = c.is_ascii_alphabetic() && !starts_variable;

        if error_at == Some(i) {
            style = style
                .fg(DEFAULT_THEME.error)
                .add_modifier(Modifier::UNDERLINED | Modifier::BOLD);
        }
        spans.push(Span::styled(c.to_string(), style));
    }

    // Errors at the end of input point one past the last character
    if error_at.is_some_and(|pos| pos >= text.chars().count()) {
        spans.push(Span::styled(
            " ",
            Style::default()
                .bg(DEFAULT_THEME.error)
                .add_modifier(Modifier::UNDERLINED),
        ));
    }

    Line::from(spans)
}

/// Render the expression input pane
pub fn render_input_pane(
    frame: &mut Frame,
    area: Rect,
    text: &str,
    cursor: usize,
    error: Option<&ParseError>,
    is_focused: bool,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let title_style = if error.is_some() {
        Style::default().fg(DEFAULT_THEME.error)
    } else {
        border_style
    };

    let block = Block::default()
        .title(Span::styled(" f(x) = ", title_style))
        .borders(Borders::ALL)
        .border_style(border_style);

    let line = if text.is_empty() && !is_focused {
        Line::from(Span::styled(
            "(press Tab to focus and type an expression)",
            Style::default().fg(DEFAULT_THEME.comment),
        ))
    } else {
        highlight_expression(text, error.map(|e| e.position()))
    };

    // Keep the cursor visible on long input
    let inner_width = area.width.saturating_sub(2).max(1) as usize;
    let scroll = cursor.saturating_sub(inner_width.saturating_sub(1));

    let paragraph = Paragraph::new(line).block(block).scroll((0, scroll as u16));
    frame.render_widget(paragraph, area);

    if is_focused {
        let x = area.x + 1 + (cursor - scroll) as u16;
        frame.set_cursor_position((x, area.y + 1));
    }
}
