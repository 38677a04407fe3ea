//! Function plot pane

use crate::sampling::SampleSet;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

/// Visible y range: finite bounds of the samples with 5% headroom.
pub fn y_axis_bounds(samples: &SampleSet) -> [f64; 2] {
    match samples.y_bounds() {
        None => [-1.0, 1.0],
        Some((lo, hi)) if hi - lo < f64::EPSILON * hi.abs().max(1.0) => [lo - 1.0, hi + 1.0],
        Some((lo, hi)) => {
            let pad = (hi - lo) * 0.05;
            [lo - pad, hi + pad]
        }
    }
}

/// Compact axis label: plain decimals for moderate values, scientific otherwise
pub fn format_label(value: f64) -> String {
    let magnitude = value.abs();
    if magnitude != 0.0 && !(1e-3..1e5).contains(&magnitude) {
        format!("{:.2e}", value)
    } else {
        let text = format!("{:.3}", value);
        let text = text.trim_end_matches('0').trim_end_matches('.');
        if text == "-0" {
            "0".to_string()
        } else {
            text.to_string()
        }
    }
}

fn axis_labels(bounds: [f64; 2]) -> Vec<Span<'static>> {
    let mid = (bounds[0] + bounds[1]) / 2.0;
    [bounds[0], mid, bounds[1]]
        .iter()
        .map(|v| Span::styled(format_label(*v), Style::default().fg(DEFAULT_THEME.comment)))
        .collect()
}

/// Render the chart pane
pub fn render_chart_pane(
    frame: &mut Frame,
    area: Rect,
    samples: &SampleSet,
    expression: &str,
    is_focused: bool,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Plot ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let points = samples.finite_points();
    if points.is_empty() {
        let message = if samples.is_empty() {
            "(no formula)"
        } else {
            "(no finite values in range)"
        };
        let paragraph = Paragraph::new(message)
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let (from, to) = samples.x_range();
    let x_bounds = [from, to];
    let y_bounds = y_axis_bounds(samples);

    let mut datasets = Vec::new();

    // Draw y = 0 when it is in view
    let x_axis_line = [(from, 0.0), (to, 0.0)];
    if y_bounds[0] <= 0.0 && y_bounds[1] >= 0.0 {
        datasets.push(
            Dataset::default()
                .marker(symbols::Marker::Dot)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(DEFAULT_THEME.axis))
                .data(&x_axis_line),
        );
    }

    datasets.push(
        Dataset::default()
            .name(expression.to_string())
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Scatter)
            .style(Style::default().fg(DEFAULT_THEME.curve))
            .data(&points),
    );

    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .title("x")
                .style(Style::default().fg(DEFAULT_THEME.axis))
                .bounds(x_bounds)
                .labels(axis_labels(x_bounds)),
        )
        .y_axis(
            Axis::default()
                .title("f(x)")
                .style(Style::default().fg(DEFAULT_THEME.axis))
                .bounds(y_bounds)
                .labels(axis_labels(y_bounds)),
        );

    frame.render_widget(chart, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::formula::Formula;

    #[test]
    fn test_format_label() {
        assert_eq!(format_label(0.0), "0");
        assert_eq!(format_label(-0.0001), "-1.00e-4");
        assert_eq!(format_label(2.5), "2.5");
        assert_eq!(format_label(-10.0), "-10");
        assert_eq!(format_label(123456.0), "1.23e5");
    }

    #[test]
    fn test_y_axis_bounds() {
        let line = Formula::compile("x").unwrap();
        let set = SampleSet::sample(&line, 0.0, 10.0, 11);
        assert_eq!(y_axis_bounds(&set), [-0.5, 10.5]);

        let constant = Formula::compile("3").unwrap();
        let set = SampleSet::sample(&constant, 0.0, 1.0, 5);
        assert_eq!(y_axis_bounds(&set), [2.0, 4.0]);

        assert_eq!(y_axis_bounds(&SampleSet::default()), [-1.0, 1.0]);
    }
}
