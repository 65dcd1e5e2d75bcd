//! Actuation chart pane rendering
//!
//! Draws the animated chart for one frame: the growing actuation trace, the
//! flat reference line at the current setpoint, and the annotation box. The
//! trace is a borrowed prefix of the timeline's point list, so redrawing a
//! frame allocates nothing beyond the widget itself.

use crate::playback::{FrameView, T_END, TEMPERATURE_BOUNDS};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    symbols,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
    Frame,
};

/// Render the chart pane for the given frame.
pub fn render_chart_pane(frame: &mut Frame, area: Rect, view: &FrameView, is_focused: bool) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let reference_segment = view.reference_segment();

    let datasets = vec![
        Dataset::default()
            .name("Temperature Actuation")
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(DEFAULT_THEME.trace))
            .data(view.trace),
        Dataset::default()
            .name(format!("Reference {:.2}", view.reference))
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(DEFAULT_THEME.reference))
            .data(&reference_segment),
    ];

    let annotation_style = if view.record.annotation.is_empty() {
        Style::default().fg(DEFAULT_THEME.muted)
    } else {
        Style::default()
            .fg(DEFAULT_THEME.annotation)
            .add_modifier(Modifier::BOLD)
    };

    let block = Block::default()
        .title(format!(" {} ", view.time_label()))
        .title_alignment(Alignment::Center)
        .title_bottom(
            Line::from(Span::styled(format!(" {} ", view.annotation), annotation_style))
                .alignment(Alignment::Center),
        )
        .borders(Borders::ALL)
        .border_style(border_style);

    let [y_min, y_max] = TEMPERATURE_BOUNDS;
    let chart = Chart::new(datasets)
        .block(block)
        .x_axis(
            Axis::default()
                .title(Span::styled("Time", Style::default().fg(DEFAULT_THEME.muted)))
                .bounds([0.0, T_END])
                .labels(vec![
                    Span::raw("0"),
                    Span::raw(format!("{:.0}", T_END / 2.0)),
                    Span::raw(format!("{:.0}", T_END)),
                ]),
        )
        .y_axis(
            Axis::default()
                .title(Span::styled(
                    "Cooling System Actuator",
                    Style::default().fg(DEFAULT_THEME.muted),
                ))
                .bounds(TEMPERATURE_BOUNDS)
                .labels(vec![
                    Span::raw(format!("{y_min:.0}")),
                    Span::raw(format!("{:.0}", (y_min + y_max) / 2.0)),
                    Span::raw(format!("{y_max:.0}")),
                ]),
        );

    frame.render_widget(chart, area);
}
