//! Readout pane rendering
//!
//! Shows every field of the current record as labelled values, including the
//! collector-only columns (error, control input, humidity) the chart does
//! not plot.

use crate::playback::FrameView;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

fn value_line<'a>(label: &'a str, value: String) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("{label:<14}"), Style::default().fg(DEFAULT_THEME.muted)),
        Span::styled(value, Style::default().fg(DEFAULT_THEME.fg)),
    ])
}

/// Render the current-record readout pane.
pub fn render_readout_pane(frame: &mut Frame, area: Rect, view: &FrameView) {
    let record = view.record;

    let annotation_style = if record.annotation.is_empty() {
        Style::default().fg(DEFAULT_THEME.muted)
    } else {
        Style::default()
            .fg(DEFAULT_THEME.annotation)
            .add_modifier(Modifier::BOLD)
    };

    let lines = vec![
        value_line("Actual", format!("{:.2} °", record.actual_temperature)),
        value_line("Reference", format!("{:.2} °", record.reference_temperature)),
        value_line("Error", format!("{:.2}", record.error)),
        value_line("Control Input", format!("{:.2}", record.control_input)),
        value_line("People", format!("{}", record.people_in_room)),
        value_line("Humidity", format!("{:.2} %", record.humidity)),
        Line::default(),
        Line::from(Span::styled(view.annotation.clone(), annotation_style)),
    ];

    let block = Block::default()
        .title(" Readout ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal))
        .padding(Padding::new(1, 0, 0, 0));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
