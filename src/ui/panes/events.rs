//! Event log pane rendering
//!
//! A cumulative log of the notable rows up to the current frame: setpoint
//! changes and annotated rows. The log only ever looks at the prefix of the
//! timeline the playback has reached, so stepping backwards shrinks it.

use crate::dataset::Timeline;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Padding, Paragraph},
    Frame,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Setpoint,
    Annotation,
}

/// One line of the event log.
#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub time: f64,
    pub kind: EventKind,
    pub text: String,
}

/// Collect the events visible at frame `upto` (clamped to the data).
///
/// A setpoint event is emitted for the first record and for every record
/// whose reference differs from its predecessor; an annotation event is
/// emitted each time a non-empty annotation first appears.
pub fn collect_events(timeline: &Timeline, upto: usize) -> Vec<Event> {
    let records = &timeline.records()[..=timeline.clamp_index(upto)];
    let mut events = Vec::new();
    let mut last_reference = None;
    let mut last_annotation = "";

    for record in records {
        if last_reference != Some(record.reference_temperature) {
            events.push(Event {
                time: record.time,
                kind: EventKind::Setpoint,
                text: format!("Reference changed to {:.2}", record.reference_temperature),
            });
            last_reference = Some(record.reference_temperature);
        }

        if !record.annotation.is_empty() && record.annotation != last_annotation {
            events.push(Event {
                time: record.time,
                kind: EventKind::Annotation,
                text: record.annotation.clone(),
            });
        }
        last_annotation = &record.annotation;
    }

    events
}

/// Render the event log pane.
pub fn render_events_pane(
    frame: &mut Frame,
    area: Rect,
    events: &[Event],
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
        .title(" Events ")
        .borders(Borders::ALL)
        .border_style(border_style);

    if events.is_empty() {
        let paragraph = Paragraph::new("(no events yet)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.muted));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let all_items: Vec<ListItem> = events
        .iter()
        .map(|event| {
            let style = match event.kind {
                EventKind::Setpoint => Style::default().fg(DEFAULT_THEME.reference),
                EventKind::Annotation => Style::default().fg(DEFAULT_THEME.annotation),
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:>7.2}s ", event.time),
                    Style::default().fg(DEFAULT_THEME.muted),
                ),
                Span::styled(event.text.clone(), style),
            ]))
        })
        .collect();

    // Clamp scroll offset only if content exceeds visible area
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

    frame.render_widget(List::new(visible_items).block(block), area);
}
