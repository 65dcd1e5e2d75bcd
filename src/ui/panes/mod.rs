//! TUI pane rendering modules
//!
//! Stateless render functions for each visible pane, one module per pane:
//!
//! - [`chart`]: the animated actuation chart with the reference line
//! - [`readout`]: current-record values (temperatures, control input, occupancy)
//! - [`events`]: cumulative log of setpoint changes and annotated rows
//! - [`status`]: status bar with frame position and keybindings
//!
//! Each module exports a `render_*_pane()` function taking the [`Frame`],
//! its target [`Rect`], and the data it draws; scrollable panes also take a
//! `&mut usize` scroll offset which they clamp to the content.
//!
//! [`Frame`]: ratatui::Frame
//! [`Rect`]: ratatui::layout::Rect

pub mod chart;
pub mod events;
pub mod readout;
pub mod status;

pub use chart::render_chart_pane;
pub use events::{collect_events, render_events_pane, Event};
pub use readout::render_readout_pane;
pub use status::render_status_bar;
