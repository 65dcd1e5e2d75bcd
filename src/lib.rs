//! # Introduction
//!
//! Thermoplay loads a temperature-control telemetry CSV and plays it back as
//! an animated chart in the terminal, using a UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Playback pipeline
//!
//! ```text
//! CSV → Records → Timeline → FrameView → TUI
//! ```
//!
//! 1. [`dataset`] — loads the CSV into an immutable, time-ordered
//!    [`dataset::Timeline`] of [`dataset::Record`]s.
//! 2. [`playback`] — [`playback::FrameView`] maps a frame index to the chart
//!    state for that instant; [`playback::Transport`] tracks the frame
//!    position and loops it at a fixed interval.
//! 3. [`sim`] — offline generator that reproduces the original collector's
//!    proportional-control run and writes `temperature_data.csv`.
//! 4. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Telemetry columns
//!
//! `Time`, `Reference Temperature`, `Actual Temperature`, `Error`,
//! `Control Input`, `People In Room`, `Humidity`, `Annotation`.

pub mod dataset;
pub mod playback;
pub mod sim;
pub mod ui;
