//! Telemetry record model and CSV loading.
//!
//! The collector writes one CSV row per control step. This module reads the
//! whole file once at startup into a [`Timeline`]: an ordered, read-only
//! sequence of [`Record`]s plus the precomputed actuation trace points the
//! chart slices per frame. Nothing here mutates after load.

use serde::Deserialize;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

/// Errors raised while loading a telemetry file.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read telemetry CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to open telemetry file: {0}")]
    Io(#[from] std::io::Error),

    #[error("telemetry file contains no data rows")]
    Empty,
}

/// One row of the telemetry file: the state of the controlled room at a
/// single time step.
///
/// `error`, `control_input`, and `humidity` are written by the collector but
/// not every capture carries them; they default to zero when the column is
/// missing and are only shown in the readout pane.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Record {
    #[serde(rename = "Time")]
    pub time: f64,

    #[serde(rename = "Reference Temperature")]
    pub reference_temperature: f64,

    #[serde(rename = "Actual Temperature")]
    pub actual_temperature: f64,

    #[serde(rename = "Error", default)]
    pub error: f64,

    #[serde(rename = "Control Input", default)]
    pub control_input: f64,

    #[serde(rename = "People In Room")]
    pub people_in_room: u32,

    #[serde(rename = "Humidity", default)]
    pub humidity: f64,

    #[serde(rename = "Annotation", default)]
    pub annotation: String,
}

impl Record {
    /// The text shown in the annotation box: the row's annotation verbatim,
    /// or the occupancy fallback when the row carries none.
    pub fn display_annotation(&self) -> String {
        if self.annotation.is_empty() {
            format!("People In Room: {}", self.people_in_room)
        } else {
            self.annotation.clone()
        }
    }
}

/// The full telemetry run, loaded once and read-only thereafter.
///
/// Records stay in file order; `Timeline` never reorders them. The trace
/// point list mirrors the records so the chart can borrow a growing prefix
/// without per-frame allocation.
#[derive(Debug)]
pub struct Timeline {
    records: Vec<Record>,
    trace: Vec<(f64, f64)>,
}

impl Timeline {
    /// Build a timeline from already-parsed records.
    ///
    /// An empty sequence is refused: playback has no defined behavior without
    /// at least one record.
    pub fn new(records: Vec<Record>) -> Result<Self, DatasetError> {
        if records.is_empty() {
            return Err(DatasetError::Empty);
        }

        for pair in records.windows(2) {
            if pair[1].time < pair[0].time {
                log::warn!(
                    "telemetry time went backwards at t={:.2} -> t={:.2}",
                    pair[0].time,
                    pair[1].time
                );
            }
        }

        let trace = records
            .iter()
            .map(|r| (r.time, r.actual_temperature))
            .collect();

        Ok(Timeline { records, trace })
    }

    /// Load a timeline from a CSV file on disk.
    pub fn from_csv_path<P: AsRef<Path>>(path: P) -> Result<Self, DatasetError> {
        let file = File::open(path.as_ref())?;
        let timeline = Self::from_csv_reader(file)?;
        log::info!(
            "loaded {} telemetry records from {}",
            timeline.len(),
            path.as_ref().display()
        );
        Ok(timeline)
    }

    /// Load a timeline from any CSV source. Columns are matched by header
    /// name, so column order and extra columns do not matter.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, DatasetError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let records = csv_reader
            .deserialize()
            .collect::<Result<Vec<Record>, csv::Error>>()?;

        Timeline::new(records)
    }

    /// Number of records in the run. Always at least one.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Index of the last record.
    pub fn last_index(&self) -> usize {
        self.records.len() - 1
    }

    /// Clamp a frame index to the last valid record index.
    pub fn clamp_index(&self, n: usize) -> usize {
        n.min(self.last_index())
    }

    /// The record at `n`, after clamping.
    pub fn record(&self, n: usize) -> &Record {
        &self.records[self.clamp_index(n)]
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// The `(time, actual_temperature)` points for all records strictly
    /// before `n`. This is the growing actuation trace: frame `n` shows
    /// exactly `n` points.
    pub fn trace_prefix(&self, n: usize) -> &[(f64, f64)] {
        &self.trace[..n.min(self.trace.len())]
    }
}
