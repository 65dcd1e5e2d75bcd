//! Offline telemetry generator.
//!
//! Reproduces the run the original collector recorded: a piecewise-constant
//! setpoint/occupancy schedule fed through a proportional controller, one
//! record per [`STEP_SIZE`] step. The output CSV round-trips through
//! [`crate::dataset::Timeline`], so a first run can create the file the
//! player expects.

use crate::dataset::Record;
use crate::playback::{frame_count, STEP_SIZE};
use std::path::Path;

/// Proportional gain of the cooling controller.
pub const KP: f64 = 1000.0;

/// Air density used to turn control input into a temperature delta.
pub const AIR_DENSITY: f64 = 1000.0;

/// Room temperature before the controller takes over.
pub const INITIAL_TEMPERATURE: f64 = 30.0;

/// One phase of the recorded schedule: constant setpoint, occupancy, and
/// humidity up to (but not including) `until_step`.
struct Phase {
    until_step: usize,
    reference: f64,
    people_in_room: u32,
    humidity: f64,
}

static SCHEDULE: [Phase; 8] = [
    Phase { until_step: 300, reference: 70.0, people_in_room: 3, humidity: 30.0 },
    Phase { until_step: 600, reference: 20.0, people_in_room: 2, humidity: 40.0 },
    Phase { until_step: 900, reference: 90.0, people_in_room: 0, humidity: 10.0 },
    Phase { until_step: 1200, reference: 30.0, people_in_room: 4, humidity: 60.0 },
    Phase { until_step: 1500, reference: 80.0, people_in_room: 1, humidity: 80.0 },
    Phase { until_step: 1800, reference: 10.0, people_in_room: 5, humidity: 90.0 },
    Phase { until_step: 2100, reference: 95.0, people_in_room: 0, humidity: 20.0 },
    Phase { until_step: usize::MAX, reference: 50.0, people_in_room: 2, humidity: 50.0 },
];

fn phase_at(step: usize) -> &'static Phase {
    SCHEDULE
        .iter()
        .find(|p| step < p.until_step)
        .unwrap_or(&SCHEDULE[SCHEDULE.len() - 1])
}

/// Run the controller over the full schedule and return one record per step.
///
/// With people in the room the plant integrates the control input:
/// `actual += KP * (reference - actual) / AIR_DENSITY * STEP_SIZE`. An empty
/// room holds its temperature and the row is annotated instead.
pub fn generate() -> Vec<Record> {
    let steps = frame_count();
    let mut actual = INITIAL_TEMPERATURE;
    let mut last_reference = None;
    let mut records = Vec::with_capacity(steps.saturating_sub(1));

    for step in 1..steps {
        let phase = phase_at(step);

        if last_reference != Some(phase.reference) {
            log::debug!(
                "setpoint changed to {:.2} at t={:.2}",
                phase.reference,
                step as f64 * STEP_SIZE
            );
            last_reference = Some(phase.reference);
        }

        let mut error = 0.0;
        let mut control_input = 0.0;
        let mut annotation = String::new();

        if phase.people_in_room > 0 {
            error = phase.reference - actual;
            control_input = KP * error;
            actual += control_input / AIR_DENSITY * STEP_SIZE;
        } else {
            annotation = "No people in room".to_string();
        }

        records.push(Record {
            time: step as f64 * STEP_SIZE,
            reference_temperature: phase.reference,
            actual_temperature: actual,
            error,
            control_input,
            people_in_room: phase.people_in_room,
            humidity: phase.humidity,
            annotation,
        });
    }

    records
}

/// Write records to disk in the collector's CSV format: same header order,
/// floats at two decimal places.
pub fn write_csv<P: AsRef<Path>>(path: P, records: &[Record]) -> Result<(), csv::Error> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record([
        "Time",
        "Reference Temperature",
        "Actual Temperature",
        "Error",
        "Control Input",
        "People In Room",
        "Humidity",
        "Annotation",
    ])?;

    for record in records {
        writer.write_record([
            format!("{:.2}", record.time),
            format!("{:.2}", record.reference_temperature),
            format!("{:.2}", record.actual_temperature),
            format!("{:.2}", record.error),
            format!("{:.2}", record.control_input),
            format!("{}", record.people_in_room),
            format!("{:.2}", record.humidity),
            record.annotation.clone(),
        ])?;
    }

    writer.flush()?;
    Ok(())
}

/// Generate the full run and write it to `path`.
pub fn generate_csv<P: AsRef<Path>>(path: P) -> Result<usize, csv::Error> {
    let records = generate();
    write_csv(path, &records)?;
    Ok(records.len())
}
