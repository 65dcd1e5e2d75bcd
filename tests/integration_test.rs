// Integration tests: generated telemetry round-trips through the loader
// and plays back coherently.

use thermoplay::dataset::Timeline;
use thermoplay::playback::{frame_count, FrameView, STEP_SIZE};
use thermoplay::sim;

#[test]
fn test_generated_csv_round_trips_through_loader() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("temperature_data.csv");

    let written = sim::generate_csv(&path).expect("generation failed");
    assert_eq!(written, frame_count() - 1);

    let timeline = Timeline::from_csv_path(&path).expect("load failed");
    assert_eq!(timeline.len(), written);

    // Values were written at two decimal places.
    let first = timeline.record(0);
    assert_eq!(first.time, 0.04);
    assert_eq!(first.reference_temperature, 70.0);
    assert_eq!(first.actual_temperature, 31.6);
    assert_eq!(first.error, 40.0);
    assert_eq!(first.control_input, 40_000.0);
    assert_eq!(first.people_in_room, 3);
    assert_eq!(first.humidity, 30.0);
    assert_eq!(first.annotation, "");
}

#[test]
fn test_generated_run_plays_back_frame_by_frame() {
    let records = sim::generate();
    let timeline = Timeline::new(records).expect("timeline");

    // Mid-run frame: trace covers everything before it, reference is the
    // phase setpoint at that instant.
    let frame = FrameView::at(&timeline, 1000);
    assert_eq!(frame.trace.len(), 1000);
    assert_eq!(frame.reference, 30.0);
    assert_eq!(frame.time_label(), format!("Time: {:.2} seconds", 1001.0 * STEP_SIZE));

    // Empty-room phase: the annotation override is shown.
    let empty_room = FrameView::at(&timeline, 700);
    assert_eq!(empty_room.annotation, "No people in room");
    assert_eq!(empty_room.record.people_in_room, 0);

    // Occupied phase: the occupancy fallback is shown.
    let occupied = FrameView::at(&timeline, 100);
    assert_eq!(occupied.annotation, "People In Room: 3");

    // The animation frame count overshoots the record count by one; the
    // final frames clamp to the last record.
    let last = FrameView::at(&timeline, timeline.last_index());
    let overshoot = FrameView::at(&timeline, frame_count() - 1);
    assert_eq!(overshoot.index, last.index);
    assert_eq!(overshoot.time, last.time);
}

#[test]
fn test_malformed_telemetry_is_a_startup_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("temperature_data.csv");
    std::fs::write(&path, "Time,Actual Temperature\nnot-a-number,\n").expect("write");

    assert!(Timeline::from_csv_path(&path).is_err());
    assert!(Timeline::from_csv_path(dir.path().join("missing.csv")).is_err());
}
