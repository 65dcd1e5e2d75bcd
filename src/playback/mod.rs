//! Frame rendering and transport state.
//!
//! [`FrameView::at`] is the heart of the player: a pure function from a frame
//! index and the loaded [`Timeline`] to the chart state for that instant. The
//! [`Transport`] owns nothing but the frame position; the UI event loop ticks
//! it at [`FRAME_INTERVAL`] and it wraps around forever.

use crate::dataset::{Record, Timeline};
use std::time::Duration;

/// End of the simulated time axis, seconds.
pub const T_END: f64 = 100.0;

/// Simulation step between consecutive records, seconds.
pub const STEP_SIZE: f64 = 0.04;

/// Wall-clock delay between animation frames.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(20);

/// Chart Y axis bounds (temperature, degrees).
pub const TEMPERATURE_BOUNDS: [f64; 2] = [0.0, 100.0];

/// Number of animation frames in one loop of the run.
///
/// Derived from the simulated duration, not the record count; indices past
/// the last record clamp to it.
pub fn frame_count() -> usize {
    (T_END / STEP_SIZE) as usize
}

/// Everything the chart needs to draw one frame.
///
/// Borrowed from the timeline; building one allocates only the annotation
/// string.
#[derive(Debug)]
pub struct FrameView<'a> {
    /// Frame index after clamping to the last record.
    pub index: usize,
    /// Time of the current record, seconds.
    pub time: f64,
    /// `(time, actual_temperature)` for every record strictly before
    /// `index` — the growing actuation trace.
    pub trace: &'a [(f64, f64)],
    /// Current setpoint; drawn as a flat line across the whole time axis.
    pub reference: f64,
    /// Annotation text: the record's own, or the occupancy fallback.
    pub annotation: String,
    /// The current record, for the readout pane.
    pub record: &'a Record,
}

impl<'a> FrameView<'a> {
    /// Render frame `n`. Indices past the end of the data clamp to the last
    /// record, so any non-negative index yields a valid frame.
    pub fn at(timeline: &'a Timeline, n: usize) -> FrameView<'a> {
        let index = timeline.clamp_index(n);
        let record = timeline.record(index);

        FrameView {
            index,
            time: record.time,
            trace: timeline.trace_prefix(index),
            reference: record.reference_temperature,
            annotation: record.display_annotation(),
            record,
        }
    }

    /// Chart title for this frame.
    pub fn time_label(&self) -> String {
        format!("Time: {:.2} seconds", self.time)
    }

    /// The reference line as a two-point segment spanning the time axis.
    pub fn reference_segment(&self) -> [(f64, f64); 2] {
        [(0.0, self.reference), (T_END, self.reference)]
    }
}

/// Frame position state machine.
///
/// [`Transport::tick`] drives auto-play and wraps at the frame count, so a
/// playing run loops indefinitely. Manual stepping saturates at the ends
/// instead of wrapping.
#[derive(Debug)]
pub struct Transport {
    position: usize,
    frame_count: usize,
}

impl Transport {
    pub fn new(frame_count: usize) -> Self {
        Transport {
            position: 0,
            frame_count: frame_count.max(1),
        }
    }

    /// Current frame index.
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn frame_count(&self) -> usize {
        self.frame_count
    }

    /// Advance one frame, wrapping back to the start after the last frame.
    pub fn tick(&mut self) {
        self.position = (self.position + 1) % self.frame_count;
    }

    /// Step forward up to `n` frames without wrapping. Returns how many
    /// frames were actually stepped.
    pub fn step_forward(&mut self, n: usize) -> usize {
        let target = (self.position + n).min(self.frame_count - 1);
        let stepped = target - self.position;
        self.position = target;
        stepped
    }

    /// Step back up to `n` frames without wrapping. Returns how many frames
    /// were actually stepped.
    pub fn step_back(&mut self, n: usize) -> usize {
        let stepped = n.min(self.position);
        self.position -= stepped;
        stepped
    }

    pub fn jump_to_start(&mut self) {
        self.position = 0;
    }

    pub fn jump_to_end(&mut self) {
        self.position = self.frame_count - 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Timeline;

    fn three_record_timeline() -> Timeline {
        let csv = "\
Time,Actual Temperature,Reference Temperature,People In Room,Annotation
0.0,10,50,2,
0.04,12,50,2,
0.08,15,55,3,Door Opened
";
        Timeline::from_csv_reader(csv.as_bytes()).unwrap()
    }

    #[test]
    fn test_frame_count_matches_run_length() {
        assert_eq!(frame_count(), 2500);
    }

    #[test]
    fn test_frame_two_of_three_records() {
        let timeline = three_record_timeline();
        let frame = FrameView::at(&timeline, 2);

        assert_eq!(frame.trace, &[(0.0, 10.0), (0.04, 12.0)]);
        assert_eq!(frame.reference, 55.0);
        assert_eq!(frame.time_label(), "Time: 0.08 seconds");
        assert_eq!(frame.annotation, "Door Opened");
    }

    #[test]
    fn test_trace_grows_one_point_per_frame() {
        let timeline = three_record_timeline();

        for n in 0..timeline.len() {
            assert_eq!(FrameView::at(&timeline, n).trace.len(), n);
        }
    }

    #[test]
    fn test_time_label_two_decimals() {
        let timeline = three_record_timeline();

        assert_eq!(FrameView::at(&timeline, 0).time_label(), "Time: 0.00 seconds");
        assert_eq!(FrameView::at(&timeline, 1).time_label(), "Time: 0.04 seconds");
    }

    #[test]
    fn test_out_of_range_clamps_to_last_frame() {
        let timeline = three_record_timeline();
        let last = FrameView::at(&timeline, 2);
        let beyond = FrameView::at(&timeline, 5000);

        assert_eq!(beyond.index, last.index);
        assert_eq!(beyond.time, last.time);
        assert_eq!(beyond.trace, last.trace);
        assert_eq!(beyond.reference, last.reference);
        assert_eq!(beyond.annotation, last.annotation);
    }

    #[test]
    fn test_reference_tracks_current_setpoint_only() {
        let timeline = three_record_timeline();

        assert_eq!(FrameView::at(&timeline, 1).reference, 50.0);
        assert_eq!(FrameView::at(&timeline, 2).reference, 55.0);
        assert_eq!(
            FrameView::at(&timeline, 2).reference_segment(),
            [(0.0, 55.0), (T_END, 55.0)]
        );
    }

    #[test]
    fn test_annotation_fallback_reports_occupancy() {
        let timeline = three_record_timeline();

        assert_eq!(FrameView::at(&timeline, 0).annotation, "People In Room: 2");
        assert_eq!(FrameView::at(&timeline, 2).annotation, "Door Opened");
    }

    #[test]
    fn test_transport_tick_wraps() {
        let mut transport = Transport::new(3);

        transport.tick();
        transport.tick();
        assert_eq!(transport.position(), 2);
        transport.tick();
        assert_eq!(transport.position(), 0);
    }

    #[test]
    fn test_transport_step_saturates() {
        let mut transport = Transport::new(10);

        assert_eq!(transport.step_forward(4), 4);
        assert_eq!(transport.step_forward(100), 5);
        assert_eq!(transport.position(), 9);

        assert_eq!(transport.step_back(3), 3);
        assert_eq!(transport.step_back(100), 6);
        assert_eq!(transport.position(), 0);
    }

    #[test]
    fn test_transport_jumps() {
        let mut transport = Transport::new(42);

        transport.jump_to_end();
        assert_eq!(transport.position(), 41);
        transport.jump_to_start();
        assert_eq!(transport.position(), 0);
    }
}
