// Frame rendering behavior over a small hand-written run

use thermoplay::dataset::Timeline;
use thermoplay::playback::{FrameView, Transport, T_END};

const THREE_RECORDS: &str = "\
Time,Actual Temperature,Reference Temperature,People In Room,Annotation
0.0,10,50,2,
0.04,12,50,2,
0.08,15,55,3,Door Opened
";

fn timeline() -> Timeline {
    Timeline::from_csv_reader(THREE_RECORDS.as_bytes()).expect("timeline should load")
}

#[test]
fn test_frame_two_shows_history_and_current_setpoint() {
    let timeline = timeline();
    let frame = FrameView::at(&timeline, 2);

    assert_eq!(frame.trace, &[(0.0, 10.0), (0.04, 12.0)]);
    assert_eq!(frame.reference, 55.0);
    assert_eq!(frame.reference_segment(), [(0.0, 55.0), (T_END, 55.0)]);
    assert_eq!(frame.time_label(), "Time: 0.08 seconds");
    assert_eq!(frame.annotation, "Door Opened");
}

#[test]
fn test_title_matches_record_time_at_every_frame() {
    let timeline = timeline();
    let expected = ["Time: 0.00 seconds", "Time: 0.04 seconds", "Time: 0.08 seconds"];

    for (n, want) in expected.iter().enumerate() {
        assert_eq!(FrameView::at(&timeline, n).time_label(), *want);
    }
}

#[test]
fn test_trace_has_exactly_n_points() {
    let timeline = timeline();

    let mut previous_len = None;
    for n in 0..timeline.len() {
        let frame = FrameView::at(&timeline, n);
        assert_eq!(frame.trace.len(), n);
        if let Some(prev) = previous_len {
            assert_eq!(frame.trace.len(), prev + 1);
        }
        previous_len = Some(frame.trace.len());
    }
}

#[test]
fn test_clamping_is_idempotent() {
    let timeline = timeline();
    let last = FrameView::at(&timeline, timeline.last_index());

    for n in [3, 4, 100, usize::MAX] {
        let frame = FrameView::at(&timeline, n);
        assert_eq!(frame.index, last.index);
        assert_eq!(frame.time_label(), last.time_label());
        assert_eq!(frame.trace, last.trace);
        assert_eq!(frame.reference, last.reference);
        assert_eq!(frame.annotation, last.annotation);
    }
}

#[test]
fn test_annotation_override_and_fallback() {
    let timeline = timeline();

    assert_eq!(FrameView::at(&timeline, 0).annotation, "People In Room: 2");
    assert_eq!(FrameView::at(&timeline, 1).annotation, "People In Room: 2");
    assert_eq!(FrameView::at(&timeline, 2).annotation, "Door Opened");
}

#[test]
fn test_playback_loops_through_the_run() {
    let timeline = timeline();
    let mut transport = Transport::new(4);

    // Two full loops: every position must yield a valid frame.
    for _ in 0..8 {
        let frame = FrameView::at(&timeline, transport.position());
        assert!(frame.index <= timeline.last_index());
        transport.tick();
    }
    assert_eq!(transport.position(), 0);
}
