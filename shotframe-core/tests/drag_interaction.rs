//! Drag-gesture scenarios: begin/update/end sequencing and the
//! preview-scale compensation that keeps drags 1:1 with exported pixels.

use shotframe_core::{preview_scale, CanvasSizing, DragTracker, Point};

#[test]
fn full_gesture_moves_offset_by_pointer_delta() {
    let mut tracker = DragTracker::default();
    let prior_offset = Point::new(12.0, -8.0);

    tracker.begin(Point::new(400.0, 300.0), prior_offset);

    let offset = tracker.update(Point::new(450.0, 280.0), 1.0).unwrap();
    assert_eq!(offset, Point::new(62.0, -28.0));

    tracker.end();
    assert_eq!(tracker.update(Point::new(999.0, 999.0), 1.0), None);
}

#[test]
fn drag_in_scaled_preview_compensates_for_display_shrink() {
    // In a fixed-size preview the canvas is displayed at 0.8x, so 80px
    // of pointer travel must translate to 100px of exported offset.
    let scale = preview_scale(&CanvasSizing::Preset("fhd".to_string()));
    let mut tracker = DragTracker::default();
    tracker.begin(Point::new(0.0, 0.0), Point::ZERO);

    let offset = tracker.update(Point::new(80.0, 0.0), scale).unwrap();
    assert_eq!(offset, Point::new(100.0, 0.0));
}

#[test]
fn release_anywhere_ends_the_gesture() {
    // The window-level pointerup handler calls end() no matter where
    // the pointer is; a later move event must not resurrect the drag.
    let mut tracker = DragTracker::default();
    tracker.begin(Point::new(10.0, 10.0), Point::ZERO);
    assert!(tracker.is_active());

    // Pointer left the canvas entirely before release.
    tracker.update(Point::new(-500.0, 2000.0), 1.0).unwrap();
    tracker.end();

    assert!(!tracker.is_active());
    assert_eq!(tracker.update(Point::new(0.0, 0.0), 1.0), None);
}

#[test]
fn restarting_a_gesture_rebases_the_origin() {
    let mut tracker = DragTracker::default();
    tracker.begin(Point::new(0.0, 0.0), Point::ZERO);
    let first = tracker.update(Point::new(30.0, 0.0), 1.0).unwrap();

    // The UI commits each update to state, then a new pointerdown
    // begins from the committed offset.
    tracker.end();
    tracker.begin(Point::new(100.0, 100.0), first);

    let second = tracker.update(Point::new(110.0, 100.0), 1.0).unwrap();
    assert_eq!(second, Point::new(40.0, 0.0));
}
