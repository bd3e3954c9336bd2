//! Pointer-drag tracking for image repositioning.
//!
//! The tracker is pure state; the UI feeds it pointer positions from
//! window-scoped listeners so a release anywhere ends the drag.

use crate::point::Point;

/// Origin of an active drag.
#[derive(Debug, Clone, Copy, PartialEq)]
struct DragOrigin {
    /// Pointer position when the drag started, viewport px.
    pointer: Point,
    /// Image offset when the drag started, exported px.
    offset: Point,
}

/// Single-pointer drag tracker. `update` without a preceding `begin`
/// is a no-op.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct DragTracker {
    origin: Option<DragOrigin>,
}

impl DragTracker {
    /// Start tracking from the current pointer position and image
    /// offset. A second `begin` before `end` restarts from the new
    /// origin.
    pub fn begin(&mut self, pointer: Point, current_offset: Point) {
        self.origin = Some(DragOrigin {
            pointer,
            offset: current_offset,
        });
    }

    /// New image offset for the given pointer position, or `None` when
    /// no drag is active. The pointer delta is divided by
    /// `preview_scale` so on-screen drag distance maps 1:1 to exported
    /// pixels regardless of the preview scale-down.
    pub fn update(&self, pointer: Point, preview_scale: f64) -> Option<Point> {
        let origin = self.origin?;
        let delta = pointer.sub(&origin.pointer).div_scalar(preview_scale);
        Some(origin.offset.add(&delta))
    }

    /// Stop tracking; subsequent `update` calls are no-ops until the
    /// next `begin`.
    pub fn end(&mut self) {
        self.origin = None;
    }

    pub fn is_active(&self) -> bool {
        self.origin.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_without_begin_is_noop() {
        let tracker = DragTracker::default();
        assert_eq!(tracker.update(Point::new(10.0, 10.0), 1.0), None);
        assert!(!tracker.is_active());
    }

    #[test]
    fn test_drag_applies_pointer_delta() {
        let mut tracker = DragTracker::default();
        tracker.begin(Point::new(100.0, 100.0), Point::new(5.0, -5.0));

        let offset = tracker.update(Point::new(130.0, 80.0), 1.0).unwrap();
        assert_eq!(offset, Point::new(35.0, -25.0));
    }

    #[test]
    fn test_drag_compensates_preview_scale() {
        let mut tracker = DragTracker::default();
        tracker.begin(Point::new(0.0, 0.0), Point::ZERO);

        // 8px of screen travel at 0.8 preview scale is 10 exported px.
        let offset = tracker.update(Point::new(8.0, 8.0), 0.8).unwrap();
        assert_eq!(offset, Point::new(10.0, 10.0));
    }

    #[test]
    fn test_end_stops_tracking() {
        let mut tracker = DragTracker::default();
        tracker.begin(Point::new(0.0, 0.0), Point::ZERO);
        assert!(tracker.is_active());

        tracker.end();
        assert!(!tracker.is_active());
        assert_eq!(tracker.update(Point::new(50.0, 50.0), 1.0), None);
    }

    #[test]
    fn test_update_is_relative_to_origin_not_previous_update() {
        let mut tracker = DragTracker::default();
        tracker.begin(Point::new(10.0, 10.0), Point::ZERO);

        tracker.update(Point::new(20.0, 10.0), 1.0);
        let offset = tracker.update(Point::new(15.0, 10.0), 1.0).unwrap();
        assert_eq!(offset, Point::new(5.0, 0.0));
    }
}
