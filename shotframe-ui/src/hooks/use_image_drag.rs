//! Drag-to-reposition hook for the preview image.

use leptos::*;
use leptos_use::{use_event_listener, use_window};
use shotframe_core::{preview_scale, DragTracker, Point, StudioState};

/// Handle returned by the hook.
pub struct ImageDragHandle {
    pub is_dragging: Signal<bool>,
    /// Wire this to `pointerdown` on the image element.
    pub start: Callback<web_sys::PointerEvent>,
}

fn pointer_position(ev: &web_sys::PointerEvent) -> Point {
    Point::new(ev.client_x() as f64, ev.client_y() as f64)
}

/// Tracks a single-pointer drag and writes the resulting offset into
/// the state's `image_offset`.
///
/// Move and release listeners live on the window, not the canvas: a
/// fast drag can leave the canvas before the button is released, and a
/// release anywhere must end the gesture. The listeners are registered
/// once for the hook's (= the app's) lifetime and are no-ops while no
/// drag is active.
pub fn use_image_drag(state: RwSignal<StudioState>) -> ImageDragHandle {
    let tracker = create_rw_signal(DragTracker::default());

    let start = Callback::new(move |ev: web_sys::PointerEvent| {
        // Dragging only makes sense with an image loaded.
        if !state.with_untracked(|s| s.has_image()) {
            return;
        }
        ev.prevent_default();
        let offset = state.with_untracked(|s| s.image_offset);
        tracker.update(|t| t.begin(pointer_position(&ev), offset));
    });

    let _ = use_event_listener(use_window(), ev::pointermove, move |ev| {
        let active = tracker.with_untracked(|t| t.is_active());
        if !active {
            return;
        }
        ev.prevent_default();
        let scale = state.with_untracked(|s| preview_scale(&s.sizing));
        if let Some(offset) = tracker.with_untracked(|t| t.update(pointer_position(&ev), scale)) {
            state.update(|s| s.image_offset = offset);
        }
    });

    let _ = use_event_listener(use_window(), ev::pointerup, move |_| {
        if tracker.with_untracked(|t| t.is_active()) {
            tracker.update(|t| t.end());
        }
    });

    ImageDragHandle {
        is_dragging: Signal::derive(move || tracker.get().is_active()),
        start,
    }
}
