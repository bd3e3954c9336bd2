//! Image adjustment: zoom slider, transform reset, and the drag hint.
//! Only shown while an image is loaded.

use leptos::*;
use shotframe_core::state::{IMAGE_SCALE_MAX, IMAGE_SCALE_MIN, IMAGE_SCALE_STEP};
use shotframe_core::StudioState;

use crate::components::icons::ResetIcon;
use crate::components::slider_control::SliderControl;

#[component]
pub fn AdjustmentPanel(state: RwSignal<StudioState>) -> impl IntoView {
    view! {
        <Show when=move || state.with(|s| s.has_image())>
            <div class="space-y-3 pt-2 border-t border-gray-100">
                <div class="flex items-center justify-between">
                    <label class="text-xs font-semibold uppercase tracking-wider text-gray-500">
                        "Image Adjustment"
                    </label>
                    <button
                        class="text-xs text-blue-500 hover:text-blue-600 flex items-center gap-1"
                        on:click=move |_| state.update(|s| s.reset_adjustments())
                    >
                        <ResetIcon class="w-3 h-3" />
                        " Reset"
                    </button>
                </div>

                <SliderControl
                    label="Scale"
                    value=Signal::derive(move || state.with(|s| s.image_scale))
                    display=Signal::derive(move || {
                        state.with(|s| format!("{}%", (s.image_scale * 100.0).round()))
                    })
                    on_change=Callback::new(move |v: f64| state.update(|s| s.image_scale = v))
                    min=IMAGE_SCALE_MIN
                    max=IMAGE_SCALE_MAX
                    step=IMAGE_SCALE_STEP
                />

                <div class="p-3 bg-blue-50 rounded-lg text-xs text-blue-700">
                    "Drag the image in the preview to position it."
                </div>
            </div>
        </Show>
    }
}
