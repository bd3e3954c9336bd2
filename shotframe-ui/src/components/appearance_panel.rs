//! Appearance controls: padding, corner radius, background.

use leptos::*;
use shotframe_core::state::{CORNER_RADIUS_MAX, PADDING_MAX};
use shotframe_core::StudioState;

use crate::components::background_picker::BackgroundPicker;
use crate::components::slider_control::SliderControl;

#[component]
pub fn AppearancePanel(state: RwSignal<StudioState>) -> impl IntoView {
    view! {
        <div class="space-y-2">
            <label class="text-xs font-semibold uppercase tracking-wider text-gray-500">
                "Appearance"
            </label>

            <SliderControl
                label="Padding"
                value=Signal::derive(move || state.with(|s| s.padding as f64))
                display=Signal::derive(move || state.with(|s| format!("{}px", s.padding)))
                on_change=Callback::new(move |v: f64| state.update(|s| s.padding = v as u32))
                min=0.0
                max=PADDING_MAX as f64
                step=1.0
            />

            // Applied to the image only when no frame owns the rounding.
            <SliderControl
                label="Border Radius"
                value=Signal::derive(move || state.with(|s| s.corner_radius as f64))
                display=Signal::derive(move || state.with(|s| format!("{}px", s.corner_radius)))
                on_change=Callback::new(move |v: f64| state.update(|s| s.corner_radius = v as u32))
                min=0.0
                max=CORNER_RADIUS_MAX as f64
                step=1.0
            />

            <BackgroundPicker state=state />
        </div>
    }
}
