//! Reusable labeled range slider.

use leptos::*;

/// Slider with a label on the left and a formatted value readout on
/// the right.
#[component]
pub fn SliderControl(
    /// Label text
    label: &'static str,
    /// Current value signal
    value: Signal<f64>,
    /// Formatted readout shown next to the label
    display: Signal<String>,
    /// Called when the value changes
    on_change: Callback<f64>,
    /// Minimum value
    min: f64,
    /// Maximum value
    max: f64,
    /// Step increment
    step: f64,
) -> impl IntoView {
    view! {
        <div class="space-y-2">
            <div class="flex justify-between text-sm">
                <span class="text-gray-600">{label}</span>
                <span class="font-mono text-gray-400">{move || display.get()}</span>
            </div>
            <input
                type="range"
                class="w-full accent-black h-1.5 bg-gray-200 rounded-lg appearance-none cursor-pointer"
                prop:min=min
                prop:max=max
                prop:step=step
                prop:value=move || value.get()
                on:input=move |ev| {
                    if let Ok(v) = event_target_value(&ev).parse::<f64>() {
                        on_change.call(v);
                    }
                }
            />
        </div>
    }
}
