//! Canvas background: preset swatches plus a free-form CSS
//! color/gradient input with a live swatch.

use leptos::*;
use shotframe_core::{StudioState, BACKGROUND_PRESETS};

#[component]
pub fn BackgroundPicker(state: RwSignal<StudioState>) -> impl IntoView {
    let swatch = move |preset: &'static str| {
        view! {
            <button
                class=move || {
                    format!(
                        "w-full aspect-square rounded-full border border-gray-200 shadow-sm \
                         transition-transform hover:scale-110 {}",
                        if state.with(|s| s.background == preset) {
                            "ring-2 ring-offset-2 ring-black"
                        } else {
                            ""
                        },
                    )
                }
                style=format!("background: {preset};")
                on:click=move |_| state.update(|s| s.background = preset.to_string())
            ></button>
        }
    };

    view! {
        <div class="space-y-2">
            <div class="flex justify-between text-sm text-gray-600">"Background"</div>
            <div class="grid grid-cols-4 gap-4">
                {BACKGROUND_PRESETS.iter().copied().map(swatch).collect_view()}
            </div>
            <div class="flex items-center gap-2 mx-2 my-4">
                <div
                    class="w-6 h-6 rounded-full border border-gray-200"
                    style=move || state.with(|s| format!("background: {};", s.background))
                ></div>
                <input
                    type="text"
                    class="flex-1 text-xs font-mono border-none bg-transparent focus:ring-0"
                    prop:value=move || state.with(|s| s.background.clone())
                    on:input=move |ev| {
                        state.update(|s| s.background = event_target_value(&ev))
                    }
                />
            </div>
        </div>
    }
}
