//! The download control. Disabled without an image; an in-flight
//! export disables re-activation until it resolves or fails.

use leptos::*;

use crate::components::icons::DownloadIcon;

#[component]
pub fn ExportButton(
    /// Whether an image is loaded.
    enabled: Signal<bool>,
    /// Whether an export is currently in flight.
    exporting: Signal<bool>,
    on_export: Callback<()>,
) -> impl IntoView {
    let disabled = move || !enabled.get() || exporting.get();

    view! {
        <div class="mt-auto pt-6 border-t border-gray-100">
            <button
                class=move || {
                    format!(
                        "w-full py-3 px-4 rounded-xl flex items-center justify-center gap-2 \
                         font-medium transition-all {}",
                        if disabled() {
                            "bg-gray-100 text-gray-400 cursor-not-allowed"
                        } else {
                            "bg-black text-white hover:bg-gray-800 shadow-lg hover:shadow-xl active:scale-95"
                        },
                    )
                }
                prop:disabled=disabled
                on:click=move |_| {
                    if !disabled() {
                        on_export.call(());
                    }
                }
            >
                {move || {
                    if exporting.get() {
                        view! {
                            <div class="w-5 h-5 border-2 border-white/30 border-t-white rounded-full animate-spin"></div>
                        }
                            .into_view()
                    } else {
                        view! { <DownloadIcon class="w-5 h-5" /> }.into_view()
                    }
                }}
                <span>
                    {move || if exporting.get() { "Generating..." } else { "Download Mockup" }}
                </span>
            </button>
        </div>
    }
}
