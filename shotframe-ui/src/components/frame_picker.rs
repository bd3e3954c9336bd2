//! Frame style selection: the five-variant grid, the chrome theme
//! toggle, and the title/URL text shown in window headers.

use leptos::*;
use shotframe_core::{FrameKind, StudioState};

use crate::components::icons::{
    LayoutIcon, MaximizeIcon, MonitorIcon, MoonIcon, SmartphoneIcon, SunIcon, TabletIcon,
};

fn frame_icon(kind: FrameKind) -> View {
    let class = "w-5 h-5";
    match kind {
        FrameKind::Mac => view! { <MonitorIcon class=class /> }.into_view(),
        FrameKind::Chrome => view! { <LayoutIcon class=class /> }.into_view(),
        FrameKind::Iphone => view! { <SmartphoneIcon class=class /> }.into_view(),
        FrameKind::Ipad => view! { <TabletIcon class=class /> }.into_view(),
        FrameKind::None => view! { <MaximizeIcon class=class /> }.into_view(),
    }
}

#[component]
pub fn FramePicker(state: RwSignal<StudioState>) -> impl IntoView {
    let frame_button = move |kind: FrameKind| {
        view! {
            <button
                class=move || {
                    format!(
                        "flex flex-col items-center gap-2 p-3 rounded-lg border transition-all {}",
                        if state.with(|s| s.frame == kind) {
                            "border-black bg-gray-50 ring-1 ring-black"
                        } else {
                            "border-gray-200 hover:bg-gray-50"
                        },
                    )
                }
                on:click=move |_| state.update(|s| s.frame = kind)
            >
                {frame_icon(kind)}
                <span class="text-xs font-medium">{kind.label()}</span>
            </button>
        }
    };

    view! {
        <div class="space-y-2">
            <div class="flex items-center justify-between">
                <label class="text-xs font-semibold uppercase tracking-wider text-gray-500">
                    "Frame Style"
                </label>
                <button
                    class="p-1.5 rounded-md hover:bg-gray-100 text-gray-500 transition-colors"
                    title="Toggle Frame Theme"
                    on:click=move |_| state.update(|s| s.theme = s.theme.toggled())
                >
                    {move || {
                        if state.with(|s| s.theme.is_dark()) {
                            view! { <SunIcon /> }.into_view()
                        } else {
                            view! { <MoonIcon /> }.into_view()
                        }
                    }}
                </button>
            </div>

            <div class="grid grid-cols-3 gap-2">
                {FrameKind::ALL.into_iter().map(frame_button).collect_view()}
            </div>

            <Show when=move || state.with(|s| s.frame.shows_title())>
                <div class="pt-2">
                    <label class="text-xs font-semibold uppercase tracking-wider text-gray-500 mb-1 block">
                        "Window Title / URL"
                    </label>
                    <input
                        type="text"
                        placeholder="example.com"
                        class="w-full px-3 py-2 border border-gray-200 rounded-lg text-sm focus:outline-none focus:ring-2 focus:ring-black/5"
                        prop:value=move || state.with(|s| s.title.clone())
                        on:input=move |ev| {
                            state.update(|s| s.title = event_target_value(&ev))
                        }
                    />
                </div>
            </Show>
        </div>
    }
}
