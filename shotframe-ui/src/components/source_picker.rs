//! Source image acquisition: local upload (click or drag-and-drop) or
//! a pasted remote URL.

use leptos::*;
use leptos_use::{use_drop_zone_with_options, UseDropZoneEvent, UseDropZoneOptions};
use shotframe_core::{ImageSource, StudioState};

use crate::components::icons::{LinkIcon, UploadIcon};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InputMode {
    Upload,
    Url,
}

#[component]
pub fn SourcePicker(state: RwSignal<StudioState>) -> impl IntoView {
    let (mode, set_mode) = create_signal(InputMode::Upload);
    let drop_zone_ref = create_node_ref::<html::Div>();
    let file_input_ref = create_node_ref::<html::Input>();

    let load_file = move |file: web_sys::File| {
        match web_sys::Url::create_object_url_with_blob(&file) {
            Ok(url) => {
                log::info!("loaded local image: {}", file.name());
                state.update(|s| s.set_image(ImageSource::Object(url)));
            }
            Err(e) => log::warn!("could not create object URL: {e:?}"),
        }
    };

    let _drop_zone = use_drop_zone_with_options(
        drop_zone_ref,
        UseDropZoneOptions::default().on_drop(move |ev: UseDropZoneEvent| {
            if let Some(file) = ev.files.into_iter().next() {
                load_file(file);
            }
        }),
    );

    let on_file_change = move |ev: leptos::ev::Event| {
        let input = event_target::<web_sys::HtmlInputElement>(&ev);
        if let Some(file) = input.files().and_then(|files| files.get(0)) {
            load_file(file);
        }
    };

    let commit_url = move |value: String| {
        if !value.is_empty() {
            log::info!("using remote image URL");
            state.update(|s| s.set_image(ImageSource::Remote(value)));
        }
    };

    let mode_button = move |target: InputMode, label: &'static str| {
        view! {
            <button
                class=move || {
                    format!(
                        "flex-1 py-1.5 text-xs font-medium rounded-md transition-all \
                         flex items-center justify-center gap-1.5 {}",
                        if mode.get() == target {
                            "bg-white shadow-sm text-black"
                        } else {
                            "text-gray-500 hover:text-gray-700"
                        },
                    )
                }
                on:click=move |_| set_mode.set(target)
            >
                {if target == InputMode::Upload {
                    view! { <UploadIcon class="w-3.5 h-3.5" /> }.into_view()
                } else {
                    view! { <LinkIcon class="w-3.5 h-3.5" /> }.into_view()
                }}
                {label}
            </button>
        }
    };

    let thumbnail_src = move || {
        state.with(|s| {
            s.image
                .as_ref()
                .map(|i| i.src().to_string())
                .unwrap_or_default()
        })
    };

    view! {
        <div class="space-y-2">
            <label class="text-xs font-semibold uppercase tracking-wider text-gray-500">
                "Source Image"
            </label>

            <Show
                when=move || state.with(|s| s.has_image())
                fallback=move || {
                    view! {
                        <div class="flex p-1 bg-gray-100 rounded-lg mb-2">
                            {mode_button(InputMode::Upload, "Upload")}
                            {mode_button(InputMode::Url, "URL")}
                        </div>

                        <Show
                            when=move || mode.get() == InputMode::Upload
                            fallback=move || {
                                view! {
                                    <div class="h-32 flex flex-col justify-center">
                                        <input
                                            type="text"
                                            placeholder="Paste image URL and press Enter..."
                                            class="w-full px-3 py-2 border border-gray-200 rounded-lg text-sm focus:outline-none focus:ring-2 focus:ring-black/5"
                                            on:keydown=move |ev| {
                                                if ev.key() == "Enter" {
                                                    commit_url(event_target_value(&ev));
                                                }
                                            }
                                            on:blur=move |ev| commit_url(event_target_value(&ev))
                                        />
                                        <p class="text-[10px] text-gray-400 mt-2 text-center">
                                            "Supports direct image links (png, jpg, webp)"
                                        </p>
                                    </div>
                                }
                            }
                        >
                            <div
                                node_ref=drop_zone_ref
                                class="border-2 border-dashed border-gray-200 hover:border-gray-300 hover:bg-gray-50 rounded-xl p-6 flex flex-col items-center justify-center text-center cursor-pointer transition-colors h-32"
                                on:click=move |_| {
                                    if let Some(input) = file_input_ref.get() {
                                        input.click();
                                    }
                                }
                            >
                                <input
                                    node_ref=file_input_ref
                                    type="file"
                                    accept="image/*"
                                    class="hidden"
                                    on:change=on_file_change
                                />
                                <UploadIcon class="w-6 h-6 text-gray-400 mb-2" />
                                <p class="text-sm font-medium text-gray-600">"Click or drag"</p>
                            </div>
                        </Show>
                    }
                }
            >
                <div class="space-y-2">
                    <div class="relative aspect-video w-full rounded-lg overflow-hidden border border-gray-200 bg-gray-50">
                        <img src=thumbnail_src alt="Source" class="w-full h-full object-contain" />
                    </div>
                    <button
                        class="w-full py-2 rounded-lg bg-red-50 text-red-500 hover:bg-red-100 hover:text-red-600 text-xs font-medium transition-colors"
                        on:click=move |_| state.update(|s| s.clear_image())
                    >
                        "Remove Image"
                    </button>
                </div>
            </Show>
        </div>
    }
}
