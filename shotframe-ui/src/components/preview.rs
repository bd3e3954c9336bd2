//! The preview surface: the exportable canvas node plus the empty
//! state shown before an image is loaded.

use leptos::*;
use shotframe_core::{image_transform_css, preview_scale, StudioState};

use crate::components::icons::ImageIcon;
use crate::components::mockup_frame::MockupFrame;

#[component]
pub fn Preview(
    state: RwSignal<StudioState>,
    /// The canvas node captured by the export pipeline.
    canvas_ref: NodeRef<html::Div>,
    /// Fired on pointerdown over the image to begin a drag.
    on_image_pointer_down: Callback<web_sys::PointerEvent>,
    is_dragging: Signal<bool>,
) -> impl IntoView {
    // The canvas node: padding, background, and fixed dimensions are
    // inline so the export capture is self-contained. box-sizing is
    // border-box, which is what makes
    // max_content_height = height - 2*padding - header hold exactly.
    let canvas_style = move || {
        state.with(|s| {
            let mut style = format!(
                "padding: {}px; background: {}; box-sizing: border-box; \
                 transition: all 300ms ease-in-out; transform-origin: center;",
                s.padding, s.background
            );
            match s.resolved_dimensions() {
                Some((width, height)) => {
                    // Fixed canvases get a cosmetic scale-down so large
                    // presets fit on screen; the export neutralizes it.
                    style.push_str(&format!(
                        " width: {width}px; height: {height}px; \
                         display: flex; align-items: center; justify-content: center; \
                         flex: none; transform: scale({});",
                        preview_scale(&s.sizing)
                    ));
                }
                None => style.push_str(" display: block; transform: none;"),
            }
            style
        })
    };

    let inner_style = move || {
        if state.with(|s| s.resolved_dimensions().is_some()) {
            "position: relative; width: 100%; height: 100%; \
             display: flex; align-items: center; justify-content: center;"
        } else {
            "position: relative;"
        }
    };

    // Centering/constraint styles handed to the frame's root element.
    let frame_extra_style = Signal::derive(move || {
        if state.with(|s| s.resolved_dimensions().is_some()) {
            "max-width: 100%; max-height: 100%;".to_string()
        } else {
            "margin-left: auto; margin-right: auto; max-width: 800px;".to_string()
        }
    });

    let image_src = move || {
        state.with(|s| {
            s.image
                .as_ref()
                .map(|i| i.src().to_string())
                .unwrap_or_default()
        })
    };

    let image_style = move || {
        state.with(|s| {
            let cursor = if is_dragging.get() {
                "grabbing"
            } else {
                "grab"
            };
            let mut style = format!(
                "display: block; width: 100%; transform-origin: center; \
                 cursor: {cursor}; transform: {};",
                image_transform_css(s.image_scale, s.image_offset)
            );
            // The frame owns rounding except for the bare image.
            if s.frame.rounds_content() {
                style.push_str(&format!(" border-radius: {}px;", s.corner_radius));
            }
            if let Some(max) = s.max_content_height() {
                style.push_str(&format!(" max-height: {max}px;"));
            }
            style
        })
    };

    view! {
        <div class="flex-1 bg-gray-100/50 p-8 md:p-12 overflow-auto flex items-center justify-center min-h-[500px]">
            <Show
                when=move || state.with(|s| s.has_image())
                fallback=|| {
                    view! {
                        <div class="flex flex-col items-center justify-center text-gray-400 space-y-4">
                            <div class="w-24 h-24 bg-gray-200 rounded-full flex items-center justify-center">
                                <ImageIcon class="w-10 h-10 opacity-50" />
                            </div>
                            <p class="text-lg font-medium">"Upload an image to start"</p>
                        </div>
                    }
                }
            >
                <div class="relative">
                    <div node_ref=canvas_ref class="shadow-sm" style=canvas_style>
                        <div style=inner_style>
                            <MockupFrame
                                frame=Signal::derive(move || state.with(|s| s.frame))
                                theme=Signal::derive(move || state.with(|s| s.theme))
                                title=Signal::derive(move || state.with(|s| s.title.clone()))
                                extra_style=frame_extra_style
                            >
                                <img
                                    src=image_src
                                    alt="Preview"
                                    draggable="false"
                                    style=image_style
                                    on:pointerdown=move |ev| on_image_pointer_down.call(ev)
                                />
                            </MockupFrame>
                        </div>
                    </div>
                </div>
            </Show>
        </div>
    }
}
