use leptos::*;
use shotframe_core::StudioState;
use wasm_bindgen::JsCast;

use crate::components::{
    AdjustmentPanel, AppearancePanel, ErrorBanner, ExportButton, FramePicker, Preview, SizePicker,
    SourcePicker,
};
use crate::export;
use crate::hooks::{use_image_drag, ImageDragHandle};

#[component]
pub fn App() -> impl IntoView {
    // ========== Presentation state ==========
    let state = create_rw_signal(StudioState::default());

    // ========== Drag interaction ==========
    let ImageDragHandle { is_dragging, start } = use_image_drag(state);

    // ========== Export ==========
    let canvas_ref = create_node_ref::<html::Div>();
    let (exporting, set_exporting) = create_signal(false);
    let (export_error, set_export_error) = create_signal(None::<String>);

    let on_export = Callback::new(move |_: ()| {
        // The in-flight flag gates re-entry; no concurrent exports.
        if exporting.get_untracked() {
            return;
        }
        let Some(canvas_el) = canvas_ref.get_untracked() else {
            return;
        };
        let canvas = canvas_el.unchecked_ref::<web_sys::HtmlElement>().clone();
        let Some(image_src) =
            state.with_untracked(|s| s.image.as_ref().map(|i| i.src().to_string()))
        else {
            return;
        };

        set_exporting.set(true);
        set_export_error.set(None);
        log::info!("export started");

        spawn_local(async move {
            match export::export_png(&canvas, &image_src).await {
                Ok(()) => {}
                Err(e) => {
                    log::error!("export failed: {}", e.detail());
                    set_export_error.set(Some(e.to_string()));
                }
            }
            // Always clear the in-progress indicator, success or not.
            set_exporting.set(false);
        });
    });

    view! {
        <div class="min-h-screen bg-gray-50 flex flex-col md:flex-row font-sans text-gray-900">
            <ErrorBanner
                message=export_error.into()
                on_dismiss=Callback::new(move |_: ()| set_export_error.set(None))
            />

            // Sidebar controls
            <div class="w-full md:w-80 bg-white border-r border-gray-200 p-6 flex flex-col gap-8 overflow-y-auto h-screen sticky top-0 z-10">
                <div class="flex items-center gap-2 mb-2">
                    <div class="w-8 h-8 bg-black rounded-lg flex items-center justify-center text-white font-bold">
                        "S"
                    </div>
                    <h1 class="text-xl font-bold tracking-tight">"Shotframe"</h1>
                </div>

                <SourcePicker state=state />
                <AdjustmentPanel state=state />
                <SizePicker state=state />
                <FramePicker state=state />
                <AppearancePanel state=state />
                <ExportButton
                    enabled=Signal::derive(move || state.with(|s| s.has_image()))
                    exporting=exporting.into()
                    on_export=on_export
                />
            </div>

            // Preview area
            <Preview
                state=state
                canvas_ref=canvas_ref
                on_image_pointer_down=start
                is_dragging=is_dragging
            />
        </div>
    }
}
