//! Blocking, dismissible banner for recoverable failures.

use leptos::*;

#[component]
pub fn ErrorBanner(
    /// Message to display (None = hidden)
    message: Signal<Option<String>>,
    on_dismiss: Callback<()>,
) -> impl IntoView {
    view! {
        <Show when=move || message.get().is_some()>
            <div class="fixed inset-x-0 top-0 z-50 flex justify-center p-4 pointer-events-none">
                <div class="pointer-events-auto max-w-lg w-full bg-red-50 border border-red-200 \
                            rounded-xl shadow-lg p-4 flex items-start gap-3">
                    <div class="flex-1 text-sm text-red-700">
                        {move || message.get().unwrap_or_default()}
                    </div>
                    <button
                        class="text-xs font-medium text-red-500 hover:text-red-700 shrink-0"
                        on:click=move |_| on_dismiss.call(())
                    >
                        "Dismiss"
                    </button>
                </div>
            </div>
        </Show>
    }
}
