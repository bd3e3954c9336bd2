//! Canvas sizing: the Auto / preset / Custom dropdown plus the numeric
//! inputs shown in Custom mode.

use leptos::*;
use shotframe_core::{sizing_options, CanvasSizing, StudioState};

/// Numeric coercion for the custom inputs: anything non-numeric
/// degrades to 0 rather than erroring.
fn parse_dimension(value: &str) -> u32 {
    value.trim().parse().unwrap_or(0)
}

#[component]
pub fn SizePicker(state: RwSignal<StudioState>) -> impl IntoView {
    let options = store_value(sizing_options());

    let dimension_input = move |label: &'static str, get: fn(&StudioState) -> u32, set: fn(&mut StudioState, u32)| {
        view! {
            <div class="flex-1">
                <label class="text-[10px] text-gray-400 uppercase font-semibold mb-1 block">
                    {label}
                </label>
                <input
                    type="number"
                    min="0"
                    class="w-full px-3 py-2 border border-gray-200 rounded-lg text-sm focus:outline-none focus:ring-2 focus:ring-black/5"
                    prop:value=move || state.with(get).to_string()
                    on:input=move |ev| {
                        let value = parse_dimension(&event_target_value(&ev));
                        state.update(|s| set(s, value));
                    }
                />
            </div>
        }
    };

    view! {
        <div class="space-y-2 border-t border-gray-100 pt-6">
            <label class="text-xs font-semibold uppercase tracking-wider text-gray-500">
                "Canvas Size"
            </label>
            <select
                class="w-full px-3 py-2 border border-gray-200 rounded-lg text-sm focus:outline-none focus:ring-2 focus:ring-black/5 bg-white"
                prop:value=move || state.with(|s| s.sizing.id().to_string())
                on:change=move |ev| {
                    let sizing = CanvasSizing::from_id(&event_target_value(&ev));
                    state.update(|s| s.sizing = sizing);
                }
            >
                {options
                    .get_value()
                    .into_iter()
                    .map(|(id, label)| view! { <option value=id>{label}</option> })
                    .collect_view()}
            </select>

            <Show when=move || state.with(|s| s.sizing == CanvasSizing::Custom)>
                <div class="flex gap-2">
                    {dimension_input("Width", |s| s.custom_size.0, |s, v| s.custom_size.0 = v)}
                    {dimension_input("Height", |s| s.custom_size.1, |s, v| s.custom_size.1 = v)}
                </div>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_numeric_input_degrades_to_zero() {
        assert_eq!(parse_dimension(""), 0);
        assert_eq!(parse_dimension("abc"), 0);
        assert_eq!(parse_dimension("-5"), 0);
        assert_eq!(parse_dimension("12.7"), 0);
    }

    #[test]
    fn test_numeric_input_parses() {
        assert_eq!(parse_dimension("1200"), 1200);
        assert_eq!(parse_dimension(" 630 "), 630);
    }
}
