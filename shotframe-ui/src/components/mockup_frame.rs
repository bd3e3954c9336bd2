//! The five-variant frame renderer.
//!
//! Wraps arbitrary content in decorative device/browser chrome. Total
//! over the variant domain and purely compositional: the content slot
//! passes through untouched apart from overflow clipping.
//!
//! Everything here is styled inline rather than with stylesheet
//! classes; the export pipeline serializes this subtree standalone, so
//! it must render without any external CSS. Header rows are sized from
//! `FrameKind::header_px` so the rendered chrome always consumes
//! exactly the height the geometry derivation subtracts.

use leptos::*;
use shotframe_core::{FrameKind, Theme};

const UI_FONT: &str = "ui-sans-serif, system-ui, -apple-system, sans-serif";

#[component]
pub fn MockupFrame(
    /// Which chrome style to draw.
    frame: Signal<FrameKind>,
    /// Light/dark chrome colors.
    theme: Signal<Theme>,
    /// Decorative title / URL text shown in window headers.
    title: Signal<String>,
    /// Extra inline style appended to the frame's root element (the
    /// preview uses this for centering and max-size constraints).
    extra_style: Signal<String>,
    /// Content slot.
    children: Children,
) -> impl IntoView {
    let content = store_value(children().into_view());

    move || {
        let theme = theme.get();
        let extra = extra_style.get();
        let content = content.get_value();
        match frame.get() {
            FrameKind::None => bare_frame(&extra, content).into_view(),
            FrameKind::Mac => mac_frame(theme, title.get(), &extra, content).into_view(),
            FrameKind::Chrome => chrome_frame(theme, title.get(), &extra, content).into_view(),
            kind @ (FrameKind::Iphone | FrameKind::Ipad) => {
                device_frame(kind, theme, &extra, content).into_view()
            }
        }
    }
}

/// Rounded window shell shared by the mac and chrome variants.
fn window_shell_style(theme: Theme, extra: &str) -> String {
    let (bg, border) = match theme {
        Theme::Dark => ("#111827", "#1f2937"),
        Theme::Light => ("#ffffff", "#e5e7eb"),
    };
    format!(
        "position: relative; border-radius: 12px; overflow: hidden; \
         box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25); \
         background: {bg}; border: 1px solid {border}; {extra}"
    )
}

fn clipped_body(content: View) -> impl IntoView {
    view! {
        <div style="position: relative; overflow: hidden; background: #ffffff;">{content}</div>
    }
}

fn bare_frame(extra: &str, content: View) -> impl IntoView {
    view! {
        <div style=format!("position: relative; overflow: hidden; {extra}")>{content}</div>
    }
}

fn traffic_light(fill: &str, border: &str) -> impl IntoView {
    view! {
        <div style=format!(
            "width: 12px; height: 12px; border-radius: 9999px; \
             background: {fill}; border: 1px solid {border};"
        )></div>
    }
}

fn mac_frame(theme: Theme, title: String, extra: &str, content: View) -> impl IntoView {
    let (header_border, title_color) = match theme {
        Theme::Dark => ("#1f2937", "#9ca3af"),
        Theme::Light => ("#f3f4f6", "#6b7280"),
    };

    view! {
        <div style=window_shell_style(theme, extra)>
            <div style=format!(
                "height: {}px; box-sizing: border-box; padding: 0 16px; \
                 display: flex; align-items: center; gap: 8px; user-select: none; \
                 border-bottom: 1px solid {header_border};",
                FrameKind::Mac.header_px()
            )>
                <div style="display: flex; gap: 8px;">
                    {traffic_light("#FF5F56", "#E0443E")}
                    {traffic_light("#FFBD2E", "#DEA123")}
                    {traffic_light("#27C93F", "#1AAB29")}
                </div>
                <div style=format!(
                    "flex: 1; margin: 0 16px; text-align: center; \
                     font-size: 12px; font-weight: 500; opacity: 0.6; \
                     overflow: hidden; text-overflow: ellipsis; white-space: nowrap; \
                     font-family: {UI_FONT}; color: {title_color};"
                )>
                    {title}
                </div>
            </div>
            {clipped_body(content)}
        </div>
    }
}

fn chrome_frame(theme: Theme, title: String, extra: &str, content: View) -> impl IntoView {
    // Both header rows are 40px for a total of FrameKind::Chrome.header_px().
    let row_px = FrameKind::Chrome.header_px() / 2;
    let (strip_bg, tab_bg, tab_color) = match theme {
        Theme::Dark => ("#111827", "#1f2937", "#e5e7eb"),
        Theme::Light => ("#f3f4f6", "#ffffff", "#374151"),
    };
    let (bar_bg, bar_border, pill_bg, pill_color) = match theme {
        Theme::Dark => ("#1f2937", "#374151", "#111827", "#d1d5db"),
        Theme::Light => ("#ffffff", "#e5e7eb", "#f3f4f6", "#4b5563"),
    };

    view! {
        <div style=window_shell_style(theme, extra)>
            // Tab strip
            <div style=format!(
                "height: {row_px}px; box-sizing: border-box; padding: 0 12px; \
                 display: flex; align-items: flex-end; gap: 8px; user-select: none; \
                 background: {strip_bg};"
            )>
                <div style="display: flex; gap: 8px; align-self: center; margin-right: 8px;">
                    {traffic_light("#FF5F56", "#E0443E")}
                    {traffic_light("#FFBD2E", "#DEA123")}
                    {traffic_light("#27C93F", "#1AAB29")}
                </div>
                // Fixed active pseudo-tab
                <div style=format!(
                    "height: 32px; box-sizing: border-box; padding: 0 16px; \
                     border-radius: 8px 8px 0 0; min-width: 120px; max-width: 200px; \
                     display: flex; align-items: center; gap: 8px; \
                     font-size: 12px; font-weight: 500; font-family: {UI_FONT}; \
                     background: {tab_bg}; color: {tab_color};"
                )>
                    <span style="overflow: hidden; text-overflow: ellipsis; white-space: nowrap;">
                        "New Tab"
                    </span>
                    <span style="margin-left: auto; opacity: 0.5;">"\u{00d7}"</span>
                </div>
            </div>
            // Navigation / address row
            <div style=format!(
                "height: {row_px}px; box-sizing: border-box; padding: 0 12px; \
                 display: flex; align-items: center; gap: 12px; user-select: none; \
                 background: {bar_bg}; border-bottom: 1px solid {bar_border};"
            )>
                <div style="display: flex; gap: 12px; color: #9ca3af;">
                    {nav_glyph(r#"<path d="m15 18-6-6 6-6"/>"#)}
                    {nav_glyph(r#"<path d="m9 18 6-6-6-6"/>"#)}
                    {nav_glyph(
                        r#"<path d="M21 12a9 9 0 1 1-9-9 9 9 0 0 1 9 9Z"/><path d="M3.6 9h16.8"/><path d="M3.6 15h16.8"/><path d="M11.5 3a17 17 0 0 0 0 18"/><path d="M12.5 3a17 17 0 0 1 0 18"/>"#,
                    )}
                </div>
                <div style=format!(
                    "flex: 1; height: 24px; box-sizing: border-box; padding: 0 12px; \
                     border-radius: 9999px; display: flex; align-items: center; \
                     font-size: 12px; font-family: {UI_FONT}; \
                     overflow: hidden; text-overflow: ellipsis; white-space: nowrap; \
                     background: {pill_bg}; color: {pill_color};"
                )>
                    {title}
                </div>
            </div>
            {clipped_body(content)}
        </div>
    }
}

fn nav_glyph(body: &'static str) -> impl IntoView {
    view! {
        <svg
            width="16"
            height="16"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            inner_html=body
        />
    }
}

fn device_frame(kind: FrameKind, theme: Theme, extra: &str, content: View) -> impl IntoView {
    let (bg, border) = match theme {
        Theme::Dark => ("#111827", "#1f2937"),
        Theme::Light => ("#ffffff", "#e5e7eb"),
    };
    let radius = if kind == FrameKind::Iphone { 48 } else { 32 };
    // aspect_ratio is Some for both device kinds.
    let aspect = kind.aspect_ratio().unwrap_or("1 / 1");

    let overlay = if kind == FrameKind::Iphone {
        // Notch
        view! {
            <div style="position: absolute; top: 0; left: 50%; transform: translateX(-50%); \
                        width: 35%; height: 28px; background: #000000; \
                        border-radius: 0 0 16px 16px; z-index: 20;"></div>
        }
    } else {
        // Camera dot
        view! {
            <div style="position: absolute; top: 12px; left: 50%; transform: translateX(-50%); \
                        width: 8px; height: 8px; background: rgba(0, 0, 0, 0.2); \
                        border-radius: 9999px; z-index: 20;"></div>
        }
    };

    view! {
        <div style=format!(
            "position: relative; border-radius: {radius}px; border: 8px solid {border}; \
             box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25); overflow: hidden; \
             aspect-ratio: {aspect}; background: {bg}; {extra}"
        )>
            {overlay}
            <div style="width: 100%; height: 100%; overflow: hidden; background: #ffffff; \
                        position: relative; z-index: 10;">
                {content}
            </div>
            // Home indicator
            <div style="position: absolute; bottom: 8px; left: 50%; transform: translateX(-50%); \
                        width: 35%; height: 4px; background: rgba(0, 0, 0, 0.2); \
                        border-radius: 9999px; z-index: 20;"></div>
        </div>
    }
}
