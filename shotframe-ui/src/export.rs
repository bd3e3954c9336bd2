//! PNG export pipeline.
//!
//! Captures the preview's canvas subtree at 1:1 geometry and 2x pixel
//! density and triggers a `mockup.png` download. The capture works by
//! cloning the node, swapping the image source for a self-contained
//! data URL, serializing the clone into an SVG `<foreignObject>`, and
//! rasterizing that through an offscreen canvas. The frame chrome is
//! styled inline for exactly this reason: the serialized subtree must
//! render without any stylesheet.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{
    Blob, CanvasRenderingContext2d, Document, HtmlAnchorElement, HtmlCanvasElement, HtmlElement,
    HtmlImageElement, Response, XmlSerializer,
};

/// Pixel density multiplier for the exported PNG.
const EXPORT_PIXEL_RATIO: u32 = 2;

const DOWNLOAD_FILENAME: &str = "mockup.png";

/// Export failure. `Display` is the user-facing message; the underlying
/// JS detail is logged at the failure site instead.
#[derive(Debug, thiserror::Error)]
pub enum ExportError {
    #[error(
        "Could not read the source image. If you pasted an external image URL, \
         the host may not allow it to be exported; download the file and upload \
         it here instead."
    )]
    ImageFetch(String),

    #[error("Could not render the mockup for export. Please try again.")]
    Rasterize(String),

    #[error(
        "The browser blocked encoding the result, usually because of an external \
         image URL. Upload the image file instead."
    )]
    Encode(String),

    #[error("Export failed unexpectedly. Reloading the page may help.")]
    Dom(String),
}

impl ExportError {
    pub fn detail(&self) -> &str {
        match self {
            ExportError::ImageFetch(d)
            | ExportError::Rasterize(d)
            | ExportError::Encode(d)
            | ExportError::Dom(d) => d,
        }
    }
}

fn js_detail(value: JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .unwrap_or_else(|| format!("{value:?}"))
}

fn document() -> Result<Document, ExportError> {
    web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| ExportError::Dom("no window/document".to_string()))
}

/// Rasterize the preview canvas node and download it as `mockup.png`.
///
/// `image_src` is the current image source URL; it is re-fetched and
/// inlined so the serialized subtree needs no external loads (SVG
/// images are not allowed any).
pub async fn export_png(canvas: &HtmlElement, image_src: &str) -> Result<(), ExportError> {
    let data_url = fetch_as_data_url(image_src).await?;

    // Layout size ignores CSS transforms, so this is the 1:1 geometry
    // even while the preview is scaled down.
    let width = canvas.offset_width().max(1) as u32;
    let height = canvas.offset_height().max(1) as u32;

    let svg_url = serialize_to_svg_url(canvas, &data_url, width, height)?;
    let rendered = load_image(&svg_url).await?;
    let png_url = rasterize(&rendered, width, height)?;
    trigger_download(&png_url)?;

    log::info!("exported {DOWNLOAD_FILENAME} at {width}x{height} (@{EXPORT_PIXEL_RATIO}x)");
    Ok(())
}

/// Fetch the image and re-encode it as a base64 data URL. Data URLs
/// pass through untouched. Cross-origin fetches fail here, which is the
/// recoverable error path the UI reports with remediation guidance.
async fn fetch_as_data_url(src: &str) -> Result<String, ExportError> {
    if src.starts_with("data:") {
        return Ok(src.to_string());
    }

    let window = web_sys::window().ok_or_else(|| ExportError::Dom("no window".to_string()))?;
    let response = JsFuture::from(window.fetch_with_str(src))
        .await
        .map_err(|e| ExportError::ImageFetch(js_detail(e)))?;
    let response: Response = response
        .dyn_into()
        .map_err(|e| ExportError::ImageFetch(js_detail(e)))?;
    if !response.ok() {
        return Err(ExportError::ImageFetch(format!(
            "fetch returned status {}",
            response.status()
        )));
    }

    let blob = JsFuture::from(
        response
            .blob()
            .map_err(|e| ExportError::ImageFetch(js_detail(e)))?,
    )
    .await
    .map_err(|e| ExportError::ImageFetch(js_detail(e)))?;
    let blob: Blob = blob
        .dyn_into()
        .map_err(|e| ExportError::ImageFetch(js_detail(e)))?;

    let mime = blob.type_();
    let mime = if mime.is_empty() { "image/png" } else { &mime };

    let buffer = JsFuture::from(blob.array_buffer())
        .await
        .map_err(|e| ExportError::ImageFetch(js_detail(e)))?;
    let bytes = js_sys::Uint8Array::new(&buffer).to_vec();

    Ok(format!("data:{mime};base64,{}", STANDARD.encode(bytes)))
}

/// Clone the canvas node, neutralize preview-only styling, inline the
/// image, and wrap the serialized markup in an SVG data URL.
fn serialize_to_svg_url(
    canvas: &HtmlElement,
    image_data_url: &str,
    width: u32,
    height: u32,
) -> Result<String, ExportError> {
    let clone: HtmlElement = canvas
        .clone_node_with_deep(true)
        .map_err(|e| ExportError::Dom(js_detail(e)))?
        .dyn_into()
        .map_err(|n| ExportError::Dom(js_detail(n.into())))?;

    // Export is always captured at 1:1; the 0.8 preview scale-down must
    // never reach the artifact. Pinning the layout size keeps auto-sized
    // canvases identical to what the user sees.
    let style = clone.style();
    style
        .set_property("transform", "none")
        .and_then(|_| style.set_property("width", &format!("{width}px")))
        .and_then(|_| style.set_property("height", &format!("{height}px")))
        .and_then(|_| style.set_property("margin", "0"))
        .map_err(|e| ExportError::Dom(js_detail(e)))?;

    if let Ok(Some(img)) = clone.query_selector("img") {
        img.set_attribute("src", image_data_url)
            .map_err(|e| ExportError::Dom(js_detail(e)))?;
    }

    let markup = XmlSerializer::new()
        .and_then(|s| s.serialize_to_string(&clone))
        .map_err(|e| ExportError::Rasterize(js_detail(e)))?;

    let svg = format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{width}\" height=\"{height}\">\
         <foreignObject width=\"100%\" height=\"100%\">{markup}</foreignObject></svg>"
    );
    let encoded = String::from(js_sys::encode_uri_component(&svg));
    Ok(format!("data:image/svg+xml;charset=utf-8,{encoded}"))
}

async fn load_image(url: &str) -> Result<HtmlImageElement, ExportError> {
    let image = HtmlImageElement::new().map_err(|e| ExportError::Dom(js_detail(e)))?;
    image.set_src(url);
    JsFuture::from(image.decode())
        .await
        .map_err(|e| ExportError::Rasterize(js_detail(e)))?;
    Ok(image)
}

/// Draw the rendered SVG image onto a high-density offscreen canvas and
/// encode it as a PNG data URL. Encoding is where a tainted canvas
/// fails.
fn rasterize(image: &HtmlImageElement, width: u32, height: u32) -> Result<String, ExportError> {
    let document = document()?;
    let canvas: HtmlCanvasElement = document
        .create_element("canvas")
        .and_then(|e| e.dyn_into().map_err(JsValue::from))
        .map_err(|e| ExportError::Dom(js_detail(e)))?;
    canvas.set_width(width * EXPORT_PIXEL_RATIO);
    canvas.set_height(height * EXPORT_PIXEL_RATIO);

    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")
        .ok()
        .flatten()
        .and_then(|c| c.dyn_into().ok())
        .ok_or_else(|| ExportError::Dom("no 2d context".to_string()))?;

    ctx.scale(EXPORT_PIXEL_RATIO as f64, EXPORT_PIXEL_RATIO as f64)
        .map_err(|e| ExportError::Rasterize(js_detail(e)))?;
    ctx.draw_image_with_html_image_element(image, 0.0, 0.0)
        .map_err(|e| ExportError::Rasterize(js_detail(e)))?;

    canvas
        .to_data_url_with_type("image/png")
        .map_err(|e| ExportError::Encode(js_detail(e)))
}

fn trigger_download(png_url: &str) -> Result<(), ExportError> {
    let document = document()?;
    let anchor: HtmlAnchorElement = document
        .create_element("a")
        .and_then(|e| e.dyn_into().map_err(JsValue::from))
        .map_err(|e| ExportError::Dom(js_detail(e)))?;
    anchor.set_download(DOWNLOAD_FILENAME);
    anchor.set_href(png_url);
    anchor.click();
    Ok(())
}
