//! The session-scoped presentation state.
//!
//! One owned record, created with defaults at startup, mutated in place
//! by UI event handlers, and read by the pure derivation functions in
//! [`crate::geometry`]. Nothing here touches the DOM.

use crate::frame::{FrameKind, Theme};
use crate::point::Point;
use crate::size::CanvasSizing;
use serde::{Deserialize, Serialize};

/// Where the preview image comes from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageSource {
    /// Object URL minted from a local file. Always safe to rasterize.
    Object(String),
    /// User-pasted remote URL. Rasterization may fail on cross-origin
    /// restrictions; the export pipeline surfaces that.
    Remote(String),
}

impl ImageSource {
    pub fn src(&self) -> &str {
        match self {
            ImageSource::Object(url) | ImageSource::Remote(url) => url,
        }
    }
}

/// Background swatches offered in the sidebar. Free-form CSS strings
/// are accepted as well; these are just the quick picks.
pub static BACKGROUND_PRESETS: &[&str] = &[
    "#e5e7eb",
    "#f3f4f6",
    "#ffffff",
    "#000000",
    "linear-gradient(to right, #ff7e5f, #feb47b)",
    "linear-gradient(to right, #6a11cb, #2575fc)",
    "linear-gradient(to right, #43e97b, #38f9d7)",
    "linear-gradient(to right, #fa709a, #fee140)",
];

/// Slider bounds for the adjustable settings.
pub const PADDING_MAX: u32 = 200;
pub const CORNER_RADIUS_MAX: u32 = 40;
pub const IMAGE_SCALE_MIN: f64 = 0.1;
pub const IMAGE_SCALE_MAX: f64 = 10.0;
pub const IMAGE_SCALE_STEP: f64 = 0.05;

/// All user-adjustable presentation state. In-memory only; discarded on
/// page close.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudioState {
    pub image: Option<ImageSource>,
    pub frame: FrameKind,
    pub theme: Theme,
    /// Canvas padding around the frame, px.
    pub padding: u32,
    /// Corner radius for the bare image; only applied when
    /// `frame.rounds_content()`.
    pub corner_radius: u32,
    /// CSS color or gradient for the canvas background.
    pub background: String,
    pub sizing: CanvasSizing,
    /// Dimensions used when `sizing` is Custom.
    pub custom_size: (u32, u32),
    /// Image zoom factor; always > 0.
    pub image_scale: f64,
    /// Drag offset in exported (unscaled) pixels. Unbounded.
    pub image_offset: Point,
    /// Decorative title / URL text shown in frame headers.
    pub title: String,
}

impl Default for StudioState {
    fn default() -> Self {
        Self {
            image: None,
            frame: FrameKind::Mac,
            theme: Theme::Light,
            padding: 64,
            corner_radius: 12,
            background: BACKGROUND_PRESETS[0].to_string(),
            sizing: CanvasSizing::Auto,
            custom_size: (1200, 630),
            image_scale: 1.0,
            image_offset: Point::ZERO,
            title: "example.com".to_string(),
        }
    }
}

impl StudioState {
    /// Replace the image. Every new image starts from a neutral
    /// transform so a previous image's scale/offset never leaks into
    /// the next one.
    pub fn set_image(&mut self, source: ImageSource) {
        self.image = Some(source);
        self.reset_adjustments();
    }

    /// Remove the image, also dropping its transform.
    pub fn clear_image(&mut self) {
        self.image = None;
        self.reset_adjustments();
    }

    /// Reset scale and offset to the neutral transform.
    pub fn reset_adjustments(&mut self) {
        self.image_scale = 1.0;
        self.image_offset = Point::ZERO;
    }

    pub fn has_image(&self) -> bool {
        self.image.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_initial_session() {
        let state = StudioState::default();
        assert_eq!(state.frame, FrameKind::Mac);
        assert_eq!(state.theme, Theme::Light);
        assert_eq!(state.padding, 64);
        assert_eq!(state.corner_radius, 12);
        assert_eq!(state.background, "#e5e7eb");
        assert_eq!(state.sizing, CanvasSizing::Auto);
        assert_eq!(state.image_scale, 1.0);
        assert_eq!(state.image_offset, Point::ZERO);
        assert!(!state.has_image());
    }

    #[test]
    fn test_set_image_resets_transform() {
        let mut state = StudioState::default();
        state.image_scale = 3.0;
        state.image_offset = Point::new(120.0, -45.0);

        state.set_image(ImageSource::Object("blob:abc".to_string()));

        assert_eq!(state.image_scale, 1.0);
        assert_eq!(state.image_offset, Point::ZERO);
        assert_eq!(state.image.unwrap().src(), "blob:abc");
    }

    #[test]
    fn test_clear_image_resets_transform() {
        let mut state = StudioState::default();
        state.set_image(ImageSource::Remote("https://x/y.png".to_string()));
        state.image_scale = 0.5;

        state.clear_image();

        assert!(!state.has_image());
        assert_eq!(state.image_scale, 1.0);
    }

    #[test]
    fn test_state_serde_round_trip() {
        let mut state = StudioState::default();
        state.set_image(ImageSource::Remote("https://x/y.png".to_string()));
        state.sizing = CanvasSizing::Preset("twitter".to_string());

        let json = serde_json::to_string(&state).unwrap();
        let back: StudioState = serde_json::from_str(&json).unwrap();
        assert_eq!(back, state);
    }
}
