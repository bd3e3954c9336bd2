//! Pure geometry derivation over [`StudioState`].
//!
//! The preview and the export pipeline both consume these values; the
//! export is always captured at 1:1 geometry, so everything preview-only
//! (the 0.8 scale-down) is isolated here behind [`preview_scale`].

use crate::point::Point;
use crate::size::{get_preset, CanvasSizing};
use crate::state::StudioState;

/// Cosmetic shrink applied to the on-screen display of fixed-size
/// canvases so large presets fit the viewport. Never applied to the
/// exported artifact; drag deltas are divided by the same constant so
/// drag distance maps 1:1 to exported pixels.
///
/// Coupled to the preview's CSS `transform: scale(..)`. If preview zoom
/// ever becomes dynamic this must become a computed value.
pub const PREVIEW_SCALE: f64 = 0.8;

/// Display scale of the preview for the given sizing mode.
pub fn preview_scale(sizing: &CanvasSizing) -> f64 {
    if sizing.is_auto() {
        1.0
    } else {
        PREVIEW_SCALE
    }
}

impl StudioState {
    /// Fixed canvas dimensions, or `None` in Auto mode (size to
    /// content). Preset ids that no longer resolve degrade to Auto.
    pub fn resolved_dimensions(&self) -> Option<(u32, u32)> {
        match &self.sizing {
            CanvasSizing::Auto => None,
            CanvasSizing::Preset(id) => get_preset(id).map(|p| (p.width, p.height)),
            CanvasSizing::Custom => Some(self.custom_size),
        }
    }

    /// Upper bound on the image's rendered height so it never overflows
    /// the frame's interior: canvas height minus padding on both sides
    /// minus the frame header. Clamps at 0; `None` when the canvas
    /// sizes to content.
    pub fn max_content_height(&self) -> Option<u32> {
        let (_, height) = self.resolved_dimensions()?;
        Some(
            height
                .saturating_sub(2 * self.padding)
                .saturating_sub(self.frame.header_px()),
        )
    }
}

/// Translation applied to the image in unscaled coordinate space.
///
/// The offset is stored in exported pixels but the CSS transform
/// applies translation after scaling, so it is divided by the scale to
/// keep the offset visually stable when the user rescales.
pub fn image_translation(scale: f64, offset: Point) -> Point {
    offset.div_scalar(scale)
}

/// The composed CSS transform for the image element.
pub fn image_transform_css(scale: f64, offset: Point) -> String {
    let t = image_translation(scale, offset);
    format!("scale({scale}) translate({}px, {}px)", t.x, t.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::FrameKind;

    #[test]
    fn test_auto_mode_has_no_dimensions() {
        let state = StudioState::default();
        assert_eq!(state.resolved_dimensions(), None);
        assert_eq!(state.max_content_height(), None);
    }

    #[test]
    fn test_twitter_preset_mac_frame_scenario() {
        let mut state = StudioState::default();
        state.sizing = CanvasSizing::Preset("twitter".to_string());
        state.padding = 64;
        state.frame = FrameKind::Mac;

        assert_eq!(state.resolved_dimensions(), Some((1200, 630)));
        // 630 - 128 - 40
        assert_eq!(state.max_content_height(), Some(462));
    }

    #[test]
    fn test_custom_dimensions_pass_through() {
        let mut state = StudioState::default();
        state.sizing = CanvasSizing::Custom;
        state.custom_size = (800, 600);
        assert_eq!(state.resolved_dimensions(), Some((800, 600)));
    }

    #[test]
    fn test_max_content_height_non_increasing_in_padding() {
        let mut state = StudioState::default();
        state.sizing = CanvasSizing::Preset("twitter".to_string());
        state.frame = FrameKind::Chrome;

        let mut previous = u32::MAX;
        for padding in 0..=crate::state::PADDING_MAX {
            state.padding = padding;
            let h = state.max_content_height().unwrap();
            assert!(h <= previous);
            previous = h;
        }
    }

    #[test]
    fn test_max_content_height_clamps_at_zero() {
        let mut state = StudioState::default();
        state.sizing = CanvasSizing::Custom;
        state.custom_size = (100, 50);
        state.padding = 200;
        state.frame = FrameKind::Chrome;
        assert_eq!(state.max_content_height(), Some(0));
    }

    #[test]
    fn test_image_translation_stable_under_rescale() {
        let t = image_translation(2.0, Point::new(40.0, 20.0));
        assert_eq!(t, Point::new(20.0, 10.0));
    }

    #[test]
    fn test_transform_css_composition() {
        let css = image_transform_css(2.0, Point::new(40.0, 20.0));
        assert_eq!(css, "scale(2) translate(20px, 10px)");
    }

    #[test]
    fn test_preview_scale_only_for_fixed_sizing() {
        assert_eq!(preview_scale(&CanvasSizing::Auto), 1.0);
        assert_eq!(
            preview_scale(&CanvasSizing::Preset("twitter".to_string())),
            PREVIEW_SCALE
        );
        assert_eq!(preview_scale(&CanvasSizing::Custom), PREVIEW_SCALE);
    }
}
