//! End-to-end scenarios over the presentation state: a sequence of user
//! actions followed by assertions on the derived geometry.

use shotframe_core::{
    image_transform_css, image_translation, preview_scale, CanvasSizing, FrameKind, ImageSource,
    Point, StudioState, PREVIEW_SCALE, SIZE_PRESETS,
};

#[test]
fn social_preset_with_mac_frame_bounds_image_height() {
    let mut state = StudioState::default();
    state.set_image(ImageSource::Object("blob:shot".to_string()));
    state.sizing = CanvasSizing::Preset("twitter".to_string());
    state.padding = 64;
    state.frame = FrameKind::Mac;

    assert_eq!(state.max_content_height(), Some(462));

    // Switching to the heavier Chrome header shrinks the interior.
    state.frame = FrameKind::Chrome;
    assert_eq!(state.max_content_height(), Some(422));

    // Device frames and the bare image have no header at all.
    state.frame = FrameKind::Iphone;
    assert_eq!(state.max_content_height(), Some(502));
}

#[test]
fn every_preset_fits_its_own_declared_dimensions() {
    for preset in SIZE_PRESETS {
        let mut state = StudioState::default();
        state.sizing = CanvasSizing::Preset(preset.id.to_string());
        state.padding = 0;
        state.frame = FrameKind::None;

        assert_eq!(state.resolved_dimensions(), Some((preset.width, preset.height)));
        assert_eq!(state.max_content_height(), Some(preset.height));
    }
}

#[test]
fn header_budget_agrees_across_all_frames() {
    // The geometry derivation and the rendered chrome share one
    // constant per variant; a canvas with zero padding loses exactly
    // that many pixels of interior height.
    let mut state = StudioState::default();
    state.sizing = CanvasSizing::Custom;
    state.custom_size = (1000, 1000);
    state.padding = 0;

    for kind in FrameKind::ALL {
        state.frame = kind;
        assert_eq!(
            state.max_content_height(),
            Some(1000 - kind.header_px()),
            "frame {:?}",
            kind
        );
    }
}

#[test]
fn replacing_the_image_neutralizes_a_dirty_transform() {
    let mut state = StudioState::default();
    state.set_image(ImageSource::Object("blob:first".to_string()));
    state.image_scale = 4.5;
    state.image_offset = Point::new(-300.0, 90.0);

    state.set_image(ImageSource::Remote("https://example.com/shot.png".to_string()));

    assert_eq!(state.image_scale, 1.0);
    assert_eq!(state.image_offset, Point::ZERO);
    assert_eq!(
        image_transform_css(state.image_scale, state.image_offset),
        "scale(1) translate(0px, 0px)"
    );
}

#[test]
fn offset_is_visually_stable_under_rescale() {
    let offset = Point::new(40.0, 20.0);

    // The rendered translation shrinks as scale grows, so the net
    // on-screen displacement (translation x scale) stays put.
    for scale in [0.5, 1.0, 2.0, 8.0] {
        let t = image_translation(scale, offset);
        assert!((t.x * scale - offset.x).abs() < 1e-9);
        assert!((t.y * scale - offset.y).abs() < 1e-9);
    }
}

#[test]
fn preview_scale_never_leaks_into_auto_mode() {
    assert_eq!(preview_scale(&CanvasSizing::Auto), 1.0);
    for preset in SIZE_PRESETS {
        assert_eq!(
            preview_scale(&CanvasSizing::Preset(preset.id.to_string())),
            PREVIEW_SCALE
        );
    }
}
