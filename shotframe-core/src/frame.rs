use serde::{Deserialize, Serialize};

/// Decorative chrome style wrapping the user image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FrameKind {
    Mac,
    Chrome,
    Iphone,
    Ipad,
    None,
}

impl FrameKind {
    pub const ALL: [FrameKind; 5] = [
        FrameKind::Mac,
        FrameKind::Chrome,
        FrameKind::Iphone,
        FrameKind::Ipad,
        FrameKind::None,
    ];

    /// Vertical space consumed by the frame's decorative top bar, in px.
    ///
    /// The preview renders the header at exactly this height; the
    /// max-content-height derivation subtracts the same constant, so
    /// the two cannot disagree. Chrome is two 40px rows (tab strip and
    /// address bar).
    pub fn header_px(self) -> u32 {
        match self {
            FrameKind::Mac => 40,
            FrameKind::Chrome => 80,
            FrameKind::Iphone | FrameKind::Ipad | FrameKind::None => 0,
        }
    }

    /// Fixed CSS aspect ratio for device frames; window frames size to
    /// their content.
    pub fn aspect_ratio(self) -> Option<&'static str> {
        match self {
            FrameKind::Iphone => Some("9 / 19.5"),
            FrameKind::Ipad => Some("3 / 4"),
            _ => None,
        }
    }

    /// Whether the user's corner radius applies to the image itself.
    /// Every real frame owns its own rounding; only the bare image is
    /// rounded by the user setting.
    pub fn rounds_content(self) -> bool {
        matches!(self, FrameKind::None)
    }

    pub fn label(self) -> &'static str {
        match self {
            FrameKind::Mac => "macOS",
            FrameKind::Chrome => "Chrome",
            FrameKind::Iphone => "iPhone",
            FrameKind::Ipad => "iPad",
            FrameKind::None => "None",
        }
    }

    /// Whether this frame displays the title/URL text anywhere.
    pub fn shows_title(self) -> bool {
        !matches!(self, FrameKind::None)
    }
}

/// Light/dark styling of the frame chrome. Affects chrome colors only,
/// never geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_heights_match_layout_constants() {
        assert_eq!(FrameKind::Mac.header_px(), 40);
        assert_eq!(FrameKind::Chrome.header_px(), 80);
        assert_eq!(FrameKind::Iphone.header_px(), 0);
        assert_eq!(FrameKind::Ipad.header_px(), 0);
        assert_eq!(FrameKind::None.header_px(), 0);
    }

    #[test]
    fn test_only_bare_image_rounds_content() {
        for kind in FrameKind::ALL {
            assert_eq!(kind.rounds_content(), kind == FrameKind::None);
        }
    }

    #[test]
    fn test_device_frames_have_fixed_aspect() {
        assert_eq!(FrameKind::Iphone.aspect_ratio(), Some("9 / 19.5"));
        assert_eq!(FrameKind::Ipad.aspect_ratio(), Some("3 / 4"));
        assert_eq!(FrameKind::Mac.aspect_ratio(), None);
        assert_eq!(FrameKind::Chrome.aspect_ratio(), None);
        assert_eq!(FrameKind::None.aspect_ratio(), None);
    }

    #[test]
    fn test_theme_toggle_round_trips() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }
}
