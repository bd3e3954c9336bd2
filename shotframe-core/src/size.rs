use serde::{Deserialize, Serialize};

/// A fixed export-size preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizePreset {
    pub id: &'static str,
    pub label: &'static str,
    pub width: u32,
    pub height: u32,
}

/// The fixed preset table. "Auto" and "Custom" are sizing modes, not
/// presets, and live on [`CanvasSizing`] instead.
pub static SIZE_PRESETS: &[SizePreset] = &[
    SizePreset {
        id: "twitter",
        label: "Twitter / OG",
        width: 1200,
        height: 630,
    },
    SizePreset {
        id: "instagram",
        label: "Instagram",
        width: 1080,
        height: 1080,
    },
    SizePreset {
        id: "instagram-portrait",
        label: "Insta Portrait",
        width: 1080,
        height: 1350,
    },
    SizePreset {
        id: "story",
        label: "Story",
        width: 1080,
        height: 1920,
    },
    SizePreset {
        id: "fhd",
        label: "Full HD",
        width: 1920,
        height: 1080,
    },
];

pub fn get_preset(id: &str) -> Option<&'static SizePreset> {
    SIZE_PRESETS.iter().find(|p| p.id == id)
}

/// How the exported canvas is sized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CanvasSizing {
    /// Size to content.
    Auto,
    /// Fixed dimensions from the preset with this id.
    Preset(String),
    /// User-supplied dimensions, edited independently of presets.
    Custom,
}

impl CanvasSizing {
    /// Stable id used as the `<select>` value.
    pub fn id(&self) -> &str {
        match self {
            CanvasSizing::Auto => "auto",
            CanvasSizing::Preset(id) => id,
            CanvasSizing::Custom => "custom",
        }
    }

    /// Inverse of [`CanvasSizing::id`]. Unknown ids fall back to Auto
    /// rather than erroring; the select only offers known ids.
    pub fn from_id(id: &str) -> Self {
        match id {
            "custom" => CanvasSizing::Custom,
            "auto" => CanvasSizing::Auto,
            other => match get_preset(other) {
                Some(p) => CanvasSizing::Preset(p.id.to_string()),
                None => CanvasSizing::Auto,
            },
        }
    }

    pub fn is_auto(&self) -> bool {
        matches!(self, CanvasSizing::Auto)
    }
}

/// (id, display label) pairs for the sizing dropdown, in display order.
pub fn sizing_options() -> Vec<(String, String)> {
    let mut options = vec![("auto".to_string(), "Auto Fit".to_string())];
    options.extend(SIZE_PRESETS.iter().map(|p| {
        (
            p.id.to_string(),
            format!("{} ({}x{})", p.label, p.width, p.height),
        )
    }));
    options.push(("custom".to_string(), "Custom".to_string()));
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preset_lookup() {
        let p = get_preset("twitter").unwrap();
        assert_eq!((p.width, p.height), (1200, 630));
        assert!(get_preset("nonexistent").is_none());
    }

    #[test]
    fn test_sizing_id_round_trip() {
        for (id, _) in sizing_options() {
            assert_eq!(CanvasSizing::from_id(&id).id(), id);
        }
    }

    #[test]
    fn test_unknown_id_falls_back_to_auto() {
        assert_eq!(CanvasSizing::from_id("bogus"), CanvasSizing::Auto);
    }

    #[test]
    fn test_options_cover_modes_and_presets() {
        let options = sizing_options();
        assert_eq!(options.len(), SIZE_PRESETS.len() + 2);
        assert_eq!(options.first().unwrap().0, "auto");
        assert_eq!(options.last().unwrap().0, "custom");
    }
}
