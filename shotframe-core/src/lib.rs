pub mod drag;
pub mod frame;
pub mod geometry;
pub mod point;
pub mod size;
pub mod state;

pub use drag::DragTracker;
pub use frame::{FrameKind, Theme};
pub use geometry::{image_transform_css, image_translation, preview_scale, PREVIEW_SCALE};
pub use point::Point;
pub use size::{get_preset, sizing_options, CanvasSizing, SizePreset, SIZE_PRESETS};
pub use state::{ImageSource, StudioState, BACKGROUND_PRESETS};
