mod use_image_drag;

pub use use_image_drag::{use_image_drag, ImageDragHandle};
