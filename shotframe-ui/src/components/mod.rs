pub mod adjustment_panel;
pub mod appearance_panel;
pub mod background_picker;
pub mod error_banner;
pub mod export_button;
pub mod frame_picker;
pub mod icons;
pub mod mockup_frame;
pub mod preview;
pub mod size_picker;
pub mod slider_control;
pub mod source_picker;

pub use adjustment_panel::AdjustmentPanel;
pub use appearance_panel::AppearancePanel;
pub use error_banner::ErrorBanner;
pub use export_button::ExportButton;
pub use frame_picker::FramePicker;
pub use mockup_frame::MockupFrame;
pub use preview::Preview;
pub use size_picker::SizePicker;
pub use source_picker::SourcePicker;
