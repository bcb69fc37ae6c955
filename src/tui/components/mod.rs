pub mod column_picker;
pub mod data_preview;
pub mod help_overlay;
pub mod image_panel;
pub mod metadata_panels;
pub mod row_selector;

pub use column_picker::{ColumnPicker, COLUMN_PICKER_TITLE};
pub use data_preview::{DataPreview, DATA_PREVIEW_TITLE};
pub use help_overlay::HelpOverlay;
pub use image_panel::{ImagePanel, ImageState};
pub use metadata_panels::MetadataPanels;
pub use row_selector::{RowSelector, ROW_SELECTOR_TITLE};
