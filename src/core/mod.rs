pub mod dataset;
pub mod metadata;
pub mod selection;

pub use dataset::{Dataset, RowView, ASSIGN_CLASS, FILE_ATTACHMENT_ID, KNOWN_COLUMNS, REQUIRED_COLUMNS};
pub use metadata::{layout_metadata, MetadataEntry, MetadataLayout, MetadataPanel};
pub use selection::{additional_column_options, format_label, resolve_label, row_labels, SelectionState};
