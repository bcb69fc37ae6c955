//! Layout model for the metadata panels shown under the image.
//!
//! Pure data: the TUI component turns a [`MetadataLayout`] into widgets.

use crate::core::dataset::RowView;

pub const MODEL_PREDICTION_TITLE: &str = "MODEL PREDICTION";
pub const GROUND_TRUTH_TITLE: &str = "GROUND TRUTH";
pub const ADDITIONAL_TITLE: &str = "Additional Information";

/// Display labels for the known columns
pub const COLUMN_LABELS: [(&str, &str); 6] = [
    ("prediction", "Model DDx"),
    ("reasoning", "Summary"),
    ("user_message_input", "Expert Term predictions"),
    ("ddx", "Doctor DDx"),
    ("morphology", "Doctor Description"),
    ("simple_description", "Body Location"),
];

// The panel titled MODEL PREDICTION lists these. The grouping is kept exactly
// as the dashboard has always shown it; see DESIGN.md before changing it.
const MODEL_PREDICTION_COLUMNS: [&str; 3] = ["prediction", "reasoning", "user_message_input"];
const GROUND_TRUTH_COLUMNS: [&str; 3] = ["ddx", "morphology", "simple_description"];

pub fn display_label(column: &str) -> Option<&'static str> {
    COLUMN_LABELS
        .iter()
        .find(|(c, _)| *c == column)
        .map(|(_, label)| *label)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataEntry {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataPanel {
    pub title: &'static str,
    pub entries: Vec<MetadataEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetadataLayout {
    pub model_prediction: MetadataPanel,
    pub ground_truth: MetadataPanel,
    /// Present whenever extra columns were requested, even if none matched
    pub additional: Option<MetadataPanel>,
}

fn known_panel(title: &'static str, columns: &[&str], row: &RowView<'_>) -> MetadataPanel {
    let entries = columns
        .iter()
        .filter_map(|col| {
            let value = row.get(col)?;
            Some(MetadataEntry {
                label: display_label(col).unwrap_or(col).to_string(),
                value,
            })
        })
        .collect();
    MetadataPanel { title, entries }
}

/// Lay out the selected row. Columns the dataset does not have are skipped silently.
pub fn layout_metadata(row: &RowView<'_>, extra_columns: &[String]) -> MetadataLayout {
    let additional = (!extra_columns.is_empty()).then(|| MetadataPanel {
        title: ADDITIONAL_TITLE,
        entries: extra_columns
            .iter()
            .filter_map(|col| {
                row.get(col).map(|value| MetadataEntry {
                    label: col.clone(),
                    value,
                })
            })
            .collect(),
    });

    MetadataLayout {
        model_prediction: known_panel(MODEL_PREDICTION_TITLE, &MODEL_PREDICTION_COLUMNS, row),
        ground_truth: known_panel(GROUND_TRUTH_TITLE, &GROUND_TRUTH_COLUMNS, row),
        additional,
    }
}
