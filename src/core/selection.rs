use crate::core::dataset::{Dataset, KNOWN_COLUMNS, REQUIRED_COLUMNS};

/// Label shown in the row picker
pub fn format_label(file_attachment_id: &str, assign_class: &str) -> String {
    format!("{file_attachment_id} - {assign_class}")
}

/// One label per row, in row order
pub fn row_labels(dataset: &Dataset) -> Vec<String> {
    (0..dataset.row_count())
        .filter_map(|i| dataset.row(i))
        .map(|row| format_label(&row.file_attachment_id(), &row.assign_class()))
        .collect()
}

/// Index of the first row whose label equals `label`.
///
/// Labels are not unique; duplicates always resolve to the lowest index.
pub fn resolve_label(labels: &[String], label: &str) -> Option<usize> {
    labels.iter().position(|l| l == label)
}

/// Columns offered in the "additional columns" picker: everything that is
/// neither required nor already placed in a fixed panel.
pub fn additional_column_options(dataset: &Dataset) -> Vec<String> {
    dataset
        .column_names()
        .into_iter()
        .filter(|c| !REQUIRED_COLUMNS.contains(&c.as_str()) && !KNOWN_COLUMNS.contains(&c.as_str()))
        .collect()
}

/// What the user has picked in the sidebar. Rebuilt into a row index on every render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SelectionState {
    /// Label chosen in the row picker; `None` means the first row
    pub row_label: Option<String>,
    /// Extra columns in the order they were picked
    pub extra_columns: Vec<String>,
}

impl SelectionState {
    pub fn select_label(&mut self, label: impl Into<String>) {
        self.row_label = Some(label.into());
    }

    /// Add or remove a column. Returns whether it is selected afterwards.
    pub fn toggle_column(&mut self, column: &str) -> bool {
        if let Some(pos) = self.extra_columns.iter().position(|c| c == column) {
            self.extra_columns.remove(pos);
            false
        } else {
            self.extra_columns.push(column.to_string());
            true
        }
    }

    pub fn is_column_selected(&self, column: &str) -> bool {
        self.extra_columns.iter().any(|c| c == column)
    }

    /// Row index for the current label. Falls back to the first row when nothing
    /// was picked yet; `None` for an empty dataset or a label no row carries.
    pub fn resolve_row(&self, labels: &[String]) -> Option<usize> {
        match &self.row_label {
            Some(label) => resolve_label(labels, label),
            None if labels.is_empty() => None,
            None => Some(0),
        }
    }

    /// Drop picks that no longer apply to `dataset` (after a reload)
    pub fn retain_valid(&mut self, dataset: &Dataset) {
        let options = additional_column_options(dataset);
        self.extra_columns.retain(|c| options.contains(c));
        if let Some(label) = &self.row_label {
            if resolve_label(&row_labels(dataset), label).is_none() {
                self.row_label = None;
            }
        }
    }
}
