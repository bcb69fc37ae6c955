use crate::error::DashboardError;
use polars::prelude::*;
use std::io::Cursor;

pub const FILE_ATTACHMENT_ID: &str = "file_attachment_id";
pub const ASSIGN_CLASS: &str = "assign_class";

/// Columns a dataset must carry to be usable at all
pub const REQUIRED_COLUMNS: [&str; 2] = [FILE_ATTACHMENT_ID, ASSIGN_CLASS];

/// Columns with a fixed place in the metadata panels
pub const KNOWN_COLUMNS: [&str; 6] = [
    "prediction",
    "ddx",
    "reasoning",
    "morphology",
    "user_message_input",
    "simple_description",
];

/// Convert a Polars AnyValue into a display string
fn anyvalue_to_display_string(value: &AnyValue) -> String {
    match value {
        AnyValue::Null => "".to_string(),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        other => format!("{other}"),
    }
}

/// Case rows loaded for one session
///
/// Immutable once built. Cloning is cheap: the underlying columns are shared.
#[derive(Debug, Clone)]
pub struct Dataset {
    df: DataFrame,
}

impl Dataset {
    /// Parse CSV bytes (header row required) and validate the required columns.
    /// Every column is read as text; cells are only ever displayed.
    pub fn from_csv_bytes(bytes: Vec<u8>) -> Result<Self, DashboardError> {
        let df = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(Some(0))
            .into_reader_with_file_handle(Cursor::new(bytes))
            .finish()
            .map_err(|e| DashboardError::Parse(e.to_string()))?;
        Self::from_dataframe(df)
    }

    /// Wrap an existing frame, rejecting it if a required column is missing
    pub fn from_dataframe(df: DataFrame) -> Result<Self, DashboardError> {
        let names = df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect::<Vec<_>>();
        let missing = missing_required_columns(&names);
        if !missing.is_empty() {
            return Err(DashboardError::Validation { missing });
        }
        Ok(Self { df })
    }

    pub fn row_count(&self) -> usize {
        self.df.height()
    }

    pub fn column_count(&self) -> usize {
        self.df.width()
    }

    /// Column names in file order
    pub fn column_names(&self) -> Vec<String> {
        self.df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    /// Text of one cell. `None` when the column does not exist or the row is out of range.
    pub fn cell_text(&self, row: usize, column: &str) -> Option<String> {
        if row >= self.df.height() {
            return None;
        }
        let col = self.df.column(column).ok()?;
        let value = col.get(row).ok()?;
        Some(anyvalue_to_display_string(&value))
    }

    /// Text of one cell addressed by column position
    pub fn cell_text_at(&self, row: usize, col: usize) -> Option<String> {
        let column = self.df.get_columns().get(col)?;
        if row >= self.df.height() {
            return None;
        }
        column
            .get(row)
            .ok()
            .map(|v| anyvalue_to_display_string(&v))
    }

    pub fn row(&self, index: usize) -> Option<RowView<'_>> {
        (index < self.row_count()).then_some(RowView {
            dataset: self,
            index,
        })
    }
}

/// Required columns absent from `columns`, in declaration order
pub fn missing_required_columns(columns: &[String]) -> Vec<String> {
    REQUIRED_COLUMNS
        .iter()
        .filter(|req| !columns.iter().any(|c| c == *req))
        .map(|s| s.to_string())
        .collect()
}

/// Borrowed view of a single row
#[derive(Debug, Clone, Copy)]
pub struct RowView<'a> {
    dataset: &'a Dataset,
    index: usize,
}

impl<'a> RowView<'a> {
    pub fn index(&self) -> usize {
        self.index
    }

    /// Value of `column` on this row, `None` if the dataset has no such column
    pub fn get(&self, column: &str) -> Option<String> {
        self.dataset.cell_text(self.index, column)
    }

    pub fn file_attachment_id(&self) -> String {
        self.get(FILE_ATTACHMENT_ID).unwrap_or_default()
    }

    pub fn assign_class(&self) -> String {
        self.get(ASSIGN_CLASS).unwrap_or_default()
    }
}
