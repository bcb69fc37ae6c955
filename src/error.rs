use thiserror::Error;

/// Failures surfaced to the user as a banner.
///
/// None of these are fatal to the process: the shell keeps its current state
/// and shows the message instead.
#[derive(Debug, Error)]
pub enum DashboardError {
    /// Storage credentials are missing or were rejected while signing.
    #[error("No AWS credentials found: {0}")]
    Credentials(String),

    /// The loaded table lacks one or more required columns.
    #[error("CSV must contain 'file_attachment_id' and 'assign_class' columns (missing: {})", missing.join(", "))]
    Validation { missing: Vec<String> },

    /// Signing failed for a reason other than credentials.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Downloading a signed URL failed.
    #[error("Failed to fetch {url}: {reason}")]
    Fetch { url: String, reason: String },

    /// The downloaded bytes could not be parsed as CSV.
    #[error("Failed to parse CSV: {0}")]
    Parse(String),
}

impl DashboardError {
    /// Short label for the banner title
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Credentials(_) => "Credentials",
            Self::Validation { .. } => "Validation",
            Self::Storage(_) => "Storage",
            Self::Fetch { .. } => "Fetch",
            Self::Parse(_) => "Parse",
        }
    }
}
