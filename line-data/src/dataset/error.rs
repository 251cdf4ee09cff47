//! Dataset loading error types.

use std::path::PathBuf;

/// Errors that can occur when loading the line dataset.
#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    /// The input file does not exist
    #[error("dataset not found: {}", path.display())]
    NotFound { path: PathBuf },

    /// The input file exists but could not be read
    #[error("failed to read dataset {}: {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The input is not valid JSON or lacks the expected shape
    #[error("malformed dataset {}: {message}", path.display())]
    Malformed { path: PathBuf, message: String },
}
