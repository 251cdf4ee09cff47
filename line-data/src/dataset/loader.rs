//! Loading the dataset from disk.

use std::path::Path;

use tracing::info;

use super::error::DatasetError;
use super::types::Dataset;

/// Parse a dataset document from raw JSON bytes.
///
/// Invalid UTF-8 is reported as a JSON syntax error.
pub fn parse_dataset(contents: &[u8]) -> Result<Dataset, serde_json::Error> {
    serde_json::from_slice(contents)
}

/// Load and parse the dataset at `path`.
///
/// Fails with [`DatasetError::NotFound`] if the file is absent,
/// [`DatasetError::Unreadable`] on other I/O errors and
/// [`DatasetError::Malformed`] if it does not parse. Nothing is retried.
pub fn load_dataset(path: &Path) -> Result<Dataset, DatasetError> {
    if !path.exists() {
        return Err(DatasetError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let contents = std::fs::read(path).map_err(|source| DatasetError::Unreadable {
        path: path.to_path_buf(),
        source,
    })?;

    let dataset = parse_dataset(&contents).map_err(|e| DatasetError::Malformed {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    info!(path = %path.display(), lines = dataset.lines.len(), "loaded line dataset");

    Ok(dataset)
}
