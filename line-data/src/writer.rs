//! Writing tables to disk.

use std::path::{Path, PathBuf};

use serde::Serialize;

/// Errors that can occur when writing an output table.
#[derive(Debug, thiserror::Error)]
pub enum WriteError {
    /// Parent directory could not be created
    #[error("failed to create output directory {}: {source}", path.display())]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Table could not be serialized
    #[error("failed to serialize {}: {source}", path.display())]
    Serialize {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Output file could not be written
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl WriteError {
    /// The destination that could not be written.
    pub fn path(&self) -> &Path {
        match self {
            WriteError::CreateDir { path, .. }
            | WriteError::Serialize { path, .. }
            | WriteError::Write { path, .. } => path,
        }
    }
}

/// Serialize `table` as pretty-printed JSON to `path`.
///
/// Creates parent directories if they don't exist and overwrites any
/// existing file. The write is not atomic.
pub fn write_table<T>(table: &T, path: &Path) -> Result<(), WriteError>
where
    T: Serialize + ?Sized,
{
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        std::fs::create_dir_all(parent).map_err(|source| WriteError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }

    let json = serde_json::to_string_pretty(table).map_err(|source| WriteError::Serialize {
        path: path.to_path_buf(),
        source,
    })?;

    std::fs::write(path, json).map_err(|source| WriteError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables::CodeMapping;
    use tempfile::tempdir;

    fn mapping() -> CodeMapping {
        let mut mapping = CodeMapping::new();
        mapping.insert("ЕКО1".into(), "E1".into());
        mapping.insert("EKO1".into(), "E1".into());
        mapping
    }

    #[test]
    fn writes_pretty_json_in_insertion_order() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("line_mapping.json");

        write_table(&mapping(), &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written, "{\n  \"ЕКО1\": \"E1\",\n  \"EKO1\": \"E1\"\n}");
    }

    #[test]
    fn creates_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("src").join("client").join("line_mapping.json");

        write_table(&mapping(), &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn overwrites_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("line_mapping.json");
        std::fs::write(&path, "stale contents that are longer than the table").unwrap();

        write_table(&CodeMapping::new(), &path).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");
    }

    #[test]
    fn unwritable_destination_reports_path() {
        let dir = tempdir().unwrap();
        // A directory in place of the output file
        let path = dir.path().join("line_mapping.json");
        std::fs::create_dir(&path).unwrap();

        let err = write_table(&mapping(), &path).unwrap_err();
        assert!(matches!(err, WriteError::Write { .. }));
        assert_eq!(err.path(), path);
    }

    #[test]
    fn parent_that_is_a_file_fails() {
        let dir = tempdir().unwrap();
        let blocker = dir.path().join("client");
        std::fs::write(&blocker, "").unwrap();
        let path = blocker.join("line_mapping.json");

        let err = write_table(&mapping(), &path).unwrap_err();
        assert!(err.to_string().contains("client"));
    }
}
