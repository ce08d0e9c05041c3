//! Error types for contact ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading contact records.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File uses an unsupported encoding.
    #[error("unsupported encoding {encoding} in {path}")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    // === CSV Parsing Errors ===
    /// Failed to parse CSV.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// CSV file has no rows at all (not even a header).
    #[error("no records found in CSV file: {path}")]
    EmptyCsv { path: PathBuf },

    /// Header row has fewer columns than a contact needs.
    #[error("header of {path} has {found} columns, expected at least {expected}")]
    MissingColumns {
        path: PathBuf,
        expected: usize,
        found: usize,
    },
}

impl IngestError {
    pub(crate) fn open(path: &std::path::Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::FileRead {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::FileNotFound {
            path: PathBuf::from("/path/to/input.csv"),
        };
        assert_eq!(err.to_string(), "CSV file not found: /path/to/input.csv");
    }

    #[test]
    fn test_open_maps_not_found() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = IngestError::open(std::path::Path::new("input.csv"), io);
        assert!(matches!(err, IngestError::FileNotFound { .. }));

        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err = IngestError::open(std::path::Path::new("input.csv"), io);
        assert!(matches!(err, IngestError::FileRead { .. }));
    }
}
