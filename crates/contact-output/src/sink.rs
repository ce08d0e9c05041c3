use std::path::{Path, PathBuf};

use tracing::info;

use contact_model::{Contact, MatchResult};

use crate::error::Result;
use crate::writer::{ensure_output_dir, write_duplicates_csv, write_matches_csv};

/// Default file name for match references.
pub const DEFAULT_MATCHES_FILE: &str = "output.csv";
/// Default file name for duplicate records.
pub const DEFAULT_DUPLICATES_FILE: &str = "duplicate.csv";

/// Persists the results of a run.
pub trait ContactSink {
    /// Persist duplicate records, flattened from pairs in encounter order.
    ///
    /// # Errors
    ///
    /// Returns an [`crate::OutputError`] when the records cannot be written.
    fn persist_duplicates(&self, duplicates: &[Contact]) -> Result<()>;

    /// Persist directed match references in evaluation order.
    ///
    /// # Errors
    ///
    /// Returns an [`crate::OutputError`] when the references cannot be written.
    fn persist_matches(&self, matches: &[MatchResult]) -> Result<()>;
}

/// Sink writing two CSV files into an output directory.
#[derive(Debug, Clone)]
pub struct CsvContactSink {
    output_dir: PathBuf,
    matches_file: String,
    duplicates_file: String,
}

impl CsvContactSink {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            matches_file: DEFAULT_MATCHES_FILE.to_string(),
            duplicates_file: DEFAULT_DUPLICATES_FILE.to_string(),
        }
    }

    #[must_use]
    pub fn with_matches_file(mut self, name: impl Into<String>) -> Self {
        self.matches_file = name.into();
        self
    }

    #[must_use]
    pub fn with_duplicates_file(mut self, name: impl Into<String>) -> Self {
        self.duplicates_file = name.into();
        self
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    pub fn matches_path(&self) -> PathBuf {
        self.output_dir.join(&self.matches_file)
    }

    pub fn duplicates_path(&self) -> PathBuf {
        self.output_dir.join(&self.duplicates_file)
    }
}

impl ContactSink for CsvContactSink {
    fn persist_duplicates(&self, duplicates: &[Contact]) -> Result<()> {
        ensure_output_dir(&self.output_dir)?;
        let path = self.duplicates_path();
        write_duplicates_csv(&path, duplicates)?;
        info!(path = %path.display(), records = duplicates.len(), "duplicates written");
        Ok(())
    }

    fn persist_matches(&self, matches: &[MatchResult]) -> Result<()> {
        ensure_output_dir(&self.output_dir)?;
        let path = self.matches_path();
        write_matches_csv(&path, matches)?;
        info!(path = %path.display(), rows = matches.len(), "matches written");
        Ok(())
    }
}
