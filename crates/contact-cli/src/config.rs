//! Run configuration.

use std::path::PathBuf;

use contact_ingest::CsvContactSource;
use contact_output::{CsvContactSink, DEFAULT_DUPLICATES_FILE, DEFAULT_MATCHES_FILE};

/// Default input file, relative to the working directory.
pub const DEFAULT_INPUT: &str = "files/input.csv";
/// Default output directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "files";

/// Where a run reads contacts from and writes results to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub input: PathBuf,
    pub output_dir: PathBuf,
    pub matches_file: String,
    pub duplicates_file: String,
    /// Match and report without writing output files.
    pub dry_run: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            matches_file: DEFAULT_MATCHES_FILE.to_string(),
            duplicates_file: DEFAULT_DUPLICATES_FILE.to_string(),
            dry_run: false,
        }
    }
}

impl RunConfig {
    pub fn source(&self) -> CsvContactSource {
        CsvContactSource::new(&self.input)
    }

    pub fn sink(&self) -> CsvContactSink {
        CsvContactSink::new(&self.output_dir)
            .with_matches_file(&self.matches_file)
            .with_duplicates_file(&self.duplicates_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_files_directory() {
        let config = RunConfig::default();
        assert_eq!(config.source().path(), PathBuf::from("files/input.csv"));
        assert_eq!(config.sink().matches_path(), PathBuf::from("files/output.csv"));
        assert_eq!(
            config.sink().duplicates_path(),
            PathBuf::from("files/duplicate.csv")
        );
    }
}
