//! CSV writers for match references and duplicate records.

use std::fs;
use std::path::Path;

use csv::Writer;
use tracing::{debug, error};

use contact_model::{Contact, MatchResult};

use crate::error::{OutputError, Result};

/// Header of the match output file.
pub const MATCH_HEADERS: [&str; 3] = ["ContactIDSource", "ContactIDMatch", "Accuracy"];

/// Create the output directory (and parents) if missing.
pub fn ensure_output_dir(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|source| OutputError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })
}

/// Convert matches to output rows, level rendered as its label.
///
/// A level without a label is logged and written as an empty cell; the row
/// itself is kept.
pub fn match_rows(matches: &[MatchResult]) -> Vec<[String; 3]> {
    matches
        .iter()
        .map(|result| {
            let accuracy = match result.label() {
                Ok(label) => label.as_str().to_string(),
                Err(err) => {
                    error!(
                        source_id = %result.source_id,
                        match_id = %result.match_id,
                        error = %err,
                        "cannot label match accuracy"
                    );
                    String::new()
                }
            };
            [result.source_id.clone(), result.match_id.clone(), accuracy]
        })
        .collect()
}

/// Write match references to `path`.
pub fn write_matches_csv(path: &Path, matches: &[MatchResult]) -> Result<()> {
    write_csv(path, &MATCH_HEADERS, match_rows(matches))?;
    debug!(path = %path.display(), rows = matches.len(), "wrote matches");
    Ok(())
}

/// Write duplicate contact records to `path`, one row per record.
pub fn write_duplicates_csv(path: &Path, contacts: &[Contact]) -> Result<()> {
    write_csv(
        path,
        &Contact::headers(),
        contacts.iter().map(Contact::to_row),
    )?;
    debug!(path = %path.display(), rows = contacts.len(), "wrote duplicates");
    Ok(())
}

fn write_csv<R, I, F>(path: &Path, header: &[&str], rows: R) -> Result<()>
where
    R: IntoIterator<Item = I>,
    I: IntoIterator<Item = F>,
    F: AsRef<[u8]>,
{
    let csv_error = |e: csv::Error| OutputError::CsvWrite {
        path: path.to_path_buf(),
        message: e.to_string(),
    };

    let mut writer = Writer::from_path(path).map_err(csv_error)?;
    writer.write_record(header).map_err(csv_error)?;
    for row in rows {
        writer.write_record(row).map_err(csv_error)?;
    }
    writer.flush().map_err(|source| OutputError::Flush {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_rows_render_labels() {
        let rows = match_rows(&[MatchResult::new("1", "2", 4), MatchResult::new("2", "1", 1)]);
        assert_eq!(rows[0], ["1".to_string(), "2".to_string(), "High".to_string()]);
        assert_eq!(rows[1][2], "Very Low");
    }

    #[test]
    fn test_match_rows_keep_unlabelled_level() {
        let rows = match_rows(&[MatchResult::new("1", "2", 0)]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0][2], "");
    }

    #[test]
    fn test_ensure_output_dir_creates_nested() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a/b");
        ensure_output_dir(&nested).unwrap();
        assert!(nested.is_dir());
        ensure_output_dir(&nested).unwrap();
    }
}
