//! CSV contact file reading.
//!
//! Columns are positional: `ContactID, FirstName, LastName, Email, ZipCode,
//! Address`. The header row is required but its names are not interpreted.
//! Values are kept verbatim (no trimming), since matching is exact.

use std::path::Path;

use csv::{ReaderBuilder, StringRecord};
use tracing::{debug, warn};

use contact_model::Contact;

use crate::error::{IngestError, Result};

/// Number of columns a contact row maps from.
pub const CONTACT_COLUMNS: usize = 6;

/// Reject byte-order marks of encodings other than UTF-8.
pub fn validate_encoding(bytes: &[u8], path: &Path) -> Result<()> {
    if bytes.len() >= 2 {
        if bytes[0..2] == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if bytes[0..2] == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }
    // UTF-8 BOM is stripped by the csv reader.
    Ok(())
}

/// Read all contacts from a CSV file.
///
/// Rows whose field count differs from the header are logged and skipped.
pub fn read_contacts(path: &Path) -> Result<Vec<Contact>> {
    let bytes = std::fs::read(path).map_err(|e| IngestError::open(path, e))?;
    validate_encoding(&bytes, path)?;
    parse_contacts(&bytes, path)
}

/// Parse contacts from CSV bytes. `path` is only used for error context.
pub fn parse_contacts(bytes: &[u8], path: &Path) -> Result<Vec<Contact>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(bytes);

    let headers = reader
        .headers()
        .map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?
        .clone();
    if headers.is_empty() {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    if headers.len() < CONTACT_COLUMNS {
        return Err(IngestError::MissingColumns {
            path: path.to_path_buf(),
            expected: CONTACT_COLUMNS,
            found: headers.len(),
        });
    }

    let mut contacts = Vec::new();
    let mut skipped = 0usize;
    for (idx, row) in reader.records().enumerate() {
        let row = row.map_err(|e| IngestError::CsvParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        if row.len() != headers.len() {
            warn!(
                path = %path.display(),
                record = idx + 1,
                fields = row.len(),
                expected = headers.len(),
                "record has a different number of fields than header, skipping"
            );
            skipped += 1;
            continue;
        }
        contacts.push(contact_from_row(&row));
    }

    debug!(
        path = %path.display(),
        contacts = contacts.len(),
        skipped,
        "parsed contact rows"
    );
    Ok(contacts)
}

fn contact_from_row(row: &StringRecord) -> Contact {
    let get = |idx: usize| row.get(idx).unwrap_or_default().to_string();
    Contact {
        contact_id: get(0),
        first_name: get(1),
        last_name: get(2),
        email: get(3),
        zip_code: get(4),
        address: get(5),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const HEADER: &str = "ContactID,FirstName,LastName,Email,ZipCode,Address\n";

    fn create_temp_csv(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content).unwrap();
        file
    }

    #[test]
    fn test_read_contacts_maps_columns_by_position() {
        let file = create_temp_csv(
            b"id,first,last,mail,zip,street\n1,John,Doe,john@example.com,12345,123 Main St\n",
        );
        let contacts = read_contacts(file.path()).unwrap();

        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].contact_id, "1");
        assert_eq!(contacts[0].first_name, "John");
        assert_eq!(contacts[0].address, "123 Main St");
    }

    #[test]
    fn test_read_contacts_keeps_whitespace_and_quotes() {
        let file = create_temp_csv(
            format!("{HEADER}2, Jane ,Smith,jane@example.com,54321,\"456 Oak St, Apt 2\"\n")
                .as_bytes(),
        );
        let contacts = read_contacts(file.path()).unwrap();

        assert_eq!(contacts[0].first_name, " Jane ");
        assert_eq!(contacts[0].address, "456 Oak St, Apt 2");
    }

    #[test]
    fn test_read_contacts_skips_short_rows() {
        let file = create_temp_csv(
            format!("{HEADER}1,John,Doe,john@example.com,12345,123 Main St\n2,Jane,Smith\n3,Ann,Lee,ann@example.com,11111,1 Elm St\n")
                .as_bytes(),
        );
        let contacts = read_contacts(file.path()).unwrap();

        let ids: Vec<&str> = contacts.iter().map(|c| c.contact_id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_read_contacts_header_only() {
        let file = create_temp_csv(HEADER.as_bytes());
        let contacts = read_contacts(file.path()).unwrap();
        assert!(contacts.is_empty());
    }

    #[test]
    fn test_read_contacts_empty_file() {
        let file = create_temp_csv(b"");
        let result = read_contacts(file.path());
        assert!(matches!(result, Err(IngestError::EmptyCsv { .. })));
    }

    #[test]
    fn test_read_contacts_narrow_header() {
        let file = create_temp_csv(b"ContactID,FirstName\n1,John\n");
        let result = read_contacts(file.path());
        assert!(matches!(
            result,
            Err(IngestError::MissingColumns {
                expected: 6,
                found: 2,
                ..
            })
        ));
    }

    #[test]
    fn test_read_contacts_with_utf8_bom() {
        let mut content = vec![0xEF, 0xBB, 0xBF];
        content.extend_from_slice(HEADER.as_bytes());
        content.extend_from_slice(b"1,John,Doe,john@example.com,12345,123 Main St\n");
        let file = create_temp_csv(&content);
        let contacts = read_contacts(file.path()).unwrap();

        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].contact_id, "1");
    }

    #[test]
    fn test_read_contacts_rejects_utf16() {
        let file = create_temp_csv(&[0xFF, 0xFE, b'I', 0x00]);
        let result = read_contacts(file.path());
        assert!(matches!(
            result,
            Err(IngestError::UnsupportedEncoding {
                encoding: "UTF-16 LE",
                ..
            })
        ));
    }

    #[test]
    fn test_read_contacts_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = read_contacts(&dir.path().join("missing.csv"));
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }
}
