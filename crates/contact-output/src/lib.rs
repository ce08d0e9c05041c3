//! Output generation for contact matching runs.
//!
//! Two CSV files are produced per run:
//! - matches (`ContactIDSource,ContactIDMatch,Accuracy`), accuracy as its label
//! - duplicates (`ContactID,FirstName,LastName,Email,ZipCode,Address`)

mod error;
mod sink;
mod writer;

pub use error::{OutputError, Result};
pub use sink::{ContactSink, CsvContactSink, DEFAULT_DUPLICATES_FILE, DEFAULT_MATCHES_FILE};
pub use writer::{
    MATCH_HEADERS, ensure_output_dir, match_rows, write_duplicates_csv, write_matches_csv,
};
