//! Contact record loading.
//!
//! Reads the input contact list from a CSV file. The first row is a header and
//! the six columns are mapped by position:
//!
//! | Column | Field |
//! |--------|-------|
//! | 0 | `ContactID` |
//! | 1 | `FirstName` |
//! | 2 | `LastName` |
//! | 3 | `Email` |
//! | 4 | `ZipCode` |
//! | 5 | `Address` |
//!
//! # Example
//!
//! ```ignore
//! use contact_ingest::{ContactSource, CsvContactSource};
//!
//! let source = CsvContactSource::new("files/input.csv");
//! let contacts = source.load()?;
//! ```

mod error;
mod reader;
mod source;

// === Error Types ===
pub use error::{IngestError, Result};

// === CSV Reading ===
pub use reader::{CONTACT_COLUMNS, parse_contacts, read_contacts, validate_encoding};

// === Record Source ===
pub use source::{ContactSource, CsvContactSource};
