use std::path::{Path, PathBuf};

use tracing::info;

use contact_model::Contact;

use crate::error::Result;
use crate::reader::read_contacts;

/// Supplies the ordered contact list for one run.
pub trait ContactSource {
    /// Load every contact, in input order.
    ///
    /// # Errors
    ///
    /// Returns an [`crate::IngestError`] when the records cannot be read.
    fn load(&self) -> Result<Vec<Contact>>;
}

/// Contact source backed by a CSV file.
#[derive(Debug, Clone)]
pub struct CsvContactSource {
    path: PathBuf,
}

impl CsvContactSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ContactSource for CsvContactSource {
    fn load(&self) -> Result<Vec<Contact>> {
        let contacts = read_contacts(&self.path)?;
        info!(
            path = %self.path.display(),
            contacts = contacts.len(),
            "loaded contacts"
        );
        Ok(contacts)
    }
}
