use serde::{Deserialize, Serialize};

use crate::accuracy::{AccuracyLabel, classify};
use crate::contact::Contact;
use crate::error::Result;

/// A directed, scored cross-reference between two related contacts.
///
/// Matches are always emitted in symmetric pairs (`a -> b` and `b -> a`)
/// carrying the same level.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(rename = "contact_id_source")]
    pub source_id: String,
    #[serde(rename = "contact_id_match")]
    pub match_id: String,
    #[serde(rename = "accuracy")]
    pub accuracy_level: u8,
}

impl MatchResult {
    pub fn new(source_id: impl Into<String>, match_id: impl Into<String>, level: u8) -> Self {
        Self {
            source_id: source_id.into(),
            match_id: match_id.into(),
            accuracy_level: level,
        }
    }

    /// Label for this match's level.
    ///
    /// # Errors
    ///
    /// Returns [`crate::ModelError::InvalidLevel`] if the level has no label.
    pub fn label(&self) -> Result<AccuracyLabel> {
        classify(self.accuracy_level)
    }
}

/// Two contacts that agree on every comparable field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuplicatePair {
    pub first: Contact,
    pub second: Contact,
}

impl DuplicatePair {
    pub fn new(first: Contact, second: Contact) -> Self {
        Self { first, second }
    }
}

/// Flatten duplicate pairs into a record list, `first` then `second` per pair.
///
/// No deduplication happens here: a contact that appears in several pairs is
/// listed once per pair.
pub fn flatten_duplicates(pairs: &[DuplicatePair]) -> Vec<Contact> {
    pairs
        .iter()
        .flat_map(|pair| [pair.first.clone(), pair.second.clone()])
        .collect()
}
