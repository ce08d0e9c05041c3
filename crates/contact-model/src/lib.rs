//! Data model for contact deduplication.
//!
//! - [`Contact`]: one input record
//! - [`MatchResult`]: a directed, scored reference between related contacts
//! - [`DuplicatePair`]: two contacts equal on every comparable field
//! - [`AccuracyLabel`] and [`classify`]: named confidence for a match level

pub mod accuracy;
pub mod contact;
pub mod error;
pub mod matching;

pub use accuracy::{AccuracyLabel, MAX_LEVEL, classify};
pub use contact::{CONTACT_ID_HEADER, Contact, ContactField};
pub use error::{ModelError, Result};
pub use matching::{DuplicatePair, MatchResult, flatten_duplicates};
