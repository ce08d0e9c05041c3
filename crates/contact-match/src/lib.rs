//! Pairwise contact matching.
//!
//! Given the full list of contacts for a run, [`match_contacts`] scores every
//! unordered pair once and returns a [`MatchReport`] holding:
//!
//! - symmetric match references for related pairs, and
//! - duplicate pairs for contacts equal on every comparable field.
//!
//! Scoring rules live in [`score`].

pub mod engine;
pub mod pair;
pub mod report;
pub mod score;

pub use engine::{Matcher, PairOutcome, match_contacts};
pub use pair::PairKey;
pub use report::MatchReport;
pub use score::{PairScore, score_pair};
