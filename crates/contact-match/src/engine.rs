//! Pairwise matching engine.
//!
//! Every unordered pair of contacts is scored at most once. [`match_contacts`]
//! walks pairs as `i < j`, which never repeats a pair on its own; the
//! [`Matcher`] additionally remembers the key of every evaluated pair and
//! ignores a pair it has already seen, in either order.

use std::collections::HashSet;

use tracing::{debug, trace, warn};

use contact_model::Contact;

use crate::pair::PairKey;
use crate::report::{MatchReport, ReportBuilder};
use crate::score::score_pair;

/// Classification of one evaluated pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairOutcome {
    /// All comparable fields are equal.
    Duplicate,
    /// Related contacts at the given level (1 to 5).
    Match { level: u8 },
    /// Truncated score of zero.
    Unrelated,
}

/// Stateful pair evaluator that accumulates a [`MatchReport`].
#[derive(Debug, Default)]
pub struct Matcher {
    seen: HashSet<PairKey>,
    builder: ReportBuilder,
}

impl Matcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate one pair.
    ///
    /// Returns `None` when the pair was already evaluated (in either order) or
    /// when both records carry the same identifier.
    pub fn evaluate(&mut self, a: &Contact, b: &Contact) -> Option<PairOutcome> {
        let key = PairKey::new(&a.contact_id, &b.contact_id);
        if key.is_self_pair() {
            warn!(contact_id = %a.contact_id, "skipping pair of records sharing one contact id");
            self.builder.record_self_pair();
            return None;
        }
        if self.seen.contains(&key) {
            trace!(pair = %key, "pair already evaluated");
            return None;
        }

        let score = score_pair(a, b);
        let outcome = if score.is_duplicate() {
            debug!(
                first_id = %a.contact_id,
                second_id = %b.contact_id,
                "duplicate contacts"
            );
            self.builder.record_duplicate(a, b);
            PairOutcome::Duplicate
        } else if score.level() > 0 {
            trace!(
                source_id = %a.contact_id,
                match_id = %b.contact_id,
                level = score.level(),
                base = score.base,
                "contacts matched"
            );
            self.builder.record_match(a, b, score.level());
            PairOutcome::Match {
                level: score.level(),
            }
        } else {
            self.builder.record_unrelated();
            PairOutcome::Unrelated
        };

        self.seen.insert(key);
        Some(outcome)
    }

    /// Number of distinct pairs evaluated so far.
    pub fn pairs_evaluated(&self) -> usize {
        self.seen.len()
    }

    pub fn finish(self) -> MatchReport {
        self.builder.finish()
    }
}

/// Compare every unordered pair of `contacts` once and collect the outcomes.
pub fn match_contacts(contacts: &[Contact]) -> MatchReport {
    let mut matcher = Matcher::new();
    for (i, first) in contacts.iter().enumerate() {
        for second in &contacts[i + 1..] {
            matcher.evaluate(first, second);
        }
    }
    matcher.finish()
}
