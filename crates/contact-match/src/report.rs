use std::collections::BTreeMap;

use contact_model::{AccuracyLabel, Contact, DuplicatePair, MatchResult, flatten_duplicates};

/// Completed output of a matching run.
///
/// Both sequences are in pair-evaluation order: outer index ascending, then
/// inner index ascending. Matches hold two directed entries per related pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchReport {
    pub matches: Vec<MatchResult>,
    pub duplicates: Vec<DuplicatePair>,
    /// Distinct unordered pairs that were scored.
    pub pairs_evaluated: usize,
    /// Pairs skipped because both records carry the same identifier.
    pub self_pairs_skipped: usize,
}

impl MatchReport {
    /// Duplicate pairs flattened to a record list, as persisted.
    pub fn duplicate_records(&self) -> Vec<Contact> {
        flatten_duplicates(&self.duplicates)
    }

    /// Number of related (undirected) pairs.
    pub fn related_pairs(&self) -> usize {
        self.matches.len() / 2
    }

    /// Directed match count per label. Levels without a label are not counted.
    pub fn label_counts(&self) -> BTreeMap<AccuracyLabel, usize> {
        let mut counts = BTreeMap::new();
        for result in &self.matches {
            if let Ok(label) = result.label() {
                *counts.entry(label).or_insert(0) += 1;
            }
        }
        counts
    }
}

/// Accumulates pair outcomes in evaluation order.
#[derive(Debug, Default)]
pub(crate) struct ReportBuilder {
    report: MatchReport,
}

impl ReportBuilder {
    pub(crate) fn record_match(&mut self, a: &Contact, b: &Contact, level: u8) {
        self.report.pairs_evaluated += 1;
        self.report
            .matches
            .push(MatchResult::new(&a.contact_id, &b.contact_id, level));
        self.report
            .matches
            .push(MatchResult::new(&b.contact_id, &a.contact_id, level));
    }

    pub(crate) fn record_duplicate(&mut self, a: &Contact, b: &Contact) {
        self.report.pairs_evaluated += 1;
        self.report
            .duplicates
            .push(DuplicatePair::new(a.clone(), b.clone()));
    }

    pub(crate) fn record_unrelated(&mut self) {
        self.report.pairs_evaluated += 1;
    }

    pub(crate) fn record_self_pair(&mut self) {
        self.report.self_pairs_skipped += 1;
    }

    pub(crate) fn finish(self) -> MatchReport {
        self.report
    }
}
