//! Run pipeline: load contacts, match every pair, persist results.
//!
//! Stages run strictly in sequence and the first failure aborts the run.
//! Duplicates are persisted before matches; when writing duplicates fails,
//! matches are not written.

use std::collections::BTreeMap;
use std::time::Instant;

use thiserror::Error;
use tracing::{info, info_span, trace};

use contact_ingest::{ContactSource, IngestError};
use contact_match::{MatchReport, match_contacts};
use contact_model::AccuracyLabel;
use contact_output::{ContactSink, OutputError};

use crate::logging::redact_value;

/// Errors that abort a run.
#[derive(Debug, Error)]
pub enum RunError {
    #[error(transparent)]
    Read(#[from] IngestError),
    #[error(transparent)]
    Write(#[from] OutputError),
}

/// Options controlling a single run.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    /// Skip persisting results.
    pub dry_run: bool,
}

/// Counts and timings of a completed run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub contacts: usize,
    pub pairs_evaluated: usize,
    pub self_pairs_skipped: usize,
    pub related_pairs: usize,
    pub match_rows: usize,
    pub duplicate_pairs: usize,
    pub duplicate_records: usize,
    pub label_counts: BTreeMap<AccuracyLabel, usize>,
    pub persisted: bool,
    pub ingest_ms: u128,
    pub match_ms: u128,
    pub output_ms: u128,
}

impl RunSummary {
    fn from_report(contacts: usize, report: &MatchReport) -> Self {
        Self {
            contacts,
            pairs_evaluated: report.pairs_evaluated,
            self_pairs_skipped: report.self_pairs_skipped,
            related_pairs: report.related_pairs(),
            match_rows: report.matches.len(),
            duplicate_pairs: report.duplicates.len(),
            duplicate_records: report.duplicates.len() * 2,
            label_counts: report.label_counts(),
            ..Self::default()
        }
    }
}

/// Result of a completed run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub report: MatchReport,
    pub summary: RunSummary,
}

/// Execute one run against the given source and sink.
///
/// # Errors
///
/// Returns [`RunError::Read`] when contacts cannot be loaded and
/// [`RunError::Write`] when results cannot be persisted. Errors are passed
/// through unchanged and nothing is retried.
pub fn run_pipeline<S, K>(source: &S, sink: &K, options: RunOptions) -> Result<RunOutput, RunError>
where
    S: ContactSource + ?Sized,
    K: ContactSink + ?Sized,
{
    // =========================================================================
    // Stage 1: Ingest
    // =========================================================================
    let ingest_start = Instant::now();
    let contacts = info_span!("ingest").in_scope(|| source.load())?;
    let ingest_ms = ingest_start.elapsed().as_millis();
    info!(
        contacts = contacts.len(),
        duration_ms = ingest_ms,
        "ingest complete"
    );

    // =========================================================================
    // Stage 2: Match
    // =========================================================================
    let match_start = Instant::now();
    let report = info_span!("match", contacts = contacts.len()).in_scope(|| match_contacts(&contacts));
    let match_ms = match_start.elapsed().as_millis();
    info!(
        pairs = report.pairs_evaluated,
        matches = report.matches.len(),
        duplicate_pairs = report.duplicates.len(),
        duration_ms = match_ms,
        "matching complete"
    );
    for pair in &report.duplicates {
        trace!(
            first_id = %pair.first.contact_id,
            second_id = %pair.second.contact_id,
            email = redact_value(&pair.first.email),
            last_name = redact_value(&pair.first.last_name),
            "duplicate record"
        );
    }

    let mut summary = RunSummary::from_report(contacts.len(), &report);
    summary.ingest_ms = ingest_ms;
    summary.match_ms = match_ms;

    // =========================================================================
    // Stage 3: Output
    // =========================================================================
    if options.dry_run {
        info!("dry run, skipping output");
        return Ok(RunOutput { report, summary });
    }

    let output_start = Instant::now();
    info_span!("output").in_scope(|| -> Result<(), RunError> {
        sink.persist_duplicates(&report.duplicate_records())?;
        sink.persist_matches(&report.matches)?;
        Ok(())
    })?;
    summary.output_ms = output_start.elapsed().as_millis();
    summary.persisted = true;
    info!(duration_ms = summary.output_ms, "output complete");

    Ok(RunOutput { report, summary })
}
