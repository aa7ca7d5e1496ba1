use std::ops::ControlFlow;

use serde::Serialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::core::submission::SubmissionRecord;
use crate::similarity::{ratio, SequenceMatcher};

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScanError {
    #[error("Invalid threshold '{0}': expected a number strictly between 0 and 1")]
    InvalidThreshold(String),
}

/// Two submissions whose bodies reached the scan threshold
#[derive(Debug, Clone, Serialize)]
pub struct SimilarPair<'a> {
    pub first: &'a SubmissionRecord,
    pub second: &'a SubmissionRecord,
    pub ratio: f64,
}

/// Progress reported after every compared pair
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanProgress {
    pub completed: usize,
    pub total: usize,
}

/// Result of a scan that may have been stopped early
#[derive(Debug, Clone)]
pub struct ScanOutcome<'a> {
    pub pairs: Vec<SimilarPair<'a>>,
    /// True when the progress callback stopped the scan before every pair was compared
    pub cancelled: bool,
}

/// Number of unordered pairs in a collection of `n` records
pub fn pair_count(n: usize) -> usize {
    n * n.saturating_sub(1) / 2
}

/// Check that a threshold lies strictly inside `(0, 1)`.
///
/// # Errors
///
/// Returns `ScanError::InvalidThreshold` for NaN, 0, 1, and anything outside the interval.
pub fn validate_threshold(min_ratio: f64) -> Result<f64, ScanError> {
    if min_ratio > 0.0 && min_ratio < 1.0 {
        Ok(min_ratio)
    } else {
        Err(ScanError::InvalidThreshold(min_ratio.to_string()))
    }
}

/// Parse and validate a threshold typed by a reviewer.
///
/// # Errors
///
/// Returns `ScanError::InvalidThreshold` if the text is not a number or the number
/// is not strictly between 0 and 1.
pub fn parse_threshold(raw: &str) -> Result<f64, ScanError> {
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ScanError::InvalidThreshold(raw.to_string()))?;
    validate_threshold(value).map_err(|_| ScanError::InvalidThreshold(raw.to_string()))
}

/// Compare every unordered pair of records and keep those with `ratio >= min_ratio`.
///
/// Pairs are returned in enumeration order: `(0, 1), (0, 2), ..., (1, 2), ...`.
///
/// # Errors
///
/// Returns `ScanError::InvalidThreshold` if `min_ratio` is not strictly between 0 and 1.
pub fn scan(records: &[SubmissionRecord], min_ratio: f64) -> Result<Vec<SimilarPair<'_>>, ScanError> {
    scan_with_progress(records, min_ratio, |_| ControlFlow::Continue(()))
        .map(|outcome| outcome.pairs)
}

/// Like [`scan`], but calls `on_progress` after each pair.
///
/// Returning `ControlFlow::Break(())` from the callback stops the scan; the pairs
/// found so far are returned with `cancelled` set.
///
/// # Errors
///
/// Returns `ScanError::InvalidThreshold` if `min_ratio` is not strictly between 0 and 1.
pub fn scan_with_progress<F>(
    records: &[SubmissionRecord],
    min_ratio: f64,
    mut on_progress: F,
) -> Result<ScanOutcome<'_>, ScanError>
where
    F: FnMut(ScanProgress) -> ControlFlow<()>,
{
    let min_ratio = validate_threshold(min_ratio)?;
    let total = pair_count(records.len());
    info!("Scanning {} pairs from {} records", total, records.len());

    // Decode each body once rather than once per pair
    let bodies: Vec<Vec<char>> = records.iter().map(|r| r.body_text.chars().collect()).collect();

    let mut pairs = Vec::new();
    let mut completed = 0;

    for i in 0..records.len() {
        for j in (i + 1)..records.len() {
            let r = SequenceMatcher::new(&bodies[i], &bodies[j]).ratio();
            if r >= min_ratio {
                debug!(
                    "Pair {} x {} is similar (ratio {r:.3})",
                    records[i].id, records[j].id
                );
                pairs.push(SimilarPair {
                    first: &records[i],
                    second: &records[j],
                    ratio: r,
                });
            }

            completed += 1;
            if on_progress(ScanProgress { completed, total }).is_break() {
                info!("Scan cancelled after {completed} of {total} pairs");
                return Ok(ScanOutcome {
                    pairs,
                    cancelled: true,
                });
            }
        }
    }

    info!("Found {} pairs at or above {min_ratio}", pairs.len());
    Ok(ScanOutcome {
        pairs,
        cancelled: false,
    })
}

/// Ratio between the bodies of two records
pub fn record_ratio(first: &SubmissionRecord, second: &SubmissionRecord) -> f64 {
    ratio(&first.body_text, &second.body_text)
}
