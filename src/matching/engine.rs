use std::collections::HashSet;

use thiserror::Error;
use tracing::debug;

use crate::core::submission::SubmissionRecord;
use crate::core::types::{Field, Filter, MatchMode, ScoreCutoff};
use crate::matching::fuzzy;

#[derive(Error, Debug)]
pub enum MatchError {
    #[error("Invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),
}

/// Default number of fuzzy candidates kept after ranking
pub const DEFAULT_CANDIDATE_LIMIT: usize = 10;

/// Configuration for the match engine
#[derive(Debug, Clone)]
pub struct MatchConfig {
    /// How many distinct ranked values a fuzzy filter may keep
    pub candidate_limit: usize,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            candidate_limit: DEFAULT_CANDIDATE_LIMIT,
        }
    }
}

/// Executes parsed filters against a collection of submissions
#[derive(Debug, Clone, Default)]
pub struct MatchEngine {
    config: MatchConfig,
}

impl MatchEngine {
    /// Create a new match engine with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new match engine with custom configuration
    pub fn with_config(config: MatchConfig) -> Self {
        Self { config }
    }

    /// Return the records accepted by `filter`, in their original order.
    ///
    /// # Errors
    ///
    /// Returns `MatchError::InvalidPattern` if a regex filter's pattern does not compile.
    pub fn apply<'r>(
        &self,
        filter: &Filter,
        records: &'r [SubmissionRecord],
    ) -> Result<Vec<&'r SubmissionRecord>, MatchError> {
        let value = filter.value.as_str();

        let matched: Vec<&SubmissionRecord> = match (filter.field, filter.mode) {
            (Field::Author, MatchMode::Exact) => records
                .iter()
                .filter(|r| r.author_name == value)
                .collect(),
            (Field::Body, MatchMode::Contains) => records
                .iter()
                .filter(|r| r.body_text.contains(value))
                .collect(),
            (Field::Author, MatchMode::Fuzzy(cutoff)) => {
                self.fuzzy(value, cutoff, records, |r| r.author_name.as_str())
            }
            (Field::Body, MatchMode::Fuzzy(cutoff)) => {
                self.fuzzy(value, cutoff, records, |r| r.body_text.as_str())
            }
            (Field::Body, MatchMode::Regex) => {
                let pattern = regex::Regex::new(value)?;
                records
                    .iter()
                    .filter(|r| pattern.is_match(&r.body_text))
                    .collect()
            }
            // Exact is only defined for authors; parse accepts `res:exact:` but it matches nothing
            (Field::Author, MatchMode::Contains | MatchMode::Regex)
            | (Field::Body, MatchMode::Exact) => Vec::new(),
        };

        debug!(
            "Filter {} {:?} '{}' matched {} of {} records",
            filter.field,
            filter.mode,
            value,
            matched.len(),
            records.len()
        );
        Ok(matched)
    }

    /// Rank the distinct values of one field and keep records whose value survives
    fn fuzzy<'r, F>(
        &self,
        query: &str,
        cutoff: ScoreCutoff,
        records: &'r [SubmissionRecord],
        key: F,
    ) -> Vec<&'r SubmissionRecord>
    where
        F: Fn(&'r SubmissionRecord) -> &'r str,
    {
        let mut seen = HashSet::new();
        let distinct: Vec<&str> = records
            .iter()
            .map(&key)
            .filter(|value| seen.insert(*value))
            .collect();

        let survivors: HashSet<&str> = fuzzy::extract(query, distinct, self.config.candidate_limit)
            .into_iter()
            .filter(|&(_, score)| cutoff.admits(score))
            .map(|(value, _)| value)
            .collect();

        records.iter().filter(|r| survivors.contains(key(*r))).collect()
    }
}
