//! Filter execution against a submission collection.
//!
//! - [`MatchEngine`]: runs a parsed [`Filter`](crate::core::types::Filter)
//! - [`fuzzy`]: the 0-100 approximate scorer used by fuzzy filters
//!
//! ## Fuzzy Ranking
//!
//! A fuzzy filter never scores records directly. It collects the distinct values
//! of the filtered field (in order of first appearance), ranks them against the
//! query, keeps the top [`DEFAULT_CANDIDATE_LIMIT`](engine::DEFAULT_CANDIDATE_LIMIT)
//! whose score clears the filter's cutoff, and then returns every record carrying
//! one of the surviving values. Several records can share a value; all of them
//! are kept.
//!
//! ## Example
//!
//! ```rust
//! use response_review::core::submission::SubmissionRecord;
//! use response_review::matching::MatchEngine;
//! use response_review::query::parse;
//!
//! let records = vec![
//!     SubmissionRecord::new("1", "alice", "u1", "print('hi')"),
//!     SubmissionRecord::new("2", "alicia", "u2", "print('hi')"),
//! ];
//!
//! let engine = MatchEngine::new();
//! let matched = engine.apply(&parse("user:exact:alice").unwrap(), &records).unwrap();
//! assert_eq!(matched.len(), 1);
//! ```

pub mod engine;
pub mod fuzzy;

pub use engine::{MatchConfig, MatchEngine, MatchError};
