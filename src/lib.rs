//! # response-review
//!
//! A library for querying, comparing, and flagging code-submission survey answers.
//!
//! Reviewers of a coding qualifier usually hold a few hundred short programs and
//! need to answer two questions quickly: "which submissions look like this one?"
//! and "which submissions look like each other?". `response-review` answers the
//! first with a small filter query language and the second with an all-pairs
//! similarity scan backed by a longest-matching-block ratio and a line diff.
//!
//! ## Features
//!
//! - **Query language**: `user:alice`, `user:exact:alice`, `res:print`, `res:fuzzy:print`, `res:re:print`
//! - **Fuzzy matching**: Token-based 0-100 scoring of author names and bodies
//! - **Similarity ratio**: Ratcliff/Obershelp ratio over the exact characters of two bodies
//! - **Line diffs**: Grouped removed/added blocks aligned on common runs
//! - **Pairwise scan**: Every unordered pair at or above a threshold, with progress and cancellation
//! - **Flags**: Session registry of plagiarized and AI-generated submissions, exported as a report
//!
//! ## Example
//!
//! ```rust
//! use response_review::{parse, scan, FlagRegistry, MatchEngine, SubmissionRecord};
//!
//! let records = vec![
//!     SubmissionRecord::new("1", "alice", "u1", "print('hi')"),
//!     SubmissionRecord::new("2", "alicia", "u2", "print('hi')"),
//! ];
//!
//! // Fuzzy author search finds both
//! let filter = parse("user:alice").unwrap();
//! let matched = MatchEngine::new().apply(&filter, &records).unwrap();
//! assert_eq!(matched.len(), 2);
//!
//! // The identical bodies form one suspicious pair
//! let registry = FlagRegistry::new();
//! for pair in scan(&records, 0.9).unwrap() {
//!     registry.flag_plagiarized(pair.second);
//! }
//! assert_eq!(registry.export().plagiarized.len(), 1);
//! ```
//!
//! ## Modules
//!
//! - [`core`]: Submission records and parsed filter types
//! - [`query`]: The filter query parser
//! - [`matching`]: Filter execution and fuzzy scoring
//! - [`similarity`]: Similarity ratio, line diff, pairwise scan, and pair selection
//! - [`flags`]: Flag registry and report
//! - [`parsing`]: Submission dump loaders
//! - [`cli`]: Command-line interface implementation

pub mod cli;
pub mod core;
pub mod flags;
pub mod matching;
pub mod parsing;
pub mod query;
pub mod similarity;

// Re-export commonly used types for convenience
pub use crate::core::submission::SubmissionRecord;
pub use crate::core::types::*;
pub use flags::{FlagKind, FlagRegistry, FlagReport};
pub use matching::{MatchEngine, MatchError};
pub use query::{parse, QueryError};
pub use similarity::pairwise::{scan, scan_with_progress, ScanError, SimilarPair};
pub use similarity::{compare, diff, ratio, DiffLine, LineTag, SimilarityResult};
