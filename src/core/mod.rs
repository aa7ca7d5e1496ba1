//! Core data types shared by the query, matching, and similarity layers.
//!
//! - [`SubmissionRecord`]: one reviewed submission (author plus free-text body)
//! - [`Filter`]: a parsed query, built from a [`Field`], a [`MatchMode`], and a value
//! - [`ScoreCutoff`]: the floor applied to fuzzy scores
//!
//! Records are owned by whoever loaded them. Nothing in this crate mutates a
//! record after construction; every engine entry point borrows them.

pub mod submission;
pub mod types;
