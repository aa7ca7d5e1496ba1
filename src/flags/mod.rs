//! Reviewer flags for suspected plagiarism and AI-generated submissions.
//!
//! A [`FlagRegistry`] lives for one review session. Callers construct it, pass it
//! to whatever records reviewer decisions, and call
//! [`export`](FlagRegistry::export) at the end to get a [`FlagReport`] for a
//! report writer to persist.

pub mod registry;

pub use registry::{FlagKind, FlagRegistry, FlagReport};
