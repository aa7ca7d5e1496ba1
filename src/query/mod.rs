//! The filter query mini-language.
//!
//! A query is a single line of the form `field:value` or `field:mode:value`,
//! where every segment is made of word characters. Whitespace anywhere in the
//! input is ignored.
//!
//! | Query                 | Field  | Mode                      |
//! |-----------------------|--------|---------------------------|
//! | `user:alice`          | author | fuzzy, score >= 75        |
//! | `user:exact:alice`    | author | exact                     |
//! | `res:print`           | body   | substring                 |
//! | `res:exact:print`     | body   | exact (matches nothing)   |
//! | `res:fuzzy:print`     | body   | fuzzy, score > 75         |
//! | `res:re:print`        | body   | regex                     |
//!
//! `username` and `user` name the author field; `response` and `res` name the body.
//!
//! ## Example
//!
//! ```rust
//! use response_review::query::parse;
//! use response_review::core::types::{Field, MatchMode};
//!
//! let filter = parse("user : exact : alice").unwrap();
//! assert_eq!(filter.field, Field::Author);
//! assert_eq!(filter.mode, MatchMode::Exact);
//! assert_eq!(filter.value, "alice");
//! ```

pub mod parser;

pub use parser::{parse, QueryError};
