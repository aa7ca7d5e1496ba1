//! Loaders for submission dumps.
//!
//! Submissions arrive as JSON exported by whatever collected them. Two shapes
//! are understood and may be mixed in one file:
//!
//! | Shape          | Author name       | Author id  | Body                          |
//! |----------------|-------------------|------------|-------------------------------|
//! | Flat record    | `author_name`     | `author_id`| `body_text`                   |
//! | Form response  | `user.username`   | `user.id`  | `response.qualifier.value`    |
//!
//! A file may hold one submission or an array of them.
//!
//! ## Example
//!
//! ```rust
//! use response_review::parsing::submissions::parse_json;
//!
//! let json = r#"[{"id": "1", "author_name": "alice", "author_id": "u1", "body_text": "print('hi')"}]"#;
//! let records = parse_json(json).unwrap();
//! assert_eq!(records[0].author_name, "alice");
//! ```

pub mod submissions;
