use thiserror::Error;
use tracing::debug;

use crate::core::types::{Field, Filter, MatchMode, ScoreCutoff, FUZZY_SCORE_FLOOR};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueryError {
    #[error("Invalid query '{0}': expected `field:value` or `field:mode:value`")]
    InvalidQuery(String),
}

/// Parse a raw query line into a [`Filter`].
///
/// # Errors
///
/// Returns `QueryError::InvalidQuery` if the input (with whitespace removed) is not
/// two or three colon-separated word segments, names an unknown field, or uses a
/// mode the field does not support.
pub fn parse(raw: &str) -> Result<Filter, QueryError> {
    let query: String = raw.chars().filter(|c| !c.is_whitespace()).collect();
    let invalid = || QueryError::InvalidQuery(raw.to_string());

    let segments: Vec<&str> = query.split(':').collect();
    if !(2..=3).contains(&segments.len()) || !segments.iter().all(|s| is_word(s)) {
        return Err(invalid());
    }

    let field = match segments[0] {
        "username" | "user" => Field::Author,
        "response" | "res" => Field::Body,
        _ => return Err(invalid()),
    };

    let filter = match (field, &segments[1..]) {
        (Field::Author, [value]) => Filter::new(
            field,
            MatchMode::Fuzzy(ScoreCutoff::AtLeast(FUZZY_SCORE_FLOOR)),
            *value,
        ),
        (Field::Body, [value]) => Filter::new(field, MatchMode::Contains, *value),
        (_, ["exact", value]) => Filter::new(field, MatchMode::Exact, *value),
        (Field::Body, ["fuzzy", value]) => Filter::new(
            field,
            MatchMode::Fuzzy(ScoreCutoff::Above(FUZZY_SCORE_FLOOR)),
            *value,
        ),
        (Field::Body, ["re" | "regex", pattern]) => Filter::new(field, MatchMode::Regex, *pattern),
        _ => return Err(invalid()),
    };

    debug!(
        "Parsed query as {} {:?} '{}'",
        filter.field, filter.mode, filter.value
    );
    Ok(filter)
}

/// One or more letters, digits, or underscores
fn is_word(segment: &str) -> bool {
    !segment.is_empty() && segment.chars().all(|c| c.is_alphanumeric() || c == '_')
}
