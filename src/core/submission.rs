use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::similarity::diff::split_lines;

/// A single reviewed submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionRecord {
    /// Opaque identifier, unique within a collection
    pub id: String,

    /// Display name used for matching and labeling
    pub author_name: String,

    /// Unique identifier of the author
    pub author_id: String,

    /// Free-text content subject to matching and similarity
    #[serde(default)]
    pub body_text: String,

    /// Additional fields carried through untouched
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub metadata: BTreeMap<String, serde_json::Value>,
}

impl SubmissionRecord {
    pub fn new(
        id: impl Into<String>,
        author_name: impl Into<String>,
        author_id: impl Into<String>,
        body_text: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            author_name: author_name.into(),
            author_id: author_id.into(),
            body_text: body_text.into(),
            metadata: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn with_metadata(mut self, metadata: BTreeMap<String, serde_json::Value>) -> Self {
        self.metadata = metadata;
        self
    }

    /// Number of lines in the body, as seen by the line diff
    pub fn line_count(&self) -> usize {
        split_lines(&self.body_text).len()
    }
}

impl std::fmt::Display for SubmissionRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.author_name, self.id)
    }
}
