use serde::{Deserialize, Serialize};

/// Default fuzzy score floor on the 0-100 scale
pub const FUZZY_SCORE_FLOOR: u8 = 75;

/// Which part of a submission a filter looks at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// The author's display name
    Author,
    /// The submission body
    Body,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Author => write!(f, "author"),
            Self::Body => write!(f, "body"),
        }
    }
}

/// Minimum fuzzy score a candidate needs to survive ranking
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreCutoff {
    /// Keep scores `>= n`
    AtLeast(u8),
    /// Keep scores `> n`
    Above(u8),
}

impl ScoreCutoff {
    #[must_use]
    pub fn admits(self, score: u8) -> bool {
        match self {
            Self::AtLeast(floor) => score >= floor,
            Self::Above(floor) => score > floor,
        }
    }
}

/// How a filter value is compared against the selected field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Case-sensitive equality
    Exact,
    /// Case-sensitive substring containment
    Contains,
    /// Ranked approximate match
    Fuzzy(ScoreCutoff),
    /// Regular expression search anywhere in the field
    Regex,
}

/// A parsed query
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    pub field: Field,
    pub mode: MatchMode,
    /// Match target; a pattern string in regex mode
    pub value: String,
}

impl Filter {
    pub fn new(field: Field, mode: MatchMode, value: impl Into<String>) -> Self {
        Self {
            field,
            mode,
            value: value.into(),
        }
    }
}
