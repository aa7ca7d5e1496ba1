use crate::core::submission::SubmissionRecord;
use crate::similarity::{compare, SimilarityResult};

/// Two-slot picker for choosing which pair of submissions to diff.
///
/// `Empty -> First -> Both`; selecting again while `Both` replaces the second slot.
#[derive(Debug, Clone, Copy, Default)]
pub enum PairSelection<'a> {
    #[default]
    Empty,
    First(&'a SubmissionRecord),
    Both(&'a SubmissionRecord, &'a SubmissionRecord),
}

impl<'a> PairSelection<'a> {
    #[must_use]
    pub fn select(self, record: &'a SubmissionRecord) -> Self {
        match self {
            Self::Empty => Self::First(record),
            Self::First(first) | Self::Both(first, _) => Self::Both(first, record),
        }
    }

    /// Both selected records, once the second slot is filled
    pub fn pair(&self) -> Option<(&'a SubmissionRecord, &'a SubmissionRecord)> {
        match *self {
            Self::Both(first, second) => Some((first, second)),
            _ => None,
        }
    }

    pub fn is_complete(&self) -> bool {
        matches!(self, Self::Both(..))
    }

    /// Instruction to show the reviewer for the current state
    pub fn prompt(&self) -> &'static str {
        match self {
            Self::Empty => "Select first response",
            Self::First(_) => "Select second response",
            Self::Both(..) => "Both responses selected",
        }
    }

    /// Similarity of the selected pair's bodies, first against second
    pub fn compare(&self) -> Option<SimilarityResult> {
        self.pair()
            .map(|(first, second)| compare(&first.body_text, &second.body_text))
    }
}
