//! Text similarity, line diffs, and pairwise plagiarism scanning.
//!
//! - [`ratio`]: normalized Ratcliff/Obershelp similarity of two texts
//! - [`diff`]: line-oriented edit script between two texts
//! - [`pairwise`]: all-pairs scan of a submission collection
//! - [`selection`]: two-slot picker for choosing which pair to diff
//!
//! ## Similarity Ratio
//!
//! The ratio is computed over Unicode scalar values exactly as given. The
//! longest common contiguous block is located first, then the algorithm recurses
//! on the unmatched text to its left and right. With `M` the total matched
//! length:
//!
//! ```text
//! ratio = 2 * M / (len(a) + len(b))
//! ```
//!
//! Two empty texts have a ratio of 1.0.
//!
//! ## Example
//!
//! ```rust
//! use response_review::similarity::{diff, ratio, LineTag};
//!
//! assert!((ratio("print('hi')", "print('hi')") - 1.0).abs() < f64::EPSILON);
//!
//! let lines = diff("a\nb\nc", "a\nx\nc");
//! assert_eq!(lines[1].tag, LineTag::Removed);
//! assert_eq!(lines[2].tag, LineTag::Added);
//! ```

pub mod diff;
pub mod pairwise;
pub mod selection;
pub mod sequence;

use serde::Serialize;

pub use diff::{diff, DiffLine, LineTag};
pub use sequence::SequenceMatcher;

/// Similarity ratio in `[0, 1]` between two texts
pub fn ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    SequenceMatcher::new(&a, &b).ratio()
}

/// Ratio and line diff for one pair of texts
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarityResult {
    pub ratio: f64,
    pub diff_lines: Vec<DiffLine>,
}

impl SimilarityResult {
    pub fn count(&self, tag: LineTag) -> usize {
        self.diff_lines.iter().filter(|line| line.tag == tag).count()
    }
}

/// Compute both the similarity ratio and the line diff of `a` against `b`
pub fn compare(a: &str, b: &str) -> SimilarityResult {
    SimilarityResult {
        ratio: ratio(a, b),
        diff_lines: diff(a, b),
    }
}
