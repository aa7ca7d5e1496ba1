use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::core::submission::SubmissionRecord;

/// Report format version for compatibility checking
pub const REPORT_VERSION: &str = "1.0.0";

/// Which list a submission was flagged into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlagKind {
    Plagiarized,
    Generated,
}

impl FlagKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Plagiarized => "plagiarized",
            Self::Generated => "generated",
        }
    }
}

impl std::fmt::Display for FlagKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Plagiarized => write!(f, "plagiarized"),
            Self::Generated => write!(f, "AI-generated"),
        }
    }
}

/// Snapshot of everything flagged so far
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlagReport {
    pub plagiarized: Vec<SubmissionRecord>,
    pub generated: Vec<SubmissionRecord>,
}

/// Serialized report envelope
#[derive(Debug, Serialize)]
struct ReportData<'a> {
    version: &'a str,
    created_at: String,
    #[serde(flatten)]
    report: &'a FlagReport,
}

impl FlagReport {
    pub fn is_empty(&self) -> bool {
        self.plagiarized.is_empty() && self.generated.is_empty()
    }

    /// Export the report as pretty-printed JSON with a creation timestamp
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        let data = ReportData {
            version: REPORT_VERSION,
            created_at: chrono::Utc::now().to_rfc3339(),
            report: self,
        };
        serde_json::to_string_pretty(&data)
    }
}

/// Process-lifetime record of flagged submissions.
///
/// Appends are serialized behind a single mutex, so a registry can be shared
/// between threads by reference. The registry performs no duplicate checks; use
/// [`flag_of`](Self::flag_of) before flagging to avoid listing a submission twice.
#[derive(Debug, Default)]
pub struct FlagRegistry {
    inner: Mutex<FlagReport>,
}

impl FlagRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    // Every critical section is a single push or clone, so poisoned data is still whole
    fn lock(&self) -> MutexGuard<'_, FlagReport> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn flag_plagiarized(&self, record: &SubmissionRecord) {
        info!("Flagged {record} as {}", FlagKind::Plagiarized);
        self.lock().plagiarized.push(record.clone());
    }

    pub fn flag_generated(&self, record: &SubmissionRecord) {
        info!("Flagged {record} as {}", FlagKind::Generated);
        self.lock().generated.push(record.clone());
    }

    pub fn flag(&self, kind: FlagKind, record: &SubmissionRecord) {
        match kind {
            FlagKind::Plagiarized => self.flag_plagiarized(record),
            FlagKind::Generated => self.flag_generated(record),
        }
    }

    /// The list a submission id was first flagged into, if any
    pub fn flag_of(&self, id: &str) -> Option<FlagKind> {
        let report = self.lock();
        if report.plagiarized.iter().any(|r| r.id == id) {
            Some(FlagKind::Plagiarized)
        } else if report.generated.iter().any(|r| r.id == id) {
            Some(FlagKind::Generated)
        } else {
            None
        }
    }

    /// Copy of the current flags; safe to call repeatedly
    pub fn export(&self) -> FlagReport {
        self.lock().clone()
    }
}
