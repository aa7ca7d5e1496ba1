use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::core::submission::SubmissionRecord;

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid submission JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Duplicate submission id '{0}'")]
    DuplicateId(String),
}

/// A submission as exported by the forms backend
#[derive(Debug, Deserialize)]
struct FormResponse {
    id: String,
    user: FormUser,
    response: FormAnswers,
    #[serde(flatten)]
    extra: BTreeMap<String, Value>,
}

#[derive(Debug, Deserialize)]
struct FormUser {
    username: String,
    id: String,
}

#[derive(Debug, Deserialize)]
struct FormAnswers {
    qualifier: Qualifier,
    #[serde(flatten)]
    other: BTreeMap<String, Value>,
}

#[derive(Debug, Deserialize)]
struct Qualifier {
    #[serde(default)]
    value: String,
}

impl From<FormResponse> for SubmissionRecord {
    fn from(form: FormResponse) -> Self {
        let mut metadata = form.extra;
        if !form.response.other.is_empty() {
            metadata.insert(
                "response".to_string(),
                Value::Object(form.response.other.into_iter().collect()),
            );
        }
        SubmissionRecord::new(form.id, form.user.username, form.user.id, form.response.qualifier.value)
            .with_metadata(metadata)
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawSubmission {
    Record(SubmissionRecord),
    Form(Box<FormResponse>),
}

impl From<RawSubmission> for SubmissionRecord {
    fn from(raw: RawSubmission) -> Self {
        match raw {
            RawSubmission::Record(record) => record,
            RawSubmission::Form(form) => (*form).into(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    Many(Vec<RawSubmission>),
    One(RawSubmission),
}

/// Parse submissions from JSON text.
///
/// Accepts a single submission or an array of them. Each submission is either a
/// flat record (`id`, `author_name`, `author_id`, `body_text`, `metadata`) or a
/// raw form response (`id`, `user.username`, `user.id`, `response.qualifier.value`),
/// whose remaining fields are kept as metadata.
///
/// # Errors
///
/// Returns `LoadError::Json` if the text is not valid submission JSON, or
/// `LoadError::DuplicateId` if two submissions share an id.
pub fn parse_json(text: &str) -> Result<Vec<SubmissionRecord>, LoadError> {
    let raw: Vec<RawSubmission> = match serde_json::from_str(text)? {
        OneOrMany::Many(many) => many,
        OneOrMany::One(one) => vec![one],
    };
    let records: Vec<SubmissionRecord> = raw.into_iter().map(SubmissionRecord::from).collect();
    check_unique_ids(&records)?;
    Ok(records)
}

/// Load submissions from a JSON file
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be read, or the errors of [`parse_json`].
pub fn load_file(path: &Path) -> Result<Vec<SubmissionRecord>, LoadError> {
    let content = std::fs::read_to_string(path)?;
    let records = parse_json(&content)?;
    debug!("Loaded {} submissions from {}", records.len(), path.display());
    Ok(records)
}

/// Load and concatenate several submission files, in order
///
/// # Errors
///
/// Returns the first load error, or `LoadError::DuplicateId` if an id appears in
/// more than one file.
pub fn load_files(paths: &[PathBuf]) -> Result<Vec<SubmissionRecord>, LoadError> {
    let mut records = Vec::new();
    for path in paths {
        records.extend(load_file(path)?);
    }
    check_unique_ids(&records)?;
    Ok(records)
}

/// Keep only records whose author also appears in `confirmed`
pub fn retain_confirmed(
    records: Vec<SubmissionRecord>,
    confirmed: &[SubmissionRecord],
) -> Vec<SubmissionRecord> {
    let confirmed_authors: HashSet<&str> = confirmed.iter().map(|r| r.author_id.as_str()).collect();
    let before = records.len();
    let kept: Vec<SubmissionRecord> = records
        .into_iter()
        .filter(|r| confirmed_authors.contains(r.author_id.as_str()))
        .collect();
    if kept.len() < before {
        debug!("Dropped {} unconfirmed submissions", before - kept.len());
    }
    if kept.is_empty() && before > 0 {
        warn!("No submissions belong to a confirmed author");
    }
    kept
}

fn check_unique_ids(records: &[SubmissionRecord]) -> Result<(), LoadError> {
    let mut seen = HashSet::new();
    for record in records {
        if !seen.insert(record.id.as_str()) {
            return Err(LoadError::DuplicateId(record.id.clone()));
        }
    }
    Ok(())
}
