//! Command-line interface for response-review.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **filter**: Run a query against a submission dump
//! - **diff**: Show the similarity ratio and line diff of two submissions
//! - **scan**: List every pair of submissions at or above a similarity threshold
//! - **flag**: Build a flag report from explicit submission ids
//!
//! ## Usage
//!
//! ```text
//! # Fuzzy author search
//! response-review filter responses.json "user:alice"
//!
//! # Regex search over bodies, JSON output
//! response-review --format json filter responses.json "res:re:import"
//!
//! # Compare two submissions line by line
//! response-review diff responses.json resp-1 resp-7
//!
//! # Find likely plagiarism, writing a flag report
//! response-review scan responses.json 0.9 --report flagged.json
//! ```

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::core::submission::SubmissionRecord;
use crate::parsing::submissions::{load_file, load_files, retain_confirmed};

pub mod diff;
pub mod filter;
pub mod flag;
pub mod scan;

#[derive(Parser)]
#[command(name = "response-review")]
#[command(version)]
#[command(about = "Query, diff, and flag code-submission responses")]
#[command(
    long_about = "response-review helps reviewers inspect code-submission survey answers.\n\nIt filters submissions with a small query language, diffs any two of them, scans every pair for suspicious similarity, and writes a report of submissions flagged as plagiarized or AI-generated."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(short, long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Filter submissions with a query such as `user:alice` or `res:re:print`
    Filter(filter::FilterArgs),

    /// Diff two submissions
    Diff(diff::DiffArgs),

    /// Find pairs of submissions above a similarity threshold
    Scan(scan::ScanArgs),

    /// Write a flag report for explicit submission ids
    Flag(flag::FlagArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Tsv,
}

/// Where submissions come from
#[derive(Args)]
pub struct SourceArgs {
    /// JSON file of submissions (flat records or form responses)
    #[arg(required = true)]
    pub input: PathBuf,

    /// Extra submission files appended after the input (e.g. a known AI-generated answer)
    #[arg(long = "append", value_name = "PATH")]
    pub extra: Vec<PathBuf>,

    /// Only keep submissions whose author also appears in this file
    #[arg(long, value_name = "PATH")]
    pub confirmed: Option<PathBuf>,
}

impl SourceArgs {
    /// Load, append, and optionally restrict submissions to confirmed authors
    ///
    /// # Errors
    ///
    /// Returns an error if any file cannot be read or parsed.
    pub fn load(&self, verbose: bool) -> anyhow::Result<Vec<SubmissionRecord>> {
        let mut paths = vec![self.input.clone()];
        paths.extend(self.extra.iter().cloned());
        let mut records = load_files(&paths)?;

        if let Some(path) = &self.confirmed {
            let confirmed = load_file(path)?;
            records = retain_confirmed(records, &confirmed);
        }

        if verbose {
            eprintln!("Loaded {} submissions", records.len());
        }
        Ok(records)
    }
}

/// Find a record by id or fail with a readable message
///
/// # Errors
///
/// Returns an error if no record has the given id.
pub fn find_record<'a>(
    records: &'a [SubmissionRecord],
    id: &str,
) -> anyhow::Result<&'a SubmissionRecord> {
    records
        .iter()
        .find(|r| r.id == id)
        .ok_or_else(|| anyhow::anyhow!("Submission '{id}' not found"))
}

/// Replace tabs and newlines so a value fits in one TSV cell
pub(crate) fn tsv_cell(value: &str) -> String {
    value.replace(['\t', '\n', '\r'], " ")
}
