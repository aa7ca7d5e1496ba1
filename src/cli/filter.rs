use clap::Args;

use crate::cli::{tsv_cell, OutputFormat, SourceArgs};
use crate::core::submission::SubmissionRecord;
use crate::matching::MatchEngine;
use crate::query;

#[derive(Args)]
pub struct FilterArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Query in the form `field:value` or `field:mode:value`; spaces are ignored
    #[arg(required = true, num_args = 1..)]
    pub query: Vec<String>,
}

/// Execute filter subcommand
///
/// # Errors
///
/// Returns an error if the submissions cannot be loaded, the query is malformed,
/// or a regex pattern does not compile.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: FilterArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let records = args.source.load(verbose)?;

    let raw = args.query.join(" ");
    let filter = query::parse(&raw)?;

    if verbose {
        eprintln!(
            "Query: {} {:?} '{}'",
            filter.field, filter.mode, filter.value
        );
    }

    let matched = MatchEngine::new().apply(&filter, &records)?;

    match format {
        OutputFormat::Text => print_text(&matched),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&matched)?),
        OutputFormat::Tsv => print_tsv(&matched),
    }

    Ok(())
}

fn print_text(matched: &[&SubmissionRecord]) {
    if matched.is_empty() {
        println!("No matching submissions.");
        return;
    }

    println!("{} matching submission(s)", matched.len());
    println!("{}", "=".repeat(60));
    for record in matched {
        println!(
            "{:<24} {:<20} {} line(s)",
            record.author_name,
            record.id,
            record.line_count()
        );
    }
}

fn print_tsv(matched: &[&SubmissionRecord]) {
    println!("id\tauthor_name\tauthor_id\tlines");
    for record in matched {
        println!(
            "{}\t{}\t{}\t{}",
            tsv_cell(&record.id),
            tsv_cell(&record.author_name),
            tsv_cell(&record.author_id),
            record.line_count()
        );
    }
}
