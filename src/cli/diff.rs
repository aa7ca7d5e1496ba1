use clap::Args;

use crate::cli::{find_record, OutputFormat, SourceArgs};
use crate::core::submission::SubmissionRecord;
use crate::similarity::selection::PairSelection;
use crate::similarity::{LineTag, SimilarityResult};

#[derive(Args)]
pub struct DiffArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Id of the first submission
    #[arg(required = true)]
    pub first: String,

    /// Id of the second submission
    #[arg(required = true)]
    pub second: String,
}

/// Execute diff subcommand
///
/// # Errors
///
/// Returns an error if the submissions cannot be loaded or either id is unknown.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: DiffArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let records = args.source.load(verbose)?;

    let selection = PairSelection::default()
        .select(find_record(&records, &args.first)?)
        .select(find_record(&records, &args.second)?);

    let (first, second) = selection
        .pair()
        .ok_or_else(|| anyhow::anyhow!("{}", selection.prompt()))?;
    let result = selection
        .compare()
        .ok_or_else(|| anyhow::anyhow!("{}", selection.prompt()))?;

    match format {
        OutputFormat::Text => print_text(first, second, &result),
        OutputFormat::Json => print_json(first, second, &result)?,
        OutputFormat::Tsv => print_tsv(&result),
    }

    Ok(())
}

fn print_text(first: &SubmissionRecord, second: &SubmissionRecord, result: &SimilarityResult) {
    println!("{} x {}", first.author_name, second.author_name);
    println!("{}", "=".repeat(60));
    println!("Similarity ratio: {:.2}%", result.ratio * 100.0);
    println!(
        "Lines: {} unchanged, {} removed, {} added",
        result.count(LineTag::Unchanged),
        result.count(LineTag::Removed),
        result.count(LineTag::Added)
    );
    println!();
    for line in &result.diff_lines {
        println!("{line}");
    }
}

fn print_json(
    first: &SubmissionRecord,
    second: &SubmissionRecord,
    result: &SimilarityResult,
) -> anyhow::Result<()> {
    let output = serde_json::json!({
        "first": { "id": first.id, "author_name": first.author_name },
        "second": { "id": second.id, "author_name": second.author_name },
        "ratio": result.ratio,
        "diff_lines": result.diff_lines,
    });

    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_tsv(result: &SimilarityResult) {
    println!("tag\ttext");
    for line in &result.diff_lines {
        let tag = match line.tag {
            LineTag::Unchanged => "unchanged",
            LineTag::Removed => "removed",
            LineTag::Added => "added",
        };
        println!("{tag}\t{}", line.text);
    }
}
