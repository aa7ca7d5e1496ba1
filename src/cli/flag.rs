use std::path::PathBuf;

use clap::Args;

use crate::cli::{find_record, tsv_cell, OutputFormat, SourceArgs};
use crate::flags::{FlagKind, FlagRegistry, FlagReport};

#[derive(Args)]
pub struct FlagArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Id of a submission to flag as plagiarized (repeatable)
    #[arg(long = "plagiarized", value_name = "ID")]
    pub plagiarized: Vec<String>,

    /// Id of a submission to flag as AI-generated (repeatable)
    #[arg(long = "generated", value_name = "ID")]
    pub generated: Vec<String>,

    /// Write the report to this file instead of stdout
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

/// Execute flag subcommand
///
/// # Errors
///
/// Returns an error if the submissions cannot be loaded, an id is unknown, or the
/// report cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: FlagArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let records = args.source.load(verbose)?;
    let registry = FlagRegistry::new();

    let requested = args
        .plagiarized
        .iter()
        .map(|id| (FlagKind::Plagiarized, id))
        .chain(args.generated.iter().map(|id| (FlagKind::Generated, id)));

    for (kind, id) in requested {
        let record = find_record(&records, id)?;
        if let Some(existing) = registry.flag_of(id) {
            eprintln!("Warning: {record} is already flagged as {existing}, skipping");
            continue;
        }
        registry.flag(kind, record);
    }

    let report = registry.export();

    if let Some(path) = &args.output {
        std::fs::write(path, report.to_json()?)?;
        if verbose {
            eprintln!("Wrote flag report to {}", path.display());
        }
        return Ok(());
    }

    match format {
        OutputFormat::Json => println!("{}", report.to_json()?),
        OutputFormat::Text => print_text(&report),
        OutputFormat::Tsv => print_tsv(&report),
    }

    Ok(())
}

fn print_text(report: &FlagReport) {
    println!("Plagiarized");
    for record in &report.plagiarized {
        println!("  {record}");
    }
    println!("AI-Generated");
    for record in &report.generated {
        println!("  {record}");
    }
}

fn print_tsv(report: &FlagReport) {
    println!("flag\tid\tauthor_name");
    let rows = report
        .plagiarized
        .iter()
        .map(|r| (FlagKind::Plagiarized, r))
        .chain(report.generated.iter().map(|r| (FlagKind::Generated, r)));
    for (kind, record) in rows {
        println!(
            "{}\t{}\t{}",
            kind.as_str(),
            tsv_cell(&record.id),
            tsv_cell(&record.author_name)
        );
    }
}
