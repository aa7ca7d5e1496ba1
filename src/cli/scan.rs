use std::ops::ControlFlow;
use std::path::PathBuf;

use clap::Args;
use tracing::debug;

use crate::cli::{tsv_cell, OutputFormat, SourceArgs};
use crate::flags::FlagRegistry;
use crate::similarity::pairwise::{parse_threshold, scan_with_progress, SimilarPair};

#[derive(Args)]
pub struct ScanArgs {
    #[command(flatten)]
    pub source: SourceArgs,

    /// Minimum similarity ratio, strictly between 0 and 1
    #[arg(required = true, allow_hyphen_values = true)]
    pub min_ratio: String,

    /// Flag both submissions of every pair as plagiarized and write the report here
    #[arg(long, value_name = "PATH")]
    pub report: Option<PathBuf>,
}

/// Execute scan subcommand
///
/// # Errors
///
/// Returns an error if the submissions cannot be loaded, the threshold is invalid,
/// or the report cannot be written.
#[allow(clippy::needless_pass_by_value)] // CLI entry point, values from clap
pub fn run(args: ScanArgs, format: OutputFormat, verbose: bool) -> anyhow::Result<()> {
    let min_ratio = parse_threshold(&args.min_ratio)?;
    let records = args.source.load(verbose)?;

    if verbose {
        eprintln!("Diffing {} submissions, this may take a while", records.len());
    }

    let mut next_report = 0;
    let outcome = scan_with_progress(&records, min_ratio, |progress| {
        // Log roughly every 10%
        let percent = progress.completed * 100 / progress.total.max(1);
        if percent >= next_report {
            debug!(
                "Compared {} of {} pairs ({percent}%)",
                progress.completed, progress.total
            );
            next_report = percent + 10;
        }
        ControlFlow::Continue(())
    })?;
    let pairs = outcome.pairs;

    match format {
        OutputFormat::Text => print_text(&pairs, min_ratio),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&pairs)?),
        OutputFormat::Tsv => print_tsv(&pairs),
    }

    if let Some(path) = &args.report {
        let registry = FlagRegistry::new();
        for pair in &pairs {
            for record in [pair.first, pair.second] {
                if registry.flag_of(&record.id).is_none() {
                    registry.flag_plagiarized(record);
                }
            }
        }
        std::fs::write(path, registry.export().to_json()?)?;
        if verbose {
            eprintln!("Wrote flag report to {}", path.display());
        }
    }

    Ok(())
}

fn print_text(pairs: &[SimilarPair<'_>], min_ratio: f64) {
    if pairs.is_empty() {
        println!("No pairs at or above {:.2}% similarity.", min_ratio * 100.0);
        return;
    }

    println!("{} pair(s) at or above {:.2}% similarity", pairs.len(), min_ratio * 100.0);
    println!("{}", "=".repeat(60));
    for pair in pairs {
        println!(
            "First: {} | Second: {} ({:.2}%)",
            pair.first.author_name,
            pair.second.author_name,
            pair.ratio * 100.0
        );
    }
}

fn print_tsv(pairs: &[SimilarPair<'_>]) {
    println!("first_id\tfirst_author\tsecond_id\tsecond_author\tratio");
    for pair in pairs {
        println!(
            "{}\t{}\t{}\t{}\t{:.4}",
            tsv_cell(&pair.first.id),
            tsv_cell(&pair.first.author_name),
            tsv_cell(&pair.second.id),
            tsv_cell(&pair.second.author_name),
            pair.ratio
        );
    }
}
