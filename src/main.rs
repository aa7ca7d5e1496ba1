use clap::Parser;
use tracing_subscriber::EnvFilter;

use response_review::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("response_review=debug,info")
    } else {
        EnvFilter::new("response_review=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        cli::Commands::Filter(args) => {
            cli::filter::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Diff(args) => {
            cli::diff::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Scan(args) => {
            cli::scan::run(args, cli.format, cli.verbose)?;
        }
        cli::Commands::Flag(args) => {
            cli::flag::run(args, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
