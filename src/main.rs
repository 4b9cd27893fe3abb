use clap::Parser;
use tracing_subscriber::EnvFilter;

use issue_dedup::cli;

fn main() -> anyhow::Result<()> {
    let cli = cli::Cli::parse();

    // Initialize logging based on verbosity flag
    let filter = if cli.verbose {
        EnvFilter::new("issue_dedup=debug,info")
    } else {
        EnvFilter::new("issue_dedup=warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    match cli.command {
        Some(cli::Commands::Detect(args)) => {
            cli::detect::run(args, cli.format, cli.verbose)?;
        }
        Some(cli::Commands::Compare(args)) => {
            cli::compare::run(args, cli.format, cli.verbose)?;
        }
        None => {
            cli::detect::run(cli.detect, cli.format, cli.verbose)?;
        }
    }

    Ok(())
}
