//! CLI entry point for the pexfetch tool.

use anyhow::{Result, bail};
use clap::Parser;
use pexfetch_core::{RunConfig, Runner};
use tracing::{debug, info};

mod cli;

use cli::Args;

/// Environment variable consulted when `--api-key` is not passed.
const API_KEY_ENV: &str = "PEXELS_API_KEY";

#[tokio::main]
async fn main() -> Result<()> {
    // Parse CLI arguments first (before tracing, so --help works without logs)
    let args = Args::parse();

    // Determine log level based on verbose/quiet flags
    // Priority: RUST_LOG env var > quiet flag > verbose flag > default (info)
    let default_level = if args.quiet {
        "error"
    } else {
        match args.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt().with_env_filter(filter).init();

    debug!(?args, "CLI arguments parsed");
    info!("pexfetch starting");

    let api_key = match args.api_key {
        Some(key) => key,
        None => match std::env::var(API_KEY_ENV) {
            Ok(key) => key,
            Err(_) => bail!(
                "no API key provided; pass --api-key or set the {API_KEY_ENV} environment variable"
            ),
        },
    };

    let mut config = RunConfig::new(api_key, &args.query, &args.output_dir)?
        .with_per_page(args.per_page)?
        .with_target(args.target)?;
    if let Some(api_url) = args.api_url {
        config = config.with_api_url(api_url);
    }

    let runner = Runner::new(config);
    let report = runner.run().await?;

    // Final tally is printed regardless of how the loop terminated.
    println!(
        "Downloaded {} image(s) to {} ({}; {} skipped, {} failed)",
        report.stats.downloaded(),
        args.output_dir.display(),
        report.outcome.label(),
        report.stats.skipped(),
        report.stats.failed(),
    );

    Ok(())
}
