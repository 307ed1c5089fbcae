//! CLI argument definitions using clap derive macros.

use std::path::PathBuf;

use clap::Parser;

use pexfetch_core::{DEFAULT_PER_PAGE, DEFAULT_TARGET};

/// Bulk-download original-resolution photos from the Pexels search API.
///
/// Pexfetch paginates through search results for a query term and saves
/// each photo as `<id>.jpg` in the output folder, skipping files that
/// already exist.
#[derive(Parser, Debug)]
#[command(name = "pexfetch")]
#[command(author, version, about)]
pub struct Args {
    /// Search query term (e.g. "nature", "cars", "city")
    pub query: String,

    /// Total number of images to download before stopping
    #[arg(short = 'n', long, default_value_t = DEFAULT_TARGET, value_parser = clap::value_parser!(u64).range(1..))]
    pub target: u64,

    /// Photos per API page (API maximum 80)
    #[arg(long, default_value_t = DEFAULT_PER_PAGE, value_parser = clap::value_parser!(u32).range(1..=80))]
    pub per_page: u32,

    /// Output directory for downloaded images (created if absent)
    #[arg(short, long, default_value = "pexels_images")]
    pub output_dir: PathBuf,

    /// Pexels API key (falls back to the PEXELS_API_KEY environment variable)
    #[arg(short = 'k', long)]
    pub api_key: Option<String>,

    /// Override the search API base URL (testing only)
    #[arg(long, hide = true)]
    pub api_url: Option<String>,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long)]
    pub quiet: bool,
}
