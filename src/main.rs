use clap::Parser;
use listing_scout::config::{
    ScoutConfig, DEFAULT_BACKOFF_SECS, DEFAULT_OUTPUT_PATH, DEFAULT_SEED_URL, DEFAULT_SITE_BASE,
    DEFAULT_TARGET_COUNT, DEFAULT_WORKERS,
};
use listing_scout::scrapers::HttpFetcher;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Crawl property listings into a CSV file")]
struct Args {
    /// First search-results page to crawl
    #[arg(long, default_value = DEFAULT_SEED_URL)]
    seed_url: String,

    /// Origin used to resolve relative links
    #[arg(long, default_value = DEFAULT_SITE_BASE)]
    site_base: String,

    /// Maximum number of properties to collect
    #[arg(short, long, default_value_t = DEFAULT_TARGET_COUNT)]
    target: usize,

    /// Detail pages fetched concurrently
    #[arg(short, long, default_value_t = DEFAULT_WORKERS)]
    workers: usize,

    /// Output CSV path
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Seconds to sleep after an HTTP 403
    #[arg(long, default_value_t = DEFAULT_BACKOFF_SECS)]
    backoff_secs: u64,
}

impl From<Args> for ScoutConfig {
    fn from(args: Args) -> Self {
        Self {
            seed_url: args.seed_url,
            site_base: args.site_base,
            target_count: args.target,
            workers: args.workers,
            output_path: args.output,
            backoff: Duration::from_secs(args.backoff_secs),
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = ScoutConfig::from(Args::parse());

    info!("🏠 Listing Scout");
    info!("Seed: {} | target: {} | workers: {}", config.seed_url, config.target_count, config.workers);

    let fetcher = HttpFetcher::new(config.backoff)?;
    let summary = listing_scout::run(&config, Arc::new(fetcher)).await?;

    info!(
        "✅ Scrape finished, data saved to {} ({} properties)",
        summary.output_path.display(),
        summary.records_written
    );

    Ok(())
}
