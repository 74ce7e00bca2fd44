use anyhow::{bail, Context, Result};
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

pub const DEFAULT_SEED_URL: &str = "https://www.zillow.com/san-francisco-ca/";
pub const DEFAULT_SITE_BASE: &str = "https://www.zillow.com";
pub const DEFAULT_TARGET_COUNT: usize = 1600;
pub const DEFAULT_WORKERS: usize = 8;
pub const DEFAULT_OUTPUT_PATH: &str = "real_estate_data.csv";
pub const DEFAULT_BACKOFF_SECS: u64 = 30;

/// Everything a scrape run needs, passed into [`crate::run`]
#[derive(Debug, Clone)]
pub struct ScoutConfig {
    /// First listing page to crawl
    pub seed_url: String,
    /// Origin that relative card and pagination links are resolved against
    pub site_base: String,
    /// Maximum number of links collected and records written
    pub target_count: usize,
    /// Detail pages fetched concurrently
    pub workers: usize,
    /// CSV file, overwritten on every run
    pub output_path: PathBuf,
    /// Sleep applied once after an HTTP 403
    pub backoff: Duration,
}

impl Default for ScoutConfig {
    fn default() -> Self {
        Self {
            seed_url: DEFAULT_SEED_URL.to_string(),
            site_base: DEFAULT_SITE_BASE.to_string(),
            target_count: DEFAULT_TARGET_COUNT,
            workers: DEFAULT_WORKERS,
            output_path: PathBuf::from(DEFAULT_OUTPUT_PATH),
            backoff: Duration::from_secs(DEFAULT_BACKOFF_SECS),
        }
    }
}

impl ScoutConfig {
    pub fn validate(&self) -> Result<()> {
        if self.target_count == 0 {
            bail!("target count must be at least 1");
        }
        if self.workers == 0 {
            bail!("worker count must be at least 1");
        }
        Url::parse(&self.seed_url)
            .with_context(|| format!("invalid seed URL: {}", self.seed_url))?;
        self.base_url()?;
        Ok(())
    }

    /// Parsed form of `site_base`
    pub fn base_url(&self) -> Result<Url> {
        Url::parse(&self.site_base)
            .with_context(|| format!("invalid site base: {}", self.site_base))
    }
}
