use crate::config::ScoutConfig;
use crate::models::PropertyRecord;
use crate::output::write_csv;
use crate::scrapers::{collect_links, fetch_details, PageFetcher};
use anyhow::Result;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;

/// What a finished run produced
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub links_collected: usize,
    pub records_written: usize,
    pub output_path: PathBuf,
}

/// Collect links, fetch every detail page, then write the CSV.
///
/// Failed pages only shrink the output. The only error surfaced is failing
/// to write the output file, which is written even when empty.
pub async fn run(config: &ScoutConfig, fetcher: Arc<dyn PageFetcher>) -> Result<RunSummary> {
    config.validate()?;
    let base = config.base_url()?;

    info!("Collecting up to {} links from {}", config.target_count, config.seed_url);
    let links = collect_links(fetcher.as_ref(), &config.seed_url, config.target_count, &base).await;
    info!("Collected {} property links", links.len());

    let results = fetch_details(fetcher, &links, config.workers).await;

    let records: Vec<PropertyRecord> = results
        .into_iter()
        .flatten()
        .take(config.target_count)
        .collect();

    write_csv(&config.output_path, &records)?;
    info!(
        "💾 Saved {} properties to {}",
        records.len(),
        config.output_path.display()
    );

    Ok(RunSummary {
        links_collected: links.len(),
        records_written: records.len(),
        output_path: config.output_path.clone(),
    })
}
