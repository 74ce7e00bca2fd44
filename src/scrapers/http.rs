use crate::error::FetchError;
use crate::scrapers::traits::PageFetcher;
use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::header::{
    HeaderMap, HeaderValue, ACCEPT_LANGUAGE, CACHE_CONTROL, CONNECTION, REFERER,
    UPGRADE_INSECURE_REQUESTS, USER_AGENT,
};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, warn};

pub const BROWSER_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/93.0.4577.63 Safari/537.36";

/// Static header set sent with every request
pub fn browser_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(BROWSER_USER_AGENT));
    headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static("en-US,en;q=0.9"));
    headers.insert(REFERER, HeaderValue::from_static("https://www.google.com/"));
    headers.insert(CONNECTION, HeaderValue::from_static("keep-alive"));
    headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-cache"));
    headers.insert(UPGRADE_INSECURE_REQUESTS, HeaderValue::from_static("1"));
    headers
}

/// Plain GET fetcher with browser-like headers.
///
/// A 403 costs one `backoff` sleep and the page is then given up on. It is
/// not retried afterwards, so a rate limit is indistinguishable from a
/// permanent failure.
pub struct HttpFetcher {
    client: Client,
    backoff: Duration,
}

impl HttpFetcher {
    pub fn new(backoff: Duration) -> Result<Self> {
        // No timeout and no cookie store
        let client = Client::builder()
            .default_headers(browser_headers())
            .build()
            .context("Failed to create HTTP client")?;

        Ok(Self { client, backoff })
    }

    async fn get_html(&self, url: &str) -> Result<String, FetchError> {
        debug!("Fetching URL: {}", url);

        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status == StatusCode::FORBIDDEN {
            return Err(FetchError::Blocked(url.to_string()));
        }
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        let html = response.text().await?;
        debug!("Downloaded {} bytes from {}", html.len(), url);
        Ok(html)
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn fetch(&self, url: &str) -> Option<String> {
        match self.get_html(url).await {
            Ok(html) => Some(html),
            Err(FetchError::Blocked(_)) => {
                warn!(
                    "Access denied for {}, status code 403. Sleeping for {} seconds.",
                    url,
                    self.backoff.as_secs_f64()
                );
                tokio::time::sleep(self.backoff).await;
                None
            }
            Err(e) => {
                warn!("Error fetching {}: {}", url, e);
                None
            }
        }
    }
}
