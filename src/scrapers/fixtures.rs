//! Canned pages and an in-memory fetcher shared by the unit tests.

use crate::scrapers::traits::PageFetcher;
use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

/// Serves pages from a map. Unknown URLs return `None`; URLs marked as
/// blocked sleep for the configured delay first.
#[derive(Default)]
pub struct StaticFetcher {
    pages: HashMap<String, String>,
    blocked: HashMap<String, Duration>,
    calls: AtomicUsize,
    requested: Mutex<Vec<String>>,
}

impl StaticFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, url: &str, html: String) -> Self {
        self.pages.insert(url.to_string(), html);
        self
    }

    pub fn with_blocked(mut self, url: &str, delay: Duration) -> Self {
        self.blocked.insert(url.to_string(), delay);
        self
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requested(&self) -> Vec<String> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageFetcher for StaticFetcher {
    async fn fetch(&self, url: &str) -> Option<String> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requested.lock().unwrap().push(url.to_string());

        if let Some(delay) = self.blocked.get(url) {
            tokio::time::sleep(*delay).await;
            return None;
        }
        self.pages.get(url).cloned()
    }
}

/// Search-results page with one card per href and an optional next link
pub fn listing_html(hrefs: &[&str], next: Option<&str>) -> String {
    let mut html = String::from("<html><body><ul>");
    for href in hrefs {
        html.push_str(&format!(
            r#"<li><article data-test="property-card"><a data-test="property-card-link" href="{}">home</a></article></li>"#,
            href
        ));
    }
    html.push_str("</ul>");
    if let Some(next) = next {
        html.push_str(&format!(r#"<a title="Next page" href="{}">Next</a>"#, next));
    }
    html.push_str("</body></html>");
    html
}

/// Property object as it appears under the cache's opaque key
pub fn sample_property() -> Value {
    json!({
        "price": 1250000,
        "bedrooms": 3,
        "bathrooms": 2.5,
        "latitude": 37.7599,
        "longitude": -122.4148,
        "yearBuilt": 1908,
        "parentRegion": { "name": "Mission" },
        "resoFacts": {
            "atAGlanceFacts": [
                { "factLabel": "Type", "factValue": "SingleFamily,Residential" },
                { "factLabel": "Year Built", "factValue": "1908" }
            ]
        }
    })
}

/// Detail page whose cache wraps `property` under `key`
pub fn detail_html(key: &str, property: Value) -> String {
    let mut cache = serde_json::Map::new();
    cache.insert(key.to_string(), json!({ "property": property }));
    let cache = Value::Object(cache).to_string();

    let next_data = json!({
        "props": {
            "pageProps": {
                "componentProps": {
                    "gdpClientCache": cache
                }
            }
        }
    });

    format!(
        r#"<html><head><script id="__NEXT_DATA__" type="application/json">{}</script></head><body></body></html>"#,
        next_data
    )
}
