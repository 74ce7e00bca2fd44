use async_trait::async_trait;

/// Source of raw page markup.
/// The crawler only ever asks for a page and gets its body or nothing, so
/// tests can swap in canned pages without a network.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch `url`, returning `None` when the page could not be retrieved
    async fn fetch(&self, url: &str) -> Option<String>;
}
