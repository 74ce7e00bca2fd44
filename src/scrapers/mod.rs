pub mod detail;
pub mod http;
pub mod listing;
pub mod traits;
pub mod types;

#[cfg(test)]
pub(crate) mod fixtures;

pub use detail::fetch_details;
pub use http::HttpFetcher;
pub use listing::collect_links;
pub use traits::PageFetcher;
pub use types::ListingPage;
