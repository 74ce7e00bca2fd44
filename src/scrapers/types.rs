/// One page of search results, reduced to what the crawl needs from it
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingPage {
    /// Absolute detail-page links, one per property card, in page order
    pub links: Vec<String>,
    /// Absolute URL of the following results page
    pub next_page: Option<String>,
}
