use crate::scrapers::traits::PageFetcher;
use crate::scrapers::types::ListingPage;
use scraper::{Html, Selector};
use tracing::{debug, info, warn};
use url::Url;

const CARD_SELECTOR: &str = r#"article[data-test="property-card"]"#;
const CARD_LINK_SELECTOR: &str = r#"a[data-test="property-card-link"]"#;
const NEXT_PAGE_SELECTOR: &str = r#"a[title="Next page"]"#;

/// Resolve an href against the site origin. Absolute hrefs pass through.
fn resolve(base: &Url, href: &str) -> Option<String> {
    match base.join(href) {
        Ok(url) => Some(url.to_string()),
        Err(e) => {
            warn!("Skipping unresolvable link {:?}: {}", href, e);
            None
        }
    }
}

/// Extract property-card links and the next-page link from a results page
pub fn parse_listing_page(html: &str, base: &Url) -> ListingPage {
    let document = Html::parse_document(html);
    let card_selector = Selector::parse(CARD_SELECTOR).unwrap();
    let link_selector = Selector::parse(CARD_LINK_SELECTOR).unwrap();
    let next_selector = Selector::parse(NEXT_PAGE_SELECTOR).unwrap();

    let mut links = Vec::new();
    for (idx, card) in document.select(&card_selector).enumerate() {
        let href = card
            .select(&link_selector)
            .next()
            .and_then(|a| a.value().attr("href"));

        match href.and_then(|href| resolve(base, href)) {
            Some(link) => links.push(link),
            None => warn!("Property card {} has no usable link", idx),
        }
    }

    let next_page = document
        .select(&next_selector)
        .next()
        .and_then(|a| a.value().attr("href"))
        .and_then(|href| resolve(base, href));

    debug!("Found {} property cards, next page: {:?}", links.len(), next_page);

    ListingPage { links, next_page }
}

/// Walk the results pages from `seed_url`, gathering at most `target` links.
///
/// Pages are visited strictly one after another. An unfetchable page ends
/// the walk with whatever was gathered so far.
pub async fn collect_links(
    fetcher: &dyn PageFetcher,
    seed_url: &str,
    target: usize,
    base: &Url,
) -> Vec<String> {
    let mut links: Vec<String> = Vec::new();
    let mut current = Some(seed_url.to_string());

    while let Some(url) = current.take() {
        if links.len() >= target {
            break;
        }

        let Some(html) = fetcher.fetch(&url).await else {
            warn!("Listing page {} unavailable, ending link collection", url);
            break;
        };

        let page = parse_listing_page(&html, base);
        links.extend(page.links);
        info!("Parsed {} properties so far.", links.len());

        if links.len() >= target {
            links.truncate(target);
            break;
        }

        current = page.next_page;
    }

    links
}
