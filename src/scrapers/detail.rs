use crate::error::ParseError;
use crate::models::{Field, PropertyRecord};
use crate::scrapers::traits::PageFetcher;
use futures::stream::{self, StreamExt};
use scraper::{Html, Selector};
use serde::de::{Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::Deserialize;
use serde_json::Value;
use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;
use tracing::{debug, info, warn};

const NEXT_DATA_SELECTOR: &str = "script#__NEXT_DATA__";
const CACHE_POINTER: &str = "/props/pageProps/componentProps/gdpClientCache";
const HOME_TYPE_LABEL: &str = "Type";

/// A JSON object that wraps its payload under a single key nobody can
/// predict (the site uses a per-property query string). The first entry is
/// taken in document order and any further entries are skipped.
#[derive(Debug)]
pub struct SoleEntry<T>(Option<(String, T)>);

impl<T> SoleEntry<T> {
    pub fn into_inner(self) -> Option<(String, T)> {
        self.0
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for SoleEntry<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct SoleEntryVisitor<T>(PhantomData<T>);

        impl<'de, T: Deserialize<'de>> Visitor<'de> for SoleEntryVisitor<T> {
            type Value = SoleEntry<T>;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("an object with a single entry")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let first = map.next_entry::<String, T>()?;
                while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
                Ok(SoleEntry(first))
            }
        }

        deserializer.deserialize_map(SoleEntryVisitor(PhantomData))
    }
}

#[derive(Debug, Deserialize)]
struct CacheEntry {
    #[serde(default)]
    property: Option<PropertyData>,
}

/// Raw attributes. Kept as loose JSON so a field of the wrong shape only
/// blanks that field.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PropertyData {
    #[serde(default)]
    price: Option<Value>,
    #[serde(default)]
    bedrooms: Option<Value>,
    #[serde(default)]
    bathrooms: Option<Value>,
    #[serde(default)]
    latitude: Option<Value>,
    #[serde(default)]
    longitude: Option<Value>,
    #[serde(default)]
    year_built: Option<Value>,
    #[serde(default)]
    parent_region: Option<Value>,
    #[serde(default)]
    reso_facts: Option<Value>,
}

/// "SingleFamily,Residential" -> "SingleFamily"
pub fn derive_home_type(value: &str) -> &str {
    value.split_once(',').map_or(value, |(head, _)| head)
}

fn home_type(reso_facts: Option<&Value>) -> Field {
    let Some(facts) = reso_facts
        .and_then(|r| r.get("atAGlanceFacts"))
        .and_then(Value::as_array)
    else {
        return Field::Unavailable;
    };

    facts
        .iter()
        .find(|fact| fact.get("factLabel").and_then(Value::as_str) == Some(HOME_TYPE_LABEL))
        .and_then(|fact| fact.get("factValue"))
        .and_then(Value::as_str)
        .map(|v| Field::from(derive_home_type(v)))
        .unwrap_or(Field::Unavailable)
}

/// Pull the `__NEXT_DATA__` JSON blob out of a detail page
pub fn extract_next_data(html: &str) -> Result<Value, ParseError> {
    let document = Html::parse_document(html);
    let selector = Selector::parse(NEXT_DATA_SELECTOR).unwrap();

    let script = document
        .select(&selector)
        .next()
        .ok_or(ParseError::MissingPayload)?;
    let content = script.text().collect::<String>();

    Ok(serde_json::from_str(&content)?)
}

/// Build a record from the page-level JSON blob of a detail page
pub fn parse_next_data(next_data: &Value, link: &str) -> Result<PropertyRecord, ParseError> {
    // The cache is itself a JSON document serialized into a string
    let raw_cache = next_data
        .pointer(CACHE_POINTER)
        .and_then(Value::as_str)
        .ok_or(ParseError::MissingCache)?;

    let cache: SoleEntry<CacheEntry> = serde_json::from_str(raw_cache)?;
    let (key, entry) = cache.into_inner().ok_or(ParseError::EmptyCache)?;
    debug!("Property cache key for {}: {}", link, key);

    let property = entry.property.ok_or(ParseError::MissingCache)?;

    let neighborhood = Field::from_json(
        property
            .parent_region
            .as_ref()
            .and_then(|region| region.get("name")),
    );

    Ok(PropertyRecord {
        neighborhood,
        home_type: home_type(property.reso_facts.as_ref()),
        price: Field::from_json(property.price.as_ref()),
        bedrooms: Field::from_json(property.bedrooms.as_ref()),
        bathrooms: Field::from_json(property.bathrooms.as_ref()),
        built_year: Field::from_json(property.year_built.as_ref()),
        longitude: Field::from_json(property.longitude.as_ref()),
        latitude: Field::from_json(property.latitude.as_ref()),
        link: link.to_string(),
    })
}

pub fn parse_property_page(html: &str, link: &str) -> Result<PropertyRecord, ParseError> {
    let next_data = extract_next_data(html)?;
    parse_next_data(&next_data, link)
}

/// Fetch and parse one detail page. Every failure ends up as `None`.
pub async fn process_property(fetcher: &dyn PageFetcher, link: &str) -> Option<PropertyRecord> {
    let html = fetcher.fetch(link).await?;

    match parse_property_page(&html, link) {
        Ok(record) => {
            info!("Successfully processed property: {}", link);
            Some(record)
        }
        Err(e) => {
            warn!("Error processing property {}: {}", link, e);
            None
        }
    }
}

/// Fetch every link with at most `workers` pages in flight.
///
/// Workers pick up links as soon as a slot frees, so one slow page never
/// holds up the others. Results are put back in `links` order before
/// returning. A task that panics is logged and counted as a failed link;
/// the rest of the pool carries on.
pub async fn fetch_details(
    fetcher: Arc<dyn PageFetcher>,
    links: &[String],
    workers: usize,
) -> Vec<Option<PropertyRecord>> {
    info!("Fetching {} property pages with {} workers", links.len(), workers);

    let mut results: Vec<(usize, Option<PropertyRecord>)> =
        stream::iter(links.iter().cloned().enumerate())
            .map(|(idx, link)| {
                let fetcher = Arc::clone(&fetcher);
                let task = tokio::spawn({
                    let link = link.clone();
                    async move { process_property(fetcher.as_ref(), &link).await }
                });
                async move {
                    match task.await {
                        Ok(result) => (idx, result),
                        Err(e) => {
                            warn!("Error processing property {}: {}", link, e);
                            (idx, None)
                        }
                    }
                }
            })
            .buffer_unordered(workers.max(1))
            .collect()
            .await;

    results.sort_by_key(|(idx, _)| *idx);
    results.into_iter().map(|(_, result)| result).collect()
}
