//! Structured full-text search against one source catalog

use bridge_http::{HttpClient, HttpMethod, HttpRequest};
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tracing::debug;

use crate::error::{Result, SearchError};

/// Fixed page size of the quick-search; this endpoint only ever returns the
/// first page.
pub const SEARCH_PAGE_SIZE: u32 = 20;

/// Record types excluded from dataset search results
const EXCLUDED_RESOURCE_TYPES: [&str; 4] = ["service", "map", "map/static", "mapDigital"];

/// One dataset hit, flattened for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    /// Record identifier, used to address the record in a synchronization
    pub uuid: String,
    /// Record title
    pub title: String,
    /// Record abstract
    pub abstract_text: String,
}

/// Localized text object: the catalog serves a `default` member plus
/// per-language variants, of which only `default` is consumed here.
#[derive(Debug, Clone, Default, Deserialize)]
struct LocalizedText {
    #[serde(default)]
    default: String,
}

#[derive(Debug, Deserialize)]
struct HitSource {
    #[serde(default)]
    uuid: String,
    #[serde(default, rename = "resourceTitleObject")]
    title: LocalizedText,
    #[serde(default, rename = "resourceAbstractObject")]
    abstract_text: LocalizedText,
}

#[derive(Debug, Deserialize)]
struct Hit {
    #[serde(rename = "_source")]
    source: HitSource,
}

#[derive(Debug, Default, Deserialize)]
struct HitList {
    #[serde(default)]
    hits: Vec<Hit>,
}

#[derive(Debug, Default, Deserialize)]
struct SearchEnvelope {
    #[serde(default)]
    hits: HitList,
}

/// Quick-search client for dataset records
pub struct DatasetSearch {
    http: Arc<dyn HttpClient>,
    base_url: String,
}

impl DatasetSearch {
    /// Create a search client for the backend at `base_url`
    pub fn new(http: Arc<dyn HttpClient>, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Search one source catalog for dataset records
    ///
    /// Matches records whose title, abstract, tag or identifier prefix-match
    /// `query`; template records and service/map-type records are always
    /// excluded, harvested records only when `include_harvested` is false.
    /// An absent or empty hit list yields an empty vec, never an error.
    /// Duplicate uuids in the backend answer pass through unchanged.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError`] on transport failure, non-2xx answer, or an
    /// undecodable envelope.
    pub async fn search(
        &self,
        source_name: &str,
        query: &str,
        include_harvested: bool,
    ) -> Result<Vec<SearchResult>> {
        let url = format!(
            "{}/search/{}",
            self.base_url,
            urlencoding::encode(source_name)
        );
        let body = build_query(query, include_harvested);

        debug!(source = source_name, query, "Searching dataset records");

        let request = HttpRequest::new(HttpMethod::Post, url)
            .json(&body)
            .map_err(SearchError::Fetch)?;
        let response = self.http.execute(request).await?;

        if !response.is_success() {
            return Err(SearchError::Rejected {
                status: response.status,
                body: response.text(),
            });
        }

        let envelope: SearchEnvelope = response
            .json()
            .map_err(|e| SearchError::Decode(e.to_string()))?;

        let results: Vec<SearchResult> = envelope
            .hits
            .hits
            .into_iter()
            .map(|hit| SearchResult {
                uuid: hit.source.uuid,
                title: hit.source.title.default,
                abstract_text: hit.source.abstract_text.default,
            })
            .collect();

        debug!(hits = results.len(), "Search completed");
        Ok(results)
    }
}

/// Build the structured query body for one quick-search
fn build_query(query: &str, include_harvested: bool) -> Value {
    let mut must_not = vec![json!({
        "terms": { "resourceType": EXCLUDED_RESOURCE_TYPES }
    })];
    if !include_harvested {
        must_not.push(json!({ "term": { "isHarvested": true } }));
    }

    json!({
        "query": {
            "bool": {
                "must": [
                    { "terms": { "isTemplate": ["n"] } },
                    {
                        "multi_match": {
                            "query": query,
                            "type": "bool_prefix",
                            "fields": [
                                "resourceTitleObject.*",
                                "resourceAbstractObject.*",
                                "tag",
                                "resourceIdentifier"
                            ]
                        }
                    }
                ],
                "must_not": must_not
            }
        },
        "_source": ["resourceTitleObject", "resourceAbstractObject", "uuid"],
        "from": 0,
        "size": SEARCH_PAGE_SIZE
    })
}
