//! Session-cached registry of configured endpoints

use bridge_http::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
use futures::future::try_join;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::endpoints::{Destination, Source};
use crate::error::{RegistryError, Result};

#[derive(Debug, Default)]
struct EndpointCache {
    sources: Vec<Source>,
    destinations: Vec<Destination>,
}

impl EndpointCache {
    fn is_populated(&self) -> bool {
        !self.sources.is_empty() && !self.destinations.is_empty()
    }
}

/// Registry of configured sources and destinations
///
/// Both lists are fetched once per session and cached; while both caches are
/// non-empty, [`fetch_endpoints`](EndpointRegistry::fetch_endpoints) answers
/// from memory without issuing network calls. The registry retries nothing:
/// a failed fetch is surfaced to the caller, who decides whether to retry.
pub struct EndpointRegistry {
    http: Arc<dyn HttpClient>,
    base_url: String,
    cache: RwLock<EndpointCache>,
}

impl EndpointRegistry {
    /// Create a registry for the backend at `base_url`
    pub fn new(http: Arc<dyn HttpClient>, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            cache: RwLock::new(EndpointCache::default()),
        }
    }

    /// Fetch the configured source and destination lists
    ///
    /// Issues both requests concurrently and joins them before caching. If
    /// both cached lists are already non-empty, returns the cached lists
    /// without network I/O.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError`] if either call fails at transport level,
    /// answers non-2xx, or does not decode as JSON. On error the cache is
    /// left untouched.
    pub async fn fetch_endpoints(&self) -> Result<(Vec<Source>, Vec<Destination>)> {
        {
            let cache = self.cache.read().await;
            if cache.is_populated() {
                debug!("Endpoint cache already populated, skipping fetch");
                return Ok((cache.sources.clone(), cache.destinations.clone()));
            }
        }

        let sources_url = format!("{}/sources", self.base_url);
        let destinations_url = format!("{}/destinations", self.base_url);

        let (sources, destinations): (Vec<Source>, Vec<Destination>) = try_join(
            self.get_json(&sources_url),
            self.get_json(&destinations_url),
        )
        .await?;

        info!(
            sources = sources.len(),
            destinations = destinations.len(),
            "Loaded endpoint configuration"
        );

        let mut cache = self.cache.write().await;
        cache.sources = sources.clone();
        cache.destinations = destinations.clone();

        Ok((sources, destinations))
    }

    /// Look up a source by exact name
    ///
    /// Absence is a normal outcome, not an error.
    pub async fn resolve_source(&self, name: &str) -> Option<Source> {
        let cache = self.cache.read().await;
        cache.sources.iter().find(|s| s.name == name).cloned()
    }

    /// Look up a destination by exact name
    pub async fn resolve_destination(&self, name: &str) -> Option<Destination> {
        let cache = self.cache.read().await;
        cache.destinations.iter().find(|d| d.name == name).cloned()
    }

    /// Drop the cached lists so the next fetch goes to the network
    pub async fn invalidate(&self) {
        let mut cache = self.cache.write().await;
        *cache = EndpointCache::default();
        debug!("Endpoint cache invalidated");
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        let request =
            HttpRequest::new(HttpMethod::Get, url).header("Accept", "application/json");
        let response: HttpResponse = self.http.execute(request).await?;

        if !response.is_success() {
            return Err(RegistryError::Rejected {
                status: response.status,
                body: response.text(),
            });
        }

        response
            .json()
            .map_err(|e| RegistryError::Decode(e.to_string()))
    }
}
