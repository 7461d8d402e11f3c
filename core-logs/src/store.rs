//! Paginated retrieval of synchronization runs

use bridge_http::{HttpClient, HttpMethod, HttpRequest};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::entry::{LogEntry, LogPage, RawLogEntry};
use crate::error::{LogError, Result};

#[derive(Debug, Deserialize)]
struct PageEnvelope {
    #[serde(default)]
    logs: Vec<RawLogEntry>,
    #[serde(default)]
    total: u64,
}

/// Client for the backend's audit log
pub struct LogStore {
    http: Arc<dyn HttpClient>,
    base_url: String,
}

impl LogStore {
    /// Create a log store for the backend at `base_url`
    pub fn new(http: Arc<dyn HttpClient>, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Fetch one page of runs, detail records included
    ///
    /// `total` reflects the full run count regardless of `limit`/`offset`,
    /// so pager math needs no second request. Ordering is the backend's
    /// most-recent-first contract, passed through without re-sorting. The
    /// call is all-or-nothing: no partial page is ever returned.
    ///
    /// # Errors
    ///
    /// Returns [`LogError`] on transport failure, non-2xx answer, an
    /// undecodable envelope, or an unparseable timestamp in any entry.
    pub async fn fetch_page(&self, limit: u32, offset: u32) -> Result<LogPage> {
        let url = format!(
            "{}/logs?size={}&offset={}&get_details=true",
            self.base_url, limit, offset
        );
        debug!(limit, offset, "Fetching audit log page");

        let request = HttpRequest::new(HttpMethod::Get, url).header("Accept", "application/json");
        let response = self.http.execute(request).await?;

        if !response.is_success() {
            return Err(LogError::Rejected {
                status: response.status,
                body: response.text(),
            });
        }

        let envelope: PageEnvelope = response
            .json()
            .map_err(|e| LogError::Decode(e.to_string()))?;

        let mut entries = envelope
            .logs
            .into_iter()
            .map(LogEntry::from_raw)
            .collect::<Result<Vec<_>>>()?;

        if entries.len() > limit as usize {
            warn!(
                served = entries.len(),
                limit, "Backend served more entries than requested, truncating"
            );
            entries.truncate(limit as usize);
        }

        debug!(
            entries = entries.len(),
            total = envelope.total,
            "Audit log page loaded"
        );

        Ok(LogPage {
            entries,
            total: envelope.total,
        })
    }
}
