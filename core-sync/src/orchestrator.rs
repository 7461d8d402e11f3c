//! The two backend calls: preview and execute

use bridge_http::{HttpClient, HttpMethod, HttpRequest};
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::error::{Result, SyncError};
use crate::operations::OperationOutcome;
use crate::preview::InvolvedResources;
use crate::request::SyncRequest;

/// Stateless client for the synchronization backend
///
/// Preview and execute deliberately share the request shape: a preview is
/// "what would this execute touch", answered without touching it. The
/// response shapes differ because preview groups by resource while execute
/// reports by step.
pub struct SyncOrchestrator {
    http: Arc<dyn HttpClient>,
    base_url: String,
}

impl SyncOrchestrator {
    /// Create an orchestrator for the backend at `base_url`
    pub fn new(http: Arc<dyn HttpClient>, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Compute what the request would touch, without touching it
    ///
    /// The answer reflects the request's copy toggles: a category whose
    /// toggle is off contributes nothing to the groups. The preview is
    /// all-or-nothing: on failure no partial result is returned.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::Preview`] on transport failure,
    /// [`SyncError::PreviewRejected`] on a non-2xx answer, and
    /// [`SyncError::Decode`] on an undecodable body.
    pub async fn preview(&self, request: &SyncRequest) -> Result<InvolvedResources> {
        let url = format!(
            "{}/involved_resources?{}",
            self.base_url,
            request.query_string()
        );
        debug!(uuid = %request.metadata_uuid, "Requesting synchronization preview");

        let http_request =
            HttpRequest::new(HttpMethod::Get, url).header("Accept", "application/json");
        let response = self
            .http
            .execute(http_request)
            .await
            .map_err(SyncError::Preview)?;

        if !response.is_success() {
            return Err(SyncError::PreviewRejected {
                status: response.status,
                body: response.text(),
            });
        }

        let preview: InvolvedResources = response
            .json()
            .map_err(|e| SyncError::Decode(e.to_string()))?;

        debug!(
            catalog_groups = preview.metadata.len(),
            server_groups = preview.data.len(),
            "Preview computed"
        );
        Ok(preview)
    }

    /// Perform the copy and report every step attempted
    ///
    /// Under `dry_run` the backend simulates the copy while still returning
    /// a realistic step sequence. The returned operations are in execution
    /// order and include failed steps: a non-2xx status inside the sequence
    /// does not abort the run and is not an error of this call. Only a
    /// transport-level failure, a non-2xx answer to the call itself, or an
    /// undecodable body are.
    pub async fn execute(&self, request: &SyncRequest) -> Result<OperationOutcome> {
        let url = format!("{}/copy?{}", self.base_url, request.query_string());
        info!(
            uuid = %request.metadata_uuid,
            src = %request.src_name,
            dst = %request.dst_name,
            dry_run = request.dry_run,
            "Executing synchronization"
        );

        let http_request = HttpRequest::new(HttpMethod::Put, url)
            .header("Accept", "application/json")
            .header("Content-Type", "application/json");
        let response = self
            .http
            .execute(http_request)
            .await
            .map_err(SyncError::Execute)?;

        if !response.is_success() {
            return Err(SyncError::ExecuteRejected {
                status: response.status,
                body: response.text(),
            });
        }

        let outcome: OperationOutcome = response
            .json()
            .map_err(|e| SyncError::Decode(e.to_string()))?;

        let failed = outcome.failed_steps().count();
        if failed > 0 {
            warn!(
                steps = outcome.operations.len(),
                failed, "Synchronization finished with failed steps"
            );
        } else {
            info!(steps = outcome.operations.len(), "Synchronization finished");
        }

        Ok(outcome)
    }
}
