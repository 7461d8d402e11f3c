//! Integration tests for the synchronization orchestrator

use async_trait::async_trait;
use bridge_http::{HttpClient, HttpMethod, HttpRequest, HttpResponse};
use bytes::Bytes;
use core_sync::{LogDetail, SyncError, SyncOrchestrator, SyncRequest};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Answers every request with one scripted response and records all traffic
struct ScriptedClient {
    status: u16,
    body: String,
    requests: Mutex<Vec<HttpRequest>>,
}

impl ScriptedClient {
    fn new(status: u16, body: &str) -> Arc<Self> {
        Arc::new(Self {
            status,
            body: body.to_string(),
            requests: Mutex::new(Vec::new()),
        })
    }

    fn failing() -> Arc<Self> {
        Arc::new(Self {
            status: 0,
            body: String::new(),
            requests: Mutex::new(Vec::new()),
        })
    }

    fn recorded(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpClient for ScriptedClient {
    async fn execute(&self, request: HttpRequest) -> bridge_http::Result<HttpResponse> {
        self.requests.lock().unwrap().push(request);
        if self.status == 0 {
            return Err(bridge_http::HttpError::Transport(
                "connection refused".to_string(),
            ));
        }
        Ok(HttpResponse {
            status: self.status,
            headers: HashMap::new(),
            body: Bytes::from(self.body.clone()),
        })
    }
}

fn dry_run_request() -> SyncRequest {
    SyncRequest {
        src_name: "src".to_string(),
        dst_name: "dest".to_string(),
        metadata_uuid: "abc-123".to_string(),
        copy_meta: true,
        copy_layers: false,
        copy_styles: false,
        dry_run: true,
    }
}

const PREVIEW_BODY: &str = r#"{
    "metadata": [
        {"src": "src", "dst": "dest", "metadata": [{"title": "Roads 2023"}]}
    ],
    "data": []
}"#;

#[tokio::test]
async fn preview_reports_selected_categories_only() {
    let client = ScriptedClient::new(200, PREVIEW_BODY);
    let orchestrator = SyncOrchestrator::new(client.clone(), "https://backend");

    let preview = orchestrator.preview(&dry_run_request()).await.unwrap();

    assert_eq!(preview.metadata.len(), 1);
    assert_eq!(preview.metadata[0].src, "src");
    assert_eq!(preview.metadata[0].dst, "dest");
    assert_eq!(preview.metadata[0].metadata[0].title, "Roads 2023");
    // Layers and styles were not requested, so the data group is empty.
    assert!(preview.data.is_empty());
}

#[tokio::test]
async fn preview_issues_a_single_read_call() {
    let client = ScriptedClient::new(200, PREVIEW_BODY);
    let orchestrator = SyncOrchestrator::new(client.clone(), "https://backend");

    orchestrator.preview(&dry_run_request()).await.unwrap();

    let recorded = client.recorded();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].method, HttpMethod::Get);
    assert_eq!(
        recorded[0].url,
        "https://backend/involved_resources?src_name=src&dst_name=dest\
         &metadataUuid=abc-123&copy_meta=true&copy_layers=false\
         &copy_styles=false&dry_run=true"
    );
    // A preview never mutates anything: zero write-method calls issued.
    assert!(recorded.iter().all(|r| !r.method.is_write()));
}

#[tokio::test]
async fn execute_preserves_step_order_and_classification() {
    let body = r#"{
        "info": {"src_title": "Roads 2023"},
        "operations": [
            {"method": "PUT", "status_code": 200, "url": "http://proxy:8080/maps/rest/styles/point.sld"},
            {"operation": "Reindex", "status": "ok"}
        ]
    }"#;
    let client = ScriptedClient::new(200, body);
    let orchestrator = SyncOrchestrator::new(client.clone(), "https://backend");

    let outcome = orchestrator.execute(&dry_run_request()).await.unwrap();

    assert_eq!(outcome.operations.len(), 2);
    match &outcome.operations[0] {
        LogDetail::Http {
            method,
            status_code,
            url,
            ..
        } => {
            assert_eq!(method, "PUT");
            assert_eq!(*status_code, Some(200));
            assert_eq!(url, "http://proxy:8080/maps/rest/styles/point.sld");
        }
        other => panic!("expected http record first, got {:?}", other),
    }
    match &outcome.operations[1] {
        LogDetail::Operation {
            operation, status, ..
        } => {
            assert_eq!(operation, "Reindex");
            assert_eq!(status.as_deref(), Some("ok"));
        }
        other => panic!("expected operation record second, got {:?}", other),
    }

    let recorded = client.recorded();
    assert_eq!(recorded.len(), 1);
    assert_eq!(recorded[0].method, HttpMethod::Put);
    assert!(recorded[0]
        .url
        .starts_with("https://backend/copy?src_name=src&dst_name=dest"));
}

#[tokio::test]
async fn execute_keeps_failed_steps_as_data() {
    let body = r#"{
        "operations": [
            {"method": "GET", "status_code": 200, "url": "https://a/records/x"},
            {"method": "PUT", "status_code": 403, "url": "https://x/workspaces/roads"},
            {"operation": "Reindex", "status": "skipped"}
        ]
    }"#;
    let client = ScriptedClient::new(200, body);
    let orchestrator = SyncOrchestrator::new(client, "https://backend");

    // The call succeeds even though one step failed in-band.
    let outcome = orchestrator.execute(&dry_run_request()).await.unwrap();
    assert_eq!(outcome.operations.len(), 3);
    assert_eq!(outcome.failed_steps().count(), 1);
}

#[tokio::test]
async fn preview_errors_are_distinct_from_execute_errors() {
    let orchestrator = SyncOrchestrator::new(ScriptedClient::failing(), "https://backend");
    let err = orchestrator.preview(&dry_run_request()).await.unwrap_err();
    assert!(matches!(err, SyncError::Preview(_)));

    let orchestrator = SyncOrchestrator::new(ScriptedClient::failing(), "https://backend");
    let err = orchestrator.execute(&dry_run_request()).await.unwrap_err();
    assert!(matches!(err, SyncError::Execute(_)));
}

#[tokio::test]
async fn non_2xx_answers_are_rejections() {
    let orchestrator =
        SyncOrchestrator::new(ScriptedClient::new(404, "no such record"), "https://backend");

    let err = orchestrator.preview(&dry_run_request()).await.unwrap_err();
    assert!(matches!(
        err,
        SyncError::PreviewRejected { status: 404, .. }
    ));

    let orchestrator =
        SyncOrchestrator::new(ScriptedClient::new(500, "boom"), "https://backend");
    let err = orchestrator.execute(&dry_run_request()).await.unwrap_err();
    assert!(matches!(
        err,
        SyncError::ExecuteRejected { status: 500, .. }
    ));
}

#[tokio::test]
async fn undecodable_body_is_a_decode_error() {
    let orchestrator =
        SyncOrchestrator::new(ScriptedClient::new(200, "<html>"), "https://backend");
    let err = orchestrator.preview(&dry_run_request()).await.unwrap_err();
    assert!(matches!(err, SyncError::Decode(_)));
}
