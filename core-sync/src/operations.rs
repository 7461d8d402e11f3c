//! Per-step operation records of a synchronization run
//!
//! The backend reports each low-level step of a run as a flat JSON object
//! with no discriminant field: an HTTP call carries `method`/`status_code`/
//! `url`, a domain-level operation carries `operation`/`message`/`status`.
//! [`LogDetail`] classifies each record by field presence: `method` + `url`
//! make an HTTP-call record, an `operation` field makes a domain record,
//! and anything else is kept raw rather than rejected.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The wire form of one step record: every recognized field, all optional
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawDetail {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub operation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_type: Option<String>,
}

/// One recorded step of a synchronization run
///
/// Classification is deterministic: `method` and `url` both present means an
/// HTTP call (regardless of other fields), otherwise a present `operation`
/// means a domain operation, otherwise the record is carried as-is. A step
/// with a 4xx/5xx `status_code` is still just a step: failure of one step
/// is data, not an error of the run that reported it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawDetail", into = "RawDetail")]
pub enum LogDetail {
    /// A recorded HTTP call against one of the backends
    Http {
        method: String,
        status_code: Option<u16>,
        url: String,
        data_type: Option<String>,
    },
    /// A recorded domain-level operation
    Operation {
        operation: String,
        message: Option<String>,
        status: Option<String>,
        data_type: Option<String>,
    },
    /// A partially-populated record that fits neither shape
    Raw(RawDetail),
}

impl LogDetail {
    /// The step's HTTP-style status code, when it carries one
    pub fn status_code(&self) -> Option<u16> {
        match self {
            LogDetail::Http { status_code, .. } => *status_code,
            LogDetail::Operation { .. } => None,
            LogDetail::Raw(raw) => raw.status_code,
        }
    }

    /// Whether the step reported an in-band failure (4xx/5xx status)
    pub fn is_failed(&self) -> bool {
        matches!(self.status_code(), Some(code) if code >= 400)
    }
}

impl From<RawDetail> for LogDetail {
    fn from(raw: RawDetail) -> Self {
        match raw {
            RawDetail {
                method: Some(method),
                url: Some(url),
                status_code,
                data_type,
                ..
            } => LogDetail::Http {
                method,
                status_code,
                url,
                data_type,
            },
            RawDetail {
                operation: Some(operation),
                message,
                status,
                data_type,
                ..
            } => LogDetail::Operation {
                operation,
                message,
                status,
                data_type,
            },
            other => LogDetail::Raw(other),
        }
    }
}

impl From<LogDetail> for RawDetail {
    fn from(detail: LogDetail) -> Self {
        match detail {
            LogDetail::Http {
                method,
                status_code,
                url,
                data_type,
            } => RawDetail {
                method: Some(method),
                status_code,
                url: Some(url),
                data_type,
                ..RawDetail::default()
            },
            LogDetail::Operation {
                operation,
                message,
                status,
                data_type,
            } => RawDetail {
                operation: Some(operation),
                message,
                status,
                data_type,
                ..RawDetail::default()
            },
            LogDetail::Raw(raw) => raw,
        }
    }
}

/// The outcome of one execute call
///
/// `operations` is the audit trail: every step attempted, in execution
/// order, including failed ones. Reordering, deduplicating or merging
/// entries would falsify the trail, so the sequence is carried end-to-end
/// unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OperationOutcome {
    /// One-line human summary of the run, when the backend provides one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    /// Summary key/value pairs
    #[serde(default)]
    pub info: HashMap<String, String>,
    /// Every step attempted, in execution order
    #[serde(default)]
    pub operations: Vec<LogDetail>,
}

impl OperationOutcome {
    /// The steps that reported an in-band failure
    pub fn failed_steps(&self) -> impl Iterator<Item = &LogDetail> {
        self.operations.iter().filter(|op| op.is_failed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_record_classifies_by_method_and_url() {
        let detail: LogDetail = serde_json::from_str(
            r#"{"method": "PUT", "status_code": 200,
                "url": "https://x/maps/rest/styles/point.sld", "data_type": "style"}"#,
        )
        .unwrap();

        assert_eq!(
            detail,
            LogDetail::Http {
                method: "PUT".to_string(),
                status_code: Some(200),
                url: "https://x/maps/rest/styles/point.sld".to_string(),
                data_type: Some("style".to_string()),
            }
        );
    }

    #[test]
    fn test_operation_record_classifies_by_operation_field() {
        let detail: LogDetail = serde_json::from_str(
            r#"{"operation": "Reindex", "status": "ok"}"#,
        )
        .unwrap();

        assert_eq!(
            detail,
            LogDetail::Operation {
                operation: "Reindex".to_string(),
                message: None,
                status: Some("ok".to_string()),
                data_type: None,
            }
        );
    }

    #[test]
    fn test_partial_record_is_kept_raw() {
        // A method without a url fits neither shape and must not be dropped.
        let detail: LogDetail =
            serde_json::from_str(r#"{"method": "GET", "status_code": 404}"#).unwrap();

        match &detail {
            LogDetail::Raw(raw) => {
                assert_eq!(raw.method.as_deref(), Some("GET"));
                assert_eq!(raw.status_code, Some(404));
            }
            other => panic!("expected raw record, got {:?}", other),
        }
        assert!(detail.is_failed());
    }

    #[test]
    fn test_known_fixtures_classify_unambiguously() {
        let fixtures = [
            (r#"{"method": "GET", "status_code": 200, "url": "https://a/records/x"}"#, "http"),
            (r#"{"method": "PUT", "status_code": 201, "url": "https://x/workspaces"}"#, "http"),
            (r#"{"operation": "Update of server links", "message": "2 links"}"#, "operation"),
            (r#"{"operation": "Reindex", "status": "ok", "data_type": "dataset"}"#, "operation"),
            (r#"{"message": "dry run"}"#, "raw"),
        ];

        for (json, expected) in fixtures {
            let detail: LogDetail = serde_json::from_str(json).unwrap();
            let kind = match detail {
                LogDetail::Http { .. } => "http",
                LogDetail::Operation { .. } => "operation",
                LogDetail::Raw(_) => "raw",
            };
            assert_eq!(kind, expected, "fixture {} misclassified", json);
        }
    }

    #[test]
    fn test_serialization_round_trip() {
        let details: Vec<LogDetail> = serde_json::from_str(
            r#"[
                {"method": "PUT", "status_code": 200, "url": "https://x/s.sld"},
                {"operation": "Reindex", "status": "ok"},
                {"message": "note"}
            ]"#,
        )
        .unwrap();

        let json = serde_json::to_string(&details).unwrap();
        let reparsed: Vec<LogDetail> = serde_json::from_str(&json).unwrap();
        assert_eq!(details, reparsed);
    }

    #[test]
    fn test_outcome_preserves_step_order() {
        let outcome: OperationOutcome = serde_json::from_str(
            r#"{
                "summary": "copied 1 record",
                "info": {"src_title": "Roads 2023"},
                "operations": [
                    {"method": "GET", "status_code": 200, "url": "https://a/records/x"},
                    {"operation": "Reindex", "status": "ok"},
                    {"method": "PUT", "status_code": 500, "url": "https://x/layers/roads"}
                ]
            }"#,
        )
        .unwrap();

        assert_eq!(outcome.summary.as_deref(), Some("copied 1 record"));
        assert_eq!(outcome.info["src_title"], "Roads 2023");
        assert_eq!(outcome.operations.len(), 3);
        assert!(matches!(outcome.operations[0], LogDetail::Http { .. }));
        assert!(matches!(outcome.operations[1], LogDetail::Operation { .. }));
        assert_eq!(outcome.failed_steps().count(), 1);
    }

    #[test]
    fn test_empty_outcome_decodes() {
        let outcome: OperationOutcome = serde_json::from_str("{}").unwrap();
        assert!(outcome.operations.is_empty());
        assert!(outcome.info.is_empty());
    }
}
