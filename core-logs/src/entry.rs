//! Audit log entry shapes and the wire-to-domain timestamp boundary

use chrono::{DateTime, NaiveDateTime, Utc};
use core_sync::LogDetail;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{LogError, Result};

/// One synchronization run as the backend serves it: timestamps are strings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawLogEntry {
    pub id: i64,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    pub status_code: u16,
    #[serde(default)]
    pub dataset_uuid: String,
    #[serde(default)]
    pub src_name: String,
    #[serde(default)]
    pub dst_name: String,
    #[serde(default)]
    pub src_title: String,
    #[serde(default)]
    pub dst_title: String,
    #[serde(default)]
    pub copy_meta: bool,
    #[serde(default)]
    pub copy_layers: bool,
    #[serde(default)]
    pub copy_styles: bool,
    #[serde(default)]
    pub details: Vec<LogDetail>,
}

/// One synchronization run with timestamps converted at the boundary
///
/// All in-memory consumers deal in `DateTime<Utc>`; the string form never
/// leaves this module except through [`LogEntry::to_raw`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    /// Unique monotonic identifier
    pub id: i64,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    /// Operator identity
    pub first_name: String,
    pub last_name: String,
    /// Overall HTTP-style result code of the run
    pub status_code: u16,
    pub dataset_uuid: String,
    pub src_name: String,
    pub dst_name: String,
    pub src_title: String,
    pub dst_title: String,
    /// Request flags echoed by the backend
    pub copy_meta: bool,
    pub copy_layers: bool,
    pub copy_styles: bool,
    /// Ordered per-step detail records
    pub details: Vec<LogDetail>,
}

impl LogEntry {
    /// Convert a wire entry, parsing both timestamps
    ///
    /// `end_time < start_time` is a data-integrity warning, not an error:
    /// the backend owns that invariant.
    ///
    /// # Errors
    ///
    /// Returns [`LogError::Timestamp`] when either timestamp cannot be
    /// parsed.
    pub fn from_raw(raw: RawLogEntry) -> Result<Self> {
        let start_time = parse_timestamp(&raw.start_time).ok_or_else(|| LogError::Timestamp {
            entry_id: raw.id,
            value: raw.start_time.clone(),
        })?;
        let end_time = parse_timestamp(&raw.end_time).ok_or_else(|| LogError::Timestamp {
            entry_id: raw.id,
            value: raw.end_time.clone(),
        })?;

        if end_time < start_time {
            warn!(
                entry_id = raw.id,
                %start_time,
                %end_time,
                "Log entry ends before it starts"
            );
        }

        Ok(Self {
            id: raw.id,
            start_time,
            end_time,
            first_name: raw.first_name,
            last_name: raw.last_name,
            status_code: raw.status_code,
            dataset_uuid: raw.dataset_uuid,
            src_name: raw.src_name,
            dst_name: raw.dst_name,
            src_title: raw.src_title,
            dst_title: raw.dst_title,
            copy_meta: raw.copy_meta,
            copy_layers: raw.copy_layers,
            copy_styles: raw.copy_styles,
            details: raw.details,
        })
    }

    /// Render back to the wire form; re-parsing yields the same instants
    pub fn to_raw(&self) -> RawLogEntry {
        RawLogEntry {
            id: self.id,
            start_time: self.start_time.to_rfc3339(),
            end_time: self.end_time.to_rfc3339(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            status_code: self.status_code,
            dataset_uuid: self.dataset_uuid.clone(),
            src_name: self.src_name.clone(),
            dst_name: self.dst_name.clone(),
            src_title: self.src_title.clone(),
            dst_title: self.dst_title.clone(),
            copy_meta: self.copy_meta,
            copy_layers: self.copy_layers,
            copy_styles: self.copy_styles,
            details: self.details.clone(),
        }
    }

    /// Run duration; negative when the backend's timestamps are inverted
    pub fn duration(&self) -> chrono::Duration {
        self.end_time - self.start_time
    }
}

/// Parse a wire timestamp
///
/// The backend emits zone-less datetimes (`2025-02-07T17:00:48.232023`);
/// those are taken as UTC. Offset-carrying RFC 3339 values are accepted too.
fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(with_offset) = DateTime::parse_from_rfc3339(value) {
        return Some(with_offset.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}

/// One page of audit log entries
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogPage {
    /// Entries of this page, most recent first as served by the backend
    pub entries: Vec<LogEntry>,
    /// Total number of runs across all pages
    pub total: u64,
}

impl LogPage {
    /// Number of pages at the given page size
    pub fn total_pages(&self, limit: u32) -> u32 {
        if limit == 0 {
            0
        } else {
            self.total.div_ceil(limit as u64) as u32
        }
    }
}
