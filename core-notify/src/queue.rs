//! FIFO notice mailbox

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;
use tracing::debug;

/// Notice severity, in display terms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Info,
    Warn,
    Error,
}

/// One queued notice
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub severity: Severity,
    /// Short headline
    pub summary: String,
    /// Longer explanation, e.g. the underlying error text
    pub detail: String,
    /// Display lifetime; `None` means the consumer's default applies
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub life: Option<Duration>,
}

impl Notice {
    pub fn new(severity: Severity, summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            severity,
            summary: summary.into(),
            detail: detail.into(),
            life: None,
        }
    }

    /// Shorthand for an error notice
    pub fn error(summary: impl Into<String>, detail: impl Into<String>) -> Self {
        Self::new(Severity::Error, summary, detail)
    }

    /// Set an explicit display lifetime
    pub fn with_life(mut self, life: Duration) -> Self {
        self.life = Some(life);
        self
    }
}

/// FIFO mailbox decoupling notice production from consumption
///
/// Producers may enqueue before any consumer exists; a later consumer
/// drains everything in arrival order. The queue never drops, merges or
/// expires notices on its own.
#[derive(Debug, Default)]
pub struct NoticeQueue {
    inner: Mutex<VecDeque<Notice>>,
}

impl NoticeQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a notice
    pub fn enqueue(&self, notice: Notice) {
        let mut queue = self.inner.lock().expect("notice queue poisoned");
        debug!(severity = ?notice.severity, summary = %notice.summary, "Notice queued");
        queue.push_back(notice);
    }

    /// Remove and return all queued notices in arrival order
    pub fn drain(&self) -> Vec<Notice> {
        let mut queue = self.inner.lock().expect("notice queue poisoned");
        let drained: Vec<Notice> = queue.drain(..).collect();
        if !drained.is_empty() {
            debug!(count = drained.len(), "Notices drained");
        }
        drained
    }

    pub fn len(&self) -> usize {
        self.inner.lock().expect("notice queue poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_returns_fifo_order() {
        let queue = NoticeQueue::new();
        queue.enqueue(Notice::error("first", "a"));
        queue.enqueue(Notice::new(Severity::Info, "second", "b"));
        queue.enqueue(Notice::error("third", "c"));

        let drained = queue.drain();
        assert_eq!(drained.len(), 3);
        assert_eq!(drained[0].summary, "first");
        assert_eq!(drained[1].summary, "second");
        assert_eq!(drained[2].summary, "third");
    }

    #[test]
    fn test_drain_empties_the_queue() {
        let queue = NoticeQueue::new();
        queue.enqueue(Notice::error("only", "x"));
        assert_eq!(queue.len(), 1);

        queue.drain();
        assert!(queue.is_empty());
        assert!(queue.drain().is_empty());
    }

    #[test]
    fn test_duplicates_are_kept() {
        let queue = NoticeQueue::new();
        let notice = Notice::error("same", "twice");
        queue.enqueue(notice.clone());
        queue.enqueue(notice);

        assert_eq!(queue.drain().len(), 2);
    }

    #[test]
    fn test_life_is_only_set_explicitly() {
        let plain = Notice::error("no life", "d");
        assert!(plain.life.is_none());

        let limited = plain.with_life(Duration::from_secs(5));
        assert_eq!(limited.life, Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_producers_before_consumers() {
        // Enqueue happens with no consumer in existence yet; nothing is lost.
        let queue = NoticeQueue::new();
        queue.enqueue(Notice::error("Loading endpoints failed", "502 Bad Gateway"));

        let drained = queue.drain();
        assert_eq!(drained[0].severity, Severity::Error);
        assert_eq!(drained[0].detail, "502 Bad Gateway");
    }
}
