//! Attempt lifecycle state machine
//!
//! One synchronization attempt moves through
//! `Idle → Previewing → PreviewReady → Executing → {Completed | Failed}`.
//! The preview must complete before execution can begin (there is no
//! `Idle → Executing` shortcut), and `Failed` is reachable from either
//! suspend point. Both `Completed` and `Failed` are terminal: a new attempt
//! starts over at `Idle`.
//!
//! The attempt is owned by the caller; the orchestrator itself is stateless.
//! Nothing serializes independent attempts against each other, so a caller
//! that needs mutual exclusion across attempts must provide it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Result, SyncError};
use crate::operations::OperationOutcome;
use crate::preview::InvolvedResources;
use crate::request::SyncRequest;

/// Unique identifier for a synchronization attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AttemptId(Uuid);

impl AttemptId {
    /// Create a new random attempt ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for AttemptId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for AttemptId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The current state of a synchronization attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttemptState {
    /// Nothing requested yet
    Idle,
    /// Preview call in flight
    Previewing,
    /// Preview available, awaiting operator confirmation
    PreviewReady,
    /// Copy call in flight
    Executing,
    /// Copy finished and the outcome is available
    Completed,
    /// Preview or copy failed at the call level
    Failed,
}

impl AttemptState {
    /// Check if this state is terminal for the attempt
    pub fn is_terminal(&self) -> bool {
        matches!(self, AttemptState::Completed | AttemptState::Failed)
    }

    /// Check if a network call is in flight in this state
    pub fn is_in_flight(&self) -> bool {
        matches!(self, AttemptState::Previewing | AttemptState::Executing)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AttemptState::Idle => "idle",
            AttemptState::Previewing => "previewing",
            AttemptState::PreviewReady => "preview_ready",
            AttemptState::Executing => "executing",
            AttemptState::Completed => "completed",
            AttemptState::Failed => "failed",
        }
    }
}

impl std::fmt::Display for AttemptState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One synchronization attempt with validated state transitions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncAttempt {
    /// Unique identifier for this attempt
    pub id: AttemptId,
    /// The request driving the attempt
    pub request: SyncRequest,
    /// Current state
    pub state: AttemptState,
    /// Preview result, available from `PreviewReady` onwards
    pub preview: Option<InvolvedResources>,
    /// Execute outcome, available once `Completed`
    pub outcome: Option<OperationOutcome>,
    /// Call-level error message if the attempt failed
    pub error_message: Option<String>,
    /// When the attempt was created
    pub created_at: DateTime<Utc>,
    /// When the attempt reached a terminal state
    pub finished_at: Option<DateTime<Utc>>,
}

impl SyncAttempt {
    /// Create a new attempt in `Idle` state
    pub fn new(request: SyncRequest) -> Self {
        Self {
            id: AttemptId::new(),
            request,
            state: AttemptState::Idle,
            preview: None,
            outcome: None,
            error_message: None,
            created_at: Utc::now(),
            finished_at: None,
        }
    }

    /// Enter the preview suspend point
    ///
    /// # Errors
    ///
    /// Returns an error unless the attempt is `Idle`.
    pub fn begin_preview(mut self) -> Result<Self> {
        self.validate_transition(AttemptState::Previewing)?;
        self.state = AttemptState::Previewing;
        Ok(self)
    }

    /// Record the preview result and await confirmation
    ///
    /// # Errors
    ///
    /// Returns an error unless the attempt is `Previewing`.
    pub fn preview_ready(mut self, preview: InvolvedResources) -> Result<Self> {
        self.validate_transition(AttemptState::PreviewReady)?;
        self.state = AttemptState::PreviewReady;
        self.preview = Some(preview);
        Ok(self)
    }

    /// Enter the execute suspend point
    ///
    /// Execution may only follow a ready preview; an attempt cannot go from
    /// `Idle` straight to `Executing`.
    ///
    /// # Errors
    ///
    /// Returns an error unless the attempt is `PreviewReady`.
    pub fn begin_execute(mut self) -> Result<Self> {
        self.validate_transition(AttemptState::Executing)?;
        self.state = AttemptState::Executing;
        Ok(self)
    }

    /// Record the execute outcome and finish the attempt
    ///
    /// # Errors
    ///
    /// Returns an error unless the attempt is `Executing`.
    pub fn complete(mut self, outcome: OperationOutcome) -> Result<Self> {
        self.validate_transition(AttemptState::Completed)?;
        self.state = AttemptState::Completed;
        self.outcome = Some(outcome);
        self.finished_at = Some(Utc::now());
        Ok(self)
    }

    /// Record a call-level failure and finish the attempt
    ///
    /// # Errors
    ///
    /// Returns an error unless a call is in flight (`Previewing` or
    /// `Executing`).
    pub fn fail(mut self, message: impl Into<String>) -> Result<Self> {
        self.validate_transition(AttemptState::Failed)?;
        self.state = AttemptState::Failed;
        self.error_message = Some(message.into());
        self.finished_at = Some(Utc::now());
        Ok(self)
    }

    fn validate_transition(&self, to: AttemptState) -> Result<()> {
        let valid = matches!(
            (self.state, to),
            (AttemptState::Idle, AttemptState::Previewing)
                | (AttemptState::Previewing, AttemptState::PreviewReady)
                | (AttemptState::Previewing, AttemptState::Failed)
                | (AttemptState::PreviewReady, AttemptState::Executing)
                | (AttemptState::Executing, AttemptState::Completed)
                | (AttemptState::Executing, AttemptState::Failed)
        );

        if !valid {
            return Err(SyncError::InvalidTransition {
                from: self.state.as_str(),
                to: to.as_str(),
            });
        }

        Ok(())
    }
}
