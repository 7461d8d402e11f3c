//! # Synchronization Orchestrator
//!
//! The contract for copying one dataset between platform pairs.
//!
//! ## Overview
//!
//! A [`SyncRequest`] names a source catalog, a destination pair, a record
//! identifier and three independent copy toggles. The orchestrator can:
//! - [`preview`](orchestrator::SyncOrchestrator::preview) the request: a pure
//!   read computing exactly which catalog records and which server artifacts
//!   would be touched, grouped by resource
//! - [`execute`](orchestrator::SyncOrchestrator::execute) it: perform the
//!   copy (or simulate it under `dry_run`) and report every step attempted,
//!   in execution order
//!
//! Two heterogeneous backend subsystems (metadata catalog, data/style
//! server) are reconciled into one response shape on each side: preview
//! groups by resource ([`InvolvedResources`]), execute reports by step
//! ([`OperationOutcome`] over [`LogDetail`]).
//!
//! ## Components
//!
//! - **Request contract** (`request`): the shared preview/execute parameters
//! - **Preview shapes** (`preview`): the involved-resources grouping
//! - **Operation records** (`operations`): the polymorphic per-step log
//! - **Attempt state machine** (`attempt`): caller-owned lifecycle with
//!   validated transitions
//! - **Orchestrator** (`orchestrator`): the two backend calls

pub mod attempt;
pub mod error;
pub mod operations;
pub mod orchestrator;
pub mod preview;
pub mod request;

pub use attempt::{AttemptId, AttemptState, SyncAttempt};
pub use error::{Result, SyncError};
pub use operations::{LogDetail, OperationOutcome, RawDetail};
pub use orchestrator::SyncOrchestrator;
pub use preview::{CatalogGroup, InvolvedResources, MetadataRecord, ServerGroup};
pub use request::SyncRequest;
