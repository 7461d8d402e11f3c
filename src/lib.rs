//! Workspace facade crate.
//!
//! Re-exports the individual workspace crates so host applications can
//! depend on `geosync-workspace` alone instead of wiring each member, and
//! provides the `tracing` bootstrap used by binaries embedding the core.

pub mod logging;

pub use bridge_http;
pub use core_logs;
pub use core_notify;
pub use core_registry;
pub use core_search;
pub use core_sync;
