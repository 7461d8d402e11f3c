//! # Endpoint Registry
//!
//! Holds the configured source catalogs and destination platform pairs.
//!
//! ## Overview
//!
//! This module provides:
//! - One-shot fetch of the `Source` and `Destination` lists, cached for the
//!   session (a second fetch is a no-op while both caches are non-empty)
//! - Exact-match resolution of a source or destination by name
//! - Derivation of a human-browsable record URL from a catalog API base URL
//!
//! The cache is owned by the registry object and can be dropped explicitly
//! with [`EndpointRegistry::invalidate`].

pub mod endpoints;
pub mod error;
pub mod registry;

pub use endpoints::{browse_url, Destination, Source};
pub use error::{RegistryError, Result};
pub use registry::EndpointRegistry;
