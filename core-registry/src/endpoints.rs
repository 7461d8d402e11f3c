//! Configured endpoint types and URL derivation

use serde::{Deserialize, Serialize};

/// A configured metadata catalog records can be copied from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    /// Unique name, referenced by value from synchronization requests
    pub name: String,
    /// Base address of the catalog API
    pub url: String,
}

/// A configured catalog + data/style server pair records can be copied to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    /// Unique name, referenced by value from synchronization requests
    pub name: String,
    /// Destination catalog base address
    pub gn_url: String,
    /// Destination data/style server base address
    pub gs_url: String,
}

/// Derive a human-browsable URL for a record from its catalog API base URL.
///
/// Catalog API bases end in an `/api` segment; the browsable address is the
/// same host path without that segment, with the record identifier as a
/// query parameter. Applying the transform to an already-stripped base is a
/// no-op on the base part, so it never double-strips.
///
/// This is a pure string transform with no network effect.
pub fn browse_url(source: &Source, uuid: &str) -> String {
    let base = source.url.trim_end_matches('/');
    let base = base.strip_suffix("/api").unwrap_or(base);
    format!("{}?uuid={}", base, urlencoding::encode(uuid))
}
