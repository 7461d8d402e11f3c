//! The shared preview/execute request contract

use serde::{Deserialize, Serialize};

/// Parameters of one synchronization, shared by preview and execute
///
/// `src_name` and `dst_name` reference configured endpoints by name, never
/// by object identity. The three copy toggles are independent; no toggle is
/// required to be set client-side. The backend owns that contract, and a
/// request with all three false previews to two empty groups.
///
/// `dry_run = true` guarantees no destination-visible side effect, on
/// preview and execute alike.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncRequest {
    /// Name of the source catalog
    pub src_name: String,
    /// Name of the destination platform pair
    pub dst_name: String,
    /// Identifier of the metadata record to copy
    #[serde(rename = "metadataUuid")]
    pub metadata_uuid: String,
    /// Copy the metadata record itself
    pub copy_meta: bool,
    /// Copy the data layers the record references
    pub copy_layers: bool,
    /// Copy the styles attached to those layers
    pub copy_styles: bool,
    /// Simulate without mutating the destination
    pub dry_run: bool,
}

impl SyncRequest {
    /// Encode the request as the backend query string
    ///
    /// Every value is stringified: booleans as `"true"`/`"false"`, names and
    /// identifiers percent-encoded.
    pub fn query_string(&self) -> String {
        let pairs = [
            ("src_name", self.src_name.as_str()),
            ("dst_name", self.dst_name.as_str()),
            ("metadataUuid", self.metadata_uuid.as_str()),
            ("copy_meta", bool_str(self.copy_meta)),
            ("copy_layers", bool_str(self.copy_layers)),
            ("copy_styles", bool_str(self.copy_styles)),
            ("dry_run", bool_str(self.dry_run)),
        ];
        pairs
            .iter()
            .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

fn bool_str(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}
