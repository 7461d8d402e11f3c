//! Preview result shapes: the resources a request would touch

use serde::{Deserialize, Serialize};

/// One metadata record that would be copied
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataRecord {
    /// Record title
    pub title: String,
    /// Metadata schema the record conforms to, when the catalog reports it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iso_standard: Option<String>,
}

/// Catalog-side grouping: the metadata records involved between one source
/// catalog and one destination catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogGroup {
    /// Source catalog identifier
    pub src: String,
    /// Destination catalog identifier
    pub dst: String,
    /// Records that would be copied; empty when the metadata toggle is off
    #[serde(default)]
    pub metadata: Vec<MetadataRecord>,
}

/// Server-side grouping: the layers and styles involved between one source
/// server and one destination server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerGroup {
    /// Source server identifier
    pub src: String,
    /// Destination server identifier
    pub dst: String,
    /// Layer names that would be copied; empty when the layer toggle is off
    #[serde(default)]
    pub layers: Vec<String>,
    /// Style names that would be copied; empty when the style toggle is off
    #[serde(default)]
    pub styles: Vec<String>,
}

/// Everything one synchronization request would touch, grouped by resource
///
/// Computing this is a pure read: it never creates, modifies or deletes
/// anything on the destination. The groups reflect the request's copy
/// toggles; a category whose toggle is off contributes nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvolvedResources {
    /// Catalog-side groups
    #[serde(default)]
    pub metadata: Vec<CatalogGroup>,
    /// Server-side groups
    #[serde(default)]
    pub data: Vec<ServerGroup>,
}

impl InvolvedResources {
    /// True when the request would touch nothing at all
    pub fn is_empty(&self) -> bool {
        self.metadata.iter().all(|g| g.metadata.is_empty())
            && self
                .data
                .iter()
                .all(|g| g.layers.is_empty() && g.styles.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_preview_payload() {
        let payload = r#"{
            "metadata": [
                {"src": "CatalogA", "dst": "PlatformX",
                 "metadata": [{"title": "Roads 2023", "iso_standard": "iso19139"}]}
            ],
            "data": [
                {"src": "https://a/maps", "dst": "https://x/maps",
                 "layers": ["roads"], "styles": ["roads_default"]}
            ]
        }"#;

        let preview: InvolvedResources = serde_json::from_str(payload).unwrap();
        assert_eq!(preview.metadata[0].metadata[0].title, "Roads 2023");
        assert_eq!(
            preview.metadata[0].metadata[0].iso_standard.as_deref(),
            Some("iso19139")
        );
        assert_eq!(preview.data[0].layers, vec!["roads"]);
        assert!(!preview.is_empty());
    }

    #[test]
    fn test_missing_groups_default_to_empty() {
        let preview: InvolvedResources = serde_json::from_str("{}").unwrap();
        assert!(preview.metadata.is_empty());
        assert!(preview.data.is_empty());
        assert!(preview.is_empty());
    }

    #[test]
    fn test_groups_without_content_are_empty() {
        let payload = r#"{
            "metadata": [{"src": "a", "dst": "b", "metadata": []}],
            "data": [{"src": "c", "dst": "d", "layers": [], "styles": []}]
        }"#;
        let preview: InvolvedResources = serde_json::from_str(payload).unwrap();
        assert!(preview.is_empty());
    }
}
