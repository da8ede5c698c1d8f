//! Metadata record model.
//!
//! A record is a hierarchical document: each node carries a document type,
//! an ordered list of named metadata values, and child nodes. An anchor
//! node is a grouping placeholder whose real content lives in its first
//! child. These types are serialized/deserialized by the record store.

use serde::{Deserialize, Serialize};

/// One named metadata value attached to a document node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataValue {
    /// Field name, as defined by the rule set.
    pub name: String,
    /// The stored value.
    pub value: String,
}

/// A node in the hierarchical metadata record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentNode {
    /// Document type name (e.g. "Monograph", "MultiVolumeWork").
    pub doc_type: String,
    /// Whether this node is an anchor whose content lives in its first child.
    #[serde(default)]
    pub anchor: bool,
    /// Metadata values attached to this node.
    #[serde(default)]
    pub metadata: Vec<MetadataValue>,
    /// Child nodes.
    #[serde(default)]
    pub children: Vec<DocumentNode>,
}

impl DocumentNode {
    /// Creates an empty node of the given document type.
    #[must_use]
    pub fn new(doc_type: impl Into<String>) -> Self {
        Self { doc_type: doc_type.into(), anchor: false, metadata: Vec::new(), children: Vec::new() }
    }

    /// Resolves this node to the one that carries real content.
    ///
    /// For an anchor node that is its first child; `None` if the anchor has
    /// no children. A plain node resolves to itself.
    pub fn effective_target_mut(&mut self) -> Option<&mut DocumentNode> {
        if self.anchor {
            self.children.first_mut()
        } else {
            Some(self)
        }
    }

    /// Returns the values currently stored under `field` on this node.
    #[must_use]
    pub fn values_of(&self, field: &str) -> Vec<&str> {
        self.metadata.iter().filter(|m| m.name == field).map(|m| m.value.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_node_resolves_to_itself() {
        let mut node = DocumentNode::new("Monograph");
        node.metadata.push(MetadataValue { name: "TitleDocMain".into(), value: "x".into() });

        let target = node.effective_target_mut().unwrap();
        assert_eq!(target.doc_type, "Monograph");
        assert_eq!(target.metadata.len(), 1);
    }

    #[test]
    fn anchor_resolves_to_first_child() {
        let mut anchor = DocumentNode::new("MultiVolumeWork");
        anchor.anchor = true;
        anchor.children.push(DocumentNode::new("Volume"));
        anchor.children.push(DocumentNode::new("Volume"));

        let target = anchor.effective_target_mut().unwrap();
        assert_eq!(target.doc_type, "Volume");
    }

    #[test]
    fn childless_anchor_has_no_target() {
        let mut anchor = DocumentNode::new("MultiVolumeWork");
        anchor.anchor = true;

        assert!(anchor.effective_target_mut().is_none());
    }

    #[test]
    fn values_of_filters_by_name() {
        let mut node = DocumentNode::new("Monograph");
        node.metadata.push(MetadataValue { name: "CatalogIDDigital".into(), value: "A".into() });
        node.metadata.push(MetadataValue { name: "TitleDocMain".into(), value: "T".into() });
        node.metadata.push(MetadataValue { name: "CatalogIDDigital".into(), value: "B".into() });

        assert_eq!(node.values_of("CatalogIDDigital"), vec!["A", "B"]);
        assert!(node.values_of("Author").is_empty());
    }

    #[test]
    fn record_round_trips_through_yaml() {
        let mut node = DocumentNode::new("Monograph");
        node.metadata.push(MetadataValue { name: "CatalogIDDigital".into(), value: "123".into() });

        let yaml = serde_yaml::to_string(&node).unwrap();
        let back: DocumentNode = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(node, back);
    }
}
