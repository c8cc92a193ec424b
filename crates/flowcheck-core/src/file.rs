/// Top-level pipeline document.
///
/// [`Pipeline`] is the root type for a workflow exported by the editor.
///
/// # Null entries
///
/// `nodes` and `edges` hold `Option` elements so that a JSON `null` inside
/// either array survives deserialisation as `None`. The graph engine treats
/// such entries as absent; validation reports them.
///
/// # Unknown field preservation
///
/// The `extra` catch-all (`#[serde(flatten)]`) absorbs every JSON key that is
/// not explicitly declared on the struct, so documents written by newer
/// editors round-trip without data loss.
use serde::{Deserialize, Serialize};

use crate::structures::{Extra, WorkflowEdge, WorkflowNode};

fn default_version() -> String {
    "1.0.0".to_owned()
}

/// Descriptive metadata for a pipeline.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PipelineMetadata {
    /// Pipeline name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Pipeline description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// ISO 8601 creation timestamp, kept as an opaque string.
    #[serde(rename = "createdAt", skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    /// ISO 8601 last-update timestamp, kept as an opaque string.
    #[serde(rename = "updatedAt", skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,

    /// Unknown JSON fields, preserved for round-trip fidelity.
    #[serde(flatten)]
    pub extra: Extra,
}

/// A workflow pipeline: metadata plus a flat node and edge list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pipeline {
    /// Document schema version; `"1.0.0"` when omitted.
    #[serde(default = "default_version")]
    pub version: String,

    /// Optional descriptive metadata.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<PipelineMetadata>,

    /// Node entries in document order. `None` marks a JSON `null`.
    #[serde(default)]
    pub nodes: Vec<Option<WorkflowNode>>,

    /// Edge entries in document order. `None` marks a JSON `null`.
    #[serde(default)]
    pub edges: Vec<Option<WorkflowEdge>>,

    /// Unknown JSON fields, preserved for round-trip fidelity.
    #[serde(flatten)]
    pub extra: Extra,
}

impl Pipeline {
    /// Builds a pipeline from fully-present node and edge records.
    pub fn new(nodes: Vec<WorkflowNode>, edges: Vec<WorkflowEdge>) -> Self {
        Self {
            version: default_version(),
            metadata: None,
            nodes: nodes.into_iter().map(Some).collect(),
            edges: edges.into_iter().map(Some).collect(),
            extra: Extra::new(),
        }
    }

    /// Iterates over the non-null node entries.
    pub fn present_nodes(&self) -> impl Iterator<Item = &WorkflowNode> {
        self.nodes.iter().flatten()
    }

    /// Iterates over the non-null edge entries.
    pub fn present_edges(&self) -> impl Iterator<Item = &WorkflowEdge> {
        self.edges.iter().flatten()
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(Vec::new(), Vec::new())
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn empty_object_uses_defaults() {
        let p: Pipeline = serde_json::from_str("{}").expect("parse");
        assert_eq!(p.version, "1.0.0");
        assert!(p.nodes.is_empty());
        assert!(p.edges.is_empty());
        assert!(p.metadata.is_none());
    }

    #[test]
    fn null_entries_are_kept_as_none() {
        let p: Pipeline = serde_json::from_str(
            r#"{"nodes":[{"id":"a"},null],"edges":[null,{"id":"e","source":"a","target":"a"}]}"#,
        )
        .expect("parse");
        assert_eq!(p.nodes.len(), 2);
        assert!(p.nodes[1].is_none());
        assert_eq!(p.present_nodes().count(), 1);
        assert_eq!(p.present_edges().count(), 1);
    }

    #[test]
    fn metadata_camel_case_and_extra_top_level() {
        let p: Pipeline = serde_json::from_str(
            r#"{"version":"2.0.0","metadata":{"name":"demo","createdAt":"2024-01-01T00:00:00Z"},"viewport":{"zoom":1}}"#,
        )
        .expect("parse");
        let meta = p.metadata.as_ref().expect("metadata");
        assert_eq!(meta.name.as_deref(), Some("demo"));
        assert_eq!(meta.created_at.as_deref(), Some("2024-01-01T00:00:00Z"));
        assert!(p.extra.contains_key("viewport"));

        let json = serde_json::to_string(&p).expect("serialize");
        assert!(json.contains("createdAt"), "{json}");
        assert!(json.contains("viewport"), "{json}");
    }
}
