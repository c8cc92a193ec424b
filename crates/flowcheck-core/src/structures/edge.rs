use serde::{Deserialize, Serialize};

use super::Extra;

/// A directed connection between two nodes in a workflow pipeline.
///
/// `id`, `source` and `target` are required by the editor but optional here;
/// see the module docs for why. `source` and `target` hold node ids.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct WorkflowEdge {
    /// Identifier, unique within the pipeline.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Id of the node the edge leaves.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,

    /// Id of the node the edge enters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,

    /// Output handle on the source node.
    #[serde(rename = "sourceHandle", skip_serializing_if = "Option::is_none")]
    pub source_handle: Option<String>,

    /// Input handle on the target node.
    #[serde(rename = "targetHandle", skip_serializing_if = "Option::is_none")]
    pub target_handle: Option<String>,

    /// Edge rendering type (`smoothstep`, `bezier`, ...).
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub edge_type: Option<String>,

    /// Whether the editor animates the edge.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animated: Option<bool>,

    /// Styling object, passed through untouched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<serde_json::Map<String, serde_json::Value>>,

    /// Additional edge data, passed through untouched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Map<String, serde_json::Value>>,

    /// Unknown JSON fields, preserved for round-trip fidelity.
    #[serde(flatten)]
    pub extra: Extra,
}

impl WorkflowEdge {
    /// Creates an edge with the three graph fields set.
    pub fn new(id: impl Into<String>, source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            source: Some(source.into()),
            target: Some(target.into()),
            ..Self::default()
        }
    }
}
