use std::fmt;

use serde::{Deserialize, Serialize};

use super::Extra;

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// Canvas coordinates of a node.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    /// Horizontal coordinate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x: Option<f64>,

    /// Vertical coordinate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,

    /// Unknown JSON fields, preserved for round-trip fidelity.
    #[serde(flatten)]
    pub extra: Extra,
}

impl Position {
    /// Creates a position with both coordinates set.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x: Some(x),
            y: Some(y),
            extra: Extra::new(),
        }
    }

    /// Returns `true` when both coordinates are present.
    pub fn is_complete(&self) -> bool {
        self.x.is_some() && self.y.is_some()
    }
}

// ---------------------------------------------------------------------------
// NodeStatus
// ---------------------------------------------------------------------------

/// Execution status shown on a node in the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeStatus {
    /// Not yet run.
    Idle,
    /// Currently executing.
    Running,
    /// Finished without error.
    Success,
    /// Finished with an error.
    Error,
}

impl NodeStatus {
    /// All known statuses, in display order.
    pub const ALL: [NodeStatus; 4] = [Self::Idle, Self::Running, Self::Success, Self::Error];

    /// Parses the wire representation of a status.
    ///
    /// Returns `None` for any string that is not one of the four known values.
    /// Matching is exact (case-sensitive), as the editor emits lowercase.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|status| status.as_str() == s)
    }

    /// Returns the wire representation of the status.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

impl fmt::Display for NodeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// NodeConfig / NodeData
// ---------------------------------------------------------------------------

/// Visual configuration attached to a node.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NodeConfig {
    /// Visual variant (`default`, `primary`, `success`, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<String>,

    /// Node size (`small`, `medium`, `large`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,

    /// Handle layout, passed through untouched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub handles: Option<serde_json::Value>,

    /// Unknown JSON fields, preserved for round-trip fidelity.
    #[serde(flatten)]
    pub extra: Extra,
}

/// Payload carried by a node.
///
/// `label` is the only field the editor requires; it is still optional here
/// so that a document missing it can be parsed and then reported by
/// validation rule `NOD-03`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct NodeData {
    /// Display label.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Free-form description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Text content (text nodes only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,

    /// Raw status string. Use [`NodeData::parsed_status`] for the typed form.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,

    /// Visual configuration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<NodeConfig>,

    /// Arbitrary metadata object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Map<String, serde_json::Value>>,

    /// Unknown JSON fields, preserved for round-trip fidelity.
    #[serde(flatten)]
    pub extra: Extra,
}

impl NodeData {
    /// Creates a payload carrying only a label.
    pub fn labelled(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::default()
        }
    }

    /// Returns the typed status, if the raw string is present and known.
    pub fn parsed_status(&self) -> Option<NodeStatus> {
        self.status.as_deref().and_then(NodeStatus::parse)
    }
}

// ---------------------------------------------------------------------------
// WorkflowNode
// ---------------------------------------------------------------------------

fn default_node_type() -> String {
    "default".to_owned()
}

/// A single node in a workflow pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowNode {
    /// Identifier, unique within the pipeline. Absent or empty ids exclude
    /// the node from the graph.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Editor node type; `"default"` when omitted.
    #[serde(rename = "type", default = "default_node_type")]
    pub node_type: String,

    /// Canvas position.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<Position>,

    /// Node payload.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<NodeData>,

    /// Rendered width in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f64>,

    /// Rendered height in pixels.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<f64>,

    /// Unknown JSON fields, preserved for round-trip fidelity.
    #[serde(flatten)]
    pub extra: Extra,
}

impl WorkflowNode {
    /// Creates a node with the given id and no payload.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..Self::default()
        }
    }

    /// Returns a copy of `self` with `position` and a labelled `data` payload,
    /// i.e. a node that passes every schema rule.
    pub fn placed(mut self, x: f64, y: f64, label: impl Into<String>) -> Self {
        self.position = Some(Position::new(x, y));
        self.data = Some(NodeData::labelled(label));
        self
    }
}

impl Default for WorkflowNode {
    fn default() -> Self {
        Self {
            id: None,
            node_type: default_node_type(),
            position: None,
            data: None,
            width: None,
            height: None,
            extra: Extra::new(),
        }
    }
}
