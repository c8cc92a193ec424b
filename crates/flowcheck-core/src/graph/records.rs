/// Record traits consumed by the graph engine.
///
/// Accessors return the raw field value; the engine itself treats `None` and
/// `Some("")` identically, so implementors do not need to normalise empty
/// strings.
use crate::structures::{WorkflowEdge, WorkflowNode};

/// A node-like record. Only its identity matters to the engine.
pub trait GraphNode {
    /// The node's id, if present.
    fn node_id(&self) -> Option<&str>;
}

/// An edge-like record: an id plus a `source -> target` pair of node ids.
pub trait GraphEdge {
    /// The edge's own id, if present.
    fn edge_id(&self) -> Option<&str>;

    /// Id of the node the edge leaves, if present.
    fn source_id(&self) -> Option<&str>;

    /// Id of the node the edge enters, if present.
    fn target_id(&self) -> Option<&str>;
}

/// Returns the id only when it is present and non-empty.
pub(crate) fn non_empty(id: Option<&str>) -> Option<&str> {
    id.filter(|s| !s.is_empty())
}

// ---------------------------------------------------------------------------
// Blanket implementations
// ---------------------------------------------------------------------------

impl<T: GraphNode + ?Sized> GraphNode for &T {
    fn node_id(&self) -> Option<&str> {
        (**self).node_id()
    }
}

/// `None` stands for an absent (JSON `null`) entry.
impl<T: GraphNode> GraphNode for Option<T> {
    fn node_id(&self) -> Option<&str> {
        self.as_ref().and_then(GraphNode::node_id)
    }
}

impl<T: GraphEdge + ?Sized> GraphEdge for &T {
    fn edge_id(&self) -> Option<&str> {
        (**self).edge_id()
    }

    fn source_id(&self) -> Option<&str> {
        (**self).source_id()
    }

    fn target_id(&self) -> Option<&str> {
        (**self).target_id()
    }
}

impl<T: GraphEdge> GraphEdge for Option<T> {
    fn edge_id(&self) -> Option<&str> {
        self.as_ref().and_then(GraphEdge::edge_id)
    }

    fn source_id(&self) -> Option<&str> {
        self.as_ref().and_then(GraphEdge::source_id)
    }

    fn target_id(&self) -> Option<&str> {
        self.as_ref().and_then(GraphEdge::target_id)
    }
}

// ---------------------------------------------------------------------------
// Pipeline records
// ---------------------------------------------------------------------------

impl GraphNode for WorkflowNode {
    fn node_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl GraphEdge for WorkflowEdge {
    fn edge_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn source_id(&self) -> Option<&str> {
        self.source.as_deref()
    }

    fn target_id(&self) -> Option<&str> {
        self.target.as_deref()
    }
}
