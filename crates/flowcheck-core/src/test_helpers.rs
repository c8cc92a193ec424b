//! Shared test helper functions for constructing test fixtures.
//!
//! This module is compiled only in test builds. It provides minimal record
//! types implementing the graph traits, so engine tests do not depend on the
//! full pipeline model, plus constructors for [`Pipeline`] fixtures used by
//! the validation and summary tests.
//!
//! Integration tests in `crates/flowcheck-core/tests/` define their own local
//! helpers because they link against the non-test library build where this
//! module is not available.

use crate::file::Pipeline;
use crate::graph::{GraphEdge, GraphNode};
use crate::structures::{WorkflowEdge, WorkflowNode};

/// Bare node record carrying only an id.
#[derive(Debug, Clone, Default)]
pub struct RawNode {
    pub id: Option<String>,
}

impl GraphNode for RawNode {
    fn node_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// Bare edge record carrying only the fields the engine reads.
#[derive(Debug, Clone, Default)]
pub struct RawEdge {
    pub id: Option<String>,
    pub source: Option<String>,
    pub target: Option<String>,
}

impl GraphEdge for RawEdge {
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

/// Creates a [`RawNode`] with the given id.
pub fn node(id: &str) -> RawNode {
    RawNode {
        id: Some(id.to_owned()),
    }
}

/// Creates a [`RawEdge`] with all three fields set.
pub fn edge(id: &str, source: &str, target: &str) -> RawEdge {
    RawEdge {
        id: Some(id.to_owned()),
        source: Some(source.to_owned()),
        target: Some(target.to_owned()),
    }
}

/// Creates `count` nodes named `"n0"`, `"n1"`, ...
pub fn numbered_nodes(count: usize) -> Vec<RawNode> {
    (0..count).map(|i| node(&format!("n{i}"))).collect()
}

/// Creates an edge `source -> target` between numbered nodes, with an id
/// derived from its endpoints.
pub fn numbered_edge(source: usize, target: usize) -> RawEdge {
    edge(
        &format!("e{source}-{target}"),
        &format!("n{source}"),
        &format!("n{target}"),
    )
}

/// Creates a schema-complete node with the given id.
pub fn workflow_node(id: &str) -> WorkflowNode {
    WorkflowNode::new(id).placed(0.0, 0.0, id.to_uppercase())
}

/// Creates a pipeline of schema-complete nodes connected by the given
/// `(edge id, source, target)` triples.
pub fn pipeline(node_ids: &[&str], edges: &[(&str, &str, &str)]) -> Pipeline {
    Pipeline::new(
        node_ids.iter().map(|&id| workflow_node(id)).collect(),
        edges
            .iter()
            .map(|&(id, s, t)| WorkflowEdge::new(id, s, t))
            .collect(),
    )
}
