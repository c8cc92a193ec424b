//! Malformed entries of the kinds editor exports contain: text nodes
//! without ids, `null` slots, half-drawn edges and edges to deleted nodes.
//! None of them participate in the graph.

use flowcheck_core::{NodeData, Pipeline, WorkflowEdge, WorkflowNode};
use rand::Rng;
use rand::rngs::StdRng;

/// Appends `round(fraction * node count)` malformed node entries and as many
/// malformed edge entries.
pub fn append_malformed(rng: &mut StdRng, fraction: f64, pipeline: &mut Pipeline) {
    let count = (fraction.clamp(0.0, 1.0) * pipeline.nodes.len() as f64).round() as usize;
    let known = pipeline.nodes.len();

    for k in 0..count {
        let node = match rng.gen_range(0..3) {
            0 => None,
            1 => Some(sticky_note(k)),
            _ => Some(WorkflowNode::new("")),
        };
        pipeline.nodes.push(node);

        let anchor = format!("step-{}", rng.gen_range(0..known.max(1)));
        let edge = match rng.gen_range(0..4) {
            0 => None,
            1 => Some(WorkflowEdge::new(format!("dangling-{k}"), anchor, format!("deleted-{k}"))),
            2 => Some(WorkflowEdge {
                target: None,
                ..WorkflowEdge::new(format!("half-{k}"), anchor, "")
            }),
            _ => Some(WorkflowEdge {
                id: None,
                ..WorkflowEdge::new("", anchor.clone(), anchor)
            }),
        };
        pipeline.edges.push(edge);
    }
}

fn sticky_note(k: usize) -> WorkflowNode {
    WorkflowNode {
        id: None,
        node_type: "text".to_owned(),
        data: Some(NodeData {
            text: Some(format!("note {k}")),
            ..NodeData::default()
        }),
        ..WorkflowNode::default()
    }
}
