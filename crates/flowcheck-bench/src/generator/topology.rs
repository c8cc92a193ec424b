//! Layered topology and back-edge injection.

use flowcheck_core::{NodeData, NodeStatus, Pipeline, Position, WorkflowEdge, WorkflowNode};
use rand::Rng;
use rand::rngs::StdRng;

use super::GeneratorConfig;

const LAYER_SPACING: f64 = 240.0;
const ROW_SPACING: f64 = 90.0;

/// Node id for the `index`-th generated step.
pub fn step_id(index: usize) -> String {
    format!("step-{index}")
}

/// Builds an acyclic pipeline: nodes are assigned to contiguous layers and
/// every edge runs from a lower layer to a higher one.
pub fn build_layered(config: &GeneratorConfig, rng: &mut StdRng) -> Pipeline {
    let layers = config.layers.clamp(1, config.num_nodes.max(1));
    let per_layer = config.num_nodes.div_ceil(layers);

    let mut nodes = Vec::with_capacity(config.num_nodes);
    for i in 0..config.num_nodes {
        let (layer, row) = (i / per_layer, i % per_layer);
        nodes.push(build_step(rng, i, layer, row));
    }

    let mut edges = Vec::new();
    for i in per_layer..config.num_nodes {
        let layer = i / per_layer;
        let prev_start = (layer - 1) * per_layer;

        let fan_in = rng.gen_range(1..=config.max_fan_in.max(1));
        for _ in 0..fan_in {
            let parent = prev_start + rng.gen_range(0..per_layer);
            edges.push(connect(edges.len(), parent, i));
        }
        if layer > 1 && rng.gen_bool(config.skip_density.clamp(0.0, 1.0)) {
            let parent = rng.gen_range(0..prev_start);
            edges.push(connect(edges.len(), parent, i));
        }
    }

    Pipeline::new(nodes, edges)
}

/// Adds `count` edges that each reverse an existing edge, so every one of
/// them closes a two-node cycle. No-op on a pipeline without edges.
pub fn inject_back_edges(rng: &mut StdRng, count: usize, pipeline: &mut Pipeline) {
    let forward: Vec<(String, String)> = pipeline
        .present_edges()
        .filter_map(|e| Some((e.source.clone()?, e.target.clone()?)))
        .collect();
    if forward.is_empty() {
        return;
    }
    for k in 0..count {
        let (source, target) = &forward[rng.gen_range(0..forward.len())];
        pipeline
            .edges
            .push(Some(WorkflowEdge::new(format!("back-{k}"), target, source)));
    }
}

fn build_step(rng: &mut StdRng, index: usize, layer: usize, row: usize) -> WorkflowNode {
    let mut data = NodeData::labelled(format!("Step {index}"));
    let status = NodeStatus::ALL[rng.gen_range(0..NodeStatus::ALL.len())];
    data.status = Some(status.as_str().to_owned());

    let mut node = WorkflowNode::new(step_id(index));
    node.node_type = if layer == 0 { "input" } else { "process" }.to_owned();
    node.position = Some(Position::new(
        layer as f64 * LAYER_SPACING,
        row as f64 * ROW_SPACING,
    ));
    node.data = Some(data);
    node
}

fn connect(counter: usize, source: usize, target: usize) -> WorkflowEdge {
    WorkflowEdge::new(format!("e-{counter}"), step_id(source), step_id(target))
}
