/// Structural summary of a pipeline: raw entry counts, counts after graph
/// filtering, and the DAG verdict.
use serde::{Deserialize, Serialize};

use crate::file::Pipeline;
use crate::graph::{build_adjacency, has_cycle};

/// Counts and acyclicity verdict for one pipeline.
///
/// `num_nodes` / `num_edges` count every entry in the document, `null`
/// entries included. `valid_nodes` / `valid_edges` count what survives the
/// graph engine's filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineSummary {
    /// Entries in the `nodes` array.
    pub num_nodes: usize,
    /// Entries in the `edges` array.
    pub num_edges: usize,
    /// Distinct node ids that participate in the graph.
    pub valid_nodes: usize,
    /// Edges retained in the adjacency map.
    pub valid_edges: usize,
    /// `true` when the retained graph has no directed cycle.
    pub is_dag: bool,
}

/// Builds the [`PipelineSummary`] for `pipeline`.
///
/// The adjacency map is built once and shared between the counts and the
/// cycle check.
pub fn summarize(pipeline: &Pipeline) -> PipelineSummary {
    let adjacency = build_adjacency(&pipeline.nodes, &pipeline.edges);
    PipelineSummary {
        num_nodes: pipeline.nodes.len(),
        num_edges: pipeline.edges.len(),
        valid_nodes: adjacency.node_count(),
        valid_edges: adjacency.edge_count(),
        is_dag: !has_cycle(&adjacency),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;
    use crate::file_parse::parse_pipeline;
    use crate::graph::is_dag;
    use crate::test_helpers::pipeline;

    #[test]
    fn empty_pipeline_summary() {
        let s = summarize(&Pipeline::default());
        assert_eq!(
            s,
            PipelineSummary {
                num_nodes: 0,
                num_edges: 0,
                valid_nodes: 0,
                valid_edges: 0,
                is_dag: true,
            }
        );
    }

    #[test]
    fn counts_raw_and_valid_entries() {
        let p = parse_pipeline(
            r#"{
                "nodes": [{"id": "a"}, {"id": "b"}, null, {"type": "text"}],
                "edges": [
                    {"id": "e1", "source": "a", "target": "b"},
                    {"id": "e2", "source": "b", "target": "ghost"},
                    null
                ]
            }"#,
        )
        .expect("parse");
        let s = summarize(&p);
        assert_eq!(s.num_nodes, 4);
        assert_eq!(s.num_edges, 3);
        assert_eq!(s.valid_nodes, 2);
        assert_eq!(s.valid_edges, 1);
        assert!(s.is_dag);
    }

    #[test]
    fn verdict_matches_is_dag() {
        let cyclic = pipeline(
            &["a", "b", "c"],
            &[("e1", "a", "b"), ("e2", "b", "c"), ("e3", "c", "a")],
        );
        let s = summarize(&cyclic);
        assert!(!s.is_dag);
        assert_eq!(s.is_dag, is_dag(&cyclic.nodes, &cyclic.edges));
    }

    #[test]
    fn serializes_snake_case_fields() {
        let s = summarize(&pipeline(&["a"], &[]));
        let json = serde_json::to_value(s).expect("serialize");
        assert_eq!(json["num_nodes"], 1);
        assert_eq!(json["is_dag"], true);
    }
}
