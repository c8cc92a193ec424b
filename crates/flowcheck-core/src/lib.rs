#![deny(clippy::print_stdout, clippy::print_stderr)]

pub mod file;
pub mod file_parse;
pub mod graph;
pub mod structures;
pub mod summary;
pub mod validation;

#[cfg(test)]
mod test_helpers;

pub use file::{Pipeline, PipelineMetadata};
pub use file_parse::{PipelineParseError, parse_pipeline};
pub use graph::{
    AdjacencyMap, GraphEdge, GraphNode, build_adjacency, detect_cycles, has_cycle, is_dag,
};
pub use structures::{NodeConfig, NodeData, NodeStatus, Position, WorkflowEdge, WorkflowNode};
pub use summary::{PipelineSummary, summarize};
pub use validation::{
    Diagnostic, Level, Location, RuleId, Severity, ValidationConfig, ValidationResult,
    ValidationRule, build_registry, validate,
};

/// Returns the current version of the flowcheck-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
