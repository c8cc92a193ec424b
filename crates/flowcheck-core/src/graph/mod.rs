/// Directed-graph analysis over flat node and edge lists.
///
/// The engine answers one question: does the graph described by a set of
/// node records and edge records contain a cycle? It is built from two
/// stages:
///
/// 1. **Graph building** — [`build_adjacency`] turns raw records into an
///    [`AdjacencyMap`], silently excluding records without an id and edges
///    whose endpoints are not surviving nodes.
/// 2. **Cycle detection** — [`has_cycle`] walks an [`AdjacencyMap`]
///    depth-first from every node; [`detect_cycles`] and [`is_dag`] run both
///    stages over raw records.
///
/// # Malformed input
///
/// No function in this module returns an error or panics for any input.
/// Missing or empty ids, missing endpoints and dangling references all
/// degrade to "not part of the graph". Stricter admission checks live in
/// [`crate::validation`]; the two layers disagree on dangling edges on
/// purpose.
///
/// # Record shapes
///
/// The engine is generic over the [`GraphNode`] and [`GraphEdge`] traits, so
/// it runs over [`crate::WorkflowNode`] / [`crate::WorkflowEdge`] as well as
/// any caller-defined record type.
pub mod adjacency;
pub mod cycles;
pub mod records;

pub use adjacency::{AdjacencyMap, build_adjacency};
pub use cycles::{detect_cycles, has_cycle, is_dag};
pub use records::{GraphEdge, GraphNode};
