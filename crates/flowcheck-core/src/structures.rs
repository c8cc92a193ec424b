/// Node and edge structs for the workflow pipeline data model.
///
/// These types mirror the JSON produced by the visual pipeline editor.
///
/// Key design decisions:
/// - Every field is `Option<T>` (or carries a serde default) so a malformed
///   document still deserialises. Required-field checks belong to
///   [`crate::validation`]; the graph engine in [`crate::graph`] silently
///   excludes records it cannot use.
/// - `#[serde(flatten)] pub extra` on every struct preserves unknown JSON
///   fields across round trips. Never add `#[serde(deny_unknown_fields)]`.
/// - Wire names follow the editor (`sourceHandle`, `createdAt`, ...), so the
///   camelCase renames are deliberate.
mod edge;
mod node;

pub use edge::WorkflowEdge;
pub use node::{NodeConfig, NodeData, NodeStatus, Position, WorkflowNode};

/// Catch-all map for JSON keys not declared on a struct.
pub type Extra = serde_json::Map<String, serde_json::Value>;

#[cfg(test)]
mod tests;
