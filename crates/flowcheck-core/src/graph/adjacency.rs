/// Adjacency construction from raw node and edge records.
///
/// [`build_adjacency`] is the only way to obtain an [`AdjacencyMap`] from
/// records, which guarantees two properties callers may rely on:
///
/// - the key set is exactly the set of valid node ids, isolated nodes
///   included;
/// - every neighbor id is itself a key (closure).
///
/// Key order follows first appearance in the node list and neighbor order
/// follows edge input order, so traversal is deterministic.
use indexmap::IndexMap;
use serde::Serialize;

use super::records::{GraphEdge, GraphNode, non_empty};

// ---------------------------------------------------------------------------
// AdjacencyMap
// ---------------------------------------------------------------------------

/// Directed adjacency list keyed by node id.
///
/// Serialises as a JSON object mapping each node id to its ordered list of
/// out-neighbors. Parallel edges appear as repeated neighbor entries.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct AdjacencyMap {
    lists: IndexMap<String, Vec<String>>,
}

impl AdjacencyMap {
    /// Number of nodes (keys).
    pub fn node_count(&self) -> usize {
        self.lists.len()
    }

    /// Number of retained edges, counting parallel edges individually.
    pub fn edge_count(&self) -> usize {
        self.lists.values().map(Vec::len).sum()
    }

    /// Returns `true` when the map has no nodes.
    pub fn is_empty(&self) -> bool {
        self.lists.is_empty()
    }

    /// Returns `true` if `id` is a node of the graph.
    pub fn contains(&self, id: &str) -> bool {
        self.lists.contains_key(id)
    }

    /// Out-neighbors of `id` in edge input order, or `None` if `id` is not a
    /// node of the graph.
    pub fn neighbors(&self, id: &str) -> Option<&[String]> {
        self.lists.get(id).map(Vec::as_slice)
    }

    /// Node ids in first-appearance order.
    pub fn node_ids(&self) -> impl Iterator<Item = &str> {
        self.lists.keys().map(String::as_str)
    }

    /// `(node id, out-neighbors)` pairs in first-appearance order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.lists.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Position of `id` in key order. Used by the traversal to index its
    /// state vectors.
    pub(crate) fn index_of(&self, id: &str) -> Option<usize> {
        self.lists.get_index_of(id)
    }

    /// Node id at key position `index`; empty when out of range.
    pub(crate) fn key_at(&self, index: usize) -> &str {
        self.lists.get_index(index).map_or("", |(k, _)| k.as_str())
    }

    /// Out-neighbors of the node at key position `index`.
    pub(crate) fn neighbors_at(&self, index: usize) -> &[String] {
        self.lists
            .get_index(index)
            .map_or(&[], |(_, v)| v.as_slice())
    }
}

// ---------------------------------------------------------------------------
// Construction
// ---------------------------------------------------------------------------

/// Builds the adjacency map for the graph described by `nodes` and `edges`.
///
/// A node participates when its record is present and carries a non-empty
/// id. Repeated ids collapse to a single key. An edge is retained when its
/// record is present, carries non-empty `id`, `source` and `target`, and both
/// endpoints are participating nodes; its target is then appended to the
/// source's neighbor list. Everything else is dropped without error.
///
/// Never fails: the worst case is an empty map.
pub fn build_adjacency<N, E>(nodes: &[N], edges: &[E]) -> AdjacencyMap
where
    N: GraphNode,
    E: GraphEdge,
{
    let mut lists: IndexMap<String, Vec<String>> = IndexMap::with_capacity(nodes.len());
    for id in nodes.iter().filter_map(|n| non_empty(n.node_id())) {
        if !lists.contains_key(id) {
            lists.insert(id.to_owned(), Vec::new());
        }
    }

    let mut kept = 0usize;
    for edge in edges {
        if non_empty(edge.edge_id()).is_none() {
            continue;
        }
        let (Some(source), Some(target)) =
            (non_empty(edge.source_id()), non_empty(edge.target_id()))
        else {
            continue;
        };
        if !lists.contains_key(target) {
            continue;
        }
        if let Some(list) = lists.get_mut(source) {
            list.push(target.to_owned());
            kept += 1;
        }
    }

    tracing::debug!(
        nodes_in = nodes.len(),
        nodes_kept = lists.len(),
        edges_in = edges.len(),
        edges_kept = kept,
        "built adjacency map"
    );

    AdjacencyMap { lists }
}
