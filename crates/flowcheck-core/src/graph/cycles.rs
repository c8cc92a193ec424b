/// Cycle detection over an [`AdjacencyMap`].
///
/// # Algorithm
///
/// Depth-first search with a three-state colouring: a node is *unvisited*,
/// *on path* (entered but not yet left) or *done*. Meeting an on-path node
/// while scanning neighbors is a back edge, which proves a cycle; a
/// self-loop is the one-node case of the same check.
///
/// Every key is tried as a root in key order, skipping roots already
/// reached, so cycles in components unreachable from the first node are
/// still found.
///
/// The walk keeps an explicit stack of [`Frame`]s instead of recursing,
/// so graph depth is bounded by heap, not by the thread's stack. A
/// 100 000-node chain is part of the test suite.
use super::adjacency::{AdjacencyMap, build_adjacency};
use super::records::{GraphEdge, GraphNode, non_empty};

/// One unit of pending work on the traversal stack.
#[derive(Debug, Clone, Copy)]
enum Frame {
    /// Visit the node at this key position.
    Enter(usize),
    /// All descendants of this node are finished; take it off the path.
    Leave(usize),
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Returns `true` if `adjacency` contains at least one directed cycle.
///
/// Stops at the first back edge found. Runs in O(V + E).
pub fn has_cycle(adjacency: &AdjacencyMap) -> bool {
    let n = adjacency.node_count();
    let mut visited = vec![false; n];
    let mut on_path = vec![false; n];
    let mut stack: Vec<Frame> = Vec::new();

    for root in 0..n {
        if visited[root] {
            continue;
        }
        stack.push(Frame::Enter(root));

        while let Some(frame) = stack.pop() {
            let node = match frame {
                Frame::Leave(node) => {
                    on_path[node] = false;
                    continue;
                }
                Frame::Enter(node) => node,
            };
            if visited[node] {
                continue;
            }
            visited[node] = true;
            on_path[node] = true;
            stack.push(Frame::Leave(node));

            // Pushed in reverse so that neighbors are entered in edge order.
            for neighbor in adjacency.neighbors_at(node).iter().rev() {
                let Some(next) = adjacency.index_of(neighbor) else {
                    continue;
                };
                if on_path[next] {
                    tracing::trace!(
                        from = adjacency.key_at(node),
                        to = neighbor.as_str(),
                        "back edge"
                    );
                    return true;
                }
                if !visited[next] {
                    stack.push(Frame::Enter(next));
                }
            }
        }
    }

    false
}

/// Returns `true` if the graph described by `nodes` and `edges` contains a
/// cycle.
///
/// Records are filtered exactly as in [`build_adjacency`]. When no node
/// survives filtering the answer is `false` and no adjacency is built.
pub fn detect_cycles<N, E>(nodes: &[N], edges: &[E]) -> bool
where
    N: GraphNode,
    E: GraphEdge,
{
    if !nodes.iter().any(|n| non_empty(n.node_id()).is_some()) {
        return false;
    }
    has_cycle(&build_adjacency(nodes, edges))
}

/// Returns `true` if the graph described by `nodes` and `edges` is a
/// directed acyclic graph. Always the negation of [`detect_cycles`]; empty
/// input is a DAG.
pub fn is_dag<N, E>(nodes: &[N], edges: &[E]) -> bool
where
    N: GraphNode,
    E: GraphEdge,
{
    !detect_cycles(nodes, edges)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{RawEdge, RawNode, edge, node, numbered_edge, numbered_nodes};

    fn chain_edges(len: usize) -> Vec<RawEdge> {
        (1..len).map(|i| numbered_edge(i - 1, i)).collect()
    }

    #[test]
    fn empty_graph_is_acyclic() {
        assert!(!detect_cycles::<RawNode, RawEdge>(&[], &[]));
        assert!(is_dag::<RawNode, RawEdge>(&[], &[]));
        assert!(!has_cycle(&AdjacencyMap::default()));
    }

    #[test]
    fn single_node_is_acyclic() {
        assert!(is_dag::<_, RawEdge>(&[node("1")], &[]));
    }

    #[test]
    fn linear_chain_is_acyclic() {
        let nodes = numbered_nodes(3);
        assert!(is_dag(&nodes, &chain_edges(3)));
    }

    #[test]
    fn two_node_cycle_is_detected() {
        let nodes = [node("1"), node("2")];
        let edges = [edge("e1", "1", "2"), edge("e2", "2", "1")];
        assert!(detect_cycles(&nodes, &edges));
        assert!(!is_dag(&nodes, &edges));
    }

    #[test]
    fn self_loop_is_a_cycle() {
        let nodes = [node("1")];
        let edges = [edge("e1", "1", "1")];
        assert!(detect_cycles(&nodes, &edges));
    }

    #[test]
    fn disconnected_isolated_nodes_are_acyclic() {
        let nodes = [node("1"), node("2"), node("3")];
        assert!(is_dag::<_, RawEdge>(&nodes, &[]));
    }

    #[test]
    fn diamond_is_acyclic() {
        let nodes = [node("1"), node("2"), node("3"), node("4")];
        let edges = [
            edge("e1", "1", "2"),
            edge("e2", "1", "3"),
            edge("e3", "2", "4"),
            edge("e4", "3", "4"),
        ];
        assert!(is_dag(&nodes, &edges));
    }

    #[test]
    fn cycle_in_subcomponent_is_detected() {
        let nodes = [node("1"), node("2"), node("3"), node("4")];
        let edges = [
            edge("e1", "1", "2"),
            edge("e2", "2", "3"),
            edge("e3", "3", "4"),
            edge("e4", "4", "2"),
        ];
        assert!(detect_cycles(&nodes, &edges));
    }

    #[test]
    fn cycle_unreachable_from_first_root_is_detected() {
        let nodes = [node("a"), node("b"), node("c")];
        let edges = [edge("e1", "b", "c"), edge("e2", "c", "b")];
        assert!(detect_cycles(&nodes, &edges));
    }

    #[test]
    fn dangling_edge_has_no_effect() {
        let nodes = [node("1"), node("2")];
        let with = [edge("e1", "1", "2"), edge("e2", "2", "99")];
        let without = [edge("e1", "1", "2")];
        assert_eq!(detect_cycles(&nodes, &with), detect_cycles(&nodes, &without));
        assert!(is_dag(&nodes, &with));
    }

    #[test]
    fn cycle_through_missing_node_is_not_a_cycle() {
        // The closing edge points at a node that was filtered out.
        let nodes = [node("1"), node("2"), RawNode::default()];
        let edges = [edge("e1", "1", "2"), edge("e2", "2", "")];
        assert!(is_dag(&nodes, &edges));
    }

    #[test]
    fn edges_without_nodes_are_acyclic() {
        let edges = [edge("e1", "1", "1")];
        assert!(!detect_cycles::<RawNode, _>(&[], &edges));
    }

    #[test]
    fn shared_descendant_is_not_a_back_edge() {
        // 1 -> 2 -> 3 and 1 -> 3: node 3 is reached twice but never while
        // on the current path.
        let nodes = [node("1"), node("2"), node("3")];
        let edges = [
            edge("e1", "1", "2"),
            edge("e2", "2", "3"),
            edge("e3", "1", "3"),
        ];
        assert!(is_dag(&nodes, &edges));
    }

    #[test]
    fn repeated_calls_agree() {
        let nodes = [node("1"), node("2")];
        let edges = [edge("e1", "1", "2"), edge("e2", "2", "1")];
        let first = detect_cycles(&nodes, &edges);
        let second = detect_cycles(&nodes, &edges);
        assert_eq!(first, second);
    }

    #[test]
    fn deep_chain_does_not_overflow() {
        let len = 100_000;
        let nodes = numbered_nodes(len);
        let mut edges = chain_edges(len);
        assert!(is_dag(&nodes, &edges));

        edges.push(numbered_edge(len - 1, 0));
        assert!(detect_cycles(&nodes, &edges));
    }
}
