/// Built-in validation rules.
///
/// Each rule is a stateless unit struct implementing
/// [`crate::validation::ValidationRule`]. Rules collect every violation
/// without early exit, and rules that look at a field of an entry skip
/// entries that are `null` (those are reported once, by `NOD-01` or
/// `EDG-01`).
use std::collections::{HashMap, HashSet};

use crate::file::Pipeline;
use crate::graph::detect_cycles;
use crate::graph::records::non_empty;
use crate::structures::NodeStatus;

use super::{Diagnostic, Level, Location, RuleId, ValidationRule};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// The set of non-empty node ids declared by present node entries.
fn declared_node_ids(pipeline: &Pipeline) -> HashSet<&str> {
    pipeline
        .present_nodes()
        .filter_map(|n| non_empty(n.id.as_deref()))
        .collect()
}

// ---------------------------------------------------------------------------
// NOD-01: node entry present with id
// ---------------------------------------------------------------------------

/// NOD-01 — Every node entry is present (not `null`) and has a non-empty
/// `id`.
pub struct NodeIdPresent;

impl ValidationRule for NodeIdPresent {
    fn id(&self) -> RuleId {
        RuleId::Nod01
    }

    fn level(&self) -> Level {
        Level::Schema
    }

    fn check(&self, pipeline: &Pipeline, diags: &mut Vec<Diagnostic>) {
        for (index, entry) in pipeline.nodes.iter().enumerate() {
            let (location, message) = match entry {
                None => (Location::node(index, None), "node entry is null"),
                Some(node) if non_empty(node.id.as_deref()).is_none() => (
                    Location::node(index, None).with_field("id"),
                    "node is missing an id",
                ),
                Some(_) => continue,
            };
            diags.push(Diagnostic::new(
                RuleId::Nod01,
                self.severity(),
                location,
                message,
            ));
        }
    }
}

// ---------------------------------------------------------------------------
// NOD-02: position complete
// ---------------------------------------------------------------------------

/// NOD-02 — Every node has a `position` carrying both `x` and `y`.
pub struct NodePositionComplete;

impl ValidationRule for NodePositionComplete {
    fn id(&self) -> RuleId {
        RuleId::Nod02
    }

    fn level(&self) -> Level {
        Level::Schema
    }

    fn check(&self, pipeline: &Pipeline, diags: &mut Vec<Diagnostic>) {
        for (index, entry) in pipeline.nodes.iter().enumerate() {
            let Some(node) = entry else { continue };
            let message = match &node.position {
                None => "node is missing a position",
                Some(p) if p.x.is_none() && p.y.is_none() => "position is missing x and y",
                Some(p) if p.x.is_none() => "position is missing x",
                Some(p) if p.y.is_none() => "position is missing y",
                Some(_) => continue,
            };
            diags.push(Diagnostic::new(
                RuleId::Nod02,
                self.severity(),
                Location::node(index, node.id.as_deref()).with_field("position"),
                message,
            ));
        }
    }
}

// ---------------------------------------------------------------------------
// NOD-03: label present
// ---------------------------------------------------------------------------

/// NOD-03 — Every node has a `data` payload with a `label`.
///
/// An empty label is accepted; the editor allows clearing it.
pub struct NodeLabelPresent;

impl ValidationRule for NodeLabelPresent {
    fn id(&self) -> RuleId {
        RuleId::Nod03
    }

    fn level(&self) -> Level {
        Level::Schema
    }

    fn check(&self, pipeline: &Pipeline, diags: &mut Vec<Diagnostic>) {
        for (index, entry) in pipeline.nodes.iter().enumerate() {
            let Some(node) = entry else { continue };
            let (field, message) = match &node.data {
                None => ("data", "node is missing its data payload"),
                Some(data) if data.label.is_none() => {
                    ("data.label", "node data is missing a label")
                }
                Some(_) => continue,
            };
            diags.push(Diagnostic::new(
                RuleId::Nod03,
                self.severity(),
                Location::node(index, node.id.as_deref()).with_field(field),
                message,
            ));
        }
    }
}

// ---------------------------------------------------------------------------
// NOD-04: status known
// ---------------------------------------------------------------------------

/// NOD-04 — `data.status`, when present, is one of `idle`, `running`,
/// `success` or `error`.
pub struct NodeStatusKnown;

impl ValidationRule for NodeStatusKnown {
    fn id(&self) -> RuleId {
        RuleId::Nod04
    }

    fn level(&self) -> Level {
        Level::Schema
    }

    fn check(&self, pipeline: &Pipeline, diags: &mut Vec<Diagnostic>) {
        for (index, entry) in pipeline.nodes.iter().enumerate() {
            let Some(node) = entry else { continue };
            let Some(status) = node.data.as_ref().and_then(|d| d.status.as_deref()) else {
                continue;
            };
            if NodeStatus::parse(status).is_some() {
                continue;
            }
            let known = NodeStatus::ALL.map(NodeStatus::as_str);
            diags.push(Diagnostic::new(
                RuleId::Nod04,
                self.severity(),
                Location::node(index, node.id.as_deref()).with_field("data.status"),
                format!(
                    "unknown status \"{status}\" (expected one of: {})",
                    known.join(", ")
                ),
            ));
        }
    }
}

// ---------------------------------------------------------------------------
// NOD-05: duplicate node ids
// ---------------------------------------------------------------------------

/// NOD-05 — Node ids are unique. Each repeat beyond the first occurrence
/// produces one warning; the graph engine keeps a single node per id.
pub struct DuplicateNodeId;

impl ValidationRule for DuplicateNodeId {
    fn id(&self) -> RuleId {
        RuleId::Nod05
    }

    fn level(&self) -> Level {
        Level::Hygiene
    }

    fn check(&self, pipeline: &Pipeline, diags: &mut Vec<Diagnostic>) {
        let mut first_seen: HashMap<&str, usize> = HashMap::new();
        for (index, entry) in pipeline.nodes.iter().enumerate() {
            let Some(id) = entry.as_ref().and_then(|n| non_empty(n.id.as_deref())) else {
                continue;
            };
            if let Some(&first) = first_seen.get(id) {
                diags.push(Diagnostic::new(
                    RuleId::Nod05,
                    self.severity(),
                    Location::node(index, Some(id)).with_field("id"),
                    format!("duplicate node id \"{id}\" (first declared at nodes[{first}])"),
                ));
            } else {
                first_seen.insert(id, index);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// EDG-01: edge entry present with id
// ---------------------------------------------------------------------------

/// EDG-01 — Every edge entry is present (not `null`) and has a non-empty
/// `id`.
pub struct EdgeIdPresent;

impl ValidationRule for EdgeIdPresent {
    fn id(&self) -> RuleId {
        RuleId::Edg01
    }

    fn level(&self) -> Level {
        Level::Schema
    }

    fn check(&self, pipeline: &Pipeline, diags: &mut Vec<Diagnostic>) {
        for (index, entry) in pipeline.edges.iter().enumerate() {
            let (location, message) = match entry {
                None => (Location::edge(index, None), "edge entry is null"),
                Some(edge) if non_empty(edge.id.as_deref()).is_none() => (
                    Location::edge(index, None).with_field("id"),
                    "edge is missing an id",
                ),
                Some(_) => continue,
            };
            diags.push(Diagnostic::new(
                RuleId::Edg01,
                self.severity(),
                location,
                message,
            ));
        }
    }
}

// ---------------------------------------------------------------------------
// EDG-02: endpoints present
// ---------------------------------------------------------------------------

/// EDG-02 — Every edge has a non-empty `source` and `target`. Each missing
/// endpoint produces its own diagnostic.
pub struct EdgeEndpointsPresent;

impl ValidationRule for EdgeEndpointsPresent {
    fn id(&self) -> RuleId {
        RuleId::Edg02
    }

    fn level(&self) -> Level {
        Level::Schema
    }

    fn check(&self, pipeline: &Pipeline, diags: &mut Vec<Diagnostic>) {
        for (index, entry) in pipeline.edges.iter().enumerate() {
            let Some(edge) = entry else { continue };
            let endpoints = [
                ("source", edge.source.as_deref()),
                ("target", edge.target.as_deref()),
            ];
            for (field, value) in endpoints {
                if non_empty(value).is_some() {
                    continue;
                }
                diags.push(Diagnostic::new(
                    RuleId::Edg02,
                    self.severity(),
                    Location::edge(index, edge.id.as_deref()).with_field(field),
                    format!("edge is missing its {field}"),
                ));
            }
        }
    }
}

// ---------------------------------------------------------------------------
// EDG-03: references resolve
// ---------------------------------------------------------------------------

/// EDG-03 — Edge `source` and `target` reference an existing node id.
///
/// Endpoints that are absent are left to `EDG-02`. Each dangling reference
/// produces its own diagnostic naming the missing id.
pub struct EdgeReferencesResolve;

impl ValidationRule for EdgeReferencesResolve {
    fn id(&self) -> RuleId {
        RuleId::Edg03
    }

    fn level(&self) -> Level {
        Level::Schema
    }

    fn check(&self, pipeline: &Pipeline, diags: &mut Vec<Diagnostic>) {
        let node_ids = declared_node_ids(pipeline);
        for (index, entry) in pipeline.edges.iter().enumerate() {
            let Some(edge) = entry else { continue };
            let endpoints = [
                ("source", edge.source.as_deref()),
                ("target", edge.target.as_deref()),
            ];
            for (field, value) in endpoints {
                let Some(reference) = non_empty(value) else {
                    continue;
                };
                if node_ids.contains(reference) {
                    continue;
                }
                diags.push(Diagnostic::new(
                    RuleId::Edg03,
                    self.severity(),
                    Location::edge(index, edge.id.as_deref()).with_field(field),
                    format!("{field} references non-existent node \"{reference}\""),
                ));
            }
        }
    }
}

// ---------------------------------------------------------------------------
// EDG-04: duplicate edge ids
// ---------------------------------------------------------------------------

/// EDG-04 — Edge ids are unique. Each repeat beyond the first occurrence
/// produces one warning.
pub struct DuplicateEdgeId;

impl ValidationRule for DuplicateEdgeId {
    fn id(&self) -> RuleId {
        RuleId::Edg04
    }

    fn level(&self) -> Level {
        Level::Hygiene
    }

    fn check(&self, pipeline: &Pipeline, diags: &mut Vec<Diagnostic>) {
        let mut first_seen: HashMap<&str, usize> = HashMap::new();
        for (index, entry) in pipeline.edges.iter().enumerate() {
            let Some(id) = entry.as_ref().and_then(|e| non_empty(e.id.as_deref())) else {
                continue;
            };
            if let Some(&first) = first_seen.get(id) {
                diags.push(Diagnostic::new(
                    RuleId::Edg04,
                    self.severity(),
                    Location::edge(index, Some(id)).with_field("id"),
                    format!("duplicate edge id \"{id}\" (first declared at edges[{first}])"),
                ));
            } else {
                first_seen.insert(id, index);
            }
        }
    }
}

// ---------------------------------------------------------------------------
// GRF-01: acyclic
// ---------------------------------------------------------------------------

/// GRF-01 — The graph formed by the valid nodes and edges contains no
/// directed cycle.
///
/// Uses the same filtering as [`crate::graph::build_adjacency`], so entries
/// rejected by the schema rules do not contribute to the verdict.
pub struct GraphAcyclic;

impl ValidationRule for GraphAcyclic {
    fn id(&self) -> RuleId {
        RuleId::Grf01
    }

    fn level(&self) -> Level {
        Level::Graph
    }

    fn check(&self, pipeline: &Pipeline, diags: &mut Vec<Diagnostic>) {
        if detect_cycles(&pipeline.nodes, &pipeline.edges) {
            diags.push(Diagnostic::new(
                RuleId::Grf01,
                self.severity(),
                Location::Pipeline,
                "pipeline graph contains a cycle",
            ));
        }
    }
}
