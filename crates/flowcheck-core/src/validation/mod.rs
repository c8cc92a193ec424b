/// Diagnostic types and rule dispatch for the pipeline validation engine.
///
/// This module defines [`Diagnostic`], [`Severity`], [`RuleId`], [`Location`]
/// and [`ValidationResult`], the types that represent every finding produced
/// by the validation engine, together with the [`ValidationRule`] trait,
/// [`ValidationConfig`], [`build_registry`] and the top-level [`validate`]
/// dispatch function.
///
/// # Relationship to the graph engine
///
/// Validation is strict where [`crate::graph`] is lenient. A dangling edge,
/// for example, is an `EDG-03` error here while the graph engine simply
/// leaves it out of the adjacency map. The graph rule (`GRF-01`) evaluates
/// acyclicity on the graph *as the engine sees it*, so a document can carry
/// schema errors and still be reported as a DAG.
pub mod rules;

use std::fmt;

use crate::file::Pipeline;


/// The severity level of a validation finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Severity {
    /// The pipeline cannot be executed as written.
    Error,
    /// The pipeline is usable but suspect.
    Warning,
}

impl Severity {
    /// Lowercase name used in machine-readable output.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => f.write_str("Error"),
            Self::Warning => f.write_str("Warning"),
        }
    }
}

/// Machine-readable identifier for a validation rule.
///
/// [`RuleId::code`] returns the stable hyphenated form used in serialised
/// output (e.g. `"EDG-03"`). Rules defined outside this crate use
/// [`RuleId::Extension`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum RuleId {
    /// NOD-01: Every node entry is present and has a non-empty `id`.
    Nod01,
    /// NOD-02: Every node has a `position` with both `x` and `y`.
    Nod02,
    /// NOD-03: Every node has a `data.label`.
    Nod03,
    /// NOD-04: `data.status`, if present, is one of the known statuses.
    Nod04,
    /// NOD-05: Node ids are unique within the pipeline.
    Nod05,

    /// EDG-01: Every edge entry is present and has a non-empty `id`.
    Edg01,
    /// EDG-02: Every edge has a non-empty `source` and `target`.
    Edg02,
    /// EDG-03: Edge `source` and `target` reference existing node ids.
    Edg03,
    /// EDG-04: Edge ids are unique within the pipeline.
    Edg04,

    /// GRF-01: The graph formed by valid nodes and edges is acyclic.
    Grf01,

    /// A rule defined outside this crate.
    Extension(String),
}

impl RuleId {
    /// Returns the canonical hyphenated rule code string.
    ///
    /// For [`RuleId::Extension`] the inner string is returned as-is.
    pub fn code(&self) -> &str {
        match self {
            Self::Nod01 => "NOD-01",
            Self::Nod02 => "NOD-02",
            Self::Nod03 => "NOD-03",
            Self::Nod04 => "NOD-04",
            Self::Nod05 => "NOD-05",
            Self::Edg01 => "EDG-01",
            Self::Edg02 => "EDG-02",
            Self::Edg03 => "EDG-03",
            Self::Edg04 => "EDG-04",
            Self::Grf01 => "GRF-01",
            Self::Extension(s) => s.as_str(),
        }
    }
}

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Where in the pipeline a diagnostic finding was detected.
///
/// Nodes and edges are addressed by their zero-based position in the
/// document's `nodes` / `edges` array, since the id itself may be the thing
/// that is missing. `node_id` / `edge_id` carry the id when there is one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Location {
    /// A finding about the pipeline as a whole.
    Pipeline,
    /// A node entry, or one of its fields.
    Node {
        /// Position in the `nodes` array.
        index: usize,
        /// The node's id, when present and non-empty.
        node_id: Option<String>,
        /// The specific field, if applicable (dotted path, e.g. `"data.label"`).
        field: Option<&'static str>,
    },
    /// An edge entry, or one of its fields.
    Edge {
        /// Position in the `edges` array.
        index: usize,
        /// The edge's id, when present and non-empty.
        edge_id: Option<String>,
        /// The specific field, if applicable.
        field: Option<&'static str>,
    },
}

impl Location {
    /// Location of the node entry at `index`, with no specific field.
    pub fn node(index: usize, node_id: Option<&str>) -> Self {
        Self::Node {
            index,
            node_id: node_id.filter(|s| !s.is_empty()).map(str::to_owned),
            field: None,
        }
    }

    /// Location of the edge entry at `index`, with no specific field.
    pub fn edge(index: usize, edge_id: Option<&str>) -> Self {
        Self::Edge {
            index,
            edge_id: edge_id.filter(|s| !s.is_empty()).map(str::to_owned),
            field: None,
        }
    }

    /// Returns `self` narrowed to `field`. No-op for [`Location::Pipeline`].
    #[must_use]
    pub fn with_field(self, name: &'static str) -> Self {
        match self {
            Self::Pipeline => Self::Pipeline,
            Self::Node { index, node_id, .. } => Self::Node {
                index,
                node_id,
                field: Some(name),
            },
            Self::Edge { index, edge_id, .. } => Self::Edge {
                index,
                edge_id,
                field: Some(name),
            },
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (kind, index, id, field) = match self {
            Self::Pipeline => return f.write_str("(pipeline)"),
            Self::Node {
                index,
                node_id,
                field,
            } => ("nodes", index, node_id, field),
            Self::Edge {
                index,
                edge_id,
                field,
            } => ("edges", index, edge_id, field),
        };
        write!(f, "{kind}[{index}]")?;
        if let Some(id) = id {
            write!(f, " \"{id}\"")?;
        }
        if let Some(field) = field {
            write!(f, " field \"{field}\"")?;
        }
        Ok(())
    }
}

/// A single validation finding.
///
/// Diagnostics are collected across all applicable rules and returned in a
/// [`ValidationResult`]. The engine never fails fast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// The rule that produced this finding.
    pub rule_id: RuleId,
    /// The severity of this finding.
    pub severity: Severity,
    /// Where in the pipeline the problem was detected.
    pub location: Location,
    /// A human-readable explanation of the problem.
    pub message: String,
}

impl Diagnostic {
    /// Constructs a new [`Diagnostic`].
    pub fn new(
        rule_id: RuleId,
        severity: Severity,
        location: Location,
        message: impl Into<String>,
    ) -> Self {
        Self {
            rule_id,
            severity,
            location,
            message: message.into(),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level_char = match self.severity {
            Severity::Error => 'E',
            Severity::Warning => 'W',
        };
        write!(
            f,
            "[{level_char}] {} {}: {}",
            self.rule_id, self.location, self.message
        )
    }
}

/// The collected output of a validation pass.
///
/// Always contains every diagnostic found. Use
/// [`has_errors`][ValidationResult::has_errors] or
/// [`is_conformant`][ValidationResult::is_conformant] for the overall status.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ValidationResult {
    /// All diagnostics produced during the validation pass.
    pub diagnostics: Vec<Diagnostic>,
}

impl ValidationResult {
    /// Creates an empty [`ValidationResult`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a [`ValidationResult`] from a pre-built list of diagnostics.
    pub fn from_diagnostics(diagnostics: Vec<Diagnostic>) -> Self {
        Self { diagnostics }
    }

    /// Returns `true` if any diagnostic has [`Severity::Error`].
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .iter()
            .any(|d| d.severity == Severity::Error)
    }

    /// Returns `true` if there are zero [`Severity::Error`] diagnostics.
    ///
    /// A pipeline with only warnings is conformant.
    pub fn is_conformant(&self) -> bool {
        !self.has_errors()
    }

    /// Returns an iterator over all diagnostics with [`Severity::Error`].
    pub fn errors(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
    }

    /// Returns an iterator over all diagnostics with [`Severity::Warning`].
    pub fn warnings(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
    }

    /// Returns an iterator over all diagnostics produced by the given rule.
    pub fn by_rule(&self, rule: &RuleId) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter().filter(move |d| &d.rule_id == rule)
    }

    /// Returns the total number of diagnostics.
    pub fn len(&self) -> usize {
        self.diagnostics.len()
    }

    /// Returns `true` if there are no diagnostics at all.
    pub fn is_empty(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// The rule family a rule belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Level {
    /// Required fields and reference integrity; errors.
    Schema,
    /// Duplicate ids; warnings.
    Hygiene,
    /// Whole-graph properties (acyclicity); errors.
    Graph,
}

impl Level {
    /// Returns the [`Severity`] that rules at this level produce.
    pub fn severity(self) -> Severity {
        match self {
            Self::Schema | Self::Graph => Severity::Error,
            Self::Hygiene => Severity::Warning,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Schema => f.write_str("schema"),
            Self::Hygiene => f.write_str("hygiene"),
            Self::Graph => f.write_str("graph"),
        }
    }
}

/// A single, stateless validation rule that inspects a [`Pipeline`].
///
/// Rules push zero or more [`Diagnostic`] values into `diags`; a rule that
/// finds nothing wrong pushes nothing. The dispatch loop in [`validate`]
/// calls each rule's [`check`][ValidationRule::check] exactly once per pass.
///
/// The trait is object-safe; the registry stores rules as
/// `Vec<Box<dyn ValidationRule>>`. Callers may implement it for their own
/// rules, using [`RuleId::Extension`] for the identifier.
pub trait ValidationRule {
    /// The unique identifier for this rule.
    fn id(&self) -> RuleId;

    /// The family this rule belongs to.
    fn level(&self) -> Level;

    /// The severity of diagnostics produced by this rule, derived from
    /// [`level`][ValidationRule::level].
    fn severity(&self) -> Severity {
        self.level().severity()
    }

    /// Inspect `pipeline` and push any findings into `diags`.
    fn check(&self, pipeline: &Pipeline, diags: &mut Vec<Diagnostic>);
}

/// Controls which rule families are active during a validation pass.
///
/// # Default
///
/// ```
/// # use flowcheck_core::ValidationConfig;
/// let cfg = ValidationConfig::default();
/// assert!(cfg.run_schema);
/// assert!(cfg.run_hygiene);
/// assert!(cfg.run_graph);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationConfig {
    /// Run schema rules (`NOD-01`..`NOD-04`, `EDG-01`..`EDG-03`).
    pub run_schema: bool,
    /// Run hygiene rules (`NOD-05`, `EDG-04`).
    pub run_hygiene: bool,
    /// Run the acyclicity rule (`GRF-01`).
    pub run_graph: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            run_schema: true,
            run_hygiene: true,
            run_graph: true,
        }
    }
}

/// Builds the ordered rule registry for the given configuration.
///
/// Rules are compiled into `flowcheck-core`; this is not a plugin system.
pub fn build_registry(config: &ValidationConfig) -> Vec<Box<dyn ValidationRule>> {
    use rules::{
        DuplicateEdgeId, DuplicateNodeId, EdgeEndpointsPresent, EdgeIdPresent,
        EdgeReferencesResolve, GraphAcyclic, NodeIdPresent, NodeLabelPresent,
        NodePositionComplete, NodeStatusKnown,
    };

    let mut registry: Vec<Box<dyn ValidationRule>> = Vec::new();

    if config.run_schema {
        registry.push(Box::new(NodeIdPresent));
        registry.push(Box::new(NodePositionComplete));
        registry.push(Box::new(NodeLabelPresent));
        registry.push(Box::new(NodeStatusKnown));
        registry.push(Box::new(EdgeIdPresent));
        registry.push(Box::new(EdgeEndpointsPresent));
        registry.push(Box::new(EdgeReferencesResolve));
    }

    if config.run_hygiene {
        registry.push(Box::new(DuplicateNodeId));
        registry.push(Box::new(DuplicateEdgeId));
    }

    if config.run_graph {
        registry.push(Box::new(GraphAcyclic));
    }

    registry
}

/// Runs every enabled rule over `pipeline` and collects all diagnostics.
///
/// An empty result indicates a clean pipeline with respect to the active
/// rule set.
pub fn validate(pipeline: &Pipeline, config: &ValidationConfig) -> ValidationResult {
    let registry = build_registry(config);
    let mut diags: Vec<Diagnostic> = Vec::new();
    for rule in &registry {
        rule.check(pipeline, &mut diags);
    }
    tracing::debug!(
        rules = registry.len(),
        diagnostics = diags.len(),
        "validation pass finished"
    );
    ValidationResult::from_diagnostics(diags)
}
