//! Workflow pipeline generator.
//!
//! Produces [`Pipeline`] instances shaped like editor exports: nodes laid out
//! in layers, edges flowing from earlier layers to later ones, optionally
//! with injected back edges and malformed entries.

pub mod noise;
pub mod topology;

use flowcheck_core::Pipeline;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Configuration for the pipeline generator.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Seed for the random number generator (deterministic).
    pub seed: u64,
    /// Number of well-formed nodes.
    pub num_nodes: usize,
    /// Number of layers the nodes are spread across.
    pub layers: usize,
    /// Maximum parents each node draws from the previous layer.
    pub max_fan_in: usize,
    /// Probability that a node also gets a parent from an arbitrary earlier
    /// layer (0.0-1.0).
    pub skip_density: f64,
    /// Number of back edges to add; each closes at least one cycle.
    pub back_edges: usize,
    /// Malformed entries to append, as a fraction of `num_nodes` (0.0-1.0).
    pub noise: f64,
}

/// Predefined size tiers for benchmarking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeTier {
    /// 50 nodes in 5 layers
    Small,
    /// 1 000 nodes in 20 layers
    Medium,
    /// 10 000 nodes in 50 layers
    Large,
    /// 100 000 nodes in 200 layers
    XLarge,
}

impl SizeTier {
    /// Returns the acyclic, noise-free [`GeneratorConfig`] for this tier.
    pub fn config(self, seed: u64) -> GeneratorConfig {
        let (num_nodes, layers, max_fan_in) = match self {
            SizeTier::Small => (50, 5, 2),
            SizeTier::Medium => (1_000, 20, 3),
            SizeTier::Large => (10_000, 50, 3),
            SizeTier::XLarge => (100_000, 200, 4),
        };
        GeneratorConfig {
            seed,
            num_nodes,
            layers,
            max_fan_in,
            skip_density: 0.1,
            back_edges: 0,
            noise: 0.0,
        }
    }
}

/// Generates a pipeline from the given configuration.
///
/// All randomness is deterministic, seeded from `config.seed`. With
/// `back_edges == 0` the result is a DAG; with `noise == 0.0` it passes
/// every validation rule.
pub fn generate_pipeline(config: &GeneratorConfig) -> Pipeline {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut pipeline = topology::build_layered(config, &mut rng);
    if config.back_edges > 0 {
        topology::inject_back_edges(&mut rng, config.back_edges, &mut pipeline);
    }
    if config.noise > 0.0 {
        noise::append_malformed(&mut rng, config.noise, &mut pipeline);
    }
    pipeline
}
