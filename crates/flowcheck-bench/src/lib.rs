//! Workflow pipeline generator and benchmark utilities for flowcheck.
//!
//! This crate provides deterministic generation of layered pipelines, with
//! optional cycles and malformed entries, for benchmarking and testing
//! `flowcheck-core`.

pub mod generator;

pub use generator::{GeneratorConfig, SizeTier, generate_pipeline};

/// Serialises `pipeline` to compact JSON, as the editor would export it.
///
/// # Errors
///
/// Returns the encoder error if serialisation fails.
pub fn to_json(pipeline: &flowcheck_core::Pipeline) -> Result<String, serde_json::Error> {
    serde_json::to_string(pipeline)
}
