//! Implementation of `flowcheck adjacency <file>`.
//!
//! Prints the adjacency map the graph engine builds from the pipeline's
//! valid nodes and edges. Malformed entries and dangling edges are silently
//! left out, exactly as the cycle check sees them.
//!
//! Exit codes: 0 = success, 2 = input or parse failure.
use std::io::Write;

use flowcheck_core::{AdjacencyMap, build_adjacency, parse_pipeline};

use crate::OutputFormat;
use crate::cmd::write_failed;
use crate::error::CliError;

/// Runs the `adjacency` command.
///
/// # Errors
///
/// Returns [`CliError::ParseFailed`] when `content` is not a pipeline
/// document, or [`CliError::IoError`] when stdout cannot be written.
pub fn run(content: &str, format: OutputFormat) -> Result<(), CliError> {
    let pipeline = parse_pipeline(content)?;
    let adjacency = build_adjacency(&pipeline.nodes, &pipeline.edges);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Human => print_human(&mut out, &adjacency),
        OutputFormat::Json => print_json(&mut out, &adjacency),
    }
    .map_err(write_failed("stdout"))
}

/// One `id -> a, b` line per node, in declaration order.
fn print_human<W: Write>(w: &mut W, adjacency: &AdjacencyMap) -> std::io::Result<()> {
    for (id, neighbors) in adjacency.iter() {
        if neighbors.is_empty() {
            writeln!(w, "{id} -> (none)")?;
        } else {
            writeln!(w, "{id} -> {}", neighbors.join(", "))?;
        }
    }
    Ok(())
}

fn print_json<W: Write>(w: &mut W, adjacency: &AdjacencyMap) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(adjacency)?;
    writeln!(w, "{json}")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    const DIAMOND: &str = r#"{
        "nodes": [{"id": "a"}, {"id": "b"}, {"id": "c"}, {"id": "d"}, {"id": ""}],
        "edges": [
            {"id": "e1", "source": "a", "target": "b"},
            {"id": "e2", "source": "a", "target": "c"},
            {"id": "e3", "source": "b", "target": "d"},
            {"id": "e4", "source": "c", "target": "d"},
            {"id": "e5", "source": "d", "target": "nowhere"}
        ]
    }"#;

    fn adjacency() -> AdjacencyMap {
        let pipeline = parse_pipeline(DIAMOND).expect("should parse");
        build_adjacency(&pipeline.nodes, &pipeline.edges)
    }

    #[test]
    fn human_lines_follow_declaration_order() {
        let mut buf = Vec::new();
        print_human(&mut buf, &adjacency()).expect("write");
        let out = String::from_utf8(buf).expect("UTF-8");
        assert_eq!(out, "a -> b, c\nb -> d\nc -> d\nd -> (none)\n");
    }

    #[test]
    fn json_is_an_object_of_lists() {
        let mut buf = Vec::new();
        print_json(&mut buf, &adjacency()).expect("write");
        let value: serde_json::Value = serde_json::from_slice(&buf).expect("valid JSON");
        assert_eq!(
            value,
            serde_json::json!({"a": ["b", "c"], "b": ["d"], "c": ["d"], "d": []})
        );
    }
}
