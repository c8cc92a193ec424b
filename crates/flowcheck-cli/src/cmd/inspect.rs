//! Implementation of `flowcheck inspect <file>`.
//!
//! Prints the pipeline's structural summary to stdout: entry counts, counts
//! after graph filtering, and the DAG verdict. A cyclic pipeline is still a
//! successful inspection.
//!
//! Exit codes: 0 = success, 2 = input or parse failure.
use std::io::Write;

use flowcheck_core::{Pipeline, PipelineSummary, parse_pipeline, summarize};

use crate::OutputFormat;
use crate::cmd::write_failed;
use crate::error::CliError;

/// Runs the `inspect` command.
///
/// # Errors
///
/// Returns [`CliError::ParseFailed`] when `content` is not a pipeline
/// document, or [`CliError::IoError`] when stdout cannot be written.
pub fn run(content: &str, format: OutputFormat) -> Result<(), CliError> {
    let pipeline = parse_pipeline(content)?;
    let summary = summarize(&pipeline);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Human => print_human(&mut out, &pipeline, &summary),
        OutputFormat::Json => print_json(&mut out, &pipeline, &summary),
    }
    .map_err(write_failed("stdout"))
}

fn pipeline_name(pipeline: &Pipeline) -> Option<&str> {
    pipeline.metadata.as_ref().and_then(|m| m.name.as_deref())
}

fn print_human<W: Write>(
    w: &mut W,
    pipeline: &Pipeline,
    summary: &PipelineSummary,
) -> std::io::Result<()> {
    writeln!(w, "version:      {}", pipeline.version)?;
    if let Some(name) = pipeline_name(pipeline) {
        writeln!(w, "name:         {name}")?;
    }
    writeln!(w, "nodes:        {}", summary.num_nodes)?;
    writeln!(w, "valid_nodes:  {}", summary.valid_nodes)?;
    writeln!(w, "edges:        {}", summary.num_edges)?;
    writeln!(w, "valid_edges:  {}", summary.valid_edges)?;
    writeln!(w, "is_dag:       {}", summary.is_dag)
}

fn print_json<W: Write>(
    w: &mut W,
    pipeline: &Pipeline,
    summary: &PipelineSummary,
) -> std::io::Result<()> {
    let serde_json::Value::Object(mut obj) = serde_json::to_value(summary)? else {
        return Err(std::io::Error::other("summary did not serialise to an object"));
    };
    obj.insert(
        "version".to_owned(),
        serde_json::Value::String(pipeline.version.clone()),
    );
    if let Some(name) = pipeline_name(pipeline) {
        obj.insert("name".to_owned(), serde_json::Value::String(name.to_owned()));
    }

    let json = serde_json::to_string_pretty(&serde_json::Value::Object(obj))?;
    writeln!(w, "{json}")
}
