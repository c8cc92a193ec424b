//! Implementation of `flowcheck validate <file>`.
//!
//! Runs the rule registry over a pipeline and writes every diagnostic to
//! stderr, followed by a summary line. `--skip-schema`, `--skip-hygiene` and
//! `--skip-graph` switch off individual rule families.
//!
//! Exit codes:
//! - 0 = no error diagnostics (warnings allowed)
//! - 1 = at least one error diagnostic, including a cycle
//! - 2 = input or parse failure
use std::io::Write;
use std::time::Instant;

use flowcheck_core::{ValidationConfig, parse_pipeline, validate};

use crate::OutputFormat;
use crate::cmd::write_failed;
use crate::error::CliError;
use crate::format::{FormatterConfig, write_diagnostic, write_summary, write_timing_human};

/// Rule families to skip, straight from the subcommand flags.
#[derive(Debug, Clone, Copy, Default)]
pub struct SkipFlags {
    /// `--skip-schema`
    pub schema: bool,
    /// `--skip-hygiene`
    pub hygiene: bool,
    /// `--skip-graph`
    pub graph: bool,
}

impl SkipFlags {
    fn config(self) -> ValidationConfig {
        ValidationConfig {
            run_schema: !self.schema,
            run_hygiene: !self.hygiene,
            run_graph: !self.graph,
        }
    }
}

/// Runs the `validate` command, writing diagnostics to stderr.
///
/// # Errors
///
/// - [`CliError::ParseFailed`] when `content` is not a pipeline document.
/// - [`CliError::ValidationErrors`] when any error diagnostic was emitted.
/// - [`CliError::IoError`] when stderr cannot be written.
pub fn run(
    content: &str,
    skip: SkipFlags,
    format: OutputFormat,
    fmt_config: &FormatterConfig,
) -> Result<(), CliError> {
    let stderr = std::io::stderr();
    let mut err_out = stderr.lock();
    run_with(&mut err_out, content, skip, format, fmt_config)
}

/// [`run`] against an arbitrary diagnostics sink.
fn run_with<W: Write>(
    out: &mut W,
    content: &str,
    skip: SkipFlags,
    format: OutputFormat,
    fmt_config: &FormatterConfig,
) -> Result<(), CliError> {
    let pipeline = parse_pipeline(content)?;

    let started = Instant::now();
    let result = validate(&pipeline, &skip.config());
    let elapsed = started.elapsed();

    for diag in &result.diagnostics {
        write_diagnostic(out, diag, format, fmt_config).map_err(write_failed("stderr"))?;
    }
    write_summary(
        out,
        result.errors().count(),
        result.warnings().count(),
        format,
        fmt_config,
    )
    .map_err(write_failed("stderr"))?;
    if matches!(format, OutputFormat::Human) {
        write_timing_human(out, "validated", elapsed, fmt_config)
            .map_err(write_failed("stderr"))?;
    }

    if result.has_errors() {
        Err(CliError::ValidationErrors)
    } else {
        Ok(())
    }
}
