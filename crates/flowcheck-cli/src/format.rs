/// Diagnostic formatting: human-readable and NDJSON modes.
///
/// Human mode writes one line per [`Diagnostic`], with the severity tag
/// colored when stderr is a terminal and neither `--no-color` nor `NO_COLOR`
/// is set. JSON mode writes one JSON object per line. Both modes honor
/// `--quiet` (warnings and the summary are suppressed) and `--verbose`
/// (timing lines are added).
use std::io::{IsTerminal as _, Write};
use std::time::Duration;

use flowcheck_core::{Diagnostic, Severity};

use crate::OutputFormat;

// ---------------------------------------------------------------------------
// Color support detection
// ---------------------------------------------------------------------------

/// Returns `true` if ANSI color codes should be emitted to stderr.
pub fn colors_enabled(no_color_flag: bool) -> bool {
    if no_color_flag || std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    std::io::stderr().is_terminal()
}

const ANSI_RED: &str = "\x1b[31m";
const ANSI_YELLOW: &str = "\x1b[33m";
const ANSI_RESET: &str = "\x1b[0m";

// ---------------------------------------------------------------------------
// FormatterConfig
// ---------------------------------------------------------------------------

/// Output switches derived from the global CLI flags.
#[derive(Debug, Clone)]
pub struct FormatterConfig {
    /// Whether ANSI colors are enabled.
    pub colors: bool,
    /// Suppress warnings and the summary line.
    pub quiet: bool,
    /// Emit timing lines.
    pub verbose: bool,
}

impl FormatterConfig {
    /// Builds a [`FormatterConfig`] from the raw CLI flags, probing the
    /// environment and stderr for color support.
    pub fn from_flags(no_color_flag: bool, quiet: bool, verbose: bool) -> Self {
        Self {
            colors: colors_enabled(no_color_flag),
            quiet,
            verbose,
        }
    }

    fn suppresses(&self, severity: Severity) -> bool {
        self.quiet && severity == Severity::Warning
    }
}

// ---------------------------------------------------------------------------
// Human mode
// ---------------------------------------------------------------------------

/// Writes a single [`Diagnostic`] in human-readable form.
///
/// Format: `[E] EDG-03  edges[2] "e3" field "target": target references non-existent node "x"`
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_diagnostic_human<W: Write>(
    writer: &mut W,
    diag: &Diagnostic,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    if config.suppresses(diag.severity) {
        return Ok(());
    }

    let (tag, color) = match diag.severity {
        Severity::Error => ("[E]", ANSI_RED),
        Severity::Warning => ("[W]", ANSI_YELLOW),
    };
    let (open, close) = if config.colors {
        (color, ANSI_RESET)
    } else {
        ("", "")
    };

    writeln!(
        writer,
        "{open}{tag}{close} {rule_id}  {location}: {message}",
        rule_id = diag.rule_id,
        location = diag.location,
        message = diag.message,
    )
}

/// Writes the `N errors, M warnings` summary line. Suppressed in quiet mode.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_summary_human<W: Write>(
    writer: &mut W,
    errors: usize,
    warnings: usize,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    if config.quiet {
        return Ok(());
    }
    writeln!(
        writer,
        "{errors} {}, {warnings} {}",
        pluralize(errors, "error", "errors"),
        pluralize(warnings, "warning", "warnings"),
    )
}

/// Writes `{label} in {ms}ms`. No-op unless verbose.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_timing_human<W: Write>(
    writer: &mut W,
    label: &str,
    duration: Duration,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    if !config.verbose {
        return Ok(());
    }
    writeln!(writer, "{label} in {}ms", duration.as_millis())
}

// ---------------------------------------------------------------------------
// JSON mode (NDJSON)
// ---------------------------------------------------------------------------

/// Writes a single [`Diagnostic`] as one NDJSON line:
///
/// ```json
/// {"rule_id":"EDG-03","severity":"error","location":"edges[2] \"e3\" field \"target\"","message":"..."}
/// ```
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_diagnostic_json<W: Write>(
    writer: &mut W,
    diag: &Diagnostic,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    if config.suppresses(diag.severity) {
        return Ok(());
    }
    let line = serde_json::json!({
        "rule_id": diag.rule_id.code(),
        "severity": diag.severity.as_str(),
        "location": diag.location.to_string(),
        "message": diag.message,
    });
    writeln!(writer, "{line}")
}

/// Writes `{"summary":{"errors":N,"warnings":M}}` as the final NDJSON line.
/// Suppressed in quiet mode.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_summary_json<W: Write>(
    writer: &mut W,
    errors: usize,
    warnings: usize,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    if config.quiet {
        return Ok(());
    }
    writeln!(
        writer,
        r#"{{"summary":{{"errors":{errors},"warnings":{warnings}}}}}"#,
    )
}

// ---------------------------------------------------------------------------
// Dispatch by format
// ---------------------------------------------------------------------------

/// Writes `diag` in the requested output format.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_diagnostic<W: Write>(
    writer: &mut W,
    diag: &Diagnostic,
    format: OutputFormat,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    match format {
        OutputFormat::Human => write_diagnostic_human(writer, diag, config),
        OutputFormat::Json => write_diagnostic_json(writer, diag, config),
    }
}

/// Writes the summary in the requested output format.
///
/// # Errors
///
/// Returns an error only if writing to `writer` fails.
pub fn write_summary<W: Write>(
    writer: &mut W,
    errors: usize,
    warnings: usize,
    format: OutputFormat,
    config: &FormatterConfig,
) -> std::io::Result<()> {
    match format {
        OutputFormat::Human => write_summary_human(writer, errors, warnings, config),
        OutputFormat::Json => write_summary_json(writer, errors, warnings, config),
    }
}

fn pluralize<'a>(count: usize, singular: &'a str, plural: &'a str) -> &'a str {
    if count == 1 { singular } else { plural }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
