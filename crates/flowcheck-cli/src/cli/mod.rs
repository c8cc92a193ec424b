//! Clap CLI definition: root struct, subcommands, and shared argument types.
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// A CLI argument that is either a filesystem path or the stdin sentinel `"-"`.
#[derive(Clone, Debug)]
pub enum PathOrStdin {
    /// Read from standard input.
    Stdin,
    /// Read from the given filesystem path.
    Path(PathBuf),
}

impl std::str::FromStr for PathOrStdin {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(PathOrStdin::Stdin)
        } else {
            Ok(PathOrStdin::Path(PathBuf::from(s)))
        }
    }
}

/// Output format for CLI commands.
///
/// `Human` emits aligned text to stdout and one line per diagnostic to
/// stderr. `Json` emits a single JSON object for data and NDJSON for
/// diagnostics.
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable, optionally colored output (default).
    Human,
    /// Structured JSON / NDJSON output.
    Json,
}

/// All top-level subcommands exposed by the `flowcheck` binary.
#[derive(Subcommand)]
pub enum Command {
    /// Print node/edge counts and the DAG verdict for a pipeline.
    Inspect {
        /// Path to a pipeline JSON file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
    },

    /// Check a pipeline for schema errors, duplicate ids and cycles.
    Validate {
        /// Path to a pipeline JSON file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
        /// Skip required-field and reference checks (NOD-01..04, EDG-01..03).
        #[arg(long)]
        skip_schema: bool,
        /// Skip duplicate-id checks (NOD-05, EDG-04).
        #[arg(long)]
        skip_hygiene: bool,
        /// Skip the acyclicity check (GRF-01).
        #[arg(long)]
        skip_graph: bool,
    },

    /// Print the adjacency list built from the pipeline's valid nodes and edges.
    Adjacency {
        /// Path to a pipeline JSON file, or `-` for stdin.
        #[arg(value_name = "FILE")]
        file: PathOrStdin,
    },
}

/// Root CLI struct for the `flowcheck` binary.
///
/// All global flags are marked `global = true` so that clap propagates them
/// to every subcommand.
#[derive(Parser)]
#[command(
    name = "flowcheck",
    version,
    about = "Workflow pipeline graph checker",
    long_about = "Checks pipeline documents exported by the workflow editor.\n\
                  Inspects graph statistics, validates node and edge records,\n\
                  and detects cycles."
)]
pub struct Cli {
    /// Active subcommand.
    #[command(subcommand)]
    pub command: Command,

    /// Output format: human (default) or json.
    #[arg(long, short = 'f', default_value = "human", global = true)]
    pub format: OutputFormat,

    /// Suppress all stderr output except errors (incompatible with `--verbose`).
    #[arg(long, short = 'q', global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Increase stderr verbosity: timing and debug logging
    /// (incompatible with `--quiet`).
    #[arg(long, short = 'v', global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Maximum input file size in bytes.
    ///
    /// Can also be set via the `FLOWCHECK_MAX_FILE_SIZE` environment variable.
    /// Default: 16777216 (16 MiB).
    #[arg(
        long,
        global = true,
        env = "FLOWCHECK_MAX_FILE_SIZE",
        default_value = "16777216"
    )]
    pub max_file_size: u64,

    /// Disable ANSI color codes in human output and log lines.
    ///
    /// Color is also off whenever the `NO_COLOR` environment variable is set
    /// to any value, per <https://no-color.org>.
    #[arg(long, global = true)]
    pub no_color: bool,
}
