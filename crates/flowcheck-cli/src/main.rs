mod cli;
mod cmd;
mod error;
mod format;
mod io;

pub use cli::{Cli, Command, OutputFormat, PathOrStdin};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::error::CliError;
use crate::format::FormatterConfig;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.no_color);

    let code = match run(&cli) {
        Ok(()) => 0,
        Err(e) => {
            // Diagnostics were already written; the summary says enough.
            if !matches!(e, CliError::ValidationErrors) {
                eprintln!("{e}");
            }
            e.exit_code()
        }
    };
    std::process::exit(code);
}

/// Installs the stderr log subscriber. `RUST_LOG` wins when set; otherwise
/// the level is `warn`, or `debug` with `--verbose`.
fn init_tracing(verbose: bool, no_color: bool) {
    let default_level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    let filter = EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(format::colors_enabled(no_color))
        .with_target(false)
        .init();
}

fn run(cli: &Cli) -> Result<(), CliError> {
    match &cli.command {
        Command::Inspect { file } => {
            let content = io::read_input(file, cli.max_file_size)?;
            cmd::inspect::run(&content, cli.format)
        }
        Command::Validate {
            file,
            skip_schema,
            skip_hygiene,
            skip_graph,
        } => {
            let content = io::read_input(file, cli.max_file_size)?;
            let skip = cmd::validate::SkipFlags {
                schema: *skip_schema,
                hygiene: *skip_hygiene,
                graph: *skip_graph,
            };
            let fmt_config = FormatterConfig::from_flags(cli.no_color, cli.quiet, cli.verbose);
            cmd::validate::run(&content, skip, cli.format, &fmt_config)
        }
        Command::Adjacency { file } => {
            let content = io::read_input(file, cli.max_file_size)?;
            cmd::adjacency::run(&content, cli.format)
        }
    }
}
