/// Command module for the `flowcheck` CLI.
///
/// Each submodule implements one subcommand. Its `run` function takes the
/// decoded input text and the relevant flags and returns `Ok(())` on success
/// or a [`crate::error::CliError`] on failure.
pub mod adjacency;
pub mod inspect;
pub mod validate;

use crate::error::CliError;

/// Maps a failed write to `stream` into [`CliError::IoError`].
pub(crate) fn write_failed(stream: &str) -> impl FnOnce(std::io::Error) -> CliError + '_ {
    move |e| CliError::IoError {
        source: stream.to_owned(),
        detail: e.to_string(),
    }
}
