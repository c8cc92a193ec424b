/// JSON decoding of pipeline documents.
///
/// [`parse_pipeline`] is the single entry point used by callers holding raw
/// text. The decoder is lenient about missing fields (see
/// [`crate::structures`]) but strict about JSON syntax and field types.
use std::fmt;

use crate::file::Pipeline;

/// Errors produced while decoding a pipeline document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PipelineParseError {
    /// The document is valid JSON but its top-level value is not an object.
    NotAnObject,
    /// The document is not valid JSON, or a field has the wrong JSON type.
    Json {
        /// One-based line of the failure.
        line: usize,
        /// One-based column of the failure.
        column: usize,
        /// Decoder message.
        message: String,
    },
}

impl fmt::Display for PipelineParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAnObject => f.write_str("top-level JSON value must be an object"),
            Self::Json {
                line,
                column,
                message,
            } => write!(f, "line {line}, column {column}: {message}"),
        }
    }
}

impl std::error::Error for PipelineParseError {}

impl From<serde_json::Error> for PipelineParseError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json {
            line: e.line(),
            column: e.column(),
            message: e.to_string(),
        }
    }
}

/// Decodes a pipeline document from JSON text.
///
/// # Errors
///
/// - [`PipelineParseError::NotAnObject`] when the top-level value is an
///   array, string, number, boolean or `null`.
/// - [`PipelineParseError::Json`] for syntax errors and type mismatches.
pub fn parse_pipeline(content: &str) -> Result<Pipeline, PipelineParseError> {
    let first = content.trim_start().chars().next();
    match first {
        Some('{') => {}
        Some(_) | None => {
            // Let the decoder report genuine syntax errors with a position.
            serde_json::from_str::<serde::de::IgnoredAny>(content)?;
            return Err(PipelineParseError::NotAnObject);
        }
    }

    let pipeline: Pipeline = serde_json::from_str(content)?;
    tracing::debug!(
        nodes = pipeline.nodes.len(),
        edges = pipeline.edges.len(),
        "decoded pipeline document"
    );
    Ok(pipeline)
}
