//! Error types for ripple-core.

use thiserror::Error;

/// Result type alias for ripple-core operations.
pub type Result<T> = std::result::Result<T, RippleError>;

/// Errors that can occur at the edges of the pipeline.
///
/// Extraction and impact queries themselves never fail: empty text yields an
/// empty graph and an unknown component yields an empty chain. Errors only
/// arise when rendering a graph for an external consumer.
#[derive(Error, Debug)]
pub enum RippleError {
    /// Export format name was not recognized.
    #[error("Unknown export format '{name}' (expected one of: dot, mermaid, json)")]
    UnknownFormat {
        /// The format name that was requested.
        name: String,
    },

    /// JSON serialization error while exporting a graph.
    #[error("JSON serialization error: {0}")]
    JsonError(#[from] serde_json::Error),
}
