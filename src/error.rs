//! Error types for sample will generation.
//!
//! Every failure in the pipeline (layout, rendering, or writing and
//! inspecting the file) is surfaced as a [`WillError`] so the
//! binary can attach context and exit non-zero.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for generation operations.
pub type WillResult<T> = Result<T, WillError>;

/// Error type for all generation operations.
#[derive(Debug, Error)]
pub enum WillError {
    /// Error occurred while writing or inspecting the output file
    #[error("IO error for path '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The PDF backend failed to build or save the document
    #[error("Render error: {message}")]
    Render { message: String },

    /// The story contains no blocks
    #[error("Nothing to render: the story is empty")]
    EmptyStory,

    /// Invalid configuration or parameters
    #[error("Invalid input for '{parameter}': {reason}")]
    InvalidInput { parameter: String, reason: String },
}

impl WillError {
    /// Wraps an IO error together with the path it concerns.
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Wraps a PDF backend failure.
    pub fn render(err: impl std::fmt::Display) -> Self {
        Self::Render {
            message: err.to_string(),
        }
    }
}
