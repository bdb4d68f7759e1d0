use std::io;
use std::path::PathBuf;

use cv_core::WorldError;

use crate::diagnostics::ParseError;

/// Result type for loading operations.
pub type LoadResult<T> = Result<T, LoadError>;

/// Errors that prevent an adventure from being loaded.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// A data file could not be read.
    #[error("cannot read {}: {source}", path.display())]
    Io {
        /// The file that failed.
        path: PathBuf,
        /// The underlying I/O error.
        source: io::Error,
    },

    /// A data file is malformed.
    #[error("{error}")]
    Parse {
        /// Location and description of the problem.
        error: ParseError,
        /// Full text of the file, for rendering.
        text: String,
    },

    /// A JSON bundle could not be decoded.
    #[error("invalid bundle {}: {source}", path.display())]
    Json {
        /// The bundle file.
        path: PathBuf,
        /// The decoding error.
        source: serde_json::Error,
    },

    /// The records parsed but do not form a valid world.
    #[error("invalid world: {0}")]
    World(#[from] WorldError),
}

impl LoadError {
    /// Renders the error for a terminal, with source excerpts for parse errors.
    pub fn render(&self) -> String {
        match self {
            Self::Parse { error, text } => error.render(text),
            other => format!("{other}\n"),
        }
    }
}
