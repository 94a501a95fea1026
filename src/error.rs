//! Error types for stcat.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;

/// Main error type for stcat operations.
///
/// Malformed input bytes are not an error; they are replaced during
/// sanitization. Only failures to open, read or write are.
#[derive(Error, Debug)]
pub enum StcatError {
    /// A named file could not be opened.
    #[error("{}: {source}", .path.display())]
    SourceOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading from a source failed part way through.
    #[error("{name}: read error: {source}")]
    SourceRead {
        name: String,
        #[source]
        source: std::io::Error,
    },

    /// Writing to the output failed.
    #[error("write error: {0}")]
    Output(#[source] std::io::Error),

    /// Configuration could not be loaded.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl StcatError {
    /// True when the output was closed by its reader, as with `stcat f | head`.
    pub fn is_broken_pipe(&self) -> bool {
        matches!(self, Self::Output(e) if e.kind() == std::io::ErrorKind::BrokenPipe)
    }
}

/// Convenience Result type for stcat operations.
pub type Result<T> = std::result::Result<T, StcatError>;
