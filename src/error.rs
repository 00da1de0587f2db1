//! Error types for the parse and IO boundary.
//!
//! The matching, hashing and merging operations are total and never fail.
//! Errors only arise when values are read from text or files.

use std::path::PathBuf;
use thiserror::Error;

/// Error represents a failure to load or emit a value.
#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write output: {0}")]
    Write(#[from] std::io::Error),

    #[error("invalid key: {message}")]
    InvalidKey { message: String },
}

impl Error {
    /// Creates a read error for the given path.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }

    /// Creates an invalid key error.
    pub fn invalid_key(message: impl Into<String>) -> Self {
        Error::InvalidKey {
            message: message.into(),
        }
    }
}

/// Result alias used across the crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;
