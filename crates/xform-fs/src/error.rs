//! Error types for xform-fs

use std::path::PathBuf;

/// Result type for xform-fs operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in xform-fs operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Source root not found: {path}")]
    RootNotFound { path: PathBuf },

    #[error("Invalid file pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("Failed to parse {format} config at {path}: {message}")]
    ConfigParse {
        path: PathBuf,
        format: String,
        message: String,
    },

    #[error("Unsupported config format: {extension}")]
    UnsupportedFormat { extension: String },

    #[error("Failed to start {executable}: {source}")]
    ProcessSpawn {
        executable: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed argument string for {executable}: {message}")]
    InvalidArguments { executable: PathBuf, message: String },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
