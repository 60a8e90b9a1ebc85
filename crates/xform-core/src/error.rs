//! Error types for xform-core

use std::path::PathBuf;

/// Result type for xform-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in xform-core operations
///
/// Every variant is fatal for the run that raised it.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The transform engine is not installed where the host should provide it
    #[error("Required tool not found: transform engine expected at {path}")]
    MissingTool { path: PathBuf },

    /// The transform engine ran and reported failure
    #[error("Transform engine failed for {transform} (exit code: {exit_code:?}): {stderr}")]
    EngineFailed {
        transform: PathBuf,
        exit_code: Option<i32>,
        stderr: String,
    },

    /// A base or transform file lies outside the source root
    #[error("{path} is not under the source root {root}")]
    OutsideSourceRoot { path: PathBuf, root: PathBuf },

    /// A configured suffix token cannot name a sibling file
    #[error("Invalid transform suffix '{suffix}': {reason}")]
    InvalidSuffix { suffix: String, reason: String },

    /// Settings failed validation
    #[error("Invalid settings: {message}")]
    InvalidSettings { message: String },

    /// Filesystem or process error from xform-fs
    #[error(transparent)]
    Fs(#[from] xform_fs::Error),
}
