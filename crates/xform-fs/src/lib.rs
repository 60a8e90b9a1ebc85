//! Filesystem and process service abstraction for xform
//!
//! Provides normalized path handling, recursive file discovery, settings
//! loading and the [`FileService`] seam through which existence checks and
//! engine invocations are routed.

pub mod config;
pub mod discovery;
pub mod error;
pub mod path;
pub mod service;

pub use config::ConfigStore;
pub use discovery::{canonical_root, discover_files};
pub use error::{Error, Result};
pub use path::NormalizedPath;
pub use service::{FileService, LocalFileService, ProcessOutcome};
