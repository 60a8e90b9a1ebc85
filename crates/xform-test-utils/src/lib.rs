//! Shared test utilities for the xform workspace.
//!
//! This crate provides standardised test fixtures to eliminate duplication
//! across crate test suites. It is a dev-dependency only and is never published.
//!
//! # Modules
//!
//! - [`service`]: [`RecordingFileService`], an in-memory file and process service
//! - [`tree`]: [`TestTree`] builder for on-disk source trees and fake engines

pub mod service;
pub mod tree;

pub use service::{RecordedInvocation, RecordingFileService};
pub use tree::TestTree;
