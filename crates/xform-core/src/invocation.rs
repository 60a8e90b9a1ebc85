//! Engine location and invocation arguments
//!
//! The engine is invoked once per planned transform with a single argument
//! string of the form:
//!
//! ```text
//! source:"<path>" transform:"<path>" destination:"<path>" indent [preservewhitespace] [verbose]
//! ```

use std::cell::OnceCell;
use std::fmt;

use serde::Serialize;
use xform_fs::{FileService, NormalizedPath, ProcessOutcome};

use crate::settings::{RunRoots, TransformSettings};
use crate::{Error, Result};

/// Engine location below the service's base working directory.
pub const ENGINE_RELATIVE_PATH: &str = "ExtTemp/WindowsSDK/Resources/ctt.exe";

/// Locates the transform engine once per run.
///
/// The first successful lookup is remembered; later calls do not touch
/// the service again.
#[derive(Debug, Default)]
pub struct EngineLocator {
    located: OnceCell<NormalizedPath>,
}

impl EngineLocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Path of the engine, checking for it on first use.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingTool`] naming the expected path when the
    /// engine is not there.
    pub fn locate(&self, service: &dyn FileService) -> Result<&NormalizedPath> {
        if let Some(path) = self.located.get() {
            return Ok(path);
        }

        let path = service.base_working_directory()?.join(ENGINE_RELATIVE_PATH);
        if !service.file_exists(&path) {
            return Err(Error::MissingTool {
                path: path.to_native(),
            });
        }

        tracing::debug!(engine = %path, "Located transform engine");
        Ok(self.located.get_or_init(|| path))
    }
}

/// Engine switches taken from the settings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineFlags {
    pub preserve_whitespace: bool,
    pub verbose: bool,
}

impl From<&TransformSettings> for EngineFlags {
    fn from(settings: &TransformSettings) -> Self {
        Self {
            preserve_whitespace: settings.preserve_whitespace,
            verbose: settings.verbose,
        }
    }
}

/// Arguments for one engine invocation
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InvocationArgs {
    pub source: NormalizedPath,
    pub transform: NormalizedPath,
    pub destination: NormalizedPath,
    pub preserve_whitespace: bool,
    pub verbose: bool,
}

impl InvocationArgs {
    /// Build the arguments for applying `transform` to `base`.
    ///
    /// Both files are re-expressed relative to the source root and joined
    /// back onto it; the destination is the base file's relative path under
    /// the target root. The source is always the original base file, so
    /// each transform in a chain rewrites the destination from scratch.
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutsideSourceRoot`] if either file is not below the
    /// source root.
    pub fn build(
        roots: &RunRoots,
        base: &NormalizedPath,
        transform: &NormalizedPath,
        flags: EngineFlags,
    ) -> Result<Self> {
        let relative_base = relative_to_source(roots, base)?;
        let relative_transform = relative_to_source(roots, transform)?;

        Ok(Self {
            source: roots.source_root.join(relative_base.as_str()),
            transform: roots.source_root.join(relative_transform.as_str()),
            destination: roots.target_root.join(relative_base.as_str()),
            preserve_whitespace: flags.preserve_whitespace,
            verbose: flags.verbose,
        })
    }

    /// Render the argument string in the engine's format.
    pub fn to_argument_string(&self) -> String {
        let mut buffer = format!(
            "source:\"{}\" transform:\"{}\" destination:\"{}\" indent",
            self.source, self.transform, self.destination
        );
        if self.preserve_whitespace {
            buffer.push_str(" preservewhitespace");
        }
        if self.verbose {
            buffer.push_str(" verbose");
        }
        buffer
    }
}

impl fmt::Display for InvocationArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_argument_string())
    }
}

fn relative_to_source(roots: &RunRoots, path: &NormalizedPath) -> Result<NormalizedPath> {
    path.strip_root(&roots.source_root)
        .ok_or_else(|| Error::OutsideSourceRoot {
            path: path.to_native(),
            root: roots.source_root.to_native(),
        })
}

/// Run the engine and wait for it.
///
/// # Errors
///
/// Returns [`Error::EngineFailed`] when the engine reports failure, or the
/// service's error when it cannot be started.
pub fn invoke(
    service: &dyn FileService,
    engine: &NormalizedPath,
    args: &InvocationArgs,
) -> Result<ProcessOutcome> {
    let outcome = service.execute_process(engine, &args.to_argument_string())?;

    if !outcome.success {
        return Err(Error::EngineFailed {
            transform: args.transform.to_native(),
            exit_code: outcome.exit_code,
            stderr: outcome.stderr.trim().to_string(),
        });
    }

    Ok(outcome)
}
