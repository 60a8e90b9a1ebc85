//! The file and process service consumed by the transform pipeline
//!
//! Every existence check, base-directory lookup and engine invocation goes
//! through [`FileService`], so the pipeline can run against the local
//! machine or against any other host that offers the same capabilities.

use std::process::Command;

use crate::{Error, NormalizedPath, Result};

/// Outcome of one external process invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProcessOutcome {
    /// Exit code, if the process exited normally
    pub exit_code: Option<i32>,
    /// Whether the process reported success
    pub success: bool,
    /// Captured stdout
    pub stdout: String,
    /// Captured stderr
    pub stderr: String,
}

impl ProcessOutcome {
    /// An outcome for a process that exited with `code`.
    pub fn exited(code: i32) -> Self {
        Self {
            exit_code: Some(code),
            success: code == 0,
            stdout: String::new(),
            stderr: String::new(),
        }
    }
}

/// Capabilities the transform pipeline needs from its host.
///
/// Calls are synchronous and are never issued concurrently.
pub trait FileService {
    /// Whether a file exists at `path`.
    fn file_exists(&self, path: &NormalizedPath) -> bool;

    /// The directory the host resolves bundled resources against.
    fn base_working_directory(&self) -> Result<NormalizedPath>;

    /// Run `executable` with a single command-line argument string and wait
    /// for it to finish.
    ///
    /// A process that runs and exits non-zero is reported through the
    /// outcome, not as an error.
    fn execute_process(&self, executable: &NormalizedPath, arguments: &str)
    -> Result<ProcessOutcome>;
}

/// [`FileService`] backed by the local filesystem and process table.
#[derive(Debug, Clone, Default)]
pub struct LocalFileService {
    base_working_directory: Option<NormalizedPath>,
}

impl LocalFileService {
    /// Use the current directory as the base working directory.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use `dir` as the base working directory.
    pub fn with_base_working_directory(dir: NormalizedPath) -> Self {
        Self {
            base_working_directory: Some(dir),
        }
    }
}

impl FileService for LocalFileService {
    fn file_exists(&self, path: &NormalizedPath) -> bool {
        path.is_file()
    }

    fn base_working_directory(&self) -> Result<NormalizedPath> {
        match &self.base_working_directory {
            Some(dir) => Ok(dir.clone()),
            None => std::env::current_dir()
                .map(NormalizedPath::new)
                .map_err(|e| Error::io(".", e)),
        }
    }

    fn execute_process(
        &self,
        executable: &NormalizedPath,
        arguments: &str,
    ) -> Result<ProcessOutcome> {
        let args = shell_words::split(arguments).map_err(|e| Error::InvalidArguments {
            executable: executable.to_native(),
            message: e.to_string(),
        })?;

        tracing::debug!(executable = %executable, ?args, "Starting process");

        let output = Command::new(executable.to_native())
            .args(&args)
            .output()
            .map_err(|e| Error::ProcessSpawn {
                executable: executable.to_native(),
                source: e,
            })?;

        let stdout = String::from_utf8_lossy(&output.stdout).to_string();
        let stderr = String::from_utf8_lossy(&output.stderr).to_string();

        for line in stdout.lines().filter(|l| !l.trim().is_empty()) {
            tracing::info!("{}", line);
        }
        for line in stderr.lines().filter(|l| !l.trim().is_empty()) {
            tracing::warn!("{}", line);
        }

        Ok(ProcessOutcome {
            exit_code: output.status.code(),
            success: output.status.success(),
            stdout,
            stderr,
        })
    }
}
