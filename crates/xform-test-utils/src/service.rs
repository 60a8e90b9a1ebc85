//! In-memory [`FileService`] that records what the pipeline asks of it.
//!
//! Realism level: **FAKE**. No filesystem access and no processes. Use it for
//! planner and runner tests that only care about which files are probed and
//! which invocations are issued, in what order.

use std::cell::{Cell, RefCell};
use std::collections::{HashSet, VecDeque};

use xform_fs::{FileService, NormalizedPath, ProcessOutcome, Result};

/// One call to [`FileService::execute_process`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedInvocation {
    pub executable: NormalizedPath,
    pub arguments: String,
}

/// A [`FileService`] over a fixed set of existing files.
///
/// Existence checks are exact and case-sensitive. Each invocation is
/// recorded and answered with the next scripted exit code, or `0` once
/// the script runs out.
#[derive(Debug)]
pub struct RecordingFileService {
    files: HashSet<NormalizedPath>,
    base_working_directory: NormalizedPath,
    exit_codes: RefCell<VecDeque<i32>>,
    invocations: RefCell<Vec<RecordedInvocation>>,
    existence_checks: Cell<usize>,
}

impl Default for RecordingFileService {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingFileService {
    /// A service with no files and `/agent` as its base working directory.
    pub fn new() -> Self {
        Self {
            files: HashSet::new(),
            base_working_directory: NormalizedPath::new("/agent"),
            exit_codes: RefCell::new(VecDeque::new()),
            invocations: RefCell::new(Vec::new()),
            existence_checks: Cell::new(0),
        }
    }

    /// Mark `path` as existing.
    pub fn with_file(mut self, path: impl Into<NormalizedPath>) -> Self {
        self.files.insert(path.into());
        self
    }

    /// Report `dir` as the base working directory.
    pub fn with_base_working_directory(mut self, dir: impl Into<NormalizedPath>) -> Self {
        self.base_working_directory = dir.into();
        self
    }

    /// Answer the next invocations with these exit codes, in order.
    pub fn with_exit_codes(self, codes: impl IntoIterator<Item = i32>) -> Self {
        self.exit_codes.borrow_mut().extend(codes);
        self
    }

    /// Whether `path` was registered, without counting as a check.
    pub fn has_file(&self, path: &NormalizedPath) -> bool {
        self.files.contains(path)
    }

    /// Every invocation issued so far.
    pub fn invocations(&self) -> Vec<RecordedInvocation> {
        self.invocations.borrow().clone()
    }

    /// Argument strings of every invocation issued so far.
    pub fn argument_strings(&self) -> Vec<String> {
        self.invocations
            .borrow()
            .iter()
            .map(|inv| inv.arguments.clone())
            .collect()
    }

    /// Number of `file_exists` calls so far.
    pub fn existence_checks(&self) -> usize {
        self.existence_checks.get()
    }
}

impl FileService for RecordingFileService {
    fn file_exists(&self, path: &NormalizedPath) -> bool {
        self.existence_checks.set(self.existence_checks.get() + 1);
        self.files.contains(path)
    }

    fn base_working_directory(&self) -> Result<NormalizedPath> {
        Ok(self.base_working_directory.clone())
    }

    fn execute_process(
        &self,
        executable: &NormalizedPath,
        arguments: &str,
    ) -> Result<ProcessOutcome> {
        self.invocations.borrow_mut().push(RecordedInvocation {
            executable: executable.clone(),
            arguments: arguments.to_string(),
        });

        let code = self.exit_codes.borrow_mut().pop_front().unwrap_or(0);
        let mut outcome = ProcessOutcome::exited(code);
        if code != 0 {
            outcome.stderr = format!("engine exited with {code}");
        }
        Ok(outcome)
    }
}
