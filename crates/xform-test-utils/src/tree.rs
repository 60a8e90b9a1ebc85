//! [`TestTree`] builder for on-disk transform scenarios.

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;
use xform_fs::NormalizedPath;

/// Shell script that appends one line per argument, then a `---` separator,
/// to `invocations.log` next to itself.
pub const RECORDING_ENGINE_SCRIPT: &str = r#"#!/bin/sh
log="$(dirname "$0")/invocations.log"
for arg in "$@"; do
    printf '%s\n' "$arg" >> "$log"
done
printf '%s\n' '---' >> "$log"
"#;

/// A temporary directory holding a `source/` tree and an `agent/` directory.
///
/// # Example
///
/// ```rust,no_run
/// use xform_test_utils::TestTree;
///
/// let tree = TestTree::new();
/// tree.write("Web.config", "<configuration />");
/// tree.write("Web.Release.config", "<configuration />");
/// tree.assert_file_exists("Web.Release.config");
/// ```
pub struct TestTree {
    temp_dir: TempDir,
}

impl Default for TestTree {
    fn default() -> Self {
        Self::new()
    }
}

impl TestTree {
    /// Create an empty tree with `source/` and `agent/` directories.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().unwrap();
        fs::create_dir_all(temp_dir.path().join("source")).unwrap();
        fs::create_dir_all(temp_dir.path().join("agent")).unwrap();
        Self { temp_dir }
    }

    /// Root of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// The `source/` directory.
    pub fn source_dir(&self) -> PathBuf {
        self.root().join("source")
    }

    /// The `agent/` directory, used as the base working directory.
    pub fn agent_dir(&self) -> PathBuf {
        self.root().join("agent")
    }

    /// The source directory as a [`NormalizedPath`].
    pub fn source_root(&self) -> NormalizedPath {
        NormalizedPath::new(self.source_dir())
    }

    /// Write `content` to `relative` under `source/`, creating parents.
    pub fn write(&self, relative: &str, content: &str) {
        let path = self.source_dir().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content)
            .unwrap_or_else(|e| panic!("TestTree::write: failed to write {}: {e}", path.display()));
    }

    /// Install [`RECORDING_ENGINE_SCRIPT`] at `relative` under `agent/`.
    ///
    /// Returns the path of the log the engine appends to.
    #[cfg(unix)]
    pub fn install_recording_engine(&self, relative: &str) -> PathBuf {
        use std::os::unix::fs::PermissionsExt;

        let path = self.agent_dir().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, RECORDING_ENGINE_SCRIPT).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
        path.with_file_name("invocations.log")
    }

    /// Install a script at `relative` under `agent/` that always exits with `code`.
    #[cfg(unix)]
    pub fn install_failing_engine(&self, relative: &str, code: i32) {
        use std::os::unix::fs::PermissionsExt;

        let path = self.agent_dir().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, format!("#!/bin/sh\necho 'transform failed' >&2\nexit {code}\n")).unwrap();
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755)).unwrap();
    }

    /// Assert that `relative` exists under `source/`.
    ///
    /// # Panics
    /// Panics with a descriptive message if the path does not exist.
    pub fn assert_file_exists(&self, relative: &str) {
        let full_path = self.source_dir().join(relative);
        assert!(
            full_path.exists(),
            "Expected file to exist: {}",
            full_path.display()
        );
    }
}
