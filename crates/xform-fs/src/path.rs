//! Normalized path handling for cross-platform compatibility

use std::path::{Path, PathBuf};

use serde::{Serialize, Serializer};

/// A path normalized to use forward slashes internally.
///
/// Provides consistent path handling across platforms by normalizing
/// all paths to forward slashes internally and converting to
/// platform-native format only at I/O boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NormalizedPath {
    /// Internal representation always uses forward slashes
    inner: String,
}

impl NormalizedPath {
    /// Create a new NormalizedPath from any path-like input.
    ///
    /// Converts backslashes to forward slashes for internal storage.
    pub fn new(path: impl AsRef<Path>) -> Self {
        let path_str = path.as_ref().to_string_lossy();
        let normalized = path_str.replace('\\', "/");
        Self { inner: normalized }
    }

    /// Get the internal normalized string representation.
    pub fn as_str(&self) -> &str {
        &self.inner
    }

    /// Convert to a platform-native PathBuf for I/O operations.
    pub fn to_native(&self) -> PathBuf {
        PathBuf::from(&self.inner)
    }

    /// Join this path with a segment.
    pub fn join(&self, segment: &str) -> Self {
        let segment_normalized = segment.replace('\\', "/");
        let joined = if self.inner.is_empty() {
            segment_normalized
        } else if self.inner.ends_with('/') {
            format!("{}{}", self.inner, segment_normalized)
        } else {
            format!("{}/{}", self.inner, segment_normalized)
        };
        Self { inner: joined }
    }

    /// Get the parent directory.
    pub fn parent(&self) -> Option<Self> {
        let trimmed = self.inner.trim_end_matches('/');
        match trimmed.rfind('/') {
            Some(idx) if idx > 0 => Some(Self {
                inner: trimmed[..idx].to_string(),
            }),
            Some(0) => Some(Self {
                inner: "/".to_string(),
            }),
            _ => None,
        }
    }

    /// Get the file name component.
    pub fn file_name(&self) -> Option<&str> {
        let trimmed = self.inner.trim_end_matches('/');
        trimmed.rsplit('/').next().filter(|name| !name.is_empty())
    }

    /// Check if this path exists on the filesystem.
    pub fn exists(&self) -> bool {
        self.to_native().exists()
    }

    /// Check if this is a directory.
    pub fn is_dir(&self) -> bool {
        self.to_native().is_dir()
    }

    /// Check if this is a file.
    pub fn is_file(&self) -> bool {
        self.to_native().is_file()
    }

    /// Get the extension if present.
    ///
    /// A dot-file is all extension: `.config` has extension `config`.
    pub fn extension(&self) -> Option<&str> {
        self.file_name()
            .and_then(|name| name.rfind('.').map(|idx| &name[idx + 1..]))
    }

    /// Replace the extension of the file name with `ext`.
    ///
    /// Everything after the last dot of the file name is swapped out, so
    /// `ext` may itself contain dots: `Web.config` with `Release.config`
    /// becomes `Web.Release.config`. A single leading dot on `ext` is
    /// accepted. An empty `ext` drops the extension. A leading dot on the
    /// file name starts an extension, so `.config` with `Release.config`
    /// becomes `.Release.config`.
    pub fn change_extension(&self, ext: &str) -> Self {
        let (dir, name) = match self.inner.rfind('/') {
            Some(idx) => self.inner.split_at(idx + 1),
            None => ("", self.inner.as_str()),
        };

        let stem = match name.rfind('.') {
            Some(idx) => &name[..idx],
            None => name,
        };

        let ext = ext.strip_prefix('.').unwrap_or(ext);
        let inner = if ext.is_empty() {
            format!("{dir}{stem}")
        } else {
            format!("{dir}{stem}.{ext}")
        };

        Self { inner }
    }

    /// Express this path relative to `root`.
    ///
    /// Returns `None` when `root` is not a whole-component prefix of this
    /// path, or when the two are the same path.
    pub fn strip_root(&self, root: &NormalizedPath) -> Option<Self> {
        let root = root.inner.trim_end_matches('/');
        let rest = self.inner.strip_prefix(root)?;
        let rest = rest.strip_prefix('/')?;
        if rest.is_empty() {
            None
        } else {
            Some(Self {
                inner: rest.to_string(),
            })
        }
    }

    /// Compare two paths ignoring case.
    pub fn eq_ignore_case(&self, other: &NormalizedPath) -> bool {
        self.inner.to_lowercase() == other.inner.to_lowercase()
    }
}

impl AsRef<Path> for NormalizedPath {
    fn as_ref(&self) -> &Path {
        Path::new(&self.inner)
    }
}

impl std::fmt::Display for NormalizedPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.inner)
    }
}

impl Serialize for NormalizedPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.inner)
    }
}

impl From<&str> for NormalizedPath {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for NormalizedPath {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

impl From<PathBuf> for NormalizedPath {
    fn from(p: PathBuf) -> Self {
        Self::new(p)
    }
}

impl From<&Path> for NormalizedPath {
    fn from(p: &Path) -> Self {
        Self::new(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn change_extension_keeps_directory() {
        let path = NormalizedPath::new("/src/site/Web.config");
        assert_eq!(
            path.change_extension("Staging.config").as_str(),
            "/src/site/Web.Staging.config"
        );
    }

    #[test]
    fn change_extension_ignores_dots_in_directories() {
        let path = NormalizedPath::new("/src/v1.2/README");
        assert_eq!(path.change_extension("config").as_str(), "/src/v1.2/README.config");
    }

    #[test]
    fn change_extension_replaces_whole_dotfile_name() {
        let path = NormalizedPath::new("/src/.config");
        assert_eq!(path.change_extension("Release.config").as_str(), "/src/.Release.config");
        assert_eq!(path.change_extension(".config"), path);
    }

    #[test]
    fn strip_root_requires_component_boundary() {
        let path = NormalizedPath::new("/srcfoo/Web.config");
        assert!(path.strip_root(&NormalizedPath::new("/src")).is_none());
    }
}
