//! Recursive discovery of candidate base files

use std::collections::BTreeSet;

use glob::{MatchOptions, Pattern};
use walkdir::WalkDir;

use crate::{Error, NormalizedPath, Result};

/// File names are matched the way Windows enumerates them.
const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: false,
    require_literal_separator: true,
    require_literal_leading_dot: false,
};

/// Resolve `root` to the absolute, symlink-free form discovery reports
/// paths under.
///
/// # Errors
///
/// Fails when `root` does not exist or is not a directory.
pub fn canonical_root(root: &NormalizedPath) -> Result<NormalizedPath> {
    if !root.is_dir() {
        return Err(Error::RootNotFound {
            path: root.to_native(),
        });
    }

    let native_root = root.to_native();
    let absolute = dunce::canonicalize(&native_root).map_err(|e| Error::io(&native_root, e))?;
    Ok(NormalizedPath::new(absolute))
}

/// List every file below `root` whose name matches any of `patterns`.
///
/// Recurses into all subdirectories. An empty pattern list matches every
/// file. The result holds absolute paths, each listed once, in
/// lexicographic order.
///
/// # Errors
///
/// Fails when `root` does not exist or is not a directory, when a pattern
/// does not parse, or when any part of the tree cannot be read.
pub fn discover_files(root: &NormalizedPath, patterns: &[String]) -> Result<Vec<NormalizedPath>> {
    let absolute_root = canonical_root(root)?.to_native();

    let matchers = patterns
        .iter()
        .map(|pattern| {
            Pattern::new(pattern).map_err(|e| Error::InvalidPattern {
                pattern: pattern.clone(),
                message: e.to_string(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    let mut found = BTreeSet::new();
    for entry in WalkDir::new(&absolute_root).follow_links(true) {
        let entry = entry.map_err(|e| {
            let path = e
                .path()
                .map(|p| p.to_path_buf())
                .unwrap_or_else(|| absolute_root.clone());
            let source = e
                .into_io_error()
                .unwrap_or_else(|| std::io::Error::other("filesystem loop detected"));
            Error::io(path, source)
        })?;

        if !entry.file_type().is_file() {
            continue;
        }

        let name = entry.file_name().to_string_lossy();
        if matchers.is_empty()
            || matchers
                .iter()
                .any(|matcher| matcher.matches_with(&name, MATCH_OPTIONS))
        {
            found.insert(NormalizedPath::new(entry.path()));
        }
    }

    tracing::debug!(root = %root, count = found.len(), "Discovered candidate files");
    Ok(found.into_iter().collect())
}
