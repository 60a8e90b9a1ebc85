//! Suffix tokens and the transform file names they resolve to
//!
//! A suffix token such as `Release` names a transform variant. Resolving it
//! against a base file swaps the base file's extension for the normalized
//! token, so `Web.config` with `Production` becomes `Web.Production.config`.

use xform_fs::NormalizedPath;

/// The suffix every base file is tried with first.
pub const DEFAULT_SUFFIX: &str = "Release";

/// Extension marker shared by base and transform files.
pub const CONFIG_EXTENSION: &str = ".config";

/// Append `.config` to `token` unless it already ends with it.
///
/// The check ignores ASCII case, so `Test.CONFIG` is left alone. Applying
/// this twice gives the same result as applying it once.
pub fn normalize_suffix(token: &str) -> String {
    if has_config_extension(token) {
        token.to_string()
    } else {
        format!("{token}{CONFIG_EXTENSION}")
    }
}

fn has_config_extension(token: &str) -> bool {
    let marker = CONFIG_EXTENSION.len();
    token.len() >= marker
        && token.is_char_boundary(token.len() - marker)
        && token[token.len() - marker..].eq_ignore_ascii_case(CONFIG_EXTENSION)
}

/// Compute the transform file `token` names for `base`.
///
/// Pure path arithmetic; whether the file exists is the caller's concern.
pub fn resolve_transform_path(base: &NormalizedPath, token: &str) -> NormalizedPath {
    base.change_extension(&normalize_suffix(token))
}

/// Split a free-text, comma-separated suffix list.
///
/// Entries are trimmed and blank entries dropped. Order and duplicates are
/// kept; deduplication happens against resolved paths during planning.
pub fn parse_additional_transforms(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
