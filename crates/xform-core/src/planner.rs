//! Transform planning for a single base file

use std::collections::HashSet;

use serde::Serialize;
use xform_fs::{FileService, NormalizedPath};

use crate::settings::TransformSettings;
use crate::suffix::{DEFAULT_SUFFIX, resolve_transform_path};

/// Ordered transforms to apply to one base file
///
/// `transforms` is in invocation order and never repeats a path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransformPlan {
    /// The base file being transformed
    pub base: NormalizedPath,
    /// Admitted transform files, in admission order
    pub transforms: Vec<NormalizedPath>,
}

impl TransformPlan {
    /// Whether no transform was admitted.
    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }
}

/// Suffixes tried for every base file, in order.
///
/// `Release` first, then the environment suffix when set, then each
/// additional suffix as listed. Duplicates are kept here.
pub fn suffix_sequence(settings: &TransformSettings) -> Vec<String> {
    let mut sequence = vec![DEFAULT_SUFFIX.to_string()];
    if let Some(env) = settings.environment_suffix() {
        sequence.push(env.to_string());
    }
    sequence.extend(settings.additional_suffixes());
    sequence
}

/// Build the transform chain for `base`.
///
/// A resolved transform is admitted only if the service reports it exists,
/// it is not the base file itself (compared ignoring case), and it was not
/// already admitted for this base file. Rejections are not errors.
pub fn plan_transforms(
    service: &dyn FileService,
    base: &NormalizedPath,
    settings: &TransformSettings,
) -> TransformPlan {
    let mut applied: HashSet<NormalizedPath> = HashSet::new();
    let mut transforms = Vec::new();

    for suffix in suffix_sequence(settings) {
        let transform = resolve_transform_path(base, &suffix);

        if !service.file_exists(&transform) {
            tracing::trace!(base = %base, transform = %transform, "No transform file for suffix");
            continue;
        }
        if transform.eq_ignore_case(base) {
            tracing::debug!(base = %base, %suffix, "Suffix resolves to the base file itself, skipping");
            continue;
        }
        if !applied.insert(transform.clone()) {
            tracing::debug!(base = %base, transform = %transform, "Transform already planned, skipping");
            continue;
        }

        transforms.push(transform);
    }

    TransformPlan {
        base: base.clone(),
        transforms,
    }
}
