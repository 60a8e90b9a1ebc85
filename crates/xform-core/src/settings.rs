//! Transform settings and their layered resolution
//!
//! Settings are resolved once, validated, and then handed to the runner.
//! Sources are applied in order, later ones overriding earlier ones field
//! by field:
//!
//! 1. Built-in defaults
//! 2. Project settings (`<source>/.xform/config.toml`)
//! 3. Local overrides (`<source>/.xform/config.local.toml`)
//! 4. An explicit settings file (TOML, JSON or YAML)
//! 5. Command-line overrides

use serde::{Deserialize, Serialize};
use xform_fs::{ConfigStore, NormalizedPath};

use crate::suffix::parse_additional_transforms;
use crate::{Error, Result};

/// Pattern used to find base files when none is configured.
pub const DEFAULT_PATTERN: &str = "*.config";

/// Project settings file, relative to the source root.
pub const PROJECT_SETTINGS_FILE: &str = ".xform/config.toml";

/// Local override settings file, relative to the source root.
pub const LOCAL_SETTINGS_FILE: &str = ".xform/config.local.toml";

/// Validated settings for one transform run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransformSettings {
    /// Environment-specific suffix tried after `Release`
    pub environment_suffix: Option<String>,
    /// Comma-separated suffixes tried after the environment suffix
    pub additional_transforms: Option<String>,
    /// Pass `preservewhitespace` to the engine
    pub preserve_whitespace: bool,
    /// Pass `verbose` to the engine
    pub verbose: bool,
    /// File-name patterns selecting base files
    pub patterns: Vec<String>,
}

impl Default for TransformSettings {
    fn default() -> Self {
        Self {
            environment_suffix: None,
            additional_transforms: None,
            preserve_whitespace: true,
            verbose: true,
            patterns: vec![DEFAULT_PATTERN.to_string()],
        }
    }
}

impl TransformSettings {
    /// The environment suffix, if set to something other than whitespace.
    pub fn environment_suffix(&self) -> Option<&str> {
        self.environment_suffix
            .as_deref()
            .map(str::trim)
            .filter(|suffix| !suffix.is_empty())
    }

    /// The additional suffixes in the order given.
    pub fn additional_suffixes(&self) -> Vec<String> {
        self.additional_transforms
            .as_deref()
            .map(parse_additional_transforms)
            .unwrap_or_default()
    }

    /// Check that every suffix names a sibling file and every pattern is usable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSuffix`] for a suffix containing a path
    /// separator or `..`, and [`Error::InvalidSettings`] for a blank pattern.
    pub fn validate(&self) -> Result<()> {
        let suffixes = self
            .environment_suffix()
            .map(str::to_string)
            .into_iter()
            .chain(self.additional_suffixes());

        for suffix in suffixes {
            if suffix.contains(['/', '\\']) {
                return Err(Error::InvalidSuffix {
                    suffix,
                    reason: "suffixes must not contain path separators".into(),
                });
            }
            if suffix.contains("..") {
                return Err(Error::InvalidSuffix {
                    suffix,
                    reason: "suffixes must not contain '..'".into(),
                });
            }
            if suffix.contains('\0') {
                return Err(Error::InvalidSuffix {
                    suffix,
                    reason: "suffixes must not contain NUL".into(),
                });
            }
        }

        if self.patterns.iter().any(|p| p.trim().is_empty()) {
            return Err(Error::InvalidSettings {
                message: "file patterns must not be blank".into(),
            });
        }

        Ok(())
    }
}

/// One partial source of settings
///
/// Every field is optional; only the fields present override what earlier
/// layers set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SettingsLayer {
    pub environment_suffix: Option<String>,
    pub additional_transforms: Option<String>,
    pub preserve_whitespace: Option<bool>,
    pub verbose: Option<bool>,
    pub patterns: Option<Vec<String>>,
}

impl SettingsLayer {
    /// Overlay this layer onto `settings`.
    pub fn apply_to(&self, settings: &mut TransformSettings) {
        if let Some(ref suffix) = self.environment_suffix {
            settings.environment_suffix = Some(suffix.clone());
        }
        if let Some(ref additional) = self.additional_transforms {
            settings.additional_transforms = Some(additional.clone());
        }
        if let Some(preserve) = self.preserve_whitespace {
            settings.preserve_whitespace = preserve;
        }
        if let Some(verbose) = self.verbose {
            settings.verbose = verbose;
        }
        if let Some(ref patterns) = self.patterns {
            settings.patterns = patterns.clone();
        }
    }
}

/// Source and target roots for one run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunRoots {
    /// Root that base and transform files are read from
    pub source_root: NormalizedPath,
    /// Root that destination files are written under
    pub target_root: NormalizedPath,
}

impl RunRoots {
    /// Transform in place: destinations land in the source tree.
    pub fn in_place(source_root: NormalizedPath) -> Self {
        Self {
            target_root: source_root.clone(),
            source_root,
        }
    }

    /// Write destinations under a separate target root.
    pub fn new(source_root: NormalizedPath, target_root: NormalizedPath) -> Self {
        Self {
            source_root,
            target_root,
        }
    }
}

/// Resolves [`TransformSettings`] from the layered sources
pub struct SettingsResolver {
    source_root: NormalizedPath,
    explicit_file: Option<NormalizedPath>,
    overrides: SettingsLayer,
    store: ConfigStore,
}

impl SettingsResolver {
    /// Create a resolver reading project settings from `source_root`.
    pub fn new(source_root: NormalizedPath) -> Self {
        Self {
            source_root,
            explicit_file: None,
            overrides: SettingsLayer::default(),
            store: ConfigStore::new(),
        }
    }

    /// Also read an explicit settings file after the project layers.
    pub fn with_file(mut self, path: NormalizedPath) -> Self {
        self.explicit_file = Some(path);
        self
    }

    /// Apply `overrides` last.
    pub fn with_overrides(mut self, overrides: SettingsLayer) -> Self {
        self.overrides = overrides;
        self
    }

    /// Merge every layer and validate the result.
    ///
    /// # Errors
    ///
    /// Fails when a present settings file cannot be read or parsed, when the
    /// explicit file is missing, or when the merged settings are invalid.
    pub fn resolve(&self) -> Result<TransformSettings> {
        let mut settings = TransformSettings::default();

        let project_path = self.source_root.join(PROJECT_SETTINGS_FILE);
        if project_path.is_file() {
            tracing::debug!(path = %project_path, "Loading project settings");
            let layer: SettingsLayer = self.store.load(&project_path)?;
            layer.apply_to(&mut settings);
        }

        let local_path = self.source_root.join(LOCAL_SETTINGS_FILE);
        if local_path.is_file() {
            tracing::debug!(path = %local_path, "Loading local settings overrides");
            let layer: SettingsLayer = self.store.load(&local_path)?;
            layer.apply_to(&mut settings);
        }

        if let Some(ref path) = self.explicit_file {
            tracing::debug!(path = %path, "Loading explicit settings file");
            let layer: SettingsLayer = self.store.load(path)?;
            layer.apply_to(&mut settings);
        }

        self.overrides.apply_to(&mut settings);

        settings.validate()?;
        Ok(settings)
    }
}
