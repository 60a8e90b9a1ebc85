//! Command implementations for xform-cli

pub mod describe;
pub mod plan;
pub mod run;

pub use describe::run_describe;
pub use plan::run_plan;
pub use run::run_transforms;

use xform_core::{RunRoots, SettingsLayer, SettingsResolver, TransformSettings};
use xform_fs::{LocalFileService, NormalizedPath};

use crate::cli::TransformArgs;
use crate::error::{CliError, Result};

/// Everything a command needs to build a runner
pub struct CommandContext {
    pub service: LocalFileService,
    pub roots: RunRoots,
    pub settings: TransformSettings,
}

impl CommandContext {
    /// Resolve settings and roots from the command-line arguments.
    pub fn from_args(args: &TransformArgs) -> Result<Self> {
        let source_root = NormalizedPath::new(&args.source);

        let overrides = SettingsLayer {
            environment_suffix: args.environment.clone(),
            additional_transforms: args.additional.clone(),
            preserve_whitespace: args.preserve_whitespace,
            verbose: args.engine_verbose,
            patterns: (!args.patterns.is_empty()).then(|| args.patterns.clone()),
        };

        let mut resolver = SettingsResolver::new(source_root.clone()).with_overrides(overrides);
        if let Some(ref config) = args.config {
            let config = NormalizedPath::new(config);
            if !config.is_file() {
                return Err(CliError::user(format!("Settings file not found: {config}")));
            }
            resolver = resolver.with_file(config);
        }
        let settings = resolver.resolve()?;
        tracing::debug!(?settings, "Resolved settings");

        let roots = match args.target {
            Some(ref target) => RunRoots::new(source_root, NormalizedPath::new(target)),
            None => RunRoots::in_place(source_root),
        };

        let service = match args.working_dir {
            Some(ref dir) => LocalFileService::with_base_working_directory(NormalizedPath::new(dir)),
            None => LocalFileService::new(),
        };

        Ok(Self {
            service,
            roots,
            settings,
        })
    }
}
