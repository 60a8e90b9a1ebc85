//! Run orchestration: discovery, planning and invocation
//!
//! Everything happens sequentially on the calling thread. The first error
//! stops the run; transforms already applied stay applied.

use serde::Serialize;
use xform_fs::{FileService, NormalizedPath, canonical_root, discover_files};

use crate::Result;
use crate::invocation::{EngineFlags, EngineLocator, InvocationArgs, invoke};
use crate::planner::{TransformPlan, plan_transforms, suffix_sequence};
use crate::settings::{RunRoots, TransformSettings};

/// One engine invocation that completed successfully
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppliedTransform {
    pub base: NormalizedPath,
    pub transform: NormalizedPath,
    pub destination: NormalizedPath,
    /// The exact argument string passed to the engine
    pub arguments: String,
}

/// Report from a completed run
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RunReport {
    /// Number of base files discovered
    pub files_scanned: usize,
    /// Transforms applied, in invocation order
    pub applied: Vec<AppliedTransform>,
}

/// Applies transform chains to every base file under a source root
pub struct TransformRunner<'a> {
    service: &'a dyn FileService,
    roots: RunRoots,
    settings: TransformSettings,
    engine: EngineLocator,
}

impl<'a> TransformRunner<'a> {
    pub fn new(service: &'a dyn FileService, roots: RunRoots, settings: TransformSettings) -> Self {
        Self {
            service,
            roots,
            settings,
            engine: EngineLocator::new(),
        }
    }

    pub fn settings(&self) -> &TransformSettings {
        &self.settings
    }

    /// Discover base files and plan each one without invoking anything.
    ///
    /// # Errors
    ///
    /// Fails when the source root is missing or cannot be walked.
    pub fn plan(&self) -> Result<Vec<TransformPlan>> {
        let roots = self.resolved_roots()?;
        self.plan_under(&roots)
    }

    /// Discover, plan and apply every transform.
    ///
    /// The engine is looked up when the first transform is about to run, so
    /// a tree with nothing to transform succeeds even without it.
    ///
    /// # Errors
    ///
    /// Fails on discovery errors, a missing engine, a transform outside the
    /// source root, or the first failed engine run.
    pub fn run(&self) -> Result<RunReport> {
        let roots = self.resolved_roots()?;
        let plans = self.plan_under(&roots)?;
        let flags = EngineFlags::from(&self.settings);

        let mut report = RunReport {
            files_scanned: plans.len(),
            applied: Vec::new(),
        };

        for plan in plans.iter().filter(|plan| !plan.is_empty()) {
            tracing::debug!(base = %plan.base, count = plan.transforms.len(), "Applying transform chain");

            for transform in &plan.transforms {
                let engine = self.engine.locate(self.service)?;
                let args = InvocationArgs::build(&roots, &plan.base, transform, flags)?;

                tracing::info!(base = %plan.base, transform = %transform, "Performing XDT transform...");
                invoke(self.service, engine, &args)?;

                report.applied.push(AppliedTransform {
                    base: plan.base.clone(),
                    transform: transform.clone(),
                    destination: args.destination.clone(),
                    arguments: args.to_argument_string(),
                });
            }
        }

        tracing::info!(
            files = report.files_scanned,
            transforms = report.applied.len(),
            "Configuration transforms complete"
        );
        Ok(report)
    }

    /// One-line summary of what a run will do.
    pub fn describe(&self) -> String {
        let suffixes = suffix_sequence(&self.settings).join(", ");
        let patterns = if self.settings.patterns.is_empty() {
            "all".to_string()
        } else {
            self.settings.patterns.join(", ")
        };

        let mut summary = format!(
            "Apply {suffixes} configuration transforms to {patterns} files under {}",
            self.roots.source_root
        );
        if self.roots.target_root != self.roots.source_root {
            summary.push_str(&format!(", writing results to {}", self.roots.target_root));
        }
        summary
    }

    fn plan_under(&self, roots: &RunRoots) -> Result<Vec<TransformPlan>> {
        let files = discover_files(&roots.source_root, &self.settings.patterns)?;

        Ok(files
            .iter()
            .map(|base| plan_transforms(self.service, base, &self.settings))
            .collect())
    }

    /// Roots in the absolute form discovery reports paths in.
    ///
    /// A target root that does not exist yet is made absolute against the
    /// current directory.
    fn resolved_roots(&self) -> Result<RunRoots> {
        let source_root = canonical_root(&self.roots.source_root)?;

        let target_root = if self.roots.target_root == self.roots.source_root {
            source_root.clone()
        } else if self.roots.target_root.is_dir() {
            canonical_root(&self.roots.target_root)?
        } else {
            let target = self.roots.target_root.to_native();
            let absolute =
                std::path::absolute(&target).map_err(|source| xform_fs::Error::io(&target, source))?;
            NormalizedPath::new(absolute)
        };

        Ok(RunRoots::new(source_root, target_root))
    }
}
