//! Transform resolution and engine invocation for xform
//!
//! Given a tree of base configuration files, this crate works out which
//! sibling transform files apply to each one, in what order, and invokes
//! the external transform engine once per transform:
//!
//! ```text
//!   discover (xform-fs) -> plan per base file -> build arguments -> invoke
//! ```
//!
//! - [`suffix`]: suffix tokens and the file names they resolve to
//! - [`planner`]: the ordered, deduplicated transform chain for a base file
//! - [`invocation`]: engine lookup and the engine's argument string
//! - [`runner`]: the whole pass over a source tree
//! - [`settings`]: validated settings and their layered resolution

pub mod error;
pub mod invocation;
pub mod planner;
pub mod runner;
pub mod settings;
pub mod suffix;

pub use error::{Error, Result};
pub use invocation::{ENGINE_RELATIVE_PATH, EngineFlags, EngineLocator, InvocationArgs, invoke};
pub use planner::{TransformPlan, plan_transforms, suffix_sequence};
pub use runner::{AppliedTransform, RunReport, TransformRunner};
pub use settings::{RunRoots, SettingsLayer, SettingsResolver, TransformSettings};
pub use suffix::{
    CONFIG_EXTENSION, DEFAULT_SUFFIX, normalize_suffix, parse_additional_transforms,
    resolve_transform_path,
};
