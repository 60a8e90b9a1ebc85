//! Describe command implementation

use xform_core::TransformRunner;

use super::CommandContext;
use crate::cli::TransformArgs;
use crate::error::Result;

/// Print the one-line summary of a run with the resolved settings.
pub fn run_describe(args: &TransformArgs) -> Result<()> {
    let ctx = CommandContext::from_args(args)?;
    let runner = TransformRunner::new(&ctx.service, ctx.roots, ctx.settings);
    println!("{}", runner.describe());
    Ok(())
}
