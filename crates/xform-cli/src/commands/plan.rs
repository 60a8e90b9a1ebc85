//! Plan command implementation
//!
//! Discovers base files and prints the transform chain for each one
//! without invoking the engine.

use colored::Colorize;

use xform_core::{TransformPlan, TransformRunner};

use super::CommandContext;
use crate::cli::TransformArgs;
use crate::error::Result;

/// Run the plan command
pub fn run_plan(args: &TransformArgs, json: bool) -> Result<()> {
    let ctx = CommandContext::from_args(args)?;
    let runner = TransformRunner::new(&ctx.service, ctx.roots, ctx.settings);
    let plans = runner.plan()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&plans)?);
    } else {
        print_plans(&plans);
    }
    Ok(())
}

/// Print the non-empty plans followed by a summary line.
pub(crate) fn print_plans(plans: &[TransformPlan]) {
    let mut total = 0;
    for plan in plans.iter().filter(|p| !p.is_empty()) {
        println!("{}", plan.base.to_string().cyan());
        for (idx, transform) in plan.transforms.iter().enumerate() {
            println!("   {}. {}", idx + 1, transform);
        }
        total += plan.transforms.len();
    }

    if total == 0 {
        println!("{} No transforms to apply.", "OK".green().bold());
    } else {
        println!();
        println!(
            "{} transform(s) planned across {} file(s).",
            total,
            plans.len()
        );
    }
}
