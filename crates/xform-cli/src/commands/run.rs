//! Run command implementation

use colored::Colorize;

use xform_core::TransformRunner;

use super::CommandContext;
use super::plan::print_plans;
use crate::cli::TransformArgs;
use crate::error::Result;

/// Run the transforms, or only plan them when `dry_run` is set.
pub fn run_transforms(args: &TransformArgs, dry_run: bool, json: bool) -> Result<()> {
    let ctx = CommandContext::from_args(args)?;
    let runner = TransformRunner::new(&ctx.service, ctx.roots, ctx.settings);

    if dry_run {
        let plans = runner.plan()?;
        if json {
            println!("{}", serde_json::to_string_pretty(&plans)?);
        } else {
            println!("{} Dry run, the engine will not be invoked.", "=>".blue().bold());
            print_plans(&plans);
        }
        return Ok(());
    }

    if !json {
        println!("{} {}", "=>".blue().bold(), runner.describe());
    }

    let report = runner.run()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for applied in &report.applied {
        println!(
            "   {} {} {} {}",
            "+".green(),
            applied.transform,
            "->".dimmed(),
            applied.destination
        );
    }
    println!(
        "{} Applied {} transform(s) across {} file(s).",
        "OK".green().bold(),
        report.applied.len(),
        report.files_scanned
    );
    Ok(())
}
