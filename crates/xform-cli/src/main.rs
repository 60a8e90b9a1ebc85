//! xform CLI
//!
//! Applies layered configuration transforms to a source tree.

mod cli;
mod commands;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over the verbosity flag
    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(cli.verbose)
        .with_writer(std::io::stderr)
        .init();
    tracing::debug!("Verbose mode enabled");

    match cli.command {
        Some(cmd) => execute_command(cmd),
        None => {
            println!("{} configuration transforms", "xform".green().bold());
            println!();
            println!("Run {} for available commands.", "xform --help".cyan());
            Ok(())
        }
    }
}

fn execute_command(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Run {
            transform,
            dry_run,
            json,
        } => commands::run_transforms(&transform, dry_run, json),
        Commands::Plan { transform, json } => commands::run_plan(&transform, json),
        Commands::Describe { transform } => commands::run_describe(&transform),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use xform_test_utils::TestTree;

    fn args_for(tree: &TestTree) -> cli::TransformArgs {
        cli::TransformArgs {
            source: tree.source_dir(),
            target: None,
            environment: Some("Staging".into()),
            additional: None,
            preserve_whitespace: None,
            engine_verbose: None,
            patterns: Vec::new(),
            config: None,
            working_dir: Some(tree.agent_dir()),
        }
    }

    #[test]
    fn test_plan_with_temp_tree() {
        let tree = TestTree::new();
        tree.write("Web.config", "<configuration />");
        tree.write("Web.Staging.config", "<configuration />");

        let result = commands::run_plan(&args_for(&tree), false);
        assert!(result.is_ok());
    }

    #[test]
    fn test_run_without_engine_fails_when_transform_exists() {
        let tree = TestTree::new();
        tree.write("Web.config", "<configuration />");
        tree.write("Web.Release.config", "<configuration />");

        let result = commands::run_transforms(&args_for(&tree), false, false);
        assert!(matches!(
            result,
            Err(error::CliError::Core(xform_core::Error::MissingTool { .. }))
        ));
    }

    #[test]
    fn test_dry_run_does_not_need_engine() {
        let tree = TestTree::new();
        tree.write("Web.config", "<configuration />");
        tree.write("Web.Release.config", "<configuration />");

        let result = commands::run_transforms(&args_for(&tree), true, true);
        assert!(result.is_ok());
    }

    #[test]
    fn test_describe_missing_settings_file_fails() {
        let tree = TestTree::new();
        let mut args = args_for(&tree);
        args.config = Some(PathBuf::from("/definitely/not/here.toml"));

        assert!(commands::run_describe(&args).is_err());
    }

    #[test]
    fn test_cli_error_user() {
        let error = error::CliError::user("test error");
        assert_eq!(format!("{}", error), "test error");
    }
}
