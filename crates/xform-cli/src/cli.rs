//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// xform - Apply layered configuration transforms during deployment
#[derive(Parser, Debug)]
#[command(name = "xform")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Apply every matching transform to every base file
    ///
    /// For each base file, tries `<name>.Release.config`, then the
    /// environment suffix, then each additional suffix, applying each
    /// existing transform once.
    ///
    /// Examples:
    ///   xform run -s ./site                  # Release transforms only
    ///   xform run -s ./site -e Staging       # Release, then Staging
    ///   xform run -s ./site -a "Test,Deploy" # Extra suffixes
    Run {
        #[command(flatten)]
        transform: TransformArgs,

        /// Show the plan without invoking the engine
        #[arg(long)]
        dry_run: bool,

        /// Output as JSON for CI/CD integration
        #[arg(long)]
        json: bool,
    },

    /// Show which transforms would be applied, in order
    Plan {
        #[command(flatten)]
        transform: TransformArgs,

        /// Output as JSON for scripting
        #[arg(long)]
        json: bool,
    },

    /// Summarize what a run would do with the resolved settings
    Describe {
        #[command(flatten)]
        transform: TransformArgs,
    },
}

/// Settings shared by every command
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct TransformArgs {
    /// Source root containing the base configuration files
    #[arg(short, long, default_value = ".")]
    pub source: PathBuf,

    /// Root to write transformed files under (defaults to the source root)
    #[arg(short, long)]
    pub target: Option<PathBuf>,

    /// Environment suffix, e.g. "Staging" for *.Staging.config
    #[arg(short = 'e', long = "env", env = "XFORM_ENVIRONMENT")]
    pub environment: Option<String>,

    /// Comma-separated additional transform suffixes, e.g. "Deploy.config,Test.config"
    #[arg(short, long)]
    pub additional: Option<String>,

    /// Preserve whitespace in the destination file
    #[arg(long, value_name = "BOOL")]
    pub preserve_whitespace: Option<bool>,

    /// Ask the engine for verbose logging
    #[arg(long, value_name = "BOOL")]
    pub engine_verbose: Option<bool>,

    /// File-name pattern selecting base files (repeatable, default "*.config")
    #[arg(short, long = "pattern")]
    pub patterns: Vec<String>,

    /// Settings file (TOML, JSON or YAML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Directory the engine's location is resolved against
    #[arg(long, env = "XFORM_WORKING_DIR")]
    pub working_dir: Option<PathBuf>,
}
