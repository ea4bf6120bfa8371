use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use vdt_core::enums::{CommentState, RunMode};

/// Top-level CLI parser for the `vdt` binary.
#[derive(Debug, Parser)]
#[command(name = "vdt", version, about = "Verdict - CI code quality gate")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub const fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            quiet: self.quiet,
            verbose: self.verbose,
        }
    }
}

/// Global flags available before or after subcommands.
#[derive(Clone, Copy, Debug)]
pub struct GlobalFlags {
    pub quiet: bool,
    pub verbose: bool,
}

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Run all configured report destinations for the latest analysis.
    Report(ReportArgs),
    /// Print the objective status for the latest analysis.
    Objective(ObjectiveArgs),
}

/// Arguments for `vdt report`.
#[derive(Clone, Debug, Args)]
pub struct ReportArgs {
    /// Identifier of the analysis being reported.
    #[arg(long, default_value = "local")]
    pub analysis_id: String,

    /// Override the configured artifact directory.
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Override the configured run mode.
    #[arg(long)]
    pub run_mode: Option<RunMode>,

    /// Override the configured comment state.
    #[arg(long)]
    pub comment_state: Option<CommentState>,
}

/// Arguments for `vdt objective`.
#[derive(Clone, Debug, Args)]
pub struct ObjectiveArgs {
    /// Override the configured artifact directory.
    #[arg(long)]
    pub output_dir: Option<PathBuf>,
}
