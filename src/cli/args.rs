//! Command line arguments for dq-check.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// SQL data-quality validation for warehouse pipelines
#[derive(Debug, Parser)]
#[command(name = "dq-check", version, about)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the checks in a suite file
    Run(RunArgs),
    /// List the checks in a suite file without executing them
    List(ListArgs),
}

#[derive(Debug, clap::Args)]
pub struct RunArgs {
    /// Path to the suite configuration file
    #[arg(long, short = 'c', value_name = "FILE")]
    pub config: PathBuf,

    /// Connection id to use, overriding the suite default
    #[arg(long, value_name = "ID")]
    pub conn: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Only output failing checks
    #[arg(long)]
    pub quiet: bool,

    /// Include durations and actual values
    #[arg(long)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}

#[derive(Debug, clap::Args)]
pub struct ListArgs {
    /// Path to the suite configuration file
    #[arg(long, short = 'c', value_name = "FILE")]
    pub config: PathBuf,
}

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable terminal output
    #[default]
    Text,
    /// Machine-readable JSON
    Json,
}
