//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI parser for `mintid`.
#[derive(Debug, Parser)]
#[command(name = "mintid", version, about = "Mint identifiers into digitization metadata records")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the step against a job's metadata record.
    Run(RunArgs),
    /// Print one identifier for the resolved configuration, touching no record.
    Generate(GenerateArgs),
}

/// Arguments for `mintid run`.
#[derive(Debug, Args)]
pub struct RunArgs {
    /// Process directory holding the job's metadata record.
    #[arg(long)]
    pub process: PathBuf,

    /// Project name used to select the configuration block.
    #[arg(long, default_value = "")]
    pub project: String,

    /// Step name used to select the configuration block.
    #[arg(long, default_value = "")]
    pub step: String,

    /// Step configuration file.
    #[arg(long, default_value = "mintid.yaml")]
    pub config: PathBuf,

    /// Ruleset file; defaults to ruleset.yaml inside the process directory.
    #[arg(long)]
    pub ruleset: Option<PathBuf>,

    /// Metadata record; defaults to meta.yaml inside the process directory.
    #[arg(long)]
    pub meta: Option<PathBuf>,
}

/// Arguments for `mintid generate`.
#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Project name used to select the configuration block.
    #[arg(long, default_value = "")]
    pub project: String,

    /// Step name used to select the configuration block.
    #[arg(long, default_value = "")]
    pub step: String,

    /// Step configuration file.
    #[arg(long, default_value = "mintid.yaml")]
    pub config: PathBuf,
}
