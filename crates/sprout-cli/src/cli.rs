use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "sprout",
    about = "Sprout — seed-driven agent workspace generator",
    version,
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding seed files (overrides $SPROUT_SEEDS_DIR)
    #[arg(long, global = true)]
    pub seeds_dir: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate a fresh workspace from a seed
    Init(InitArgs),
    /// List available seeds
    List(ListArgs),
    /// Render a seed without writing anything
    Preview(PreviewArgs),
    /// Validate a seed file
    Validate(ValidateArgs),
    /// Show workspace metadata
    Status(StatusArgs),
    /// Update a workspace to its seed's current version
    Update(UpdateArgs),
}

#[derive(Args)]
pub struct InitArgs {
    /// Seed name or path to a seed file
    pub seed: String,
    /// Output directory for the workspace
    #[arg(short, long, default_value = "workspace")]
    pub output: PathBuf,
}

#[derive(Args)]
pub struct ListArgs {}

#[derive(Args)]
pub struct PreviewArgs {
    /// Seed name or path to a seed file
    pub seed: String,
    /// Show only this document (e.g. SOUL.md)
    #[arg(short, long)]
    pub file: Option<String>,
}

#[derive(Args)]
pub struct ValidateArgs {
    /// Path to the seed file
    pub path: PathBuf,
}

#[derive(Args)]
pub struct StatusArgs {
    /// Workspace directory
    #[arg(short, long, default_value = "workspace")]
    pub workspace: PathBuf,
}

#[derive(Args)]
pub struct UpdateArgs {
    /// Workspace directory
    #[arg(short, long, default_value = "workspace")]
    pub workspace: PathBuf,
    /// Seed to update to (defaults to the workspace's recorded seed)
    #[arg(short, long)]
    pub seed: Option<String>,
    /// Show what would change without writing
    #[arg(long)]
    pub dry_run: bool,
    /// Proceed even when the workspace has no metadata
    #[arg(long)]
    pub force: bool,
}
