//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;

/// Workshop Manager - Keep workshop exercise projects consistent
///
/// Runs one reconciliation pass over the repository: rewrites each
/// project's manifest name from its path, then mirrors solution test
/// suites into their paired problem variants.
#[derive(Parser, Debug)]
#[command(name = "workshop")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Workshop repository root (defaults to the current directory)
    pub root: Option<PathBuf>,

    /// Preview changes without applying them
    #[arg(long)]
    pub dry_run: bool,

    /// Output the reconciliation report as JSON for scripting
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
