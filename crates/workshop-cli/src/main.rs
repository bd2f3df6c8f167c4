//! Workshop Manager CLI
//!
//! One-pass reconciliation of a workshop repository: package naming first,
//! then solution-to-problem test mirroring. Exits 0 on success and 1 on
//! any fatal parse or filesystem error.

mod cli;
mod error;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use workshop_core::{NormalizedPath, SyncEngine, SyncOptions};

use cli::Cli;
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    let root = match cli.root {
        Some(path) => path,
        None => std::env::current_dir()?,
    };
    let engine = SyncEngine::new(NormalizedPath::new(&root));
    let report = engine.run(SyncOptions {
        dry_run: cli.dry_run,
    })?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    for path in &report.updated {
        if cli.dry_run {
            println!("{} {}", "[dry-run] would update".dimmed(), path.cyan());
        } else {
            println!("updated {}", path.cyan());
        }
    }

    Ok(())
}
