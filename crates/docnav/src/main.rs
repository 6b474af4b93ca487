//! docnav CLI - sidebar validation for documentation sites.
//!
//! Provides commands for:
//! - `check`: Validate sidebars against the documents on disk
//! - `tree`: Print the resolved navigation tree (text or JSON)
//! - `docs`: List discovered documents

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, DocsArgs, TreeArgs};
use output::Output;

/// docnav - sidebar resolution for documentation sites.
#[derive(Parser)]
#[command(name = "docnav", version, about)]
struct Cli {
    /// Enable verbose output (info-level logs).
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate sidebars against discovered documents.
    Check(CheckArgs),
    /// Print the resolved navigation tree.
    Tree(TreeArgs),
    /// List discovered documents.
    Docs(DocsArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let result = match cli.command {
        Commands::Check(args) => args.execute(),
        Commands::Tree(args) => args.execute(),
        Commands::Docs(args) => args.execute(),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
