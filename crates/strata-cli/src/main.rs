//! Strata CLI
//!
//! Command-line interface for strata

use clap::{Parser, Subcommand};
use strata_core::logging::{init, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "strata")]
#[command(about = "Strata - minimal local version control", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Initialize a repository store
    Init(commands::init::InitArgs),
    /// Register paths in the staging manifest
    Track(commands::track::TrackArgs),
    /// Commit everything that changed since the last snapshot
    Snapshot(commands::snapshot::SnapshotArgs),
}

fn main() {
    init(Profile::Development);

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Init(args) => commands::init::execute(args),
        Commands::Track(args) => commands::track::execute(args),
        Commands::Snapshot(args) => commands::snapshot::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
