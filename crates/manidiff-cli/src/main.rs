//! manidiff CLI
//!
//! Headless front end over the manifest index: builds the merged tree of two
//! manifest collections and resolves diff actions for its leaves.

use clap::{Parser, Subcommand};
use manidiff_core::logging_facility::{init, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "manidiff")]
#[command(about = "manidiff - Compare two collections of Kubernetes manifests", long_about = None)]
struct Cli {
    /// Human-readable debug logs on stderr
    #[arg(short, long, global = true, conflicts_with = "log_json")]
    verbose: bool,

    /// JSON logs on stderr
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the merged group/kind/name tree of two inputs
    Tree(commands::tree::TreeArgs),
    /// Resolve the diff for one leaf, or between two single-sided leaves
    Diff(commands::diff::DiffArgs),
}

fn main() {
    let cli = Cli::parse();

    if cli.verbose {
        init(Profile::Development);
    } else if cli.log_json {
        init(Profile::Production);
    }

    let result = match cli.command {
        Commands::Tree(args) => commands::tree::execute(args),
        Commands::Diff(args) => commands::diff::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
