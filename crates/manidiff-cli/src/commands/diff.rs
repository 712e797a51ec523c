//! Diff command
//!
//! Usage: manidiff diff <A> <B> <PATH_KEY> [--with <PATH_KEY>] [--keep]

use clap::Args;
use manidiff_core::ExErrorKind;
use manidiff_engine::DiffAction;

use super::BuildArgs;

#[derive(Debug, Args)]
pub struct DiffArgs {
    #[command(flatten)]
    pub build: BuildArgs,

    /// Leaf to resolve, e.g. apps/Deployment/web
    pub path_key: String,

    /// Compare against a second single-sided leaf instead
    #[arg(long = "with", value_name = "PATH_KEY")]
    pub with: Option<String>,
}

/// Execute diff command
pub fn execute(args: DiffArgs) -> Result<(), Box<dyn std::error::Error>> {
    let mut manager = args.build.build_manager()?;

    let resolved = match &args.with {
        Some(other) => manager.resolve_pair(&args.path_key, other),
        None => manager.resolve(&args.path_key),
    };

    match resolved {
        Ok(DiffAction::Diff { left, right, title }) => {
            println!("title: {}", title);
            println!("left: {}", left.display());
            println!("right: {}", right.display());
        }
        Ok(DiffAction::Open { locator }) => {
            println!("open: {}", locator.display());
        }
        // A vanished rendering is reported but does not fail the command
        Err(e) if e.kind() == ExErrorKind::NotFound => {
            eprintln!("Warning: {}", e);
        }
        Err(e) => {
            args.build.finish(&mut manager)?;
            return Err(e.into());
        }
    }

    args.build.finish(&mut manager)
}
