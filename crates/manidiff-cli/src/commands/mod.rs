pub mod diff;
pub mod tree;

use clap::Args;
use manidiff_engine::{IndexManager, Settings};
use manidiff_store::ManifestSource;
use std::path::PathBuf;

/// Inputs and build options shared by every command
#[derive(Debug, Args)]
pub struct BuildArgs {
    /// First manifest collection (side A)
    pub left: PathBuf,

    /// Second manifest collection (side B)
    pub right: PathBuf,

    /// Render mapping keys in sorted order
    #[arg(long)]
    pub sort_keys: bool,

    /// Settings file (TOML)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Leave the storage root on disk and print its path
    #[arg(long)]
    pub keep: bool,
}

impl BuildArgs {
    /// Load settings and build a manager over both inputs
    pub fn build_manager(&self) -> Result<IndexManager, Box<dyn std::error::Error>> {
        let mut settings = Settings::load(self.config.as_deref())?;
        if self.sort_keys {
            settings.sort_keys = true;
        }

        let mut manager = IndexManager::new(settings);
        manager.build(
            &ManifestSource::file(&self.left),
            &ManifestSource::file(&self.right),
        )?;
        Ok(manager)
    }

    /// Tear the index down, or detach its root when `--keep` was given
    pub fn finish(&self, manager: &mut IndexManager) -> Result<(), Box<dyn std::error::Error>> {
        if self.keep {
            if let Some(root) = manager.detach_storage_root() {
                println!("Storage root: {}", root.display());
            }
        } else {
            manager.reset()?;
        }
        Ok(())
    }
}
