use crate::errors::Result;
use crate::root::StorageProvider;
use std::fs;
use std::path::{Path, PathBuf};

/// Scoped ownership of a storage root
///
/// The directory is deleted when the guard is dropped, unless it was
/// released through the provider or explicitly kept.
#[derive(Debug)]
pub struct StorageRoot {
    path: PathBuf,
    armed: bool,
}

impl StorageRoot {
    /// Take ownership of an existing root directory
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            armed: true,
        }
    }

    /// Create a root through `provider` and guard it
    pub fn create(provider: &dyn StorageProvider) -> Result<Self> {
        provider.create_root().map(Self::new)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Delete the root through `provider`
    ///
    /// If deletion fails the guard stays armed and retries on drop.
    pub fn release(mut self, provider: &dyn StorageProvider) -> Result<()> {
        provider.delete_root(&self.path)?;
        self.armed = false;
        Ok(())
    }

    /// Disarm the guard and hand back the path; the directory survives
    pub fn keep(mut self) -> PathBuf {
        self.armed = false;
        std::mem::take(&mut self.path)
    }
}

impl Drop for StorageRoot {
    fn drop(&mut self) {
        if !self.armed {
            return;
        }
        match fs::remove_dir_all(&self.path) {
            Ok(()) => {
                tracing::debug!(
                    op = "drop_root",
                    path = %self.path.display(),
                    "storage root removed"
                );
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(
                    op = "drop_root",
                    path = %self.path.display(),
                    error = %e,
                    "failed to remove storage root"
                );
            }
        }
    }
}
