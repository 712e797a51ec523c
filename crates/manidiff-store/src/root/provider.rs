use crate::errors::{invalid_sub_path, io_error, root_missing, Result};
use manidiff_core_types::BuildId;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory name prefix for roots created by `TempDirProvider`
pub const DEFAULT_ROOT_PREFIX: &str = "kubemani-diff-temp-";

/// Filesystem primitives the index build needs
///
/// Every failure is fatal for the build that triggered it.
pub trait StorageProvider {
    /// Create a fresh, empty storage root
    fn create_root(&self) -> Result<PathBuf>;

    /// Delete a storage root and everything under it
    ///
    /// Deleting a root that no longer exists is not an error.
    fn delete_root(&self, root: &Path) -> Result<()>;

    /// Ensure `root/relative` exists, creating intermediate directories
    ///
    /// Idempotent: ensuring an existing directory succeeds.
    fn create_sub_path(&self, root: &Path, relative: &Path) -> Result<PathBuf>;
}

/// Storage roots named `<parent>/<prefix><32 hex chars>`
#[derive(Debug, Clone)]
pub struct TempDirProvider {
    parent: PathBuf,
    prefix: String,
}

impl TempDirProvider {
    /// Roots under the OS temp directory with the default prefix
    pub fn new() -> Self {
        Self::with_parent(std::env::temp_dir())
    }

    /// Roots under a specific parent directory
    pub fn with_parent(parent: impl Into<PathBuf>) -> Self {
        Self {
            parent: parent.into(),
            prefix: DEFAULT_ROOT_PREFIX.to_string(),
        }
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn parent(&self) -> &Path {
        &self.parent
    }
}

impl Default for TempDirProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl StorageProvider for TempDirProvider {
    fn create_root(&self) -> Result<PathBuf> {
        fs::create_dir_all(&self.parent).map_err(|e| io_error("create_root", &self.parent, e))?;

        let path = self
            .parent
            .join(format!("{}{}", self.prefix, BuildId::new()));
        fs::create_dir(&path).map_err(|e| io_error("create_root", &path, e))?;

        tracing::info!(
            op = "create_root",
            path = %path.display(),
            "temp directory has been created"
        );
        Ok(path)
    }

    fn delete_root(&self, root: &Path) -> Result<()> {
        if !root.is_dir() {
            return Ok(());
        }
        fs::remove_dir_all(root).map_err(|e| io_error("delete_root", root, e))?;

        tracing::info!(
            op = "delete_root",
            path = %root.display(),
            "directory deleted successfully"
        );
        Ok(())
    }

    fn create_sub_path(&self, root: &Path, relative: &Path) -> Result<PathBuf> {
        if relative.as_os_str().is_empty() || relative.is_absolute() {
            return Err(invalid_sub_path(relative));
        }
        if !root.is_dir() {
            return Err(root_missing(root));
        }

        let path = root.join(relative);
        fs::create_dir_all(&path).map_err(|e| io_error("create_sub_path", &path, e))?;
        Ok(path)
    }
}
