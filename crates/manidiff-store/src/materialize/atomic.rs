//! Atomic write primitives
//!
//! Uses temp→rename pattern to ensure no partial writes

use crate::errors::{io_error, Result};
use std::fs;
use std::path::Path;

/// Atomically write bytes to a file
///
/// The parent directory must already exist. An existing file is replaced.
pub fn atomic_write(target_path: &Path, content: &[u8]) -> Result<()> {
    let temp_path = target_path.with_extension("tmp");

    fs::write(&temp_path, content).map_err(|e| io_error("write_rendering", &temp_path, e))?;

    if let Err(e) = fs::rename(&temp_path, target_path) {
        let _ = fs::remove_file(&temp_path);
        return Err(io_error("rename_rendering", target_path, e));
    }

    Ok(())
}
