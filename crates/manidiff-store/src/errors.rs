//! Error handling for manidiff-store
//!
//! Wraps manidiff-core ExError with store-specific helpers

use manidiff_core::errors::{ExError, ManifestError};
use manidiff_core::Side;
use std::path::Path;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

/// Create a decode error for one input side
pub fn decode_error(side: Side, source_name: &str, message: impl Into<String>) -> ExError {
    ManifestError::Decode {
        side,
        source_name: source_name.to_string(),
        message: message.into(),
    }
    .into()
}

/// Create an IO error
pub fn io_error(operation: &str, path: &Path, err: std::io::Error) -> ExError {
    ManifestError::Io {
        op: operation.to_string(),
        path: path.display().to_string(),
        message: err.to_string(),
    }
    .into()
}

/// Create a storage-root-missing error
pub fn root_missing(path: &Path) -> ExError {
    ManifestError::StorageRootMissing {
        path: path.display().to_string(),
    }
    .into()
}

/// Create an invalid-arguments error for a bad sub-path request
pub fn invalid_sub_path(relative: &Path) -> ExError {
    ManifestError::Io {
        op: "create_sub_path".to_string(),
        path: relative.display().to_string(),
        message: "invalid arguments".to_string(),
    }
    .into()
}
