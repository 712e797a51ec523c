//! Storage roots
//!
//! Provides:
//! - `StorageProvider`: create/delete a root and ensure sub-directories
//! - `TempDirProvider`: roots under the OS temp directory with a random suffix
//! - `StorageRoot`: scoped guard that deletes its root when dropped

mod guard;
mod provider;

pub use guard::StorageRoot;
pub use provider::{StorageProvider, TempDirProvider, DEFAULT_ROOT_PREFIX};
