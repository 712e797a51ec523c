//! manidiff Store - Input decoding and on-disk materialization
//!
//! Provides:
//! - Multi-document YAML decoding of the two input streams
//! - Storage-root provider and scoped storage-root guard
//! - Atomic writes of canonical renderings
//! - Content materializer producing `<root>/<group>/<kind>/<name>/{Left,Right}.txt`

pub mod errors;
pub mod materialize;
pub mod root;
pub mod source;

// Re-export key types
pub use errors::Result;
pub use materialize::Materializer;
pub use root::{StorageProvider, StorageRoot, TempDirProvider};
pub use source::{decode_file, decode_str, DecodedStream, ManifestSource};
