//! manidiff Core - Manifest identity, canonical rendering and the merged index
//!
//! This crate provides the in-memory half of manifest diffing:
//! - Document model: validation of the (group, kind, name) identity of a manifest
//! - Canonical renderer: deterministic YAML text, optionally with sorted keys
//! - Hierarchical index: the group → kind → name forest with per-side membership
//! - Error facility (`ExError`) and structured logging facility
//!
//! Persistence (decoding input streams, writing renderings to disk) lives in
//! `manidiff-store`; the build/reset lifecycle lives in `manidiff-engine`.

pub mod errors;
pub mod index;
pub mod logging_facility;
pub mod model;
pub mod render;

pub use manidiff_core_types::schema;

// Re-export commonly used types
pub use errors::{ExError, ExErrorKind, ManifestError, Result};
pub use index::{Forest, GroupNode, KindNode, LeafNode, MembershipStatus, NodeKind, NodeRef};
pub use model::{validate, ManifestIdentity, MaterializedDocument, Side};
pub use render::render;
