pub mod document;
pub mod identity;
pub mod side;

pub use document::{content_digest, MaterializedDocument};
pub use identity::{derive_group, validate, ManifestIdentity, CORE_GROUP};
pub use side::Side;
