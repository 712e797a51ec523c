use crate::model::{ManifestIdentity, Side};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::path::{Path, PathBuf};

/// A manifest rendered to canonical text and persisted at `locator`
///
/// Produced by the content materializer and owned by the leaf that indexes it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MaterializedDocument {
    pub identity: ManifestIdentity,
    pub side: Side,
    pub canonical_text: String,
    /// Hex-encoded SHA256 of `canonical_text`
    pub digest: String,
    /// File holding `canonical_text`
    pub locator: PathBuf,
}

impl MaterializedDocument {
    /// Create a materialized document, computing the content digest
    pub fn new(
        identity: ManifestIdentity,
        side: Side,
        canonical_text: String,
        locator: PathBuf,
    ) -> Self {
        let digest = content_digest(&canonical_text);
        Self {
            identity,
            side,
            canonical_text,
            digest,
            locator,
        }
    }

    pub fn locator(&self) -> &Path {
        &self.locator
    }

    /// Whether two renderings are byte-identical
    pub fn same_content(&self, other: &MaterializedDocument) -> bool {
        self.digest == other.digest && self.canonical_text == other.canonical_text
    }
}

/// Compute the hex-encoded SHA256 digest of a rendering
pub fn content_digest(text: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(text.as_bytes());
    hex::encode(hasher.finalize())
}
