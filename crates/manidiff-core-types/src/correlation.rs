//! Correlation types for build tracking
//!
//! A `BuildId` names one index build. It doubles as the random suffix of the
//! build's storage root directory name.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a single index build
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BuildId(String);

impl BuildId {
    /// Generate a new random BuildId (32 lowercase hex characters)
    pub fn new() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    /// Get the string representation
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Create from an existing string (for deserialization)
    pub fn from_string(s: String) -> Self {
        Self(s)
    }
}

impl Default for BuildId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for BuildId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
