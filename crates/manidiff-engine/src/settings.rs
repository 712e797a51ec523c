//! Build settings
//!
//! Loaded from an optional TOML file, then overridden by environment:
//!
//! ```toml
//! sort_keys = true
//! temp_prefix = "kubemani-diff-temp-"
//! temp_parent = "/var/tmp"
//! ```

use manidiff_core::errors::{ExError, ManifestError};
use manidiff_store::root::DEFAULT_ROOT_PREFIX;
use manidiff_store::TempDirProvider;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding `sort_keys`
pub const ENV_SORT_KEYS: &str = "MANIDIFF_SORT_KEYS";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    /// Emit mapping keys in lexicographic order in canonical renderings
    pub sort_keys: bool,
    /// Directory name prefix for storage roots
    pub temp_prefix: String,
    /// Parent directory for storage roots (OS temp dir when unset)
    pub temp_parent: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            sort_keys: false,
            temp_prefix: DEFAULT_ROOT_PREFIX.to_string(),
            temp_parent: None,
        }
    }
}

impl Settings {
    /// Parse settings from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ExError> {
        toml::from_str(content).map_err(|e| {
            ManifestError::Config {
                message: e.to_string(),
            }
            .into()
        })
    }

    /// Load settings from `path` (if given), then apply environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self, ExError> {
        let mut settings = match path {
            Some(path) => {
                let content = fs::read_to_string(path).map_err(|e| {
                    ExError::from(ManifestError::Config {
                        message: format!("Failed to read {}: {}", path.display(), e),
                    })
                })?;
                Self::from_toml_str(&content)?
            }
            None => Self::default(),
        };

        if let Ok(value) = std::env::var(ENV_SORT_KEYS) {
            settings.sort_keys = parse_flag(&value)?;
        }

        Ok(settings)
    }

    /// Storage provider configured by these settings
    pub fn storage_provider(&self) -> TempDirProvider {
        let provider = match &self.temp_parent {
            Some(parent) => TempDirProvider::with_parent(parent),
            None => TempDirProvider::new(),
        };
        provider.with_prefix(self.temp_prefix.clone())
    }
}

fn parse_flag(value: &str) -> Result<bool, ExError> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(ManifestError::Config {
            message: format!("{} must be a boolean, got '{}'", ENV_SORT_KEYS, other),
        }
        .into()),
    }
}
