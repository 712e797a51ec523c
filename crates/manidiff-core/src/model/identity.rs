//! Manifest identity and validation
//!
//! A manifest is identified by `(group, kind, name)`. The group is derived
//! from `apiVersion`: the segment before the first `/`, or `core` when the
//! version carries no group (e.g. `v1`).

use crate::errors::{ManifestError, Result};
use serde::{Deserialize, Serialize};
use serde_yaml::Value;

/// Group assigned to manifests whose apiVersion has no `/`
pub const CORE_GROUP: &str = "core";

/// Validated identity of a manifest
///
/// All three fields are non-empty and usable as a single path segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ManifestIdentity {
    pub group: String,
    pub kind: String,
    pub name: String,
}

impl ManifestIdentity {
    /// The `group/kind/name` key of the leaf this manifest belongs to
    pub fn path_key(&self) -> String {
        format!("{}/{}/{}", self.group, self.kind, self.name)
    }

    /// The identity as ordered path segments
    pub fn segments(&self) -> [&str; 3] {
        [&self.group, &self.kind, &self.name]
    }
}

impl std::fmt::Display for ManifestIdentity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.group, self.kind, self.name)
    }
}

/// Derive the api-group from an apiVersion string
pub fn derive_group(api_version: &str) -> &str {
    match api_version.split_once('/') {
        Some((group, _)) => group,
        None => CORE_GROUP,
    }
}

/// Validate a decoded document and extract its identity
///
/// Pure and total over any decoded value: scalars, sequences, and mappings
/// with missing or mistyped fields all produce an error rather than a panic.
///
/// # Errors
///
/// * `NotAMapping` - the document is not a mapping
/// * `MissingField` - `apiVersion`, `kind`, or `metadata.name` is absent,
///   empty, or not a string
/// * `UnsafeSegment` - a derived segment is empty, `.`/`..`, or contains a
///   path separator
pub fn validate(raw: &Value) -> Result<ManifestIdentity> {
    if !raw.is_mapping() {
        return Err(ManifestError::NotAMapping);
    }

    let api_version = required_str(raw.get("apiVersion"), "apiVersion")?;
    let kind = required_str(raw.get("kind"), "kind")?;
    let name = required_str(
        raw.get("metadata").and_then(|metadata| metadata.get("name")),
        "metadata.name",
    )?;

    let identity = ManifestIdentity {
        group: derive_group(api_version).to_string(),
        kind: kind.to_string(),
        name: name.to_string(),
    };

    for (field, value) in ["group", "kind", "name"].iter().zip(identity.segments()) {
        if !is_safe_segment(value) {
            return Err(ManifestError::UnsafeSegment {
                field: field.to_string(),
                value: value.to_string(),
            });
        }
    }

    Ok(identity)
}

fn required_str<'a>(value: Option<&'a Value>, field: &str) -> Result<&'a str> {
    match value.and_then(Value::as_str) {
        Some(s) if !s.is_empty() => Ok(s),
        _ => Err(ManifestError::MissingField {
            field: field.to_string(),
        }),
    }
}

fn is_safe_segment(segment: &str) -> bool {
    !segment.trim().is_empty()
        && segment != "."
        && segment != ".."
        && !segment.contains(['/', '\\', '\0'])
}
