use manidiff_core::{validate, ManifestIdentity, MaterializedDocument, Side};
use serde_yaml::Value;
use std::path::PathBuf;

/// Decode a single YAML document for testing
#[allow(dead_code)]
pub fn yaml(text: &str) -> Value {
    serde_yaml::from_str(text).unwrap()
}

/// Build a minimal manifest value with the given identity fields
#[allow(dead_code)]
pub fn manifest(api_version: &str, kind: &str, name: &str) -> Value {
    yaml(&format!(
        "apiVersion: {}\nkind: {}\nmetadata:\n  name: {}\n",
        api_version, kind, name
    ))
}

/// Materialize a document in memory, with a synthetic locator
///
/// Bypasses the store so that index tests need no filesystem.
#[allow(dead_code)]
pub fn materialized(raw: &Value, side: Side) -> MaterializedDocument {
    let identity: ManifestIdentity = validate(raw).unwrap();
    let text = manidiff_core::render(raw, false).unwrap();
    let locator = PathBuf::from("/mem")
        .join(&identity.group)
        .join(&identity.kind)
        .join(&identity.name)
        .join(side.file_name());
    MaterializedDocument::new(identity, side, text, locator)
}
