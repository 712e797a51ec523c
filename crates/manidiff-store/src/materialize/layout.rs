//! On-disk layout of materialized documents
//!
//! `<root>/<group>/<kind>/<name>/{Left,Right}.txt`

use manidiff_core::{ManifestIdentity, Side};
use std::path::{Path, PathBuf};

/// Relative directory holding a leaf's renderings
pub fn leaf_dir(identity: &ManifestIdentity) -> PathBuf {
    identity.segments().iter().collect()
}

/// Absolute locator of one side's rendering under `root`
pub fn locator_for(root: &Path, identity: &ManifestIdentity, side: Side) -> PathBuf {
    root.join(leaf_dir(identity)).join(side.file_name())
}
