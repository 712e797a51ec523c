//! Open/diff action resolution for selected leaves

use std::path::{Path, PathBuf};

use manidiff_core::errors::ExError;
use manidiff_core::{LeafNode, ManifestError, MembershipStatus, Side};
use manidiff_store::errors::Result;

/// Window title prefix for every diff
pub const DIFF_TITLE_PREFIX: &str = "KubeMani Diff";

/// What the presentation layer should do for a selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiffAction {
    /// Show a side-by-side diff of two renderings
    Diff {
        left: PathBuf,
        right: PathBuf,
        title: String,
    },
    /// Open a single rendering
    Open { locator: PathBuf },
}

/// Resolve the action for one leaf
///
/// A leaf present in both inputs diffs its two renderings; a single-sided
/// leaf opens its only rendering.
///
/// # Errors
///
/// * `NotFound` - a locator's file no longer exists
/// * `InvalidSelection` - the leaf holds no documents
pub fn resolve_leaf(leaf: &LeafNode) -> Result<DiffAction> {
    match (leaf.locator(Side::Left), leaf.locator(Side::Right)) {
        (Some(left), Some(right)) => Ok(DiffAction::Diff {
            left: existing(left)?,
            right: existing(right)?,
            title: format!("{} - {}", DIFF_TITLE_PREFIX, leaf.path_key()),
        }),
        (Some(locator), None) | (None, Some(locator)) => Ok(DiffAction::Open {
            locator: existing(locator)?,
        }),
        (None, None) => Err(invalid_selection(format!(
            "{} has no documents",
            leaf.path_key()
        ))),
    }
}

/// Resolve a comparison between two leaves
///
/// Each leaf must be present in exactly one input. The title names the two
/// leaf directories, e.g. `KubeMani Diff - web - web-canary`.
///
/// # Errors
///
/// * `InvalidSelection` - either leaf is present in both inputs (or neither)
/// * `NotFound` - a locator's file no longer exists
pub fn resolve_pair(first: &LeafNode, second: &LeafNode) -> Result<DiffAction> {
    let left = existing(single_sided(first)?)?;
    let right = existing(single_sided(second)?)?;
    let title = format!(
        "{} - {} - {}",
        DIFF_TITLE_PREFIX,
        dir_name(&left),
        dir_name(&right)
    );
    Ok(DiffAction::Diff { left, right, title })
}

fn single_sided(leaf: &LeafNode) -> Result<&Path> {
    let side = match leaf.status() {
        MembershipStatus::LeftOnly => Side::Left,
        MembershipStatus::RightOnly => Side::Right,
        MembershipStatus::Both => {
            return Err(invalid_selection(format!(
                "{} is present in both inputs",
                leaf.path_key()
            )))
        }
        MembershipStatus::None => {
            return Err(invalid_selection(format!(
                "{} has no documents",
                leaf.path_key()
            )))
        }
    };
    leaf.locator(side)
        .ok_or_else(|| invalid_selection(format!("{} has no {} document", leaf.path_key(), side)))
}

fn existing(locator: &Path) -> Result<PathBuf> {
    if locator.is_file() {
        Ok(locator.to_path_buf())
    } else {
        Err(ExError::from(ManifestError::NotFound {
            locator: locator.display().to_string(),
        })
        .with_op("resolve"))
    }
}

fn dir_name(locator: &Path) -> String {
    locator
        .parent()
        .and_then(Path::file_name)
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn invalid_selection(reason: String) -> ExError {
    ExError::from(ManifestError::InvalidSelection { reason }).with_op("resolve")
}
