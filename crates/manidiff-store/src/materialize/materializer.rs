use crate::errors::Result;
use crate::materialize::atomic::atomic_write;
use crate::materialize::layout::{leaf_dir, locator_for};
use crate::root::StorageProvider;
use manidiff_core::{ManifestIdentity, MaterializedDocument, Side};
use std::path::Path;

/// Persists canonical renderings under one storage root
pub struct Materializer<'a> {
    provider: &'a dyn StorageProvider,
    root: &'a Path,
}

impl<'a> Materializer<'a> {
    pub fn new(provider: &'a dyn StorageProvider, root: &'a Path) -> Self {
        Self { provider, root }
    }

    /// Write `rendering` for `side` and return the resulting document
    ///
    /// Ensures `<root>/<group>/<kind>/<name>` exists, then writes the side's
    /// file atomically. A second call for the same identity and side replaces
    /// the file.
    ///
    /// # Errors
    ///
    /// Any directory or write failure; the caller must abort the build since
    /// the index would otherwise hold a dangling locator.
    pub fn materialize(
        &self,
        identity: ManifestIdentity,
        rendering: String,
        side: Side,
    ) -> Result<MaterializedDocument> {
        self.provider
            .create_sub_path(self.root, &leaf_dir(&identity))?;
        let locator = locator_for(self.root, &identity, side);

        atomic_write(&locator, rendering.as_bytes())?;

        tracing::debug!(
            op = "materialize",
            side = %side,
            path_key = %identity,
            "rendering written"
        );
        Ok(MaterializedDocument::new(identity, side, rendering, locator))
    }
}
