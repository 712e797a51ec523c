//! Index lifecycle management
//!
//! ## Build pipeline (in order):
//! 1. Reset: tear down any previous forest and storage root
//! 2. Decode both inputs (either failing aborts, nothing is created)
//! 3. Create a fresh storage root
//! 4. Per document, left stream then right: validate → render → materialize → insert
//! 5. Publish the forest and notify the listener
//!
//! A failure in steps 3-4 drops the half-built forest and deletes the new root.

use std::path::{Path, PathBuf};
use std::time::Instant;

use manidiff_core::errors::ExError;
use manidiff_core::{log_op_end, log_op_error, log_op_start};
use manidiff_core::{render, validate, Forest, Side};
use manidiff_core_types::BuildId;
use manidiff_store::errors::Result;
use manidiff_store::{DecodedStream, ManifestSource, Materializer, StorageProvider, StorageRoot};
use manidiff_store::TempDirProvider;

use crate::actions::{self, DiffAction};
use crate::listener::{IndexChange, IndexListener, NoopListener};
use crate::report::{BuildReport, StreamStats};
use crate::settings::Settings;

struct BuiltIndex {
    root: StorageRoot,
    forest: Forest,
    report: BuildReport,
}

/// Owns at most one forest and the storage root backing its locators
pub struct IndexManager<P: StorageProvider = TempDirProvider> {
    provider: P,
    settings: Settings,
    listener: Box<dyn IndexListener>,
    current: Option<BuiltIndex>,
}

impl IndexManager<TempDirProvider> {
    /// Manager whose storage roots follow `settings`
    pub fn new(settings: Settings) -> Self {
        let provider = settings.storage_provider();
        Self::with_provider(provider, settings)
    }
}

impl<P: StorageProvider> IndexManager<P> {
    pub fn with_provider(provider: P, settings: Settings) -> Self {
        Self {
            provider,
            settings,
            listener: Box::new(NoopListener),
            current: None,
        }
    }

    /// Replace the change listener
    pub fn with_listener(mut self, listener: impl IndexListener + 'static) -> Self {
        self.listener = Box::new(listener);
        self
    }

    /// The current forest, if a build has succeeded since the last reset
    pub fn forest(&self) -> Option<&Forest> {
        self.current.as_ref().map(|built| &built.forest)
    }

    pub fn storage_root(&self) -> Option<&Path> {
        self.current.as_ref().map(|built| built.root.path())
    }

    pub fn report(&self) -> Option<&BuildReport> {
        self.current.as_ref().map(|built| &built.report)
    }

    pub fn is_built(&self) -> bool {
        self.current.is_some()
    }

    /// Build a fresh index from the two inputs
    ///
    /// Any previous index is reset first. On failure the manager is left
    /// index-less and no partial forest is observable.
    ///
    /// # Errors
    ///
    /// * `Decode` - an input could not be read or parsed (carries the side)
    /// * `Io` / `StorageRootMissing` - storage root or rendering could not be written
    /// * `Serialization` - a document could not be rendered
    pub fn build(&mut self, left: &ManifestSource, right: &ManifestSource) -> Result<&Forest> {
        let started = Instant::now();
        log_op_start!("build_index", left = %left.name(), right = %right.name());

        match self.try_build(left, right) {
            Ok(built) => {
                let change = IndexChange::Built {
                    storage_root: built.root.path().to_path_buf(),
                    leaves: built.report.leaves,
                };
                log_op_end!(
                    "build_index",
                    duration_ms = started.elapsed().as_millis() as u64,
                    build_id = %built.report.build_id,
                    leaves = built.report.leaves
                );
                self.listener.on_index_changed(&change);
                Ok(&self.current.insert(built).forest)
            }
            Err(err) => {
                log_op_error!(
                    "build_index",
                    err,
                    duration_ms = started.elapsed().as_millis() as u64
                );
                Err(err)
            }
        }
    }

    fn try_build(&mut self, left: &ManifestSource, right: &ManifestSource) -> Result<BuiltIndex> {
        self.reset()?;

        let left_stream = left.decode(Side::Left)?;
        let right_stream = right.decode(Side::Right)?;

        let build_id = BuildId::new();
        let root = StorageRoot::create(&self.provider)?;
        tracing::info!(
            op = "build_index",
            build_id = %build_id,
            path = %root.path().display(),
            "storage root allocated"
        );

        let materializer = Materializer::new(&self.provider, root.path());
        let sort_keys = self.settings.sort_keys;
        let mut forest = Forest::new();
        let left_stats = index_stream(&materializer, &mut forest, left_stream, sort_keys)?;
        let right_stats = index_stream(&materializer, &mut forest, right_stream, sort_keys)?;

        let report = BuildReport {
            build_id,
            left: left_stats,
            right: right_stats,
            leaves: forest.leaf_count(),
        };

        Ok(BuiltIndex {
            root,
            forest,
            report,
        })
    }

    /// Discard the current forest and delete its storage root
    ///
    /// A no-op (no notification) when nothing is built.
    ///
    /// # Errors
    ///
    /// Returns `Io` if the root cannot be deleted. The forest is discarded
    /// and the listener notified regardless; deletion is retried when the
    /// guard drops.
    pub fn reset(&mut self) -> Result<()> {
        let Some(built) = self.current.take() else {
            return Ok(());
        };

        let path = built.root.path().to_path_buf();
        let released = built.root.release(&self.provider);
        match &released {
            Ok(()) => tracing::info!(op = "reset", path = %path.display(), "index reset"),
            Err(err) => tracing::warn!(
                op = "reset",
                path = %path.display(),
                err_code = err.code(),
                "index reset but storage root could not be deleted"
            ),
        }

        self.listener.on_index_changed(&IndexChange::Reset);
        released
    }

    /// Discard the current forest but keep its storage root on disk
    ///
    /// Returns the root that now belongs to the caller.
    pub fn detach_storage_root(&mut self) -> Option<PathBuf> {
        let built = self.current.take()?;
        let path = built.root.keep();
        self.listener.on_index_changed(&IndexChange::Reset);
        Some(path)
    }

    /// Resolve the open/diff action for the leaf at `path_key`
    pub fn resolve(&self, path_key: &str) -> Result<DiffAction> {
        let leaf = self.leaf(path_key)?;
        actions::resolve_leaf(leaf)
    }

    /// Resolve a cross-leaf comparison between two single-sided leaves
    pub fn resolve_pair(&self, first: &str, second: &str) -> Result<DiffAction> {
        actions::resolve_pair(self.leaf(first)?, self.leaf(second)?)
    }

    fn leaf(&self, path_key: &str) -> Result<&manidiff_core::LeafNode> {
        self.forest()
            .and_then(|forest| forest.leaf(path_key))
            .ok_or_else(|| {
                ExError::from(manidiff_core::ManifestError::NodeNotFound {
                    path_key: path_key.to_string(),
                })
            })
    }
}

/// Validate, render, materialize and insert every document of one stream
fn index_stream(
    materializer: &Materializer<'_>,
    forest: &mut Forest,
    stream: DecodedStream,
    sort_keys: bool,
) -> Result<StreamStats> {
    let side = stream.side;
    let mut stats = StreamStats {
        empty_ignored: stream.empty_ignored,
        ..StreamStats::default()
    };

    for raw in &stream.documents {
        let identity = match validate(raw) {
            Ok(identity) => identity,
            Err(reason) => {
                tracing::warn!(
                    op = "validate",
                    side = %side,
                    source = %stream.source_name,
                    reason = %reason,
                    "unexpected format of object as Kubernetes manifest. the object will be ignored"
                );
                stats.invalid_dropped += 1;
                continue;
            }
        };

        let rendering = render(raw, sort_keys).map_err(ExError::from)?;
        let document = materializer.materialize(identity, rendering, side)?;
        forest.insert(document);
        stats.indexed += 1;
    }

    tracing::info!(
        op = "index_stream",
        side = %side,
        source = %stream.source_name,
        documents = stats.indexed,
        ignored = stats.empty_ignored + stats.invalid_dropped,
        "stream indexed"
    );
    Ok(stats)
}
