//! manidiff Engine - Index lifecycle orchestration
//!
//! Coordinates the core index with the store: decodes both inputs, renders
//! and materializes every valid manifest, folds the results into a forest,
//! and owns the storage root until the next reset.

pub mod actions;
pub mod listener;
pub mod manager;
pub mod report;
pub mod settings;

pub use actions::{resolve_leaf, resolve_pair, DiffAction};
pub use listener::{IndexChange, IndexListener, NoopListener};
pub use manager::IndexManager;
pub use report::{BuildReport, StreamStats};
pub use settings::Settings;
