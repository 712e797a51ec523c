//! Index change notification
//!
//! The presentation layer implements `IndexListener` to refresh its view
//! whenever the manager publishes a new forest or tears one down.

use std::path::PathBuf;

/// What changed in the manager's index
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IndexChange {
    /// A build completed and its forest is available
    Built { storage_root: PathBuf, leaves: usize },
    /// The previous forest and storage root were discarded
    Reset,
}

/// Observer of index lifecycle changes
pub trait IndexListener {
    fn on_index_changed(&mut self, change: &IndexChange);
}

/// Listener that ignores every change
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopListener;

impl IndexListener for NoopListener {
    fn on_index_changed(&mut self, _change: &IndexChange) {}
}

impl<F> IndexListener for F
where
    F: FnMut(&IndexChange),
{
    fn on_index_changed(&mut self, change: &IndexChange) {
        self(change)
    }
}
