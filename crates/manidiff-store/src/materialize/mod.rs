//! Content materialization
//!
//! Provides:
//! - Leaf directory layout (`<group>/<kind>/<name>`)
//! - Atomic temp→rename writes
//! - `Materializer`: render-once, persist, return a locator

mod atomic;
mod layout;
mod materializer;

pub use atomic::atomic_write;
pub use layout::{leaf_dir, locator_for};
pub use materializer::Materializer;
