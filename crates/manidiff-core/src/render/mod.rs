pub mod canonical;

pub use canonical::{render, sort_keys};
