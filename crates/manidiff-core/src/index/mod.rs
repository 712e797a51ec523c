//! Hierarchical manifest index
//!
//! The forest groups materialized documents by api-group, then kind, then
//! name. Ordering at every level is first-seen insertion order.

pub mod forest;
pub mod node;

pub use forest::Forest;
pub use node::{GroupNode, KindNode, LeafNode, MembershipStatus, NodeKind, NodeRef};
