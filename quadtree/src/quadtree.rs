//! Generic adaptive quadtree over the `i64` plane.
//!
//! The tree starts as a single leaf covering
//! [`LongRect::EVERYWHERE`](common::shapes::LongRect::EVERYWHERE) and grows
//! only when a [`BucketPolicy`] user asks it to split a leaf. Nodes
//! live in an arena; every leaf remembers the child slot that refers to it,
//! so a split replaces the leaf by patching that slot.

mod config;
mod core;
mod policy;
mod query_rect;
mod storage;
mod types;

pub use config::Config;
pub use policy::BucketPolicy;
pub use types::{quadrant, LeafRef, NodeId, QUADRANT_COUNT};

use storage::NodeArena;

pub struct LongQuadTree<B, P> {
    root: NodeId,
    nodes: NodeArena<B>,
    policy: P,
}

impl<B, P> LongQuadTree<B, P> {
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Counts of `(internal, leaf)` nodes currently reachable.
    pub fn node_counts(&self) -> (usize, usize) {
        (self.nodes.internal_count(), self.nodes.leaf_count())
    }
}
