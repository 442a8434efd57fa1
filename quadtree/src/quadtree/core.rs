use super::storage::{InternalNode, LeafNode, Node, NodeArena};
use super::types::{child_bounds, quadrant, ChildSlot, LeafRef, NodeId, QUADRANT_COUNT};
use super::{BucketPolicy, Config, LongQuadTree};
use common::shapes::LongRect;
use tracing::{debug, trace};

impl<B, P: BucketPolicy<B>> LongQuadTree<B, P> {
    pub fn new(root_bucket: B, policy: P) -> Self {
        Self::new_with_config(root_bucket, policy, &Config::default())
    }

    pub fn new_with_config(root_bucket: B, policy: P, config: &Config) -> Self {
        let mut nodes = NodeArena::with_capacity(config.pool_size.max(1));
        let root = nodes.alloc(Node::Leaf(LeafNode {
            bucket: root_bucket,
            bounds: LongRect::EVERYWHERE,
            slot: ChildSlot::Root,
        }));
        LongQuadTree {
            root,
            nodes,
            policy,
        }
    }

    /// Id of the leaf owning `(x, y)`.
    pub fn leaf_id(&self, x: i64, y: i64) -> NodeId {
        let mut id = self.root;
        loop {
            match self.nodes.get(id) {
                Node::Internal(internal) => {
                    id = internal.children[quadrant(internal.x_divider, internal.y_divider, x, y)];
                }
                Node::Leaf(_) => return id,
            }
        }
    }

    pub fn leaf(&self, x: i64, y: i64) -> LeafRef<'_, B> {
        self.leaf_ref(self.leaf_id(x, y))
    }

    /// Panics if `id` does not name a live leaf.
    pub fn leaf_ref(&self, id: NodeId) -> LeafRef<'_, B> {
        let leaf = self.nodes.leaf(id);
        LeafRef {
            id,
            bucket: &leaf.bucket,
            bounds: leaf.bounds,
        }
    }

    /// Panics if `id` does not name a live leaf.
    ///
    /// Changing the bucket is the caller's business; values must still belong
    /// inside the leaf's bounds afterwards.
    pub fn bucket_mut(&mut self, id: NodeId) -> &mut B {
        &mut self.nodes.leaf_mut(id).bucket
    }

    /// Try to replace a full leaf with a subtree.
    ///
    /// Does nothing if the leaf is too small to split in either dimension.
    /// If the split would leave at most one non-empty child, the leaf is
    /// replaced by an equivalent leaf holding that bucket instead, so that
    /// clustered values do not deepen the tree. Either way `id` no longer
    /// names a leaf afterwards unless the split was skipped.
    pub fn split_leaf(&mut self, id: NodeId) {
        let (bounds, x_divider, y_divider) = {
            let leaf = self.nodes.leaf(id);
            let bounds = leaf.bounds;
            let x_splittable = bounds.is_x_splittable();
            let y_splittable = bounds.is_y_splittable();
            if !x_splittable && !y_splittable {
                trace!(
                    leaf = id.index(),
                    size = self.policy.bucket_size(&leaf.bucket),
                    "leaf too small to split"
                );
                return;
            }

            let (x_chosen, y_chosen) = self.policy.choose_dividers(&bounds, &leaf.bucket);

            // A dimension too small to split gets its minimum as divider, so
            // every value lands on the large side and the small side stays empty.
            let x_divider = if x_splittable {
                debug_assert!(
                    bounds.x_min <= x_chosen && x_chosen <= bounds.x_max,
                    "x divider {} outside [{}, {}]",
                    x_chosen,
                    bounds.x_min,
                    bounds.x_max
                );
                x_chosen
            } else {
                bounds.x_min
            };
            let y_divider = if y_splittable {
                debug_assert!(
                    bounds.y_min <= y_chosen && y_chosen <= bounds.y_max,
                    "y divider {} outside [{}, {}]",
                    y_chosen,
                    bounds.y_min,
                    bounds.y_max
                );
                y_chosen
            } else {
                bounds.y_min
            };
            (bounds, x_divider, y_divider)
        };

        let leaf = match self.nodes.take(id) {
            Node::Leaf(leaf) => leaf,
            Node::Internal(_) => unreachable!("checked to be a leaf above"),
        };
        let new_buckets = self.policy.split_bucket(leaf.bucket, x_divider, y_divider);

        if let Some(q) = self.find_solitary_bucket(&new_buckets) {
            let bucket = new_buckets
                .into_iter()
                .nth(q)
                .expect("quadrant index within bucket array");
            trace!(leaf = id.index(), quadrant = q, "split collapsed to a solitary leaf");
            let replacement = self.nodes.alloc(Node::Leaf(LeafNode {
                bucket,
                bounds,
                slot: leaf.slot,
            }));
            self.replace_leaf(leaf.slot, replacement);
            return;
        }

        debug!(
            leaf = id.index(),
            x_divider,
            y_divider,
            sizes = ?[0, 1, 2, 3].map(|q| self.policy.bucket_size(&new_buckets[q])),
            "split leaf into internal node"
        );
        let internal = self.nodes.alloc(Node::Internal(InternalNode {
            x_divider,
            y_divider,
            children: [id; QUADRANT_COUNT],
        }));
        let mut children = [internal; QUADRANT_COUNT];
        for (q, bucket) in new_buckets.into_iter().enumerate() {
            children[q] = self.nodes.alloc(Node::Leaf(LeafNode {
                bucket,
                bounds: child_bounds(&bounds, x_divider, y_divider, q),
                slot: ChildSlot::Child {
                    parent: internal,
                    quadrant: q as u8,
                },
            }));
        }
        self.nodes.internal_mut(internal).children = children;
        self.replace_leaf(leaf.slot, internal);
    }

    /// Index of the only non-empty bucket, or of the first bucket when all
    /// are empty. `None` if two or more buckets hold values.
    fn find_solitary_bucket(&self, buckets: &[B; QUADRANT_COUNT]) -> Option<usize> {
        let mut solitary = None;
        for (q, bucket) in buckets.iter().enumerate() {
            if self.policy.bucket_size(bucket) > 0 {
                if solitary.is_some() {
                    return None;
                }
                solitary = Some(q);
            }
        }
        Some(solitary.unwrap_or(0))
    }

    fn replace_leaf(&mut self, slot: ChildSlot, replacement: NodeId) {
        match slot {
            ChildSlot::Root => self.root = replacement,
            ChildSlot::Child { parent, quadrant } => {
                self.nodes.internal_mut(parent).children[quadrant as usize] = replacement;
            }
        }
    }
}
