use super::storage::Node;
use super::types::{NodeId, QUADRANT_COUNT};
use super::LongQuadTree;
use crate::containment::window_reaches_quadrants;
use common::shapes::LongRect;
use smallvec::SmallVec;

const QUERY_STACK_INLINE: usize = 64;

type NodeStack = SmallVec<[NodeId; QUERY_STACK_INLINE]>;

impl<B, P> LongQuadTree<B, P> {
    /// Visit every leaf whose rectangle meets the closed window
    /// `[x_min, x_max] x [y_min, y_max]`.
    ///
    /// `f` receives the leaf's bucket and its exact rectangle; the leaf may
    /// only partly overlap the window, so deciding which values qualify is up
    /// to `f`. Leaves are visited depth first in quadrant order.
    pub fn accumulate<'a, F>(&'a self, x_min: i64, x_max: i64, y_min: i64, y_max: i64, mut f: F)
    where
        F: FnMut(&'a B, &LongRect),
    {
        let window = LongRect::new(x_min, x_max, y_min, y_max);
        let mut stack = NodeStack::new();
        stack.push(self.root);
        while let Some(id) = stack.pop() {
            match self.nodes.get(id) {
                Node::Internal(internal) => {
                    let reached =
                        window_reaches_quadrants(&window, internal.x_divider, internal.y_divider);
                    // Reverse push so quadrant 0 pops first.
                    for q in (0..QUADRANT_COUNT).rev() {
                        if reached[q] {
                            stack.push(internal.children[q]);
                        }
                    }
                }
                Node::Leaf(leaf) => f(&leaf.bucket, &leaf.bounds),
            }
        }
    }

    /// Collect the rectangle of every leaf, e.g. for drawing the partition.
    pub fn leaf_bounds(&self, bounding_boxes: &mut Vec<LongRect>) {
        self.accumulate(i64::MIN, i64::MAX, i64::MIN, i64::MAX, |_, bounds| {
            bounding_boxes.push(*bounds)
        });
    }
}

#[cfg(test)]
mod tests {
    use crate::quadtree::{quadrant, BucketPolicy, LongQuadTree, QUADRANT_COUNT};
    use common::shapes::LongRect;

    /// Splits at fixed dividers, so the shape of the tree is easy to predict.
    struct FixedPolicy(i64, i64);

    impl BucketPolicy<Vec<(i64, i64)>> for FixedPolicy {
        fn choose_dividers(&self, bounds: &LongRect, _bucket: &Vec<(i64, i64)>) -> (i64, i64) {
            (
                self.0.clamp(bounds.x_min, bounds.x_max),
                self.1.clamp(bounds.y_min, bounds.y_max),
            )
        }

        fn split_bucket(
            &self,
            bucket: Vec<(i64, i64)>,
            x_divider: i64,
            y_divider: i64,
        ) -> [Vec<(i64, i64)>; QUADRANT_COUNT] {
            let mut out: [Vec<(i64, i64)>; QUADRANT_COUNT] = Default::default();
            for (x, y) in bucket {
                out[quadrant(x_divider, y_divider, x, y)].push((x, y));
            }
            out
        }

        fn bucket_size(&self, bucket: &Vec<(i64, i64)>) -> usize {
            bucket.len()
        }
    }

    fn four_leaf_tree() -> LongQuadTree<Vec<(i64, i64)>, FixedPolicy> {
        let mut tree = LongQuadTree::new(Vec::new(), FixedPolicy(10, 20));
        let root = tree.leaf_id(0, 0);
        tree.bucket_mut(root)
            .extend([(0, 0), (15, 0), (0, 25), (15, 25)]);
        tree.split_leaf(root);
        tree
    }

    fn visited(tree: &LongQuadTree<Vec<(i64, i64)>, FixedPolicy>, w: LongRect) -> Vec<(i64, i64)> {
        let mut out = Vec::new();
        tree.accumulate(w.x_min, w.x_max, w.y_min, w.y_max, |bucket, _| {
            out.extend(bucket.iter().copied())
        });
        out
    }

    #[test]
    fn visits_leaves_in_quadrant_order() {
        let tree = four_leaf_tree();
        assert_eq!(tree.node_counts(), (1, 4));
        assert_eq!(
            visited(&tree, LongRect::EVERYWHERE),
            vec![(0, 0), (15, 0), (0, 25), (15, 25)]
        );
    }

    #[test]
    fn window_on_divider_skips_small_side() {
        let tree = four_leaf_tree();
        // x == 10 belongs to the large-x children only.
        assert_eq!(
            visited(&tree, LongRect::new(10, 10, i64::MIN, i64::MAX)),
            vec![(15, 0), (15, 25)]
        );
        // y_max == 19 stays below the y divider.
        assert_eq!(
            visited(&tree, LongRect::new(i64::MIN, 9, i64::MIN, 19)),
            vec![(0, 0)]
        );
    }

    #[test]
    fn visitor_sees_exact_leaf_rectangles() {
        let tree = four_leaf_tree();
        let mut rects = Vec::new();
        tree.leaf_bounds(&mut rects);
        assert_eq!(
            rects,
            vec![
                LongRect::new(i64::MIN, 10, i64::MIN, 20),
                LongRect::new(10, i64::MAX, i64::MIN, 20),
                LongRect::new(i64::MIN, 10, 20, i64::MAX),
                LongRect::new(10, i64::MAX, 20, i64::MAX),
            ]
        );
    }
}
