use super::types::QUADRANT_COUNT;
use common::shapes::LongRect;

/// How a [`LongQuadTree`](super::LongQuadTree) fills and splits its buckets.
///
/// The tree owns the structure; the policy owns the meaning of a bucket.
pub trait BucketPolicy<B> {
    /// Pick `(x_divider, y_divider)` for a full leaf.
    ///
    /// Dividers must lie within `bounds`. A dimension that cannot be split
    /// (extent of 1 or less) has its divider overridden by the tree, so the
    /// value returned for it does not matter. Only called with the bucket of
    /// a leaf the tree is trying to split, which may be empty if the caller
    /// splits an empty leaf.
    fn choose_dividers(&self, bounds: &LongRect, bucket: &B) -> (i64, i64);

    /// Distribute `bucket` over four new buckets indexed by
    /// [`quadrant`](super::quadrant). Values equal to a divider go to the
    /// large side.
    fn split_bucket(&self, bucket: B, x_divider: i64, y_divider: i64) -> [B; QUADRANT_COUNT];

    fn bucket_size(&self, bucket: &B) -> usize;
}
