use common::shapes::LongRect;
use std::fmt;

pub const QUADRANT_COUNT: usize = 4;
pub(crate) const QUADRANT_LARGE_X: usize = 0b01;
pub(crate) const QUADRANT_LARGE_Y: usize = 0b10;

/// Index of a node in the tree's arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    #[inline(always)]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Where a node hangs: the root cell, or one child slot of an internal node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ChildSlot {
    Root,
    Child { parent: NodeId, quadrant: u8 },
}

/// Quadrant code of `(x, y)` relative to a divider.
///
/// - 0: small x, small y
/// - 1: large x, small y
/// - 2: small x, large y
/// - 3: large x, large y
///
/// A coordinate equal to its divider counts as large.
#[inline(always)]
pub fn quadrant(x_divider: i64, y_divider: i64, x: i64, y: i64) -> usize {
    let h = if x < x_divider { 0 } else { QUADRANT_LARGE_X };
    let v = if y < y_divider { 0 } else { QUADRANT_LARGE_Y };
    h | v
}

/// Rectangle of child `quadrant` when `bounds` is divided at the given dividers.
#[inline(always)]
pub(crate) fn child_bounds(
    bounds: &LongRect,
    x_divider: i64,
    y_divider: i64,
    quadrant: usize,
) -> LongRect {
    let (x_min, x_max) = if quadrant & QUADRANT_LARGE_X == 0 {
        (bounds.x_min, x_divider)
    } else {
        (x_divider, bounds.x_max)
    };
    let (y_min, y_max) = if quadrant & QUADRANT_LARGE_Y == 0 {
        (bounds.y_min, y_divider)
    } else {
        (y_divider, bounds.y_max)
    };
    LongRect::new(x_min, x_max, y_min, y_max)
}

/// Read access to one leaf: its bucket and the rectangle it owns.
///
/// Every value in the bucket has `x` in `[x_min, x_max)` and `y` in
/// `[y_min, y_max)` of [`LeafRef::bounds`], as long as the caller kept
/// coordinates stable.
pub struct LeafRef<'a, B> {
    pub(crate) id: NodeId,
    pub(crate) bucket: &'a B,
    pub(crate) bounds: LongRect,
}

impl<'a, B> LeafRef<'a, B> {
    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn bucket(&self) -> &'a B {
        self.bucket
    }

    pub fn bounds(&self) -> LongRect {
        self.bounds
    }
}

impl<'a, B: fmt::Debug> fmt::Debug for LeafRef<'a, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LeafRef")
            .field("id", &self.id)
            .field("bucket", self.bucket)
            .field("bounds", &self.bounds)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quadrant_codes() {
        assert_eq!(quadrant(0, 0, -1, -1), 0);
        assert_eq!(quadrant(0, 0, 0, -1), 1);
        assert_eq!(quadrant(0, 0, -1, 0), 2);
        assert_eq!(quadrant(0, 0, 0, 0), 3);
    }

    #[test]
    fn child_bounds_partition_parent() {
        let bounds = LongRect::new(-10, 10, 0, 100);
        let children: Vec<_> = (0..QUADRANT_COUNT)
            .map(|q| child_bounds(&bounds, 3, 40, q))
            .collect();
        assert_eq!(children[0], LongRect::new(-10, 3, 0, 40));
        assert_eq!(children[1], LongRect::new(3, 10, 0, 40));
        assert_eq!(children[2], LongRect::new(-10, 3, 40, 100));
        assert_eq!(children[3], LongRect::new(3, 10, 40, 100));
        for x in -10..10 {
            for y in (0..100).step_by(7) {
                let owners = children.iter().filter(|c| c.owns_point(x, y)).count();
                assert_eq!(owners, 1, "({}, {}) owned by {} children", x, y, owners);
                assert!(children[quadrant(3, 40, x, y)].owns_point(x, y));
            }
        }
    }
}
