//! Point index: a [`LongQuadTree`] whose buckets are lists of values.
//!
//! ```
//! use long_quadtree::objects::LongQuadTreeObjects;
//!
//! let mut index = LongQuadTreeObjects::with_xy(2);
//! index.add((0i64, 0i64));
//! index.add((1, 1));
//! index.add((2, 2));
//!
//! assert_eq!(index.search(0, 0, 0, 0), vec![&(0, 0)]);
//! assert_eq!(index.search(0, 2, 0, 2).len(), 3);
//! ```

use crate::containment::{window_contains_x, window_contains_y, x_in_window, y_in_window};
use crate::coordinates::{Coordinates, FnCoordinates, LongXy, XyCoordinates};
use crate::error::QuadtreeResult;
use crate::quadtree::{quadrant, BucketPolicy, Config, LeafRef, LongQuadTree, QUADRANT_COUNT};
use common::shapes::LongRect;

/// Bucket policy for lists of values: divides at the mean position of the
/// bucket's members.
pub struct PointPolicy<C> {
    coords: C,
}

impl<C> PointPolicy<C> {
    pub fn coordinates(&self) -> &C {
        &self.coords
    }
}

impl<V, C: Coordinates<V>> BucketPolicy<Vec<V>> for PointPolicy<C> {
    fn choose_dividers(&self, bounds: &LongRect, bucket: &Vec<V>) -> (i64, i64) {
        let mut count = 0i128;
        let mut x_sum = 0i128;
        let mut y_sum = 0i128;
        for (x, y) in bucket.iter().filter_map(|v| self.coords.xy(v)) {
            x_sum += x as i128;
            y_sum += y as i128;
            count += 1;
        }
        if count == 0 {
            return (bounds.x_min, bounds.y_min);
        }
        // Truncates toward zero. Values that moved after insertion can drag
        // the mean outside the leaf, so clamp it back in.
        let x_mean = ((x_sum / count) as i64).clamp(bounds.x_min, bounds.x_max.max(bounds.x_min));
        let y_mean = ((y_sum / count) as i64).clamp(bounds.y_min, bounds.y_max.max(bounds.y_min));
        (x_mean, y_mean)
    }

    fn split_bucket(&self, bucket: Vec<V>, x_divider: i64, y_divider: i64) -> [Vec<V>; QUADRANT_COUNT] {
        let mut new_buckets: [Vec<V>; QUADRANT_COUNT] = Default::default();
        for v in bucket {
            // A value that lost its position can't be found by position
            // anymore; park it in quadrant 0.
            let q = match self.coords.xy(&v) {
                Some((x, y)) => quadrant(x_divider, y_divider, x, y),
                None => 0,
            };
            new_buckets[q].push(v);
        }
        new_buckets
    }

    fn bucket_size(&self, bucket: &Vec<V>) -> usize {
        bucket.len()
    }
}

/// Adaptive quadtree of values positioned on the `i64` plane.
///
/// Duplicates are allowed. A value's coordinates must not change while it is
/// stored: `remove` looks a value up by its current position, so a value that
/// moved has to be removed before its coordinates change and added again
/// afterwards.
pub struct LongQuadTreeObjects<V, C> {
    tree: LongQuadTree<Vec<V>, PointPolicy<C>>,
    max_bucket_size: usize,
    len: usize,
}

impl<V, FX, FY> LongQuadTreeObjects<V, FnCoordinates<FX, FY>>
where
    FX: Fn(&V) -> Option<i64>,
    FY: Fn(&V) -> Option<i64>,
{
    pub fn new(max_bucket_size: usize, x_of: FX, y_of: FY) -> Self {
        Self::with_coordinates(max_bucket_size, FnCoordinates::new(x_of, y_of))
    }
}

impl<V: LongXy> LongQuadTreeObjects<V, XyCoordinates> {
    pub fn with_xy(max_bucket_size: usize) -> Self {
        Self::with_coordinates(max_bucket_size, XyCoordinates)
    }
}

impl<V, C: Coordinates<V>> LongQuadTreeObjects<V, C> {
    /// `max_bucket_size` must be at least 1; use [`Self::new_with_config`]
    /// to have that checked.
    pub fn with_coordinates(max_bucket_size: usize, coords: C) -> Self {
        debug_assert!(max_bucket_size > 0, "max_bucket_size must be at least 1");
        let config = Config {
            max_bucket_size,
            ..Config::default()
        };
        Self::build(&config, coords)
    }

    pub fn new_with_config(config: Config, coords: C) -> QuadtreeResult<Self> {
        config.validate()?;
        Ok(Self::build(&config, coords))
    }

    fn build(config: &Config, coords: C) -> Self {
        Self {
            tree: LongQuadTree::new_with_config(Vec::new(), PointPolicy { coords }, config),
            max_bucket_size: config.max_bucket_size,
            len: 0,
        }
    }

    pub fn coordinates(&self) -> &C {
        self.tree.policy().coordinates()
    }

    pub fn max_bucket_size(&self) -> usize {
        self.max_bucket_size
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn node_counts(&self) -> (usize, usize) {
        self.tree.node_counts()
    }

    pub fn leaf_bounds(&self, bounding_boxes: &mut Vec<LongRect>) {
        self.tree.leaf_bounds(bounding_boxes);
    }

    pub fn leaf(&self, x: i64, y: i64) -> LeafRef<'_, Vec<V>> {
        self.tree.leaf(x, y)
    }

    pub fn accumulate<'a, F>(&'a self, x_min: i64, x_max: i64, y_min: i64, y_max: i64, f: F)
    where
        F: FnMut(&'a Vec<V>, &LongRect),
    {
        self.tree.accumulate(x_min, x_max, y_min, y_max, f);
    }

    /// Values without a valid position are dropped.
    pub fn add(&mut self, v: V) {
        let (x, y) = match self.coordinates().xy(&v) {
            Some(xy) => xy,
            None => return,
        };
        let id = self.tree.leaf_id(x, y);
        let bucket = self.tree.bucket_mut(id);
        bucket.push(v);
        let size = bucket.len();
        self.len += 1;
        if size > self.max_bucket_size {
            self.tree.split_leaf(id);
        }
    }

    /// Remove the first stored value equal to `v` from the leaf at `v`'s
    /// current position. Returns whether anything was removed.
    pub fn remove(&mut self, v: &V) -> bool
    where
        V: PartialEq,
    {
        let (x, y) = match self.coordinates().xy(v) {
            Some(xy) => xy,
            None => return false,
        };
        let id = self.tree.leaf_id(x, y);
        let bucket = self.tree.bucket_mut(id);
        match bucket.iter().position(|stored| stored == v) {
            Some(pos) => {
                bucket.remove(pos);
                self.len -= 1;
                true
            }
            None => false,
        }
    }

    /// Values with `x` in `[x_min, x_max]` and `y` in `[y_min, y_max]`.
    pub fn search(&self, x_min: i64, x_max: i64, y_min: i64, y_max: i64) -> Vec<&V> {
        let mut results = Vec::new();
        self.search_into(x_min, x_max, y_min, y_max, &mut results);
        results
    }

    /// Appends matches to `results` and returns how many were appended.
    pub fn search_into<'a>(
        &'a self,
        x_min: i64,
        x_max: i64,
        y_min: i64,
        y_max: i64,
        results: &mut Vec<&'a V>,
    ) -> usize {
        let before = results.len();
        self.search_with(x_min, x_max, y_min, y_max, |v| results.push(v));
        results.len() - before
    }

    pub fn search_filter<P>(&self, x_min: i64, x_max: i64, y_min: i64, y_max: i64, predicate: P) -> Vec<&V>
    where
        P: FnMut(&V) -> bool,
    {
        let mut results = Vec::new();
        self.search_filter_into(x_min, x_max, y_min, y_max, predicate, &mut results);
        results
    }

    pub fn search_filter_into<'a, P>(
        &'a self,
        x_min: i64,
        x_max: i64,
        y_min: i64,
        y_max: i64,
        predicate: P,
        results: &mut Vec<&'a V>,
    ) -> usize
    where
        P: FnMut(&V) -> bool,
    {
        let before = results.len();
        self.search_filter_with(x_min, x_max, y_min, y_max, predicate, |v| results.push(v));
        results.len() - before
    }

    pub fn search_with<'a, F>(&'a self, x_min: i64, x_max: i64, y_min: i64, y_max: i64, f: F)
    where
        F: FnMut(&'a V),
    {
        self.search_filter_with(x_min, x_max, y_min, y_max, |_| true, f);
    }

    /// Calls `f` for every value inside the window that `predicate` accepts.
    ///
    /// Leaves lying entirely inside the window along an axis skip the
    /// coordinate test for that axis.
    pub fn search_filter_with<'a, P, F>(
        &'a self,
        x_min: i64,
        x_max: i64,
        y_min: i64,
        y_max: i64,
        mut predicate: P,
        mut f: F,
    ) where
        P: FnMut(&V) -> bool,
        F: FnMut(&'a V),
    {
        let window = LongRect::new(x_min, x_max, y_min, y_max);
        let coords = self.coordinates();
        self.tree
            .accumulate(x_min, x_max, y_min, y_max, |bucket, bounds| {
                let x_all = window_contains_x(&window, bounds);
                let y_all = window_contains_y(&window, bounds);
                match (x_all, y_all) {
                    (true, true) => {
                        for v in bucket {
                            if predicate(v) {
                                f(v);
                            }
                        }
                    }
                    (true, false) => {
                        for v in bucket {
                            if !predicate(v) {
                                continue;
                            }
                            if matches!(coords.y(v), Some(y) if y_in_window(&window, y)) {
                                f(v);
                            }
                        }
                    }
                    (false, true) => {
                        for v in bucket {
                            if !predicate(v) {
                                continue;
                            }
                            if matches!(coords.x(v), Some(x) if x_in_window(&window, x)) {
                                f(v);
                            }
                        }
                    }
                    (false, false) => {
                        for v in bucket {
                            if !predicate(v) {
                                continue;
                            }
                            if matches!(
                                coords.xy(v),
                                Some((x, y)) if x_in_window(&window, x) && y_in_window(&window, y)
                            ) {
                                f(v);
                            }
                        }
                    }
                }
            });
    }
}
