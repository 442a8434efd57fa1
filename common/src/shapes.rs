use rand::Rng;

/// A point on the integer grid.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
pub struct LongPoint {
    pub x: i64,
    pub y: i64,
}

impl LongPoint {
    pub fn new(x: i64, y: i64) -> Self {
        Self { x, y }
    }

    pub fn x(&self) -> i64 {
        self.x
    }

    pub fn y(&self) -> i64 {
        self.y
    }
}

/// Axis-aligned rectangle on the integer grid.
///
/// Quadtree leaves treat a rectangle as half-open, `[x_min, x_max)` by
/// `[y_min, y_max)`, except that an upper bound of `i64::MAX` also owns
/// `i64::MAX` itself. Query windows use the same type but are closed on
/// both ends.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct LongRect {
    pub x_min: i64,
    pub x_max: i64,
    pub y_min: i64,
    pub y_max: i64,
}

impl LongRect {
    /// The whole `i64` plane.
    pub const EVERYWHERE: LongRect = LongRect {
        x_min: i64::MIN,
        x_max: i64::MAX,
        y_min: i64::MIN,
        y_max: i64::MAX,
    };

    pub fn new(x_min: i64, x_max: i64, y_min: i64, y_max: i64) -> Self {
        Self {
            x_min,
            x_max,
            y_min,
            y_max,
        }
    }

    pub fn width(&self) -> u64 {
        if self.x_max <= self.x_min {
            0
        } else {
            self.x_max.abs_diff(self.x_min)
        }
    }

    pub fn height(&self) -> u64 {
        if self.y_max <= self.y_min {
            0
        } else {
            self.y_max.abs_diff(self.y_min)
        }
    }

    pub fn is_x_splittable(&self) -> bool {
        self.width() > 1
    }

    pub fn is_y_splittable(&self) -> bool {
        self.height() > 1
    }

    /// Half-open ownership test used for leaf rectangles.
    pub fn owns_point(&self, x: i64, y: i64) -> bool {
        Self::owns(self.x_min, self.x_max, x) && Self::owns(self.y_min, self.y_max, y)
    }

    fn owns(min: i64, max: i64, v: i64) -> bool {
        v >= min && (v < max || (max == i64::MAX && v == i64::MAX && min < max))
    }

    /// Closed containment test used for query windows.
    pub fn contains_point(&self, x: i64, y: i64) -> bool {
        x >= self.x_min && x <= self.x_max && y >= self.y_min && y <= self.y_max
    }

    /// True if `other` lies entirely within `self`, comparing bounds directly.
    pub fn contains_rect(&self, other: &LongRect) -> bool {
        self.x_min <= other.x_min
            && other.x_max <= self.x_max
            && self.y_min <= other.y_min
            && other.y_max <= self.y_max
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// A random point satisfying `contains_point`.
    pub fn random_point_inside<R: Rng>(&self, rng: &mut R) -> LongPoint {
        LongPoint {
            x: Self::safe_rand_i64(rng, self.x_min, self.x_max),
            y: Self::safe_rand_i64(rng, self.y_min, self.y_max),
        }
    }

    fn safe_rand_i64<R: Rng>(rng: &mut R, min: i64, max: i64) -> i64 {
        if min >= max {
            min
        } else {
            rng.gen_range(min..=max)
        }
    }
}

impl Default for LongRect {
    fn default() -> Self {
        LongRect::EVERYWHERE
    }
}
