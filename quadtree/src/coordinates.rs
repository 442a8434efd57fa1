//! Mapping values onto the integer grid.
//!
//! An index never interprets units: callers convert domain or screen
//! coordinates to `i64` before values reach it. Extraction may report `None`
//! for a value that has no valid position; such values are skipped on
//! insertion.

use common::shapes::LongPoint;
use std::fmt;

/// Source of `x`/`y` for values of type `V`.
///
/// Results must stay the same for as long as a value is stored in an index.
pub trait Coordinates<V> {
    fn x(&self, v: &V) -> Option<i64>;

    fn y(&self, v: &V) -> Option<i64>;

    #[inline(always)]
    fn xy(&self, v: &V) -> Option<(i64, i64)> {
        Some((self.x(v)?, self.y(v)?))
    }
}

/// Values that carry their own integer position.
pub trait LongXy {
    fn x(&self) -> i64;

    fn y(&self) -> i64;
}

impl LongXy for LongPoint {
    fn x(&self) -> i64 {
        self.x
    }

    fn y(&self) -> i64 {
        self.y
    }
}

impl LongXy for (i64, i64) {
    fn x(&self) -> i64 {
        self.0
    }

    fn y(&self) -> i64 {
        self.1
    }
}

/// [`Coordinates`] for any [`LongXy`] value.
#[derive(Debug, Clone, Copy, Default)]
pub struct XyCoordinates;

impl<V: LongXy> Coordinates<V> for XyCoordinates {
    #[inline(always)]
    fn x(&self, v: &V) -> Option<i64> {
        Some(v.x())
    }

    #[inline(always)]
    fn y(&self, v: &V) -> Option<i64> {
        Some(v.y())
    }
}

/// [`Coordinates`] backed by a pair of closures.
#[derive(Clone, Copy)]
pub struct FnCoordinates<FX, FY> {
    x_of: FX,
    y_of: FY,
}

impl<FX, FY> FnCoordinates<FX, FY> {
    pub fn new(x_of: FX, y_of: FY) -> Self {
        Self { x_of, y_of }
    }
}

impl<V, FX, FY> Coordinates<V> for FnCoordinates<FX, FY>
where
    FX: Fn(&V) -> Option<i64>,
    FY: Fn(&V) -> Option<i64>,
{
    #[inline(always)]
    fn x(&self, v: &V) -> Option<i64> {
        (self.x_of)(v)
    }

    #[inline(always)]
    fn y(&self, v: &V) -> Option<i64> {
        (self.y_of)(v)
    }
}

impl<FX, FY> fmt::Debug for FnCoordinates<FX, FY> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnCoordinates").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn xy_requires_both_axes() {
        let coords = FnCoordinates::new(
            |v: &(i64, Option<i64>)| Some(v.0),
            |v: &(i64, Option<i64>)| v.1,
        );
        assert_eq!(coords.xy(&(3, Some(4))), Some((3, 4)));
        assert_eq!(coords.xy(&(3, None)), None);
    }

    #[test]
    fn long_xy_values_are_always_valid() {
        assert_eq!(XyCoordinates.xy(&LongPoint::new(-2, 9)), Some((-2, 9)));
        assert_eq!(XyCoordinates.xy(&(i64::MIN, i64::MAX)), Some((i64::MIN, i64::MAX)));
    }
}
