use common::shapes::LongRect;

// Check that the leaf rectangle spans no more than the window along x
#[inline(always)]
pub fn window_contains_x(window: &LongRect, leaf: &LongRect) -> bool {
    window.x_min <= leaf.x_min && leaf.x_max <= window.x_max
}

#[inline(always)]
pub fn window_contains_y(window: &LongRect, leaf: &LongRect) -> bool {
    window.y_min <= leaf.y_min && leaf.y_max <= window.y_max
}

#[inline(always)]
pub fn window_contains_leaf(window: &LongRect, leaf: &LongRect) -> bool {
    window_contains_x(window, leaf) && window_contains_y(window, leaf)
}

#[inline(always)]
pub fn x_in_window(window: &LongRect, x: i64) -> bool {
    x >= window.x_min && x <= window.x_max
}

#[inline(always)]
pub fn y_in_window(window: &LongRect, y: i64) -> bool {
    y >= window.y_min && y <= window.y_max
}

/// Which children of a node divided at `(x_divider, y_divider)` a closed
/// window reaches, indexed by quadrant.
#[inline(always)]
pub fn window_reaches_quadrants(window: &LongRect, x_divider: i64, y_divider: i64) -> [bool; 4] {
    let small_x = window.x_min < x_divider;
    let large_x = window.x_max >= x_divider;
    let small_y = window.y_min < y_divider;
    let large_y = window.y_max >= y_divider;
    [
        small_x && small_y,
        large_x && small_y,
        small_x && large_y,
        large_x && large_y,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leaf_on_window_edge_is_contained() {
        let window = LongRect::new(0, 10, 0, 10);
        assert!(window_contains_leaf(&window, &LongRect::new(0, 10, 0, 10)));
        assert!(!window_contains_leaf(&window, &LongRect::new(0, 11, 0, 10)));
        assert!(window_contains_x(&window, &LongRect::new(2, 4, -5, 50)));
        assert!(!window_contains_y(&window, &LongRect::new(2, 4, -5, 50)));
    }

    #[test]
    fn divider_equality_reaches_high_side_only() {
        let window = LongRect::new(5, 5, 5, 5);
        assert_eq!(
            window_reaches_quadrants(&window, 5, 5),
            [false, false, false, true]
        );
        assert_eq!(
            window_reaches_quadrants(&window, 6, 6),
            [true, false, false, false]
        );
    }

    #[test]
    fn straddling_window_reaches_all_quadrants() {
        let window = LongRect::new(-1, 1, -1, 1);
        assert_eq!(window_reaches_quadrants(&window, 0, 0), [true; 4]);
    }
}
