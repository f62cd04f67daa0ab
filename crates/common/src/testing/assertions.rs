//! Custom assertions for aggregation tests

use std::fmt::Debug;

/// Assert two floats are within `epsilon` of each other.
///
/// # Panics
///
/// Panics when the difference exceeds `epsilon`.
pub fn assert_approx_eq(actual: f64, expected: f64, epsilon: f64) {
    let diff = (actual - expected).abs();
    assert!(
        diff <= epsilon,
        "Values not approximately equal: actual={actual}, expected={expected}, diff={diff}, epsilon={epsilon}"
    );
}

/// Assert a slice is sorted ascending.
///
/// # Examples
///
/// ```
/// use straycare_common::testing::assertions::assert_sorted;
///
/// assert_sorted(&[1, 2, 2, 5]);
/// ```
pub fn assert_sorted<T>(items: &[T])
where
    T: Ord + Debug,
{
    for window in items.windows(2) {
        assert!(window[0] <= window[1], "Items not sorted: {:?} > {:?}", window[0], window[1]);
    }
}

/// Assert a slice never increases, e.g. feed timestamps newest first.
///
/// # Examples
///
/// ```
/// use straycare_common::testing::assertions::assert_non_increasing;
///
/// assert_non_increasing(&[5, 3, 3, 1]);
/// ```
pub fn assert_non_increasing<T>(items: &[T])
where
    T: Ord + Debug,
{
    for window in items.windows(2) {
        assert!(window[0] >= window[1], "Items increase: {:?} < {:?}", window[0], window[1]);
    }
}
