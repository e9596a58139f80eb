//! Searches over slices sorted in ascending order.
//!
//! All searches run in `O(log n)` time and constant space. Passing an unsorted slice does not
//! cause undefined behavior but the returned index is meaningless.

use core::cmp::Ordering;

/// Performs a binary search for `target` over a sorted slice.
///
/// Returns the index of an element equal to `target`, or `None` if there is none. If several
/// elements are equal to `target`, any one of their indices may be returned.
#[must_use]
#[inline]
pub fn binary_search<T: Ord>(values: &[T], target: &T) -> Option<usize> {
    binary_search_by(values, |probe| probe.cmp(target))
}

/// Like [`binary_search`], but with a comparator.
///
/// `cmp` receives an element of the slice and reports how it is ordered relative to the
/// target: `Less` if the element comes before it, `Greater` if after.
pub fn binary_search_by<T, F>(values: &[T], mut cmp: F) -> Option<usize>
where
    F: FnMut(&T) -> Ordering,
{
    let mut lo = 0;
    let mut hi = values.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        match cmp(&values[mid]) {
            Ordering::Less => lo = mid + 1,
            Ordering::Greater => hi = mid,
            Ordering::Equal => return Some(mid),
        }
    }
    None
}

/// Returns the index of the first element that is greater than or equal to `value`.
///
/// This is `values.len()` if every element is strictly smaller than `value`, and `0` if the
/// slice is empty or `value` is smaller than or equal to every element.
#[must_use]
#[inline]
pub fn lower_bound<T: Ord>(values: &[T], value: &T) -> usize {
    lower_bound_by(values, |probe| probe.cmp(value))
}

/// Like [`lower_bound`], but with a comparator following the [`binary_search_by`] convention.
///
/// Only the `Less` / not-`Less` distinction is used.
pub fn lower_bound_by<T, F>(values: &[T], mut cmp: F) -> usize
where
    F: FnMut(&T) -> Ordering,
{
    let mut lo = 0;
    let mut hi = values.len();
    while lo < hi {
        let mid = lo + (hi - lo) / 2;
        if cmp(&values[mid]) == Ordering::Less {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}

/// Returns the index of the first element that is strictly greater than `value`.
///
/// `upper_bound(values, v) - lower_bound(values, v)` is the number of elements equal to `v`.
#[must_use]
#[inline]
pub fn upper_bound<T: Ord>(values: &[T], value: &T) -> usize {
    lower_bound_by(values, |probe| {
        if probe <= value {
            Ordering::Less
        } else {
            Ordering::Greater
        }
    })
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};

    use super::*;
    use crate::range::range;

    #[test]
    fn test_binary_search_not_found() {
        assert_eq!(binary_search(&[], &42), None);
        assert_eq!(binary_search(&[123], &42), None);
        assert_eq!(binary_search(&[12, 34], &42), None);
        assert_eq!(binary_search(&[12, 34, 56], &42), None);
        assert_eq!(binary_search(&[12, 34, 56], &0), None);
        assert_eq!(binary_search(&[12, 34, 56], &99), None);
    }

    #[test]
    fn test_binary_search_found() {
        assert_eq!(binary_search(&[42], &42), Some(0));
        assert_eq!(binary_search(&[12, 34], &12), Some(0));
        assert_eq!(binary_search(&[12, 34], &34), Some(1));
        assert_eq!(binary_search(&[12, 34, 56], &12), Some(0));
        assert_eq!(binary_search(&[12, 34, 56], &34), Some(1));
        assert_eq!(binary_search(&[12, 34, 56], &56), Some(2));
    }

    #[test]
    fn test_binary_search_random() {
        let values = range(1024);
        let mut rng = SmallRng::seed_from_u64(1);
        for _ in 0..100 {
            let target = rng.random_range(0..1024);
            let index = binary_search(&values, &target).unwrap();
            assert_eq!(values[index], target);
        }
    }

    #[test]
    fn test_binary_search_duplicates() {
        let values = [1, 3, 3, 3, 3, 7];
        let index = binary_search(&values, &3).unwrap();
        assert_eq!(values[index], 3);
    }

    #[test]
    fn test_binary_search_by_floats() {
        let values: [f64; 4] = [-1.5, 0.0, 2.25, 8.0];
        let find = |target: f64| binary_search_by(&values, |probe| probe.total_cmp(&target));
        assert_eq!(find(2.25), Some(2));
        assert_eq!(find(2.0), None);
    }

    #[test]
    fn test_lower_bound() {
        let empty: [i32; 0] = [];
        assert_eq!(lower_bound(&empty, &5), 0);

        let values = [10, 20, 20, 30];
        assert_eq!(lower_bound(&values, &5), 0);
        assert_eq!(lower_bound(&values, &10), 0);
        assert_eq!(lower_bound(&values, &15), 1);
        assert_eq!(lower_bound(&values, &20), 1);
        assert_eq!(lower_bound(&values, &25), 3);
        assert_eq!(lower_bound(&values, &30), 3);
        assert_eq!(lower_bound(&values, &31), 4);
    }

    #[test]
    fn test_lower_bound_matches_linear_scan() {
        let mut rng = SmallRng::seed_from_u64(2);
        let mut values: Vec<u32> = (0..200).map(|_| rng.random_range(0..50)).collect();
        values.sort_unstable();
        for value in 0..=51 {
            let expected = values
                .iter()
                .position(|&v| v >= value)
                .unwrap_or(values.len());
            assert_eq!(lower_bound(&values, &value), expected, "value = {value}");
        }
    }

    #[test]
    fn test_upper_bound() {
        let empty: [i32; 0] = [];
        assert_eq!(upper_bound(&empty, &5), 0);

        let values = [10, 20, 20, 30];
        assert_eq!(upper_bound(&values, &5), 0);
        assert_eq!(upper_bound(&values, &10), 1);
        assert_eq!(upper_bound(&values, &20), 3);
        assert_eq!(upper_bound(&values, &30), 4);
        assert_eq!(upper_bound(&values, &20) - lower_bound(&values, &20), 2);
        assert_eq!(upper_bound(&values, &25) - lower_bound(&values, &25), 0);
    }
}
