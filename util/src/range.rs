use alloc::vec::Vec;
use core::iter;

use num_traits::PrimInt;

/// Returns `[0, 1, ..., length - 1]`.
#[must_use]
pub fn range(length: usize) -> Vec<usize> {
    (0..length).collect()
}

/// Returns `length` consecutive integers starting from `offset`.
///
/// For example, `range_from(6, 4)` returns `[4, 5, 6, 7, 8, 9]`.
///
/// # Panics
/// Panics if `offset + length - 1` does not fit in `T`.
#[must_use]
pub fn range_from<T: PrimInt>(length: usize, offset: T) -> Vec<T> {
    let values: Vec<T> = iter::successors(Some(offset), |x| x.checked_add(&T::one()))
        .take(length)
        .collect();
    assert_eq!(
        values.len(),
        length,
        "A range of {length} values overflows the element type."
    );
    values
}
