use num_traits::Num;

/// Compares two numbers with a tolerance.
///
/// Returns `true` iff `b` lies in the closed interval `[a - tolerance, a + tolerance]`.
/// A negative tolerance is not rejected; the comparison simply never succeeds.
///
/// Only the distance between `a` and `b` is computed, so unsigned types and values near the
/// bounds of the type do not overflow.
#[must_use]
#[inline]
pub fn almost_equals<T: Num + PartialOrd + Copy>(a: T, b: T, tolerance: T) -> bool {
    if b >= a {
        b - a <= tolerance
    } else {
        a - b <= tolerance
    }
}

/// A "wrap around" version of the modulus.
///
/// For `b > 0` the result always lies in `[0, b)`, even when `a` is negative, which makes it
/// suitable for indexing into circular buffers. It agrees with `((a % b) + b) % b`, but the
/// correction is only applied to negative remainders so that integer types cannot overflow.
///
/// # Panics
/// Panics for integer types if `b` is zero. See [`checked_wrap_mod`] for a non-panicking version.
#[must_use]
#[inline]
pub fn wrap_mod<T: Num + PartialOrd + Copy>(a: T, b: T) -> T {
    let r = a % b;
    if r < T::zero() {
        // The second `%` folds `r + b == b`, which floats can produce by rounding tiny remainders.
        (r + b) % b
    } else {
        r
    }
}

/// Like [`wrap_mod`], but returns `None` unless `b` is strictly positive.
#[must_use]
#[inline]
pub fn checked_wrap_mod<T: Num + PartialOrd + Copy>(a: T, b: T) -> Option<T> {
    (b > T::zero()).then(|| wrap_mod(a, b))
}

/// Rounds `x` up to the next power of two.
///
/// Powers of two map to themselves. Every `x <= 0` maps to `1`, the smallest power of two.
#[must_use]
pub const fn next_power_of_two(x: i64) -> u64 {
    if x <= 0 {
        1
    } else {
        // `i64::MAX` rounds up to `1 << 63`, which still fits.
        (x as u64).next_power_of_two()
    }
}
