//! Shuffling and sampling over a caller-supplied random source.
//!
//! None of these functions are suitable for cryptographic use unless the supplied generator is.

use alloc::vec::Vec;
use core::fmt::Display;

use num_traits::PrimInt;
use rand::Rng;
use rand::distr::uniform::SampleUniform;
use rand::distr::{Distribution, Uniform};
use tracing::{Span, field, instrument};

use crate::error::{ToolkitError, ToolkitResult};
use crate::range::range_from;

/// Shuffles a slice in place and returns it.
///
/// Uses the Knuth / Fisher-Yates algorithm: every position `i` is swapped with a position drawn
/// uniformly from `[i, len - 1]`, which yields a uniformly distributed permutation as long as
/// `rng` is unbiased.
pub fn shuffle<'a, T, R: Rng + ?Sized>(values: &'a mut [T], rng: &mut R) -> &'a mut [T] {
    let len = values.len();
    partial_shuffle(values, len, rng);
    values
}

/// Runs the first `amount` steps of [`shuffle`] and returns the shuffled prefix.
///
/// The prefix is a uniform sample without replacement of the whole slice, in random order.
/// If `amount` exceeds the length of the slice, the whole slice is shuffled.
pub fn partial_shuffle<'a, T, R: Rng + ?Sized>(
    values: &'a mut [T],
    amount: usize,
    rng: &mut R,
) -> &'a mut [T] {
    let len = values.len();
    let amount = amount.min(len);
    for i in 0..amount {
        let j = rng.random_range(i..len);
        values.swap(i, j);
    }
    &mut values[..amount]
}

/// Draws a uniformly distributed integer from the closed interval `[min, max]`.
///
/// For example, `random_int(1, 100, &mut rng)` returns an integer from 1 to 100 inclusive.
pub fn random_int<T, R>(min: T, max: T, rng: &mut R) -> ToolkitResult<T>
where
    T: PrimInt + SampleUniform + Display,
    R: Rng + ?Sized,
{
    let distr = Uniform::new_inclusive(min, max)
        .map_err(|_| ToolkitError::inverted_interval(min, max))?;
    Ok(distr.sample(rng))
}

/// Draws `count` independent values from the closed interval `[min, max]`.
///
/// Values may repeat. Use [`random_ints_no_reps`] when they must be distinct.
pub fn random_ints<T, R>(count: usize, min: T, max: T, rng: &mut R) -> ToolkitResult<Vec<T>>
where
    T: PrimInt + SampleUniform + Display,
    R: Rng + ?Sized,
{
    let distr = Uniform::new_inclusive(min, max)
        .map_err(|_| ToolkitError::inverted_interval(min, max))?;
    Ok((0..count).map(|_| distr.sample(&mut *rng)).collect())
}

/// Draws `count` distinct integers from the half-open interval `[min, max)`.
///
/// For example, six lottery numbers between 1 and 90 inclusive are
/// `random_ints_no_reps(6, 1, 91, &mut rng)`.
///
/// The whole interval is materialized and the first `count` positions are shuffled with
/// [`partial_shuffle`], so time and memory are `O(max - min)` regardless of `count`.
#[instrument(
    level = "debug",
    skip_all,
    fields(count = count, min = %min, max = %max, available = field::Empty)
)]
pub fn random_ints_no_reps<T, R>(
    count: usize,
    min: T,
    max: T,
    rng: &mut R,
) -> ToolkitResult<Vec<T>>
where
    T: PrimInt + Display,
    R: Rng + ?Sized,
{
    if max < min {
        return Err(ToolkitError::inverted_interval(min, max));
    }
    let available =
        interval_width(min, max).ok_or_else(|| ToolkitError::interval_too_wide(min, max))?;
    Span::current().record("available", available);
    if count > available {
        return Err(ToolkitError::SampleTooLarge { count, available });
    }

    let mut candidates = range_from(available, min);
    partial_shuffle(&mut candidates, count, rng);
    candidates.truncate(count);
    Ok(candidates)
}

/// The number of values in `[min, max)`, or `None` if it does not fit in a `usize`.
///
/// The subtraction happens in 128 bits so that narrow types spanning zero cannot overflow.
fn interval_width<T: PrimInt>(min: T, max: T) -> Option<usize> {
    debug_assert!(min <= max);
    let width = if min >= T::zero() {
        max.to_u128()? - min.to_u128()?
    } else {
        // A negative `min` means `T` is signed, so both bounds fit in an `i128`.
        let width = max.to_i128()?.checked_sub(min.to_i128()?)?;
        u128::try_from(width).ok()?
    };
    usize::try_from(width).ok()
}
