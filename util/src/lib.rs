//! Numeric and slice helpers: tolerance comparison, wrap-around modulus, power-of-two rounding,
//! integer ranges, shuffling and sampling, flattening, and searches over sorted slices.
//!
//! Randomized helpers never create their own generator. They take any [`rand::Rng`] from the
//! caller, so a seeded generator makes them fully reproducible.

#![no_std]

extern crate alloc;

mod error;
mod flatten;
mod numeric;
mod random;
mod range;
mod search;

pub use error::*;
pub use flatten::*;
pub use numeric::*;
pub use random::*;
pub use range::*;
pub use search::*;
