//! Error types for the sampling helpers.

use alloc::string::String;
use core::fmt;

use thiserror::Error;

/// Error type for sampling requests that cannot be satisfied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolkitError {
    /// The lower bound of the interval is greater than the upper bound.
    #[error("invalid interval: min {min} is greater than max {max}")]
    InvertedInterval {
        /// The requested lower bound.
        min: String,
        /// The requested upper bound.
        max: String,
    },

    /// More distinct values were requested than the interval holds.
    #[error("cannot draw {count} distinct values from an interval of {available}")]
    SampleTooLarge {
        /// Number of values requested.
        count: usize,
        /// Number of values in the interval.
        available: usize,
    },

    /// The interval holds more values than can be enumerated in memory.
    #[error("interval [{min}, {max}) is too wide to enumerate")]
    IntervalTooWide {
        /// The requested lower bound.
        min: String,
        /// The requested upper bound.
        max: String,
    },
}

impl ToolkitError {
    /// Creates an inverted interval error, rendering the bounds with `Display`.
    pub fn inverted_interval(min: impl fmt::Display, max: impl fmt::Display) -> Self {
        Self::InvertedInterval {
            min: alloc::format!("{min}"),
            max: alloc::format!("{max}"),
        }
    }

    /// Creates an interval too wide error, rendering the bounds with `Display`.
    pub fn interval_too_wide(min: impl fmt::Display, max: impl fmt::Display) -> Self {
        Self::IntervalTooWide {
            min: alloc::format!("{min}"),
            max: alloc::format!("{max}"),
        }
    }
}

/// Result type alias for the sampling helpers.
pub type ToolkitResult<T> = core::result::Result<T, ToolkitError>;
