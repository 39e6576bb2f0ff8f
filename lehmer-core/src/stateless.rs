//! One-shot draws parameterized by an explicit seed.
//!
//! Each call applies the transform once to the given seed and converts the
//! result. Nothing is stored between calls, so these are safe to call from
//! any number of threads.

use crate::range::{self, RangeError};
use crate::transform::lehmer32;

/// Integer in `[min, max)` derived from `seed`.
pub fn int_from_seed(seed: u32, min: i32, max: i32) -> Result<i32, RangeError> {
    range::to_int_range(lehmer32(seed), min, max)
}

/// Floating-point value in `[min, max)` derived from `seed`.
pub fn double_from_seed(seed: u32, min: f64, max: f64) -> Result<f64, RangeError> {
    range::to_double_range(lehmer32(seed), min, max)
}

/// Integer in `[min, max)` seeded from the current time.
#[cfg(feature = "std")]
pub fn int_from_time(min: i32, max: i32) -> Result<i32, RangeError> {
    use crate::seed::{SeedSource, TickCount};
    int_from_seed(TickCount.seed(), min, max)
}

/// Floating-point value in `[min, max)` seeded from the current time.
#[cfg(feature = "std")]
pub fn double_from_time(min: f64, max: f64) -> Result<f64, RangeError> {
    use crate::seed::{SeedSource, TickCount};
    double_from_seed(TickCount.seed(), min, max)
}
