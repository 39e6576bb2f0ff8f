//! Mapping raw 32-bit draws onto bounded integer and floating-point ranges.
//!
//! Both conversions treat their bounds as a half-open interval `[min, max)`
//! and reject empty or inverted intervals instead of producing a value.

use core::fmt;

/// Error returned when a bounded draw is asked for an empty range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RangeError {
    /// Integer bounds with `max <= min`.
    Empty { min: i32, max: i32 },
    /// Floating-point bounds with `max <= min`.
    EmptyFloat { min: f64, max: f64 },
    /// A floating-point bound was NaN or infinite.
    NonFinite { min: f64, max: f64 },
    /// Finite floating-point bounds whose width `max - min` overflows.
    SpanOverflow { min: f64, max: f64 },
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { min, max } => {
                write!(f, "empty range [{}, {}): max must be greater than min", min, max)
            }
            Self::EmptyFloat { min, max } => {
                write!(f, "empty range [{}, {}): max must be greater than min", min, max)
            }
            Self::NonFinite { min, max } => {
                write!(f, "range bounds must be finite, got [{}, {})", min, max)
            }
            Self::SpanOverflow { min, max } => {
                write!(f, "width of range [{}, {}) is not representable", min, max)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for RangeError {}

/// Largest raw draw, used as the divisor of the floating-point conversion.
const RAW_MAX: f64 = u32::MAX as f64;

/// Checks that `[min, max)` holds at least one integer.
#[inline]
pub fn check_int_range(min: i32, max: i32) -> Result<(), RangeError> {
    if max <= min {
        return Err(RangeError::Empty { min, max });
    }
    Ok(())
}

/// Checks that `[min, max)` is a finite, non-empty interval with a finite
/// width.
#[inline]
pub fn check_double_range(min: f64, max: f64) -> Result<(), RangeError> {
    if !min.is_finite() || !max.is_finite() {
        return Err(RangeError::NonFinite { min, max });
    }
    if max <= min {
        return Err(RangeError::EmptyFloat { min, max });
    }
    if !(max - min).is_finite() {
        return Err(RangeError::SpanOverflow { min, max });
    }
    Ok(())
}

/// Maps `raw` into `[min, max)` as `raw % (max - min) + min`.
///
/// The width is a wrapping `i32` subtraction, so ranges wider than
/// `i32::MAX` get a negative divisor. The remainder runs in `i64` on the
/// unsigned draw and keeps its sign, which yields `raw % |span|`. The wrapped
/// magnitude is always below the true width, so the result stays in range.
/// `[i32::MIN, i32::MAX)` wraps to `-1` and always yields `min`.
pub fn to_int_range(raw: u32, min: i32, max: i32) -> Result<i32, RangeError> {
    check_int_range(min, max)?;
    let span = i64::from(max.wrapping_sub(min));
    Ok((i64::from(raw) % span + i64::from(min)) as i32)
}

/// Maps `raw` into `[0, i32::MAX)`. Infallible counterpart of
/// [`to_int_range`] for the default integer draw.
#[inline]
pub const fn to_non_negative_int(raw: u32) -> i32 {
    (raw % i32::MAX as u32) as i32
}

/// Maps `raw` into `[min, max)` as `raw / u32::MAX * (max - min) + min`.
///
/// The single raw value `u32::MAX` maps exactly to `max`, the one point
/// where the result is not strictly below the upper bound.
pub fn to_double_range(raw: u32, min: f64, max: f64) -> Result<f64, RangeError> {
    check_double_range(min, max)?;
    Ok(scale_unit(raw, min, max))
}

/// Unchecked scaling shared by the validated conversion and the
/// `[0.0, 1.0)` default, which is always well formed.
#[inline]
pub(crate) fn scale_unit(raw: u32, min: f64, max: f64) -> f64 {
    f64::from(raw) / RAW_MAX * (max - min) + min
}
