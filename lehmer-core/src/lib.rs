#![cfg_attr(not(any(feature = "std", test)), no_std)]

//! Deterministic pseudo-random numbers from a 32-bit Lehmer-style mixer.
//!
//! A [`Lehmer`] generator carries one `u32` of state. Every draw pushes that
//! word through [`transform::lehmer32`] and maps the new value onto the
//! requested range, so the same seed always replays the same sequence.
//!
//! ```
//! use lehmer_core::{Lehmer, Random};
//!
//! let mut rng = Lehmer::new(42);
//! assert_eq!(rng.next_int_range(0, 100), Ok(28));
//! assert_eq!(rng.next_int_range(0, 100), Ok(98));
//! ```
//!
//! Not suitable for cryptography: the state is recoverable from its output.

pub mod range;
pub mod seed;
pub mod stateless;
pub mod transform;

#[cfg(feature = "rand")]
mod rng_core;

pub use range::RangeError;
pub use seed::{FixedSeed, SeedSource};
#[cfg(feature = "std")]
pub use seed::TickCount;
#[cfg(feature = "entropy")]
pub use seed::OsEntropy;

use transform::lehmer32;

/// Draw operations layered on top of a raw 32-bit source.
///
/// Implementors only provide [`draw`](Random::draw); every bounded shape is
/// derived from it with one draw per call.
pub trait Random {
    /// Advances the state once and returns the new raw value.
    fn draw(&mut self) -> u32;

    /// Non-negative integer in `[0, i32::MAX)`.
    fn next_int(&mut self) -> i32 {
        range::to_non_negative_int(self.draw())
    }

    /// Integer in `[0, max)`.
    fn next_int_below(&mut self, max: i32) -> Result<i32, RangeError> {
        self.next_int_range(0, max)
    }

    /// Integer in `[min, max)`.
    fn next_int_range(&mut self, min: i32, max: i32) -> Result<i32, RangeError> {
        range::check_int_range(min, max)?;
        range::to_int_range(self.draw(), min, max)
    }

    /// Floating-point value in `[0.0, 1.0)`.
    fn next_double(&mut self) -> f64 {
        range::scale_unit(self.draw(), 0.0, 1.0)
    }

    /// Floating-point value in `[0.0, max)`.
    fn next_double_below(&mut self, max: f64) -> Result<f64, RangeError> {
        self.next_double_range(0.0, max)
    }

    /// Floating-point value in `[min, max)`.
    fn next_double_range(&mut self, min: f64, max: f64) -> Result<f64, RangeError> {
        range::check_double_range(min, max)?;
        range::to_double_range(self.draw(), min, max)
    }

    /// Fills `buffer` with the low byte of one [`next_int`](Random::next_int)
    /// per element, in order. An empty buffer draws nothing.
    fn next_bytes(&mut self, buffer: &mut [u8]) {
        for byte in buffer.iter_mut() {
            *byte = self.next_int() as u8;
        }
    }
}

/// Stateful generator over a single 32-bit state word.
///
/// Draws take `&mut self`, so sharing one generator between threads needs
/// external locking (e.g. a `Mutex<Lehmer>`). For lock-free one-off values
/// use the functions in [`stateless`].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct Lehmer {
    state: u32,
}

impl Lehmer {
    pub const fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Seeds from a signed value, reinterpreting its bits as unsigned.
    pub const fn from_signed(seed: i32) -> Self {
        Self::new(seed as u32)
    }

    pub fn from_source<S: SeedSource + ?Sized>(source: &S) -> Self {
        Self::new(source.seed())
    }

    /// Seeds from the current time. Two generators created at clearly
    /// different moments will almost certainly diverge.
    #[cfg(feature = "std")]
    pub fn from_time() -> Self {
        Self::from_source(&TickCount)
    }

    /// Endless stream of [`Random::next_int`] values.
    pub fn ints(&mut self) -> impl Iterator<Item = i32> + '_ {
        core::iter::from_fn(move || Some(self.next_int()))
    }
}

impl Random for Lehmer {
    #[inline]
    fn draw(&mut self) -> u32 {
        self.state = lehmer32(self.state);
        self.state
    }
}

impl From<u32> for Lehmer {
    fn from(seed: u32) -> Self {
        Self::new(seed)
    }
}

impl From<i32> for Lehmer {
    fn from(seed: i32) -> Self {
        Self::from_signed(seed)
    }
}
