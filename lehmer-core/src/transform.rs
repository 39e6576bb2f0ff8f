//! The Lehmer mixing step.
//!
//! Every draw in this crate is one application of [`lehmer32`] to the current
//! state word. The three constants below define the sequence: changing any of
//! them produces a different, incompatible stream.

/// Added to the input before the first multiplication.
pub const SEED_OFFSET: u32 = 0xE120_FC15;

/// Multiplier of the first widening round.
pub const FIRST_MULTIPLIER: u64 = 0x4A39_B70D;

/// Multiplier of the second widening round.
pub const SECOND_MULTIPLIER: u64 = 0x12FA_D5C9;

/// Folds the high half of a 64-bit product onto the low half.
#[inline]
const fn fold(tmp: u64) -> u32 {
    ((tmp >> 32) ^ tmp) as u32
}

/// Advances a 32-bit value to its pseudo-random successor.
///
/// Total over `u32` and free of side effects. All arithmetic wraps.
#[inline]
pub const fn lehmer32(seed: u32) -> u32 {
    let seed = seed.wrapping_add(SEED_OFFSET);
    let m1 = fold((seed as u64).wrapping_mul(FIRST_MULTIPLIER));
    fold((m1 as u64).wrapping_mul(SECOND_MULTIPLIER))
}
