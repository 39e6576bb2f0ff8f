//! Sources of initial state words.
//!
//! The generator itself is pure; anything that depends on the outside world
//! (clocks, the OS entropy pool) lives behind [`SeedSource`].

/// Produces a 32-bit seed from some ambient source.
pub trait SeedSource {
    fn seed(&self) -> u32;
}

/// Always yields the same seed. Handy for replays and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedSeed(pub u32);

impl SeedSource for FixedSeed {
    fn seed(&self) -> u32 {
        self.0
    }
}

/// Time-derived seed, the default for unseeded generators.
///
/// Folds the nanoseconds elapsed since the Unix epoch into 32 bits. Values
/// differ between runs with high probability but are not reproducible.
#[cfg(feature = "std")]
#[derive(Debug, Clone, Copy, Default)]
pub struct TickCount;

#[cfg(feature = "std")]
impl SeedSource for TickCount {
    fn seed(&self) -> u32 {
        use std::time::{SystemTime, UNIX_EPOCH};

        match SystemTime::now().duration_since(UNIX_EPOCH) {
            Ok(elapsed) => {
                let nanos = elapsed.as_nanos();
                let seed = (nanos ^ (nanos >> 32)) as u32;
                log::trace!("tick count seed: {:#010x}", seed);
                seed
            }
            Err(e) => {
                log::warn!("system clock is before the Unix epoch ({}), seeding with 0", e);
                0
            }
        }
    }
}

/// Seed drawn from the operating system's entropy pool.
///
/// Falls back to [`TickCount`] if the pool cannot be read.
#[cfg(feature = "entropy")]
#[derive(Debug, Clone, Copy, Default)]
pub struct OsEntropy;

#[cfg(feature = "entropy")]
impl SeedSource for OsEntropy {
    fn seed(&self) -> u32 {
        let mut buf = [0u8; 4];
        match getrandom::getrandom(&mut buf) {
            Ok(()) => {
                let seed = u32::from_le_bytes(buf);
                log::trace!("os entropy seed: {:#010x}", seed);
                seed
            }
            Err(e) => {
                log::warn!("failed to read os entropy ({}), falling back to tick count", e);
                TickCount.seed()
            }
        }
    }
}
