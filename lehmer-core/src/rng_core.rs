//! `rand_core` interop so a [`Lehmer`] can drive the `rand` ecosystem.

use rand_core::{impls, Error, RngCore, SeedableRng};

use crate::{Lehmer, Random};

impl RngCore for Lehmer {
    fn next_u32(&mut self) -> u32 {
        self.draw()
    }

    /// Two draws, low word first.
    fn next_u64(&mut self) -> u64 {
        impls::next_u64_via_u32(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.next_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.next_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Lehmer {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }

    /// Keeps the low 32 bits, so `seed_from_u64(s as u64)` equals `Lehmer::new(s)`.
    fn seed_from_u64(state: u64) -> Self {
        Self::new(state as u32)
    }

    fn from_rng<R: RngCore>(mut rng: R) -> Result<Self, Error> {
        Ok(Self::new(rng.next_u32()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_u32_is_draw() {
        let mut a = Lehmer::new(0);
        assert_eq!(a.next_u32(), 0x1322_D6D0);
        assert_eq!(a.next_u32(), 1_058_056_618);
    }

    #[test]
    fn test_next_u64_packs_two_draws() {
        let mut a = Lehmer::new(0);
        assert_eq!(a.next_u64(), (1_058_056_618u64 << 32) | 0x1322_D6D0);
        assert_eq!(a, Lehmer::new(1_058_056_618));
    }

    #[test]
    fn test_fill_bytes_matches_next_bytes() {
        let mut a = Lehmer::new(12345);
        let mut buf = [0u8; 8];
        a.fill_bytes(&mut buf);
        assert_eq!(buf, [231, 199, 224, 129, 153, 107, 94, 169]);
    }

    #[test]
    fn test_seeding() {
        assert_eq!(Lehmer::from_seed(42u32.to_le_bytes()), Lehmer::new(42));
        assert_eq!(Lehmer::seed_from_u64(42), Lehmer::new(42));
        assert_eq!(Lehmer::seed_from_u64((1 << 32) | 42), Lehmer::new(42));
        assert_eq!(
            Lehmer::from_rng(Lehmer::new(0)).unwrap(),
            Lehmer::new(0x1322_D6D0)
        );
    }
}
