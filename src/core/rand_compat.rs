//! `rand_core` integration.
//!
//! No `CryptoRng` impl: this generator is predictable from its output.

use rand_core::{Error, RngCore, SeedableRng};

use crate::generator::Generator;

impl RngCore for Generator {
    fn next_u32(&mut self) -> u32 {
        self.next_int32() as u32
    }

    fn next_u64(&mut self) -> u64 {
        Generator::next_u64(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        Generator::fill_bytes(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        Generator::fill_bytes(self, dest);
        Ok(())
    }
}

impl SeedableRng for Generator {
    /// Little-endian `i64` seed.
    type Seed = [u8; 8];

    fn from_seed(seed: Self::Seed) -> Self {
        Generator::new(i64::from_le_bytes(seed))
    }

    fn seed_from_u64(state: u64) -> Self {
        Generator::new(state as i64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rng_core_agrees_with_inherent_methods() {
        let mut adapter = Generator::new(123456789);
        let mut inherent = adapter.clone();

        assert_eq!(RngCore::next_u64(&mut adapter), inherent.next_u64());
        assert_eq!(RngCore::next_u32(&mut adapter), inherent.next_int32() as u32);

        let mut a = [0u8; 11];
        let mut b = [0u8; 11];
        adapter.try_fill_bytes(&mut a).unwrap();
        inherent.fill_bytes(&mut b);
        assert_eq!(a, b);
    }

    #[test]
    fn seedable_rng_matches_new() {
        let seed: i64 = -123456789;
        assert_eq!(Generator::from_seed(seed.to_le_bytes()), Generator::new(seed));
        assert_eq!(Generator::seed_from_u64(123456789), Generator::new(123456789));
    }
}
