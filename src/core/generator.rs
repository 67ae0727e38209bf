// xorshift128+ generator.
//
// This is NOT cryptographically secure.
// Not synchronized: give each thread its own instance.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::splitmix::{self, FALLBACK_STATE};

/// The complete internal memory of a [`Generator`].
///
/// Never both zero once it belongs to a generator: all-zero is a fixed
/// point of the transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeneratorState {
    pub s0: u64,
    pub s1: u64,
}

impl GeneratorState {
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.s0 == 0 && self.s1 == 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generator {
    state: GeneratorState,
}

impl Generator {
    /// Seeded generator. Equal seeds give equal sequences.
    pub fn new(seed: i64) -> Self {
        Self {
            state: splitmix::expand_seed(seed),
        }
    }

    /// Generator seeded from the clock and the calling thread.
    /// See [`crate::entropy::default_seed`].
    #[cfg(feature = "std")]
    pub fn new_default() -> Self {
        let seed = crate::entropy::default_seed();
        tracing::debug!(seed, "seeding generator from ambient entropy");
        Self::new(seed)
    }

    /// Resume from a snapshot taken with [`Generator::state`].
    pub fn from_state(state: GeneratorState) -> Self {
        // Avoid a zero state.
        let state = if state.is_zero() {
            FALLBACK_STATE
        } else {
            state
        };
        Self { state }
    }

    /// Re-initialize from `seed`, discarding the current state.
    pub fn set_seed(&mut self, seed: i64) {
        self.state = splitmix::expand_seed(seed);
    }

    pub fn state(&self) -> GeneratorState {
        self.state
    }

    /// Advance one step and return 64 raw bits.
    #[inline]
    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.state.s0;
        let y = self.state.s1;
        let result = x.wrapping_add(y);

        self.state.s0 = y;
        x ^= x << 23;
        x ^= x >> 17;
        x ^= y ^ (y >> 26);
        self.state.s1 = x;

        result
    }

    #[inline]
    pub fn next_int64(&mut self) -> i64 {
        self.next_u64() as i64
    }

    /// Low 32 bits of one raw draw.
    #[inline]
    pub fn next_int32(&mut self) -> i32 {
        self.next_u64() as i32
    }

    /// Uniform value in `[0, bound)`.
    ///
    /// Powers of two mask one raw draw. Other bounds use rejection sampling
    /// on 31-bit draws, which needs fewer than two draws on average but has
    /// no worst-case limit on the number of iterations.
    ///
    /// Fails with [`Error::InvalidArgument`] when `bound <= 0`, without
    /// touching the state.
    pub fn next_bounded_int32(&mut self, bound: i32) -> Result<i32> {
        if bound <= 0 {
            return Err(Error::InvalidArgument { bound });
        }
        let mask = bound - 1;
        if bound & mask == 0 {
            return Ok((self.next_u64() & mask as u64) as i32);
        }
        let limit = i32::MAX - (i32::MAX % bound);
        loop {
            let r = ((self.next_u64() >> 1) & 0x7FFF_FFFF) as i32;
            if r < limit {
                return Ok(r % bound);
            }
        }
    }

    /// Uniform in `[0.0, 1.0)` from the top 53 bits.
    #[inline]
    pub fn next_float64(&mut self) -> f64 {
        let bits = self.next_u64() >> 11;
        bits as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Uniform in `[0.0, 1.0)` from the top 24 bits.
    #[inline]
    pub fn next_float32(&mut self) -> f32 {
        let bits = (self.next_u64() >> 40) as u32;
        bits as f32 * (1.0 / (1u32 << 24) as f32)
    }

    #[inline]
    pub fn next_bool(&mut self) -> bool {
        self.next_u64() & 1 != 0
    }

    /// Fill `buf` with little-endian raw draws, 8 bytes per draw.
    /// A trailing partial chunk uses the low bytes of one more draw.
    pub fn fill_bytes(&mut self, buf: &mut [u8]) {
        let mut chunks = buf.chunks_exact_mut(8);
        for chunk in &mut chunks {
            chunk.copy_from_slice(&self.next_u64().to_le_bytes());
        }
        let tail = chunks.into_remainder();
        if !tail.is_empty() {
            let bytes = self.next_u64().to_le_bytes();
            tail.copy_from_slice(&bytes[..tail.len()]);
        }
    }
}

#[cfg(feature = "std")]
impl Default for Generator {
    fn default() -> Self {
        Self::new_default()
    }
}
