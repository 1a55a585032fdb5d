//! Uniform random sources and the bounded sampling helpers built on them.
//!
//! The generator consumes randomness through the [`Source`] trait: two
//! required bit-level operations (`u32`, `u64`) and a family of provided
//! helpers derived from them. Any [`rand_core::RngCore`] implementation is a
//! `Source` via the blanket impl, so external generators can be injected with
//! [`use_random`](crate::options::use_random). [`Prng`] is the default.

use core::sync::atomic::{AtomicU64, Ordering};

use rand_core::{impls, RngCore, SeedableRng};

/// A uniform pseudo-random bit source plus derived bounded helpers.
///
/// Implementors supply `u32` and `u64`; everything else has a default built
/// on those. The inclusive helpers sample *closed* intervals, including
/// intervals spanning the entire domain (which `max - min + 1` arithmetic
/// cannot express).
pub trait Source {
    /// Returns a uniformly distributed `u32`.
    fn u32(&mut self) -> u32;

    /// Returns a uniformly distributed `u64`.
    fn u64(&mut self) -> u64;

    /// Returns a uniform value in the half-open interval `[0, n)`.
    ///
    /// Returns 0 when `n == 0`. Uses a power-of-two mask fast path and
    /// modulo rejection otherwise, so the result is unbiased.
    fn u32n(&mut self, n: u32) -> u32 {
        if n == 0 {
            return 0;
        }
        if n.is_power_of_two() {
            return self.u32() & (n - 1);
        }
        let bound = u32::MAX - u32::MAX % n;
        loop {
            let candidate = self.u32();
            if candidate < bound {
                break candidate % n;
            }
        }
    }

    /// Returns a uniform value in the half-open interval `[0, n)`.
    ///
    /// Returns 0 when `n == 0`.
    fn u64n(&mut self, n: u64) -> u64 {
        if n == 0 {
            return 0;
        }
        if n.is_power_of_two() {
            return self.u64() & (n - 1);
        }
        let bound = u64::MAX - u64::MAX % n;
        loop {
            let candidate = self.u64();
            if candidate < bound {
                break candidate % n;
            }
        }
    }

    /// Returns the next float in `[0, 1)`.
    ///
    /// Fills the 23-bit mantissa from the high bits of a `u64` draw.
    fn f32(&mut self) -> f32 {
        let raw = self.u64();
        let bits = ((raw >> 41) as u32) | 0x3f80_0000;
        f32::from_bits(bits) - 1.0
    }

    /// Returns the next double in `[0, 1)`.
    ///
    /// Fills the 52-bit mantissa from the high bits of a `u64` draw.
    fn f64(&mut self) -> f64 {
        let raw = self.u64();
        let bits = (raw >> 12) | 0x3ff0_0000_0000_0000;
        f64::from_bits(bits) - 1.0
    }

    /// Returns a uniform `u32` in the closed interval `[min, max]`.
    ///
    /// An inverted interval collapses to `min`.
    fn inclusive_u32(&mut self, min: u32, max: u32) -> u32 {
        if min >= max {
            return min;
        }
        if min == 0 && max == u32::MAX {
            return self.u32();
        }
        self.u32n(max - min) + min
    }

    /// Returns a uniform `i32` in the closed interval `[min, max]`.
    fn inclusive_i32(&mut self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        map_u32_to_i32(self.inclusive_u32(map_i32_to_u32(min), map_i32_to_u32(max)))
    }

    /// Returns a uniform `u64` in the closed interval `[min, max]`.
    ///
    /// An inverted interval collapses to `min`.
    fn inclusive_u64(&mut self, min: u64, max: u64) -> u64 {
        if min >= max {
            return min;
        }
        if min == 0 && max == u64::MAX {
            return self.u64();
        }
        self.u64n(max - min) + min
    }

    /// Returns a uniform `i64` in the closed interval `[min, max]`.
    fn inclusive_i64(&mut self, min: i64, max: i64) -> i64 {
        if min >= max {
            return min;
        }
        map_u64_to_i64(self.inclusive_u64(map_i64_to_u64(min), map_i64_to_u64(max)))
    }
}

impl<R: RngCore> Source for R {
    fn u32(&mut self) -> u32 {
        self.next_u32()
    }

    fn u64(&mut self) -> u64 {
        self.next_u64()
    }
}

/// Bijection from the signed to the unsigned 64-bit domain.
///
/// Shifts by `2^63` so that interval widths beyond `i64::MAX` stay
/// representable while sampling.
pub(crate) fn map_i64_to_u64(n: i64) -> u64 {
    (n as u64).wrapping_add(1 << 63)
}

/// Inverse of [`map_i64_to_u64`].
pub(crate) fn map_u64_to_i64(n: u64) -> i64 {
    n.wrapping_sub(1 << 63) as i64
}

/// Bijection from the signed to the unsigned 32-bit domain.
pub(crate) fn map_i32_to_u32(n: i32) -> u32 {
    (n as u32).wrapping_add(1 << 31)
}

/// Inverse of [`map_i32_to_u32`].
pub(crate) fn map_u32_to_i32(n: u32) -> i32 {
    n.wrapping_sub(1 << 31) as i32
}

/// Stateful `xoroshiro128+` pseudo-random number generator, the default
/// source for [`Generator`](crate::Generator).
///
/// * Not cryptographically secure; intended for test data only.
/// * Seeding controls reproducibility within a single process/run and
///   matching seeds yield identical sequences across supported platforms.
#[derive(Debug, Clone)]
pub struct Prng {
    state: [u64; 2],
}

impl Prng {
    /// Constructs a PRNG from two 64-bit seeds.
    ///
    /// Identical seeds produce identical sequences; the generator remains
    /// deterministic as long as each process consumes random numbers in the
    /// same order.
    ///
    /// If both `seed0` and `seed1` are zero, the implementation replaces them
    /// with a fixed non-zero constant so the internal state is never all-zero
    /// (avoids the xoroshiro128+ sink).
    pub fn from_seed(seed0: u64, seed1: u64) -> Self {
        let mut state = [seed0, seed1];
        if state[0] == 0 && state[1] == 0 {
            state[0] = 0x9e37_79b9_7f4a_7c15;
        }
        Self { state }
    }

    /// Constructs a PRNG from a single 64-bit seed via `SplitMix64` expansion.
    pub fn from_seed_u64(seed: u64) -> Self {
        fn splitmix64(state: &mut u64) -> u64 {
            *state = state.wrapping_add(0x9e37_79b9_7f4a_7c15);
            let mut z = *state;
            z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
            z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
            z ^ (z >> 31)
        }

        let mut sm_state = seed;
        let mut state = [splitmix64(&mut sm_state), splitmix64(&mut sm_state)];
        if state[0] == 0 && state[1] == 0 {
            state[0] = 0x9e37_79b9_7f4a_7c15;
        }
        Self { state }
    }
}

impl Default for Prng {
    /// Seeds from a process-wide atomic counter, so independently constructed
    /// defaults produce distinct sequences without a shared singleton.
    fn default() -> Self {
        static NEXT_SEED: AtomicU64 = AtomicU64::new(0);
        Self::from_seed_u64(NEXT_SEED.fetch_add(1, Ordering::Relaxed))
    }
}

impl RngCore for Prng {
    fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        let s0 = self.state[0];
        let mut s1 = self.state[1];
        let result = s0.wrapping_add(s1);

        s1 ^= s0;
        self.state[0] = s0.rotate_left(55) ^ s1 ^ (s1 << 14);
        self.state[1] = s1.rotate_left(36);

        result
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        impls::fill_bytes_via_next(self, dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Prng {
    type Seed = [u8; 16];

    fn from_seed(seed: Self::Seed) -> Self {
        let mut lo = [0u8; 8];
        let mut hi = [0u8; 8];
        lo.copy_from_slice(&seed[..8]);
        hi.copy_from_slice(&seed[8..]);
        Prng::from_seed(u64::from_le_bytes(lo), u64::from_le_bytes(hi))
    }

    fn seed_from_u64(state: u64) -> Self {
        Prng::from_seed_u64(state)
    }
}
