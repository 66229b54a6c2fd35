//! RNG seam for reward rolls.
//!
//! The roll algorithm itself is deterministic: given the same oracle and
//! seed it produces the same stat vector, which is what the unit tests
//! lean on. Loot-box non-determinism comes from the runtime feeding a
//! fresh entropy seed per open; no reproducibility is promised there.

/// Source of uniform random draws for reward rolls.
///
/// Implementations must be pure functions of the seed.
pub trait RngOracle: Send + Sync {
    /// Generate a random u32 value from a seed.
    fn next_u32(&self, seed: u64) -> u32;

    /// Uniform random value in `[min, max]` inclusive.
    fn range(&self, seed: u64, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        let span = (max - min + 1) as u32;
        min + (self.next_u32(seed) % span) as i32
    }

    /// Uniform random index in `[0, len)`.
    fn pick(&self, seed: u64, len: usize) -> usize {
        if len <= 1 {
            return 0;
        }
        (self.next_u32(seed) as usize) % len
    }
}

/// PCG-XSH-RR random number generator.
///
/// Small, fast, and statistically solid; 32-bit output permuted from
/// 64-bit state. Stateless by design - every draw here derives from an
/// explicit seed, so rolls stay replayable in tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    /// One LCG step over the seed.
    #[inline]
    fn step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation: xorshift high bits, then a rotation
    /// chosen by the top bits.
    #[inline]
    fn output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::output(Self::step(seed))
    }
}

/// Derives a sub-seed for one draw within a roll.
///
/// A single chest open needs several independent draws (key picks, base
/// values, bonus value); each gets a distinct `salt` so draws do not
/// correlate. Mixing constants are the usual SplitMix64/FxHash multipliers.
pub fn roll_seed(base_seed: u64, salt: u32) -> u64 {
    let mut hash = base_seed ^ (salt as u64).wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;
    hash
}
