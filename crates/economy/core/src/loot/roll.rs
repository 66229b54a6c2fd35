//! Reward stat rolls for chest and craft events.

use crate::loot::rng::{RngOracle, roll_seed};
use crate::state::{StatKey, StatVector};

// Sub-seed salts for the independent draws inside one roll.
const SALT_FIRST_KEY: u32 = 0;
const SALT_SECOND_KEY: u32 = 1;
const SALT_FIRST_VALUE: u32 = 2;
const SALT_SECOND_VALUE: u32 = 3;
const SALT_BONUS_KEY: u32 = 4;
const SALT_BONUS_VALUE: u32 = 5;

/// Inclusive integer bounds for one rolled value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RollRange {
    pub lo: i32,
    pub hi: i32,
}

impl RollRange {
    pub const fn new(lo: i32, hi: i32) -> Self {
        Self { lo, hi }
    }

    pub const fn contains(&self, value: i32) -> bool {
        value >= self.lo && value <= self.hi
    }
}

/// Roll specification carried by a chest catalog row.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RollSpec {
    /// Bounds for the two base stat values.
    pub base: RollRange,
    /// Bounds for the single bonus stat value.
    pub bonus: RollRange,
}

impl RollSpec {
    pub const fn new(base: RollRange, bonus: RollRange) -> Self {
        Self { base, bonus }
    }
}

/// Rolls a stat vector for one chest open.
///
/// Two *distinct* base stat keys are chosen uniformly and each assigned an
/// independent uniform value in `spec.base`; exactly one bonus key gets a
/// uniform value in `spec.bonus`. Every other field stays 0.
///
/// Deterministic in `(rng, seed)`; the second key is picked by a uniform
/// offset from the first, which keeps the pair distinct without a
/// rejection loop.
pub fn roll_artifact_stats(rng: &dyn RngOracle, seed: u64, spec: &RollSpec) -> StatVector {
    let mut stats = StatVector::default();

    let first = rng.pick(roll_seed(seed, SALT_FIRST_KEY), StatKey::COUNT);
    let offset = 1 + rng.pick(roll_seed(seed, SALT_SECOND_KEY), StatKey::COUNT - 1);
    let second = (first + offset) % StatKey::COUNT;

    stats.set_base(
        StatKey::ALL[first],
        rng.range(roll_seed(seed, SALT_FIRST_VALUE), spec.base.lo, spec.base.hi),
    );
    stats.set_base(
        StatKey::ALL[second],
        rng.range(roll_seed(seed, SALT_SECOND_VALUE), spec.base.lo, spec.base.hi),
    );

    let bonus_key = StatKey::ALL[rng.pick(roll_seed(seed, SALT_BONUS_KEY), StatKey::COUNT)];
    stats.set_bonus(
        bonus_key,
        rng.range(roll_seed(seed, SALT_BONUS_VALUE), spec.bonus.lo, spec.bonus.hi),
    );

    stats
}
