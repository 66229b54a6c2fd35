//! Cost curves for stat, artifact, and hero leveling.
//!
//! All curves are pure and total for any `level >= 0`, and strictly
//! increasing in level.

use crate::state::StatKey;

/// Per-level cost growth shared by every stat curve.
pub const LEVEL_COST_STEP: u64 = 30;

/// Flat price of unlocking a menu artifact slot.
pub const UNLOCK_ARTIFACT_COST: u64 = 500;

/// Hero level-up base price.
pub const HERO_COST_BASE: u64 = 300;

/// Hero level-up growth per level already gained.
pub const HERO_COST_STEP: u64 = 200;

/// Base price of a stat's level-up curve.
pub const fn stat_base_cost(stat: StatKey) -> u64 {
    match stat {
        StatKey::Attack => 50,
        StatKey::Defense => 60,
        StatKey::Health => 75,
    }
}

/// Shards required to raise `stat` from `current_level`.
///
/// `cost = base(stat) + current_level * 30`.
pub const fn stat_level_cost(stat: StatKey, current_level: u32) -> u64 {
    stat_base_cost(stat) + current_level as u64 * LEVEL_COST_STEP
}

/// Shards required to raise a menu artifact from `current_level`.
///
/// All artifacts share the attack curve regardless of slot.
pub const fn artifact_level_cost(current_level: u32) -> u64 {
    stat_level_cost(StatKey::Attack, current_level)
}

/// Shards required to raise the hero from `hero_level`.
///
/// `300, 500, 700, ...` - a separate axis from stat training.
pub const fn hero_level_cost(hero_level: u32) -> u64 {
    HERO_COST_BASE + (hero_level.saturating_sub(1)) as u64 * HERO_COST_STEP
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn curve_matches_base_plus_step() {
        for level in 0..200 {
            assert_eq!(
                stat_level_cost(StatKey::Attack, level),
                50 + level as u64 * 30
            );
            assert_eq!(
                stat_level_cost(StatKey::Defense, level),
                60 + level as u64 * 30
            );
            assert_eq!(
                stat_level_cost(StatKey::Health, level),
                75 + level as u64 * 30
            );
        }
    }

    #[test]
    fn curves_strictly_increase() {
        for key in StatKey::iter() {
            for level in 0..100 {
                assert!(stat_level_cost(key, level + 1) > stat_level_cost(key, level));
            }
        }
        for level in 1..100 {
            assert!(hero_level_cost(level + 1) > hero_level_cost(level));
        }
    }

    #[test]
    fn artifact_curve_is_the_attack_curve() {
        for level in 0..50 {
            assert_eq!(
                artifact_level_cost(level),
                stat_level_cost(StatKey::Attack, level)
            );
        }
    }

    #[test]
    fn hero_curve_starts_at_300() {
        assert_eq!(hero_level_cost(1), 300);
        assert_eq!(hero_level_cost(2), 500);
        assert_eq!(hero_level_cost(3), 700);
    }
}
