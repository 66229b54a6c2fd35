//! The four progression mutators.
//!
//! Each mutator validates against the given snapshot and, on success,
//! returns a [`Mutation`] with the next snapshot, the amount spent, and
//! the changed-field mask the caller needs for a partial persist.

use crate::error::{EconomyError, ErrorSeverity};
use crate::progression::cost::{
    UNLOCK_ARTIFACT_COST, artifact_level_cost, hero_level_cost, stat_level_cost,
};
use crate::state::{
    Currency, ProgressChanges, ProgressFields, SlotIndex, StatKey, UserProgress,
};

/// Errors raised by progression mutators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProgressionError {
    /// The wallet cannot cover the cost. Nothing was changed.
    #[error("not enough {currency}: cost {cost}, balance {balance}")]
    InsufficientFunds {
        currency: Currency,
        cost: u64,
        balance: u64,
    },

    /// Leveling a menu artifact slot that has not been unlocked.
    #[error("artifact {slot} is not unlocked")]
    NotUnlocked { slot: SlotIndex },
}

impl EconomyError for ProgressionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InsufficientFunds { .. } => ErrorSeverity::Recoverable,
            Self::NotUnlocked { .. } => ErrorSeverity::Validation,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InsufficientFunds { .. } => "PROGRESSION_INSUFFICIENT_FUNDS",
            Self::NotUnlocked { .. } => "PROGRESSION_NOT_UNLOCKED",
        }
    }
}

/// Successful mutator output.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Mutation {
    /// The snapshot to persist.
    pub next: UserProgress,
    /// Shards deducted by this mutation.
    pub spent: u64,
    /// Which top-level fields of the snapshot changed.
    pub changed: ProgressFields,
}

impl Mutation {
    fn from_states(before: &UserProgress, next: UserProgress, spent: u64) -> Self {
        let changed = ProgressChanges::diff(before, &next).unwrap_or(ProgressFields::empty());
        Self {
            next,
            spent,
            changed,
        }
    }
}

/// Raises one trainable stat: +1 value, +1 training level.
///
/// Cost comes from the stat's own curve at its current training level.
pub fn level_up_stat(
    progress: &UserProgress,
    stat: StatKey,
) -> Result<Mutation, ProgressionError> {
    let cost = stat_level_cost(stat, progress.stat(stat).level);

    let mut next = progress.clone();
    next.wallet.debit(Currency::PRIMARY, cost)?;
    let block = next.stat_mut(stat);
    block.value += 1;
    block.level += 1;

    Ok(Mutation::from_states(progress, next, cost))
}

/// Raises an unlocked menu artifact by one level.
///
/// Every artifact charges the attack curve, whatever its slot.
pub fn level_up_artifact(
    progress: &UserProgress,
    slot: SlotIndex,
) -> Result<Mutation, ProgressionError> {
    let current = progress.artifact_slots.get(slot);
    if !current.unlocked {
        return Err(ProgressionError::NotUnlocked { slot });
    }
    let cost = artifact_level_cost(current.level);

    let mut next = progress.clone();
    next.wallet.debit(Currency::PRIMARY, cost)?;
    next.artifact_slots.get_mut(slot).level += 1;

    Ok(Mutation::from_states(progress, next, cost))
}

/// Unlocks a menu artifact slot for a flat 500 shards, setting it to
/// level 1.
///
/// No already-unlocked guard: re-unlocking an open slot charges again and
/// resets it to level 1. Kept as-is for fidelity with live data.
pub fn unlock_artifact(
    progress: &UserProgress,
    slot: SlotIndex,
) -> Result<Mutation, ProgressionError> {
    let cost = UNLOCK_ARTIFACT_COST;

    let mut next = progress.clone();
    next.wallet.debit(Currency::PRIMARY, cost)?;
    let entry = next.artifact_slots.get_mut(slot);
    entry.unlocked = true;
    entry.level = 1;

    Ok(Mutation::from_states(progress, next, cost))
}

/// Raises the hero level, granting flat +1 attack, +1 defense, +5 health.
///
/// The stat bonuses land on the stat *values* only; training levels are
/// untouched, so this axis never changes future stat level-up costs.
pub fn level_up_hero(progress: &UserProgress) -> Result<Mutation, ProgressionError> {
    let cost = hero_level_cost(progress.hero_level);

    let mut next = progress.clone();
    next.wallet.debit(Currency::PRIMARY, cost)?;
    next.hero_level += 1;
    next.attack.value += 1;
    next.defense.value += 1;
    next.health.value += 5;

    Ok(Mutation::from_states(progress, next, cost))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{StatBlock, Wallet};

    fn hero_with_shards(shards: u64) -> UserProgress {
        let mut progress = UserProgress::new_hero("tester");
        progress.wallet = Wallet::new(shards, 0, 0);
        progress
    }

    #[test]
    fn level_up_stat_deducts_and_advances() {
        // cost = 50 + 1*30 = 80 against a 100-shard balance
        let mut progress = hero_with_shards(100);
        progress.attack = StatBlock::new(5, 1);

        let mutation = level_up_stat(&progress, StatKey::Attack).unwrap();
        assert_eq!(mutation.spent, 80);
        assert_eq!(mutation.next.wallet.balance(Currency::Shards), 20);
        assert_eq!(mutation.next.attack, StatBlock::new(6, 2));
        assert!(mutation.changed.contains(ProgressFields::WALLET));
        assert!(mutation.changed.contains(ProgressFields::STATS));

        // Input snapshot untouched.
        assert_eq!(progress.attack, StatBlock::new(5, 1));
        assert_eq!(progress.wallet.balance(Currency::Shards), 100);
    }

    #[test]
    fn level_up_stat_rejects_when_unaffordable() {
        let mut progress = hero_with_shards(79);
        progress.attack = StatBlock::new(5, 1);

        let err = level_up_stat(&progress, StatKey::Attack).unwrap_err();
        assert_eq!(
            err,
            ProgressionError::InsufficientFunds {
                currency: Currency::Shards,
                cost: 80,
                balance: 79,
            }
        );
        assert_eq!(progress, {
            let mut expected = hero_with_shards(79);
            expected.attack = StatBlock::new(5, 1);
            expected
        });
    }

    #[test]
    fn artifact_level_up_requires_unlock() {
        let progress = hero_with_shards(10_000);
        let slot = SlotIndex::new(3).unwrap();
        assert_eq!(
            level_up_artifact(&progress, slot),
            Err(ProgressionError::NotUnlocked { slot })
        );
    }

    #[test]
    fn artifact_unlock_then_level_up() {
        let progress = hero_with_shards(1000);
        let slot = SlotIndex::new(2).unwrap();

        let unlocked = unlock_artifact(&progress, slot).unwrap();
        assert_eq!(unlocked.spent, 500);
        let entry = unlocked.next.artifact_slots.get(slot);
        assert!(entry.unlocked);
        assert_eq!(entry.level, 1);

        // Level 1 artifact charges the attack curve: 50 + 30 = 80.
        let leveled = level_up_artifact(&unlocked.next, slot).unwrap();
        assert_eq!(leveled.spent, 80);
        assert_eq!(leveled.next.artifact_slots.get(slot).level, 2);
        assert_eq!(leveled.next.wallet.balance(Currency::Shards), 420);
    }

    #[test]
    fn unlock_artifact_fails_at_300_shards() {
        let progress = hero_with_shards(300);
        let slot = SlotIndex::new(2).unwrap();
        let err = unlock_artifact(&progress, slot).unwrap_err();
        assert!(matches!(
            err,
            ProgressionError::InsufficientFunds {
                cost: 500,
                balance: 300,
                ..
            }
        ));
    }

    #[test]
    fn hero_level_up_grants_flat_stats() {
        let progress = hero_with_shards(300);
        let mutation = level_up_hero(&progress).unwrap();
        assert_eq!(mutation.spent, 300);
        assert_eq!(mutation.next.hero_level, 2);
        assert_eq!(mutation.next.attack.value, 11);
        assert_eq!(mutation.next.defense.value, 11);
        assert_eq!(mutation.next.health.value, 15);
        // Training levels untouched.
        assert_eq!(mutation.next.attack.level, 1);

        // Second level-up costs 500.
        let err = level_up_hero(&mutation.next).unwrap_err();
        assert!(matches!(
            err,
            ProgressionError::InsufficientFunds { cost: 500, .. }
        ));
    }
}
