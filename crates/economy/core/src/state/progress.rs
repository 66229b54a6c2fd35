//! The per-user progress snapshot.

use crate::state::artifact::ArtifactSlots;
use crate::state::stats::{StatBlock, StatKey};
use crate::state::wallet::Wallet;

/// Campaign checkpoints reached per difficulty tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StageProgress {
    pub easy: u32,
    pub mid: u32,
    pub hard: u32,
}

impl StageProgress {
    /// The highest checkpoint reached on any tier.
    ///
    /// Quest unlocks gate on this value.
    pub const fn highest(&self) -> u32 {
        let mut best = self.easy;
        if self.mid > best {
            best = self.mid;
        }
        if self.hard > best {
            best = self.hard;
        }
        best
    }
}

impl Default for StageProgress {
    fn default() -> Self {
        Self {
            easy: 1,
            mid: 1,
            hard: 1,
        }
    }
}

/// One user's complete progression record.
///
/// This is the in-memory image of the externally stored user document.
/// Mutators take a snapshot by reference and return a fresh snapshot;
/// they never write through to storage themselves.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserProgress {
    pub player_name: String,
    pub wallet: Wallet,
    pub attack: StatBlock,
    pub defense: StatBlock,
    pub health: StatBlock,
    /// Hero level, a progression axis separate from stat training levels.
    pub hero_level: u32,
    pub stage: StageProgress,
    pub artifact_slots: ArtifactSlots,
    /// Premium subscription flag gating pro-tier quest rewards.
    pub pro: bool,
}

impl UserProgress {
    /// Starting shard balance granted at hero creation.
    pub const STARTING_SHARDS: u64 = 1000;

    /// Creates the record written once at hero selection.
    pub fn new_hero(player_name: impl Into<String>) -> Self {
        Self {
            player_name: player_name.into(),
            wallet: Wallet::new(Self::STARTING_SHARDS, 0, 0),
            attack: StatBlock::default(),
            defense: StatBlock::default(),
            health: StatBlock::default(),
            hero_level: 1,
            stage: StageProgress::default(),
            artifact_slots: ArtifactSlots::locked(),
            pro: false,
        }
    }

    pub const fn stat(&self, key: StatKey) -> StatBlock {
        match key {
            StatKey::Attack => self.attack,
            StatKey::Defense => self.defense,
            StatKey::Health => self.health,
        }
    }

    pub fn stat_mut(&mut self, key: StatKey) -> &mut StatBlock {
        match key {
            StatKey::Attack => &mut self.attack,
            StatKey::Defense => &mut self.defense,
            StatKey::Health => &mut self.health,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::wallet::Currency;

    #[test]
    fn new_hero_matches_starting_document() {
        let hero = UserProgress::new_hero("Ayra");
        assert_eq!(hero.wallet.balance(Currency::Shards), 1000);
        assert_eq!(hero.wallet.balance(Currency::Crystals), 0);
        assert_eq!(hero.wallet.balance(Currency::Cores), 0);
        for key in StatKey::ALL {
            assert_eq!(hero.stat(key), StatBlock::new(10, 1));
        }
        assert_eq!(hero.hero_level, 1);
        assert_eq!(hero.stage.highest(), 1);
        assert!(!hero.pro);
        assert!(hero.artifact_slots.iter().all(|(_, slot)| !slot.unlocked));
    }
}
