//! Stat keys, leveled stat blocks, and stat vectors.

use strum::{Display, EnumIter};

/// The three trainable stats.
///
/// Displays as the stored field name (`attack`, `defense`, `health`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatKey {
    Attack,
    Defense,
    Health,
}

impl StatKey {
    pub const COUNT: usize = 3;
    /// Index-stable key order for rolled-stat selection.
    pub const ALL: [StatKey; Self::COUNT] = [StatKey::Attack, StatKey::Defense, StatKey::Health];
}

/// A trainable stat: its current value and its training level.
///
/// Value and level advance together on level-up but are distinct axes -
/// hero level-ups raise values without touching training levels.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatBlock {
    pub value: i32,
    pub level: u32,
}

impl StatBlock {
    pub const fn new(value: i32, level: u32) -> Self {
        Self { value, level }
    }
}

impl Default for StatBlock {
    /// Starting block: value 10 at training level 1.
    fn default() -> Self {
        Self::new(10, 1)
    }
}

/// Full six-field stat payload carried by artifact catalog rows and
/// produced by chest reward rolls.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatVector {
    pub attack: i32,
    pub defense: i32,
    pub health: i32,
    pub attack_bonus: i32,
    pub defense_bonus: i32,
    pub health_bonus: i32,
}

impl StatVector {
    /// Value of one of the three base fields.
    pub const fn base(&self, key: StatKey) -> i32 {
        match key {
            StatKey::Attack => self.attack,
            StatKey::Defense => self.defense,
            StatKey::Health => self.health,
        }
    }

    /// Value of one of the three bonus fields.
    pub const fn bonus(&self, key: StatKey) -> i32 {
        match key {
            StatKey::Attack => self.attack_bonus,
            StatKey::Defense => self.defense_bonus,
            StatKey::Health => self.health_bonus,
        }
    }

    pub fn set_base(&mut self, key: StatKey, value: i32) {
        match key {
            StatKey::Attack => self.attack = value,
            StatKey::Defense => self.defense = value,
            StatKey::Health => self.health = value,
        }
    }

    pub fn set_bonus(&mut self, key: StatKey, value: i32) {
        match key {
            StatKey::Attack => self.attack_bonus = value,
            StatKey::Defense => self.defense_bonus = value,
            StatKey::Health => self.health_bonus = value,
        }
    }
}

/// Additive bonus vector produced by artifact aggregation.
///
/// Never negative: inputs are non-negative levels and payloads.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BonusTotals {
    pub attack: i32,
    pub defense: i32,
    pub health: i32,
}
