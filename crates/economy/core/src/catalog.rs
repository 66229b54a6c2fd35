//! Static catalog definitions and the read-only oracle seams.
//!
//! Catalog rows live in an external read-only store; the core never
//! writes them. The oracle traits here are what the runtime implements
//! over whatever backs that store (built-in tables in tests, loaded
//! files in tools).

use crate::loot::RollSpec;
use crate::quest::QuestDefinition;
use crate::state::{Currency, StatVector};

/// Rarity tier of a catalog entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Rarity {
    Free,
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    /// Shop price rule for main artifacts of this rarity.
    ///
    /// `None` means free (only the `Free` tier).
    pub const fn price(&self) -> Option<Price> {
        match self {
            Self::Free => None,
            Self::Common => Some(Price::new(Currency::Shards, 300)),
            Self::Uncommon => Some(Price::new(Currency::Crystals, 1)),
            Self::Rare => Some(Price::new(Currency::Crystals, 3)),
            Self::Epic => Some(Price::new(Currency::Cores, 1)),
            Self::Legendary => Some(Price::new(Currency::Cores, 3)),
        }
    }
}

/// An amount of one currency.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Price {
    pub currency: Currency,
    pub amount: u64,
}

impl Price {
    pub const fn new(currency: Currency, amount: u64) -> Self {
        Self { currency, amount }
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}", self.amount, self.currency)
    }
}

/// Weapon costs are stored as one raw number: values below 1 are shard
/// prices scaled by 1000, whole values are crystal prices.
pub fn weapon_price(raw_cost: f64) -> Price {
    if raw_cost > 0.0 && raw_cost < 1.0 {
        Price::new(Currency::Shards, (raw_cost * 1000.0).round() as u64)
    } else {
        Price::new(Currency::Crystals, raw_cost.max(0.0).floor() as u64)
    }
}

/// Purchasable loot container.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChestDefinition {
    pub id: u32,
    pub name: String,
    pub rarity: Rarity,
    /// `None` means the chest opens free of charge.
    pub price: Option<Price>,
    pub roll: RollSpec,
}

/// Main-shop artifact row with a fixed stat payload.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArtifactDefinition {
    pub id: u32,
    pub name: String,
    pub rarity: Rarity,
    pub stats: StatVector,
    pub base_level: u32,
}

impl ArtifactDefinition {
    /// Shop price derived from the rarity rule.
    pub fn price(&self) -> Option<Price> {
        self.rarity.price()
    }
}

/// Chest drop-pool row; stats are rolled at open time, not stored here.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CraftArtifactDefinition {
    pub id: u32,
    pub category: String,
    pub name: String,
    pub base_level: u32,
}

/// Weapon-shop row.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeaponDefinition {
    pub id: u32,
    pub name: String,
    pub category: String,
    pub attack: i32,
    pub defense: i32,
    pub skill: Option<String>,
    /// Raw stored cost; see [`weapon_price`] for the charging rule.
    pub cost: f64,
}

impl WeaponDefinition {
    pub fn price(&self) -> Price {
        weapon_price(self.cost)
    }
}

/// Read-only access to chest rows.
pub trait ChestOracle: Send + Sync {
    fn chest(&self, id: u32) -> Option<ChestDefinition>;
    fn all_chests(&self) -> Vec<ChestDefinition>;
}

/// Read-only access to main artifact rows and the craft drop pool.
pub trait ArtifactOracle: Send + Sync {
    fn artifact(&self, id: u32) -> Option<ArtifactDefinition>;
    fn all_artifacts(&self) -> Vec<ArtifactDefinition>;

    /// The pool a chest open draws from. Must be non-empty for opens to
    /// succeed.
    fn craft_pool(&self) -> Vec<CraftArtifactDefinition>;
}

/// Read-only access to weapon rows.
pub trait WeaponOracle: Send + Sync {
    fn weapon(&self, id: u32) -> Option<WeaponDefinition>;
    fn all_weapons(&self) -> Vec<WeaponDefinition>;
}

/// Read-only access to quest definitions.
pub trait QuestOracle: Send + Sync {
    fn quest(&self, stage: u32) -> Option<QuestDefinition>;
    fn all_quests(&self) -> Vec<QuestDefinition>;
}
