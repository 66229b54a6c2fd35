//! Deterministic progression and economy rules shared across clients.
//!
//! `economy-core` defines the canonical rules of the game shop: leveling
//! cost curves, artifact bonus aggregation, chest reward rolls, and the
//! quest-claim state machine. Everything here is pure and synchronous -
//! mutators validate against an in-memory [`UserProgress`] snapshot and
//! return a new snapshot, never touching storage. Persistence and entropy
//! are supplied by the runtime crate through the oracle and store seams.
pub mod bonus;
pub mod catalog;
pub mod config;
pub mod error;
pub mod loot;
pub mod progression;
pub mod quest;
pub mod state;

pub use bonus::{ArtifactView, aggregate_bonus};
pub use catalog::{
    ArtifactDefinition, ArtifactOracle, ChestDefinition, ChestOracle, CraftArtifactDefinition,
    Price, QuestOracle, Rarity, WeaponDefinition, WeaponOracle, weapon_price,
};
pub use config::EconomyConfig;
pub use error::{EconomyError, ErrorSeverity};
pub use loot::{PcgRng, RngOracle, RollRange, RollSpec, roll_artifact_stats, roll_seed};
pub use progression::{
    Mutation, ProgressionError, artifact_level_cost, hero_level_cost, level_up_artifact,
    level_up_hero, level_up_stat, stat_level_cost, unlock_artifact,
};
pub use quest::{
    ArtifactGrant, ClaimError, ClaimGrant, ClaimKey, ClaimLedger, QuestDefinition, QuestReward,
    QuestTier, apply_claim, evaluate_claim,
};
pub use state::{
    ArtifactInstance, ArtifactKind, ArtifactLocation, ArtifactSlot, ArtifactSlots, BonusTotals,
    Currency, EquipError, EquipSlot, Equipment, ProgressChanges, ProgressFields, SlotIndex,
    StageProgress, StatBlock, StatKey, StatVector, UserProgress, Wallet,
};
