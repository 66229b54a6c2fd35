//! Player-owned state: wallet, stats, artifacts, equipment, progress.
//!
//! These types mirror the per-user documents held by the external store.
//! The core only ever reads a snapshot and produces a new snapshot plus a
//! changed-field mask; writing the snapshot back is the runtime's job.

pub mod artifact;
pub mod delta;
pub mod progress;
pub mod stats;
pub mod wallet;

pub use artifact::{
    ArtifactInstance, ArtifactKind, ArtifactLocation, ArtifactSlot, ArtifactSlots, EquipError,
    EquipSlot, Equipment, SlotIndex,
};
pub use delta::{ProgressChanges, ProgressFields};
pub use progress::{StageProgress, UserProgress};
pub use stats::{BonusTotals, StatBlock, StatKey, StatVector};
pub use wallet::{Currency, Wallet};
