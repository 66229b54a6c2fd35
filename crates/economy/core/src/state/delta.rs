//! Changed-field tracking for partial progress writes.
//!
//! Stores support partial field merges; rather than re-uploading the whole
//! user document after every mutation, callers compare snapshots and send
//! only the fields named by the resulting mask.

use bitflags::bitflags;

use crate::state::progress::UserProgress;

bitflags! {
    /// Top-level fields of [`UserProgress`] that a mutation touched.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct ProgressFields: u8 {
        const WALLET = 1 << 0;
        const STATS = 1 << 1;
        const HERO_LEVEL = 1 << 2;
        const STAGE = 1 << 3;
        const ARTIFACT_SLOTS = 1 << 4;
        const PRO = 1 << 5;
    }
}

/// Diff between two progress snapshots.
pub struct ProgressChanges;

impl ProgressChanges {
    /// Compares two snapshots and returns the mask of changed fields.
    ///
    /// Returns `None` when nothing changed, so no-op writes can be skipped.
    pub fn diff(before: &UserProgress, after: &UserProgress) -> Option<ProgressFields> {
        let mut fields = ProgressFields::empty();

        if before.wallet != after.wallet {
            fields |= ProgressFields::WALLET;
        }
        if before.attack != after.attack
            || before.defense != after.defense
            || before.health != after.health
        {
            fields |= ProgressFields::STATS;
        }
        if before.hero_level != after.hero_level {
            fields |= ProgressFields::HERO_LEVEL;
        }
        if before.stage != after.stage {
            fields |= ProgressFields::STAGE;
        }
        if before.artifact_slots != after.artifact_slots {
            fields |= ProgressFields::ARTIFACT_SLOTS;
        }
        if before.pro != after.pro {
            fields |= ProgressFields::PRO;
        }

        if fields.is_empty() { None } else { Some(fields) }
    }
}
