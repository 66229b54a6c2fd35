//! Artifact instances, menu artifact slots, and the equipment grid.
//!
//! Two distinct six-slot structures exist, matching the stored documents:
//!
//! - [`ArtifactSlots`] lives on [`UserProgress`](super::UserProgress) and
//!   tracks the *menu* artifacts a player has paid to unlock and level.
//! - [`Equipment`] is its own document and holds [`ArtifactInstance`]s the
//!   player has equipped from inventory.
//!
//! An artifact instance lives in exactly one place at a time: an equip
//! slot or the stored inventory ([`ArtifactLocation`]).

use crate::error::{EconomyError, ErrorSeverity};
use crate::state::stats::StatVector;

/// One-based slot index into a six-slot grid.
///
/// A structured replacement for key-building (`artifact3-lvl`,
/// `slot3`, ...) - out-of-range indices are unrepresentable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotIndex(u8);

impl SlotIndex {
    pub const COUNT: usize = 6;
    pub const FIRST: SlotIndex = SlotIndex(1);

    /// Builds a slot index from a one-based position, `None` if out of range.
    pub const fn new(index: u8) -> Option<Self> {
        if index >= 1 && index <= Self::COUNT as u8 {
            Some(Self(index))
        } else {
            None
        }
    }

    /// One-based position as stored.
    pub const fn get(&self) -> u8 {
        self.0
    }

    pub const fn as_index(&self) -> usize {
        (self.0 - 1) as usize
    }

    /// All six slots in order.
    pub fn all() -> impl Iterator<Item = SlotIndex> {
        (1..=Self::COUNT as u8).map(SlotIndex)
    }
}

impl core::fmt::Display for SlotIndex {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "slot{}", self.0)
    }
}

/// One menu artifact slot on the user record.
///
/// `level` is only meaningful once `unlocked` is true.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArtifactSlot {
    pub unlocked: bool,
    pub level: u32,
}

impl Default for ArtifactSlot {
    fn default() -> Self {
        Self {
            unlocked: false,
            level: 1,
        }
    }
}

/// The six menu artifact slots.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArtifactSlots {
    slots: [ArtifactSlot; SlotIndex::COUNT],
}

impl ArtifactSlots {
    /// All slots locked at level 1.
    pub fn locked() -> Self {
        Self::default()
    }

    pub const fn get(&self, index: SlotIndex) -> ArtifactSlot {
        self.slots[index.as_index()]
    }

    pub fn get_mut(&mut self, index: SlotIndex) -> &mut ArtifactSlot {
        &mut self.slots[index.as_index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (SlotIndex, ArtifactSlot)> + '_ {
        SlotIndex::all().map(|idx| (idx, self.get(idx)))
    }
}

/// Where an artifact instance came from and how it behaves.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ArtifactKind {
    /// Rolled from a chest (stats generated at open time).
    Craft,
    /// Bought from the main artifact shop (stats from the catalog row).
    Main,
    /// Bought from the weapon shop.
    Weapon,
}

/// Where an artifact instance currently lives.
///
/// Invariant: exactly one location - an instance referenced from an equip
/// slot is never simultaneously present in the stored inventory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ArtifactLocation {
    Equipped(SlotIndex),
    Stored,
}

/// A concrete artifact owned by a player.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArtifactInstance {
    /// Catalog row this instance was minted from.
    pub catalog_id: u32,
    pub name: String,
    pub kind: ArtifactKind,
    /// Explicit stat payload. Craft artifacts get a rolled vector, main
    /// artifacts copy their catalog row; weapons fold attack/defense here.
    pub stats: Option<StatVector>,
    pub level: u32,
}

/// Errors raised by equipment-grid operations.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EquipError {
    /// Every unlocked slot is occupied.
    #[error("no empty slot")]
    NoEmptySlot,

    /// The addressed slot is still locked.
    #[error("{slot} is locked")]
    SlotLocked { slot: SlotIndex },

    /// The addressed slot has no occupant to remove.
    #[error("{slot} is empty")]
    SlotEmpty { slot: SlotIndex },

    /// Paid unlock requested for a slot that is already open.
    #[error("{slot} is already unlocked")]
    SlotAlreadyUnlocked { slot: SlotIndex },
}

impl EconomyError for EquipError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::NoEmptySlot => ErrorSeverity::Recoverable,
            Self::SlotLocked { .. } | Self::SlotEmpty { .. } | Self::SlotAlreadyUnlocked { .. } => {
                ErrorSeverity::Validation
            }
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::NoEmptySlot => "EQUIP_NO_EMPTY_SLOT",
            Self::SlotLocked { .. } => "EQUIP_SLOT_LOCKED",
            Self::SlotEmpty { .. } => "EQUIP_SLOT_EMPTY",
            Self::SlotAlreadyUnlocked { .. } => "EQUIP_SLOT_ALREADY_UNLOCKED",
        }
    }
}

/// One equipment slot: a lock flag and an optional occupant.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EquipSlot {
    pub locked: bool,
    pub occupant: Option<ArtifactInstance>,
}

/// The six-slot equipment grid.
///
/// Slot 1 starts unlocked, slots 2-6 start locked and are opened with a
/// paid unlock.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Equipment {
    slots: [EquipSlot; SlotIndex::COUNT],
}

impl Default for Equipment {
    fn default() -> Self {
        Self::starting()
    }
}

impl Equipment {
    /// Fresh-hero grid: slot 1 open, the rest locked, all empty.
    pub fn starting() -> Self {
        let slots = core::array::from_fn(|i| EquipSlot {
            locked: i != 0,
            occupant: None,
        });
        Self { slots }
    }

    pub const fn slot(&self, index: SlotIndex) -> &EquipSlot {
        &self.slots[index.as_index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = (SlotIndex, &EquipSlot)> {
        SlotIndex::all().zip(self.slots.iter())
    }

    /// Equips an artifact into the first unlocked empty slot.
    ///
    /// Returns the slot it landed in, or [`EquipError::NoEmptySlot`] with
    /// the grid untouched.
    pub fn equip(&mut self, artifact: ArtifactInstance) -> Result<SlotIndex, EquipError> {
        let index = SlotIndex::all()
            .find(|idx| {
                let slot = self.slot(*idx);
                !slot.locked && slot.occupant.is_none()
            })
            .ok_or(EquipError::NoEmptySlot)?;
        self.slots[index.as_index()].occupant = Some(artifact);
        Ok(index)
    }

    /// Removes and returns the occupant of a slot.
    pub fn unequip(&mut self, index: SlotIndex) -> Result<ArtifactInstance, EquipError> {
        self.slots[index.as_index()]
            .occupant
            .take()
            .ok_or(EquipError::SlotEmpty { slot: index })
    }

    /// Opens a locked slot. The caller charges for the unlock first.
    pub fn unlock(&mut self, index: SlotIndex) -> Result<(), EquipError> {
        let slot = &mut self.slots[index.as_index()];
        if !slot.locked {
            return Err(EquipError::SlotAlreadyUnlocked { slot: index });
        }
        slot.locked = false;
        Ok(())
    }

    /// Location of an artifact keyed by catalog id, if currently equipped.
    pub fn location_of(&self, artifact: &ArtifactInstance) -> ArtifactLocation {
        for (idx, slot) in self.iter() {
            if slot.occupant.as_ref() == Some(artifact) {
                return ArtifactLocation::Equipped(idx);
            }
        }
        ArtifactLocation::Stored
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instance(name: &str) -> ArtifactInstance {
        ArtifactInstance {
            catalog_id: 7,
            name: name.into(),
            kind: ArtifactKind::Craft,
            stats: None,
            level: 1,
        }
    }

    #[test]
    fn equip_uses_first_open_slot_and_fills_up() {
        let mut equipment = Equipment::starting();
        let slot = equipment.equip(instance("a")).unwrap();
        assert_eq!(slot, SlotIndex::FIRST);

        // Only slot 1 is unlocked on a fresh grid.
        assert_eq!(equipment.equip(instance("b")), Err(EquipError::NoEmptySlot));

        let second = SlotIndex::new(2).unwrap();
        equipment.unlock(second).unwrap();
        assert_eq!(equipment.equip(instance("b")).unwrap(), second);
    }

    #[test]
    fn unequip_round_trips_the_instance() {
        let mut equipment = Equipment::starting();
        let art = instance("ring");
        let slot = equipment.equip(art.clone()).unwrap();
        assert_eq!(equipment.location_of(&art), ArtifactLocation::Equipped(slot));

        let back = equipment.unequip(slot).unwrap();
        assert_eq!(back, art);
        assert_eq!(equipment.location_of(&art), ArtifactLocation::Stored);
        assert_eq!(
            equipment.unequip(slot),
            Err(EquipError::SlotEmpty { slot })
        );
    }

    #[test]
    fn unlock_twice_is_rejected() {
        let mut equipment = Equipment::starting();
        let err = equipment.unlock(SlotIndex::FIRST).unwrap_err();
        assert_eq!(
            err,
            EquipError::SlotAlreadyUnlocked {
                slot: SlotIndex::FIRST
            }
        );
    }
}
