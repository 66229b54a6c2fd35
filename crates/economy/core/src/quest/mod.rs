//! Quest definitions and one-time reward claims.

pub mod claim;

pub use claim::{ArtifactGrant, ClaimError, ClaimGrant, apply_claim, evaluate_claim};

use std::collections::BTreeSet;

use strum::Display;

/// The two reward tracks per stage.
///
/// Displays as the stored claim-key segment (`free`, `pro`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Display)]
#[strum(serialize_all = "lowercase")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum QuestTier {
    Free,
    /// Premium track gated by the subscription flag on the user record.
    Pro,
}

/// What one tier of one stage pays out.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuestReward {
    /// Shards credited to the wallet.
    pub coins: u64,
    /// Artifact names granted, one record per entry.
    pub artifacts: Vec<String>,
}

impl QuestReward {
    pub fn new(coins: u64, artifacts: &[&str]) -> Self {
        Self {
            coins,
            artifacts: artifacts.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Static catalog entry for one campaign stage.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuestDefinition {
    pub stage: u32,
    pub free: QuestReward,
    pub pro: QuestReward,
}

impl QuestDefinition {
    pub const fn reward(&self, tier: QuestTier) -> &QuestReward {
        match tier {
            QuestTier::Free => &self.free,
            QuestTier::Pro => &self.pro,
        }
    }
}

/// Composite identifier of one quest reward grant.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClaimKey {
    pub stage: u32,
    pub tier: QuestTier,
}

impl ClaimKey {
    pub const fn new(stage: u32, tier: QuestTier) -> Self {
        Self { stage, tier }
    }
}

impl core::fmt::Display for ClaimKey {
    /// Rendered in the stored `stage-<n>-<tier>` format.
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "stage-{}-{}", self.stage, self.tier)
    }
}

/// Per-user record of which claim keys have been redeemed.
///
/// Claims only ever flip to claimed under normal operation; the reset
/// helpers are privileged administrative tools.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClaimLedger {
    claimed: BTreeSet<ClaimKey>,
}

impl ClaimLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_claimed(&self, key: ClaimKey) -> bool {
        self.claimed.contains(&key)
    }

    /// Marks a key claimed. Terminal: there is no un-mark in normal flow.
    pub fn mark(&mut self, key: ClaimKey) {
        self.claimed.insert(key);
    }

    pub fn iter(&self) -> impl Iterator<Item = ClaimKey> + '_ {
        self.claimed.iter().copied()
    }

    /// Administrative: marks both tiers of every listed stage claimed.
    pub fn mark_all(&mut self, quests: &[QuestDefinition]) {
        for quest in quests {
            self.mark(ClaimKey::new(quest.stage, QuestTier::Free));
            self.mark(ClaimKey::new(quest.stage, QuestTier::Pro));
        }
    }

    /// Administrative: wipes the ledger.
    pub fn reset(&mut self) {
        self.claimed.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn claim_key_renders_stored_format() {
        assert_eq!(ClaimKey::new(3, QuestTier::Free).to_string(), "stage-3-free");
        assert_eq!(ClaimKey::new(12, QuestTier::Pro).to_string(), "stage-12-pro");
    }

    #[test]
    fn ledger_marks_are_terminal_until_reset() {
        let mut ledger = ClaimLedger::new();
        let key = ClaimKey::new(1, QuestTier::Free);
        assert!(!ledger.is_claimed(key));
        ledger.mark(key);
        ledger.mark(key);
        assert!(ledger.is_claimed(key));
        ledger.reset();
        assert!(!ledger.is_claimed(key));
    }
}
