//! The quest-claim state machine.
//!
//! Per (stage, tier) the state is `Unclaimed -> Claimed`, terminal.
//! [`evaluate_claim`] is the pure transition guard; [`apply_claim`]
//! applies the resulting grant. The runtime runs both inside the store's
//! transaction primitive so that two concurrent claims of the same key
//! cannot both succeed - the atomicity itself is the store's guarantee,
//! the core only contributes the guard and the diff.

use crate::error::{EconomyError, ErrorSeverity};
use crate::quest::{ClaimKey, ClaimLedger, QuestDefinition, QuestTier};
use crate::state::{Currency, UserProgress};

/// Errors raised by the claim guard.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClaimError {
    /// The key is already marked claimed.
    #[error("{key} was already claimed")]
    AlreadyClaimed { key: ClaimKey },

    /// The user has not reached this stage yet.
    #[error("stage {stage} is locked (reached {reached})")]
    StageLocked { stage: u32, reached: u32 },

    /// Pro tier requested without the subscription flag.
    #[error("pro subscription required")]
    ProRequired,

    /// No quest is defined for this stage.
    #[error("no quest defined for stage {stage}")]
    UnknownStage { stage: u32 },
}

impl EconomyError for ClaimError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::AlreadyClaimed { .. } | Self::ProRequired | Self::UnknownStage { .. } => {
                ErrorSeverity::Validation
            }
            Self::StageLocked { .. } => ErrorSeverity::Recoverable,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::AlreadyClaimed { .. } => "CLAIM_ALREADY_CLAIMED",
            Self::StageLocked { .. } => "CLAIM_STAGE_LOCKED",
            Self::ProRequired => "CLAIM_PRO_REQUIRED",
            Self::UnknownStage { .. } => "CLAIM_UNKNOWN_STAGE",
        }
    }
}

/// One granted artifact, keyed the way the user document stores it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArtifactGrant {
    /// `artifact-reward-<stage>-<idx>` record key.
    pub record_key: String,
    pub name: String,
}

/// The diff a successful claim applies.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClaimGrant {
    pub key: ClaimKey,
    /// Shards to credit.
    pub coins: u64,
    pub artifacts: Vec<ArtifactGrant>,
}

/// Runs the claim guard against the supplied progress and ledger.
///
/// Guard order matters and is observable: already-claimed wins over
/// stage-locked, which wins over pro-required.
pub fn evaluate_claim(
    ledger: &ClaimLedger,
    progress: &UserProgress,
    quest: &QuestDefinition,
    tier: QuestTier,
) -> Result<ClaimGrant, ClaimError> {
    let key = ClaimKey::new(quest.stage, tier);

    if ledger.is_claimed(key) {
        return Err(ClaimError::AlreadyClaimed { key });
    }

    let reached = progress.stage.highest();
    if reached < quest.stage {
        return Err(ClaimError::StageLocked {
            stage: quest.stage,
            reached,
        });
    }

    if tier == QuestTier::Pro && !progress.pro {
        return Err(ClaimError::ProRequired);
    }

    let reward = quest.reward(tier);
    let artifacts = reward
        .artifacts
        .iter()
        .enumerate()
        .map(|(idx, name)| ArtifactGrant {
            record_key: format!("artifact-reward-{}-{}", quest.stage, idx),
            name: name.clone(),
        })
        .collect();

    Ok(ClaimGrant {
        key,
        coins: reward.coins,
        artifacts,
    })
}

/// Applies a grant: credits coins and marks the key claimed.
///
/// Must run on the same records the guard evaluated, inside the store
/// transaction. Artifact grant records are persisted by the caller.
pub fn apply_claim(ledger: &mut ClaimLedger, progress: &mut UserProgress, grant: &ClaimGrant) {
    progress.wallet.credit(Currency::Shards, grant.coins);
    ledger.mark(grant.key);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::quest::QuestReward;

    fn quest(stage: u32) -> QuestDefinition {
        QuestDefinition {
            stage,
            free: QuestReward::new(150, &["Bronze Ring"]),
            pro: QuestReward::new(300, &["Silver Ring"]),
        }
    }

    fn user_at_stage(stage: u32) -> UserProgress {
        let mut progress = UserProgress::new_hero("claimer");
        progress.stage.easy = stage;
        progress
    }

    #[test]
    fn claim_succeeds_then_reports_already_claimed() {
        let quest = quest(3);
        let mut progress = user_at_stage(3);
        let mut ledger = ClaimLedger::new();

        let grant = evaluate_claim(&ledger, &progress, &quest, QuestTier::Free).unwrap();
        assert_eq!(grant.coins, 150);
        assert_eq!(grant.artifacts.len(), 1);
        assert_eq!(grant.artifacts[0].record_key, "artifact-reward-3-0");

        let before = progress.wallet.balance(Currency::Shards);
        apply_claim(&mut ledger, &mut progress, &grant);
        assert_eq!(progress.wallet.balance(Currency::Shards), before + 150);

        let err = evaluate_claim(&ledger, &progress, &quest, QuestTier::Free).unwrap_err();
        assert_eq!(err, ClaimError::AlreadyClaimed { key: grant.key });
        // Reward granted exactly once: a rejected claim changes nothing.
        assert_eq!(progress.wallet.balance(Currency::Shards), before + 150);
    }

    #[test]
    fn locked_stage_rejects_before_any_change() {
        let quest = quest(5);
        let progress = user_at_stage(3);
        let ledger = ClaimLedger::new();

        let err = evaluate_claim(&ledger, &progress, &quest, QuestTier::Free).unwrap_err();
        assert_eq!(
            err,
            ClaimError::StageLocked {
                stage: 5,
                reached: 3
            }
        );
    }

    #[test]
    fn pro_tier_requires_subscription() {
        let quest = quest(1);
        let mut progress = user_at_stage(1);
        let ledger = ClaimLedger::new();

        assert_eq!(
            evaluate_claim(&ledger, &progress, &quest, QuestTier::Pro),
            Err(ClaimError::ProRequired)
        );

        progress.pro = true;
        let grant = evaluate_claim(&ledger, &progress, &quest, QuestTier::Pro).unwrap();
        assert_eq!(grant.coins, 300);
    }

    #[test]
    fn free_and_pro_tracks_claim_independently() {
        let quest = quest(2);
        let mut progress = user_at_stage(2);
        progress.pro = true;
        let mut ledger = ClaimLedger::new();

        let free = evaluate_claim(&ledger, &progress, &quest, QuestTier::Free).unwrap();
        apply_claim(&mut ledger, &mut progress, &free);

        // The pro track is still open after the free claim.
        let pro = evaluate_claim(&ledger, &progress, &quest, QuestTier::Pro).unwrap();
        apply_claim(&mut ledger, &mut progress, &pro);

        assert!(ledger.is_claimed(ClaimKey::new(2, QuestTier::Free)));
        assert!(ledger.is_claimed(ClaimKey::new(2, QuestTier::Pro)));
    }

    #[test]
    fn stage_gate_uses_highest_tier_reached() {
        let quest = quest(4);
        let mut progress = user_at_stage(1);
        progress.stage.hard = 4;
        let ledger = ClaimLedger::new();
        assert!(evaluate_claim(&ledger, &progress, &quest, QuestTier::Free).is_ok());
    }
}
