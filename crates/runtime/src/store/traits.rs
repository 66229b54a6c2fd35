//! Store contracts for per-user shop records.

use economy_core::{
    ArtifactInstance, ClaimError, ClaimGrant, ClaimLedger, Currency, Equipment, Price,
    ProgressFields, StatKey, UserProgress,
};

use crate::store::{StoreError, StoreResult};
use crate::types::{ItemKey, UserId};

/// One leaderboard entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LeaderboardRow {
    pub uid: UserId,
    pub player_name: String,
    pub value: i32,
}

/// Guard closure run inside [`PlayerStore::claim_transaction`].
///
/// Receives the progress and claim-ledger records as read inside the
/// transaction; mutations are committed only when it returns `Ok`.
pub type ClaimGuard<'a> =
    &'a mut dyn FnMut(&mut UserProgress, &mut ClaimLedger) -> Result<ClaimGrant, ClaimError>;

/// Failure of a claim transaction: either the backend gave out, or the
/// guard rejected the claim (in which case nothing was written).
#[derive(Debug, thiserror::Error)]
pub enum TxnError {
    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Claim(#[from] ClaimError),
}

/// Persistence for the four per-user records: progress, inventory,
/// equipment, and quest claims.
///
/// Apart from [`claim_transaction`](Self::claim_transaction), writes are
/// plain read-modify-write with last-write-wins semantics - concurrent
/// sessions on one account can lose updates. That race is accepted; only
/// the quest-claim flow carries an atomicity guarantee.
pub trait PlayerStore: Send + Sync {
    /// Creates all four records for a new player in one write.
    fn create_player(&self, uid: &UserId, progress: &UserProgress) -> StoreResult<()>;

    // ----- progress record -----

    /// Reads the progress record; `Ok(None)` when the document is absent.
    fn load_progress(&self, uid: &UserId) -> StoreResult<Option<UserProgress>>;

    /// Full-document progress upsert.
    fn upsert_progress(&self, uid: &UserId, progress: &UserProgress) -> StoreResult<()>;

    /// Partial merge: copies only the masked fields of `next` onto the
    /// stored record.
    fn merge_progress(
        &self,
        uid: &UserId,
        next: &UserProgress,
        fields: ProgressFields,
    ) -> StoreResult<()>;

    /// Field-increment on one currency balance. Negative deltas clamp at
    /// zero rather than underflow. Returns the new balance.
    fn increment_balance(&self, uid: &UserId, currency: Currency, delta: i64) -> StoreResult<u64>;

    // ----- inventory record -----

    fn load_inventory(&self, uid: &UserId) -> StoreResult<Vec<(ItemKey, ArtifactInstance)>>;

    fn get_item(&self, uid: &UserId, key: &ItemKey) -> StoreResult<Option<ArtifactInstance>>;

    fn insert_item(
        &self,
        uid: &UserId,
        key: &ItemKey,
        artifact: &ArtifactInstance,
    ) -> StoreResult<()>;

    /// Removes an inventory entry, returning it if present.
    fn remove_item(&self, uid: &UserId, key: &ItemKey) -> StoreResult<Option<ArtifactInstance>>;

    /// Batch purchase write: deducts `charge` (when priced) and stores
    /// the item in the same commit, mirroring the backend's batch-write
    /// primitive. Affordability is the caller's check.
    fn purchase_item(
        &self,
        uid: &UserId,
        charge: Option<Price>,
        key: &ItemKey,
        artifact: &ArtifactInstance,
    ) -> StoreResult<()>;

    // ----- equipment record -----

    fn load_equipment(&self, uid: &UserId) -> StoreResult<Option<Equipment>>;

    fn save_equipment(&self, uid: &UserId, equipment: &Equipment) -> StoreResult<()>;

    // ----- quest claim record -----

    fn load_claims(&self, uid: &UserId) -> StoreResult<ClaimLedger>;

    /// Reward-grant records written by successful claims, keyed
    /// `artifact-reward-<stage>-<idx>`.
    fn load_grants(&self, uid: &UserId) -> StoreResult<Vec<(String, String)>>;

    /// Atomic read-check-write over the progress and claim records.
    ///
    /// The guard runs against the records as currently stored; its
    /// mutations plus the grant's artifact records commit together, or
    /// not at all. Two concurrent claims of one key cannot both succeed.
    fn claim_transaction(&self, uid: &UserId, guard: ClaimGuard<'_>)
    -> Result<ClaimGrant, TxnError>;

    // ----- queries -----

    /// Top players by raw stat value, descending.
    fn top_by_stat(&self, stat: StatKey, limit: usize) -> StoreResult<Vec<LeaderboardRow>>;
}
