//! Persistence seam for per-user records.
//!
//! [`PlayerStore`] models the external document store: typed reads per
//! record, full upserts, partial field merges, field increments, and one
//! transactional primitive for the quest-claim flow. The in-memory
//! implementation backs tests and local runs.

pub mod memory;
pub mod traits;

pub use memory::InMemoryPlayerStore;
pub use traits::{ClaimGuard, LeaderboardRow, PlayerStore, TxnError};

use crate::types::UserId;

/// Errors surfaced by store implementations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("player store lock was poisoned")]
    LockPoisoned,

    #[error("no records exist for user {uid}")]
    MissingUser { uid: UserId },

    #[error("backend unavailable: {0}")]
    Unavailable(String),
}

pub type StoreResult<T> = std::result::Result<T, StoreError>;
