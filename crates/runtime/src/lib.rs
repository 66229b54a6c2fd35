//! Shop runtime: orchestration over the pure economy rules.
//!
//! This crate owns everything `economy-core` deliberately leaves out -
//! identity, persistence, entropy, and notification:
//!
//! - [`ShopService`] drives every player-facing operation,
//! - [`PlayerStore`] is the document-store seam with an in-memory
//!   implementation for tests and local runs,
//! - [`ShopCatalog`] serves the read-only catalog tables,
//! - [`EventBus`] broadcasts record updates per topic.

pub mod error;
pub mod events;
pub mod oracle;
pub mod service;
pub mod store;
pub mod types;

pub use error::{Result, RuntimeError};
pub use events::{EventBus, ShopEvent, Topic};
pub use oracle::ShopCatalog;
pub use service::{ChestOpening, Purchase, Sale, ShopService};
pub use store::{
    ClaimGuard, InMemoryPlayerStore, LeaderboardRow, PlayerStore, StoreError, StoreResult,
    TxnError,
};
pub use types::{ItemKey, UserId};
