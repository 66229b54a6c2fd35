//! Static shop content and loaders for catalog data files.
//!
//! This crate houses the built-in catalog tables (chests, quests, the
//! rarity price rule is in economy-core) and provides loaders for
//! operator-supplied overrides:
//! - Chest and artifact catalogs (data-driven via RON)
//! - Economy configuration (data-driven via TOML)
//!
//! Content is consumed by runtime catalog oracles and never appears in
//! user state. All loaders deserialize directly into economy-core types.

pub mod builtin;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use builtin::{builtin_chests, builtin_quests};

#[cfg(feature = "loaders")]
pub use loaders::{CatalogLoader, ChestCatalog, ConfigLoader, MainCatalog};
