//! Content loaders for reading catalog data from files.
//!
//! Loaders convert RON/TOML files into the economy-core catalog types the
//! runtime oracles serve.

pub mod catalog;
pub mod config;

pub use catalog::{CatalogLoader, ChestCatalog, MainCatalog};
pub use config::ConfigLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
