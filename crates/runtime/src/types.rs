//! Identifier newtypes shared across the runtime.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque user identity, threaded explicitly into every operation.
///
/// There is deliberately no ambient "current user" anywhere in this
/// crate; whoever drives the service owns session handling.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct UserId(String);

impl UserId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for UserId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for UserId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Key of one inventory entry on a user's inventory record.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ItemKey(String);

impl ItemKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Mints a fresh key for an instance of catalog row `catalog_id`,
    /// in the stored `<rowId>_<uuid>` format.
    pub fn mint(catalog_id: u32) -> Self {
        Self(format!("{}_{}", catalog_id, Uuid::new_v4()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ItemKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}
