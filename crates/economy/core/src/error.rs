//! Common error infrastructure for economy-core.
//!
//! Domain-specific errors (`ProgressionError`, `ClaimError`, `EquipError`)
//! are defined in their respective modules alongside the operations they
//! validate. This module provides the shared classification layer.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// Every failure in this crate is a value returned to the caller; nothing
/// here panics. Severity tells callers whether retrying with different
/// input can succeed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Recoverable error - the same request can succeed later.
    ///
    /// Examples: insufficient funds (earn more, retry), no empty slot
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: claiming an already-claimed reward, unknown stage number
    Validation,

    /// Internal error - unexpected state inconsistency.
    ///
    /// These indicate bugs and should be investigated.
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all economy-core errors.
///
/// Provides a uniform interface for error classification across the crate.
/// All error enums derive `thiserror::Error` for `Display` and implement
/// this trait for severity and stable error codes (useful for metrics and
/// user-facing message mapping).
pub trait EconomyError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str;
}
