//! Runtime errors.
//!
//! Every failure is surfaced to the caller as a value; the service never
//! retries and nothing here is fatal to the process.

use economy_core::{ClaimError, EconomyError, EquipError, ErrorSeverity, ProgressionError};

use crate::store::{StoreError, TxnError};

/// Errors surfaced by shop operations.
#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    /// A user record or catalog row was not found.
    #[error("{kind} {id} not found")]
    EntityNotFound { kind: &'static str, id: String },

    /// A catalog table needed by the operation has no rows.
    #[error("catalog table {0} is empty")]
    CatalogEmpty(&'static str),

    /// A progression mutator rejected the request.
    #[error(transparent)]
    Progression(#[from] ProgressionError),

    /// An equipment-grid operation rejected the request.
    #[error(transparent)]
    Equip(#[from] EquipError),

    /// The quest-claim guard rejected the request.
    #[error(transparent)]
    Claim(#[from] ClaimError),

    /// The backing store failed; the operation may succeed on retry by
    /// the caller.
    #[error("backend unavailable: {0}")]
    Backend(#[from] StoreError),
}

impl RuntimeError {
    pub(crate) fn not_found(kind: &'static str, id: impl ToString) -> Self {
        Self::EntityNotFound {
            kind,
            id: id.to_string(),
        }
    }

    /// Severity classification, delegating to the core error it wraps.
    ///
    /// Backend failures are recoverable (the caller may retry); an empty
    /// catalog table is an operator mistake and flagged internal.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::EntityNotFound { .. } => ErrorSeverity::Validation,
            Self::CatalogEmpty(_) => ErrorSeverity::Internal,
            Self::Progression(err) => err.severity(),
            Self::Equip(err) => err.severity(),
            Self::Claim(err) => err.severity(),
            Self::Backend(_) => ErrorSeverity::Recoverable,
        }
    }

    /// Stable code per variant, for log fields and metrics.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::EntityNotFound { .. } => "RUNTIME_ENTITY_NOT_FOUND",
            Self::CatalogEmpty(_) => "RUNTIME_CATALOG_EMPTY",
            Self::Progression(err) => err.error_code(),
            Self::Equip(err) => err.error_code(),
            Self::Claim(err) => err.error_code(),
            Self::Backend(_) => "RUNTIME_BACKEND",
        }
    }
}

impl From<TxnError> for RuntimeError {
    fn from(err: TxnError) -> Self {
        match err {
            TxnError::Store(store) => Self::Backend(store),
            TxnError::Claim(claim) => Self::Claim(claim),
        }
    }
}

pub type Result<T> = std::result::Result<T, RuntimeError>;
