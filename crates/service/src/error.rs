//! Typed error enum for the service layer.
//!
//! Folds storage outcomes into the record state machine: a duplicate insert
//! becomes `Conflict`, a missing row becomes `NotFound`.

use perfcons_core::{ResourceKind, ValidationError};
use perfcons_storage::StorageError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Input rejected before any storage access.
    #[error("invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    /// Operation on a conversation id with no record.
    #[error("{} not found for this conversation ID", .kind.label())]
    NotFound { kind: ResourceKind, conversation_id: String },

    /// Create on a conversation id that already has a record.
    #[error("{} already exists for this conversation ID", .kind.label())]
    Conflict { kind: ResourceKind, conversation_id: String },

    /// Storage operation failed (DB unreachable, pool timeout, etc.).
    #[error("storage: {0}")]
    Storage(#[from] StorageError),
}

impl ServiceError {
    /// Whether this error is likely transient (worth retrying by the caller).
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Storage(e) if e.is_transient())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }
}
