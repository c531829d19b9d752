use async_trait::async_trait;
use perfcons_core::{Record, ResourceKind};

use crate::error::StorageError;

/// Keyed text records, one row per conversation id per [`ResourceKind`].
///
/// Implementations must make every write a single statement so same-id
/// callers are serialized by the table's primary key, not by in-process locks.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Insert a new row. Never overwrites: an existing id yields
    /// [`StorageError::Duplicate`] and leaves the stored row untouched.
    async fn insert_record(
        &self,
        kind: ResourceKind,
        conversation_id: &str,
        text: &str,
    ) -> Result<Record, StorageError>;

    /// Fetch one row.
    async fn get_record(
        &self,
        kind: ResourceKind,
        conversation_id: &str,
    ) -> Result<Option<Record>, StorageError>;

    /// Replace the text of an existing row. Returns `None` (and writes
    /// nothing) when the id is absent.
    async fn update_record(
        &self,
        kind: ResourceKind,
        conversation_id: &str,
        text: &str,
    ) -> Result<Option<Record>, StorageError>;

    /// Delete one row. Returns `true` if a row was removed.
    async fn delete_record(
        &self,
        kind: ResourceKind,
        conversation_id: &str,
    ) -> Result<bool, StorageError>;

    /// All rows of a kind, ordered by conversation id.
    async fn list_records(&self, kind: ResourceKind) -> Result<Vec<Record>, StorageError>;

    /// Round-trip to the database that reads (at most one row of) every record table.
    async fn ping(&self) -> Result<(), StorageError>;
}
