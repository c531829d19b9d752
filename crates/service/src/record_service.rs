//! Create/read/update/delete over one keyed text table.
//!
//! Facts and budgets are two instances of the same service, differing only in
//! their [`ResourceKind`]. Per conversation id the record is either ABSENT or
//! PRESENT; create moves ABSENT→PRESENT, delete moves PRESENT→ABSENT, update
//! and read require PRESENT.

use std::sync::Arc;

use perfcons_core::{Record, ResourceKind, validate_conversation_id};
use perfcons_storage::{RecordStore, StorageBackend, StorageError};

use crate::ServiceError;

pub struct RecordService {
    storage: Arc<StorageBackend>,
    kind: ResourceKind,
}

impl RecordService {
    #[must_use]
    pub fn new(storage: Arc<StorageBackend>, kind: ResourceKind) -> Self {
        Self { storage, kind }
    }

    fn validate(&self, conversation_id: &str, text: Option<&str>) -> Result<(), ServiceError> {
        validate_conversation_id(conversation_id)?;
        if let Some(text) = text {
            self.kind.validate_text(text)?;
        }
        Ok(())
    }

    fn not_found(&self, conversation_id: &str) -> ServiceError {
        ServiceError::NotFound { kind: self.kind, conversation_id: conversation_id.to_owned() }
    }

    /// Create the record. Fails with `Conflict` if one already exists; the
    /// existing row is left as it was.
    pub async fn create(&self, conversation_id: &str, text: &str) -> Result<Record, ServiceError> {
        self.validate(conversation_id, Some(text))?;
        match self.storage.insert_record(self.kind, conversation_id, text).await {
            Ok(record) => {
                tracing::debug!(kind = %self.kind, conversation_id, "record created");
                Ok(record)
            },
            Err(StorageError::Duplicate(_)) => {
                tracing::debug!(kind = %self.kind, conversation_id, "create rejected, record exists");
                Err(ServiceError::Conflict {
                    kind: self.kind,
                    conversation_id: conversation_id.to_owned(),
                })
            },
            Err(e) => Err(e.into()),
        }
    }

    pub async fn get(&self, conversation_id: &str) -> Result<Record, ServiceError> {
        self.validate(conversation_id, None)?;
        self.storage
            .get_record(self.kind, conversation_id)
            .await?
            .ok_or_else(|| self.not_found(conversation_id))
    }

    /// Replace the text of an existing record. Never creates one.
    pub async fn update(&self, conversation_id: &str, text: &str) -> Result<Record, ServiceError> {
        self.validate(conversation_id, Some(text))?;
        let record = self
            .storage
            .update_record(self.kind, conversation_id, text)
            .await?
            .ok_or_else(|| self.not_found(conversation_id))?;
        tracing::debug!(kind = %self.kind, conversation_id, "record updated");
        Ok(record)
    }

    pub async fn delete(&self, conversation_id: &str) -> Result<(), ServiceError> {
        self.validate(conversation_id, None)?;
        if !self.storage.delete_record(self.kind, conversation_id).await? {
            return Err(self.not_found(conversation_id));
        }
        tracing::debug!(kind = %self.kind, conversation_id, "record deleted");
        Ok(())
    }

    /// Every stored record of this kind. Empty when the table is empty.
    pub async fn list(&self) -> Result<Vec<Record>, ServiceError> {
        Ok(self.storage.list_records(self.kind).await?)
    }

    /// Storage round-trip for readiness checks.
    pub async fn ping(&self) -> Result<(), ServiceError> {
        Ok(self.storage.ping().await?)
    }
}
