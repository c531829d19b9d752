//! Async trait implementations for `SqliteStorage` via `spawn_blocking`.

use async_trait::async_trait;
use perfcons_core::{Record, ResourceKind};

use crate::error::StorageError;
use crate::storage::SqliteStorage;
use crate::traits::RecordStore;

/// Helper: run a blocking closure on the tokio blocking pool.
async fn blocking<F, T>(f: F) -> Result<T, StorageError>
where
    F: FnOnce() -> Result<T, StorageError> + Send + 'static,
    T: Send + 'static,
{
    tokio::task::spawn_blocking(f)
        .await
        .map_err(|e| StorageError::Join(e.to_string()))?
}

/// Body-generating macro for async-to-blocking delegation.
///
/// Each argument is annotated with a capture kind:
/// - `@str arg`: `.to_owned()` a `&str`, pass as `&arg`
/// - `@val arg`: move directly (Copy/owned types)
macro_rules! delegate {
    ($self:ident, $method:ident $(, @$kind:ident $arg:ident)*) => {{
        let s = $self.clone();
        $(delegate!(@capture $kind $arg);)*
        blocking(move || s.$method($(delegate!(@pass $kind $arg)),*)).await
    }};
    (@capture str $arg:ident) => { let $arg = $arg.to_owned(); };
    (@capture val $arg:ident) => { };
    (@pass str $arg:ident) => { &$arg };
    (@pass val $arg:ident) => { $arg };
}

#[async_trait]
impl RecordStore for SqliteStorage {
    async fn insert_record(
        &self,
        kind: ResourceKind,
        conversation_id: &str,
        text: &str,
    ) -> Result<Record, StorageError> {
        delegate!(self, insert_record, @val kind, @str conversation_id, @str text)
    }

    async fn get_record(
        &self,
        kind: ResourceKind,
        conversation_id: &str,
    ) -> Result<Option<Record>, StorageError> {
        delegate!(self, get_record, @val kind, @str conversation_id)
    }

    async fn update_record(
        &self,
        kind: ResourceKind,
        conversation_id: &str,
        text: &str,
    ) -> Result<Option<Record>, StorageError> {
        delegate!(self, update_record, @val kind, @str conversation_id, @str text)
    }

    async fn delete_record(
        &self,
        kind: ResourceKind,
        conversation_id: &str,
    ) -> Result<bool, StorageError> {
        delegate!(self, delete_record, @val kind, @str conversation_id)
    }

    async fn list_records(&self, kind: ResourceKind) -> Result<Vec<Record>, StorageError> {
        delegate!(self, list_records, @val kind)
    }

    async fn ping(&self) -> Result<(), StorageError> {
        delegate!(self, ping)
    }
}
