//! Unified storage backend with enum dispatch.

use async_trait::async_trait;
use perfcons_core::{DatabaseTarget, Record, ResourceKind, StorageConfig};

use crate::error::StorageError;
use crate::traits::RecordStore;

macro_rules! dispatch {
    ($self:expr, $method:ident ( $($arg:expr),* $(,)? )) => {
        match $self {
            #[cfg(feature = "sqlite")]
            StorageBackend::Sqlite(s) => <crate::SqliteStorage as RecordStore>::$method(s, $($arg),*).await,
            #[cfg(feature = "postgres")]
            StorageBackend::Postgres(s) => <crate::PgStorage as RecordStore>::$method(s, $($arg),*).await,
        }
    };
}

#[derive(Clone, Debug)]
pub enum StorageBackend {
    #[cfg(feature = "sqlite")]
    Sqlite(crate::SqliteStorage),
    #[cfg(feature = "postgres")]
    Postgres(crate::PgStorage),
}

impl StorageBackend {
    #[cfg(feature = "sqlite")]
    pub fn new_sqlite(db_path: &std::path::Path, pool_size: Option<u32>) -> Result<Self, StorageError> {
        Ok(Self::Sqlite(crate::SqliteStorage::new(db_path, pool_size)?))
    }

    #[cfg(feature = "postgres")]
    pub async fn new_postgres(database_url: &str, pool_size: Option<u32>) -> Result<Self, StorageError> {
        Ok(Self::Postgres(crate::PgStorage::new(database_url, pool_size).await?))
    }

    /// Open whichever backend `config.target` names.
    ///
    /// A target whose backend was compiled out is reported as `Setup` so
    /// startup fails instead of silently picking another store.
    pub async fn connect(config: &StorageConfig) -> Result<Self, StorageError> {
        match &config.target {
            #[cfg(feature = "sqlite")]
            DatabaseTarget::Sqlite(path) => {
                if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                    std::fs::create_dir_all(parent).map_err(|e| {
                        StorageError::Setup(format!(
                            "cannot create database directory {}: {e}",
                            parent.display()
                        ))
                    })?;
                }
                let path = path.clone();
                let pool_size = config.pool_size;
                tokio::task::spawn_blocking(move || Self::new_sqlite(&path, pool_size))
                    .await
                    .map_err(|e| StorageError::Join(e.to_string()))?
            },
            #[cfg(feature = "postgres")]
            DatabaseTarget::Postgres(url) => Self::new_postgres(url, config.pool_size).await,
            #[allow(unreachable_patterns, reason = "reachable when a backend feature is disabled")]
            other => Err(StorageError::Setup(format!(
                "storage backend for {other:?} is not compiled in"
            ))),
        }
    }

    /// Short backend name for logs.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            #[cfg(feature = "sqlite")]
            Self::Sqlite(_) => "sqlite",
            #[cfg(feature = "postgres")]
            Self::Postgres(_) => "postgres",
        }
    }
}

#[async_trait]
impl RecordStore for StorageBackend {
    async fn insert_record(
        &self,
        kind: ResourceKind,
        conversation_id: &str,
        text: &str,
    ) -> Result<Record, StorageError> {
        dispatch!(self, insert_record(kind, conversation_id, text))
    }

    async fn get_record(
        &self,
        kind: ResourceKind,
        conversation_id: &str,
    ) -> Result<Option<Record>, StorageError> {
        dispatch!(self, get_record(kind, conversation_id))
    }

    async fn update_record(
        &self,
        kind: ResourceKind,
        conversation_id: &str,
        text: &str,
    ) -> Result<Option<Record>, StorageError> {
        dispatch!(self, update_record(kind, conversation_id, text))
    }

    async fn delete_record(
        &self,
        kind: ResourceKind,
        conversation_id: &str,
    ) -> Result<bool, StorageError> {
        dispatch!(self, delete_record(kind, conversation_id))
    }

    async fn list_records(&self, kind: ResourceKind) -> Result<Vec<Record>, StorageError> {
        dispatch!(self, list_records(kind))
    }

    async fn ping(&self) -> Result<(), StorageError> {
        dispatch!(self, ping())
    }
}
