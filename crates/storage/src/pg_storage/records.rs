//! RecordStore implementation for PgStorage.

use async_trait::async_trait;
use perfcons_core::{Record, ResourceKind};
use sqlx::Row;

use super::PgStorage;
use crate::error::StorageError;
use crate::traits::RecordStore;

#[async_trait]
impl RecordStore for PgStorage {
    async fn insert_record(
        &self,
        kind: ResourceKind,
        conversation_id: &str,
        text: &str,
    ) -> Result<Record, StorageError> {
        let result = sqlx::query(&format!(
            "INSERT INTO {table} (conversation_id, {field}) VALUES ($1, $2)
             ON CONFLICT (conversation_id) DO NOTHING",
            table = kind.table(),
            field = kind.field(),
        ))
        .bind(conversation_id)
        .bind(text)
        .execute(&self.pool)
        .await?;
        if result.rows_affected() == 0 {
            return Err(StorageError::Duplicate(format!(
                "{} already exists for conversation {conversation_id}",
                kind.field()
            )));
        }
        Ok(Record::new(kind, conversation_id.to_owned(), text.to_owned()))
    }

    async fn get_record(
        &self,
        kind: ResourceKind,
        conversation_id: &str,
    ) -> Result<Option<Record>, StorageError> {
        let row = sqlx::query(&format!(
            "SELECT {field} FROM {table} WHERE conversation_id = $1",
            table = kind.table(),
            field = kind.field(),
        ))
        .bind(conversation_id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(|r| -> Result<Record, StorageError> {
            let text: String = r.try_get(kind.field())?;
            Ok(Record::new(kind, conversation_id.to_owned(), text))
        })
        .transpose()
    }

    async fn update_record(
        &self,
        kind: ResourceKind,
        conversation_id: &str,
        text: &str,
    ) -> Result<Option<Record>, StorageError> {
        let row = sqlx::query(&format!(
            "UPDATE {table} SET {field} = $1 WHERE conversation_id = $2
             RETURNING {field}",
            table = kind.table(),
            field = kind.field(),
        ))
        .bind(text)
        .bind(conversation_id)
        .fetch_optional(&self.pool)
        .await?;
        row.map(|r| -> Result<Record, StorageError> {
            let text: String = r.try_get(kind.field())?;
            Ok(Record::new(kind, conversation_id.to_owned(), text))
        })
        .transpose()
    }

    async fn delete_record(
        &self,
        kind: ResourceKind,
        conversation_id: &str,
    ) -> Result<bool, StorageError> {
        let result = sqlx::query(&format!(
            "DELETE FROM {table} WHERE conversation_id = $1",
            table = kind.table(),
        ))
        .bind(conversation_id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn list_records(&self, kind: ResourceKind) -> Result<Vec<Record>, StorageError> {
        let rows = sqlx::query(&format!(
            "SELECT conversation_id, {field} FROM {table} ORDER BY conversation_id",
            table = kind.table(),
            field = kind.field(),
        ))
        .fetch_all(&self.pool)
        .await?;
        rows.iter()
            .map(|r| -> Result<Record, StorageError> {
                Ok(Record::new(kind, r.try_get("conversation_id")?, r.try_get(kind.field())?))
            })
            .collect()
    }

    async fn ping(&self) -> Result<(), StorageError> {
        for kind in ResourceKind::ALL {
            sqlx::query(&format!("SELECT 1 FROM {} LIMIT 1", kind.table()))
                .fetch_optional(&self.pool)
                .await?;
        }
        Ok(())
    }
}
