use perfcons_core::{Record, ResourceKind};
use rusqlite::{OptionalExtension, params};

use super::{SqliteStorage, get_conn};
use crate::error::StorageError;

impl SqliteStorage {
    /// Insert a new record; an existing id is reported as `Duplicate`.
    ///
    /// `ON CONFLICT DO NOTHING` keeps the check and the write in one statement,
    /// so two racing inserts can never both succeed.
    pub fn insert_record(
        &self,
        kind: ResourceKind,
        conversation_id: &str,
        text: &str,
    ) -> Result<Record, StorageError> {
        let conn = get_conn(&self.pool)?;
        let inserted = conn.execute(
            &format!(
                "INSERT INTO {table} (conversation_id, {field}) VALUES (?1, ?2)
                 ON CONFLICT (conversation_id) DO NOTHING",
                table = kind.table(),
                field = kind.field(),
            ),
            params![conversation_id, text],
        )?;
        if inserted == 0 {
            return Err(StorageError::Duplicate(format!(
                "{} already exists for conversation {conversation_id}",
                kind.field()
            )));
        }
        Ok(Record::new(kind, conversation_id.to_owned(), text.to_owned()))
    }

    pub fn get_record(
        &self,
        kind: ResourceKind,
        conversation_id: &str,
    ) -> Result<Option<Record>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let text: Option<String> = conn
            .query_row(
                &format!(
                    "SELECT {field} FROM {table} WHERE conversation_id = ?1",
                    table = kind.table(),
                    field = kind.field(),
                ),
                params![conversation_id],
                |row| row.get(0),
            )
            .optional()?;
        Ok(text.map(|text| Record::new(kind, conversation_id.to_owned(), text)))
    }

    pub fn update_record(
        &self,
        kind: ResourceKind,
        conversation_id: &str,
        text: &str,
    ) -> Result<Option<Record>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let updated = conn.execute(
            &format!(
                "UPDATE {table} SET {field} = ?1 WHERE conversation_id = ?2",
                table = kind.table(),
                field = kind.field(),
            ),
            params![text, conversation_id],
        )?;
        if updated == 0 {
            return Ok(None);
        }
        Ok(Some(Record::new(kind, conversation_id.to_owned(), text.to_owned())))
    }

    pub fn delete_record(
        &self,
        kind: ResourceKind,
        conversation_id: &str,
    ) -> Result<bool, StorageError> {
        let conn = get_conn(&self.pool)?;
        let deleted = conn.execute(
            &format!("DELETE FROM {table} WHERE conversation_id = ?1", table = kind.table()),
            params![conversation_id],
        )?;
        Ok(deleted > 0)
    }

    pub fn list_records(&self, kind: ResourceKind) -> Result<Vec<Record>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare(&format!(
            "SELECT conversation_id, {field} FROM {table} ORDER BY conversation_id",
            table = kind.table(),
            field = kind.field(),
        ))?;
        let rows = stmt.query_map([], |row| Ok(Record::new(kind, row.get(0)?, row.get(1)?)))?;
        let records = rows.collect::<Result<Vec<_>, _>>()?;
        Ok(records)
    }
}
