//! `SQLite` storage implementation.
//!
//! All methods are synchronous; `sqlite_async` lifts them onto the blocking
//! pool for the async [`RecordStore`](crate::traits::RecordStore) trait.

mod records;

use std::path::Path;

use perfcons_core::{ResourceKind, SQLITE_BUSY_TIMEOUT_MS, SQLITE_POOL_MAX_CONNECTIONS};
use r2d2::{Pool, PooledConnection};
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;

use crate::error::StorageError;
use crate::migrations;

/// Type alias for pooled connection
pub(crate) type PooledConn = PooledConnection<SqliteConnectionManager>;

/// Record storage backed by a pooled `SQLite` database file.
#[derive(Clone, Debug)]
pub struct SqliteStorage {
    pub(crate) pool: Pool<SqliteConnectionManager>,
}

/// Get a connection from the pool
pub(crate) fn get_conn(pool: &Pool<SqliteConnectionManager>) -> Result<PooledConn, StorageError> {
    Ok(pool.get()?)
}

/// Per-connection concurrency settings.
fn init_connection(conn: &mut Connection) -> Result<(), rusqlite::Error> {
    conn.busy_timeout(std::time::Duration::from_millis(u64::from(SQLITE_BUSY_TIMEOUT_MS)))?;
    conn.execute_batch(
        "PRAGMA journal_mode = WAL;
         PRAGMA synchronous = NORMAL;",
    )?;
    Ok(())
}

impl SqliteStorage {
    /// Open (creating if needed) the database file and ensure both tables exist.
    ///
    /// `pool_size` defaults to [`SQLITE_POOL_MAX_CONNECTIONS`].
    pub fn new(db_path: &Path, pool_size: Option<u32>) -> Result<Self, StorageError> {
        let manager = SqliteConnectionManager::file(db_path).with_init(init_connection);

        let pool_size = pool_size.unwrap_or(SQLITE_POOL_MAX_CONNECTIONS);
        let pool = Pool::builder().max_size(pool_size).build(manager)?;

        let conn = get_conn(&pool)?;
        migrations::run_migrations(&conn).map_err(|e| StorageError::Migration(e.to_string()))?;
        drop(conn);

        tracing::info!(pool_size, path = %db_path.display(), "SQLite storage initialized");

        Ok(Self { pool })
    }

    /// Checks that a pooled connection can read every record table.
    pub fn ping(&self) -> Result<(), StorageError> {
        let conn = get_conn(&self.pool)?;
        for kind in ResourceKind::ALL {
            conn.prepare(&format!("SELECT 1 FROM {} LIMIT 1", kind.table()))?.exists([])?;
        }
        Ok(())
    }
}
