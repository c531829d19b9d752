//! PostgreSQL storage backend using sqlx.

mod records;

use perfcons_core::{
    PG_POOL_ACQUIRE_TIMEOUT_SECS, PG_POOL_IDLE_TIMEOUT_SECS, PG_POOL_MAX_CONNECTIONS,
};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::error::StorageError;

use super::pg_migrations::run_pg_migrations;

#[derive(Clone, Debug)]
pub struct PgStorage {
    pool: PgPool,
}

impl PgStorage {
    /// Connect, then create the record tables if they are missing.
    ///
    /// `pool_size` defaults to [`PG_POOL_MAX_CONNECTIONS`]. A request that
    /// cannot get a connection within the acquire timeout fails with
    /// `PoolTimedOut` rather than waiting indefinitely.
    pub async fn new(database_url: &str, pool_size: Option<u32>) -> Result<Self, StorageError> {
        let max_connections = pool_size.unwrap_or(PG_POOL_MAX_CONNECTIONS);
        let pool = PgPoolOptions::new()
            .max_connections(max_connections)
            .acquire_timeout(std::time::Duration::from_secs(PG_POOL_ACQUIRE_TIMEOUT_SECS))
            .idle_timeout(std::time::Duration::from_secs(PG_POOL_IDLE_TIMEOUT_SECS))
            .test_before_acquire(true)
            .connect(database_url)
            .await?;
        run_pg_migrations(&pool).await.map_err(|e| StorageError::Migration(e.to_string()))?;
        tracing::info!(max_connections, "PgStorage initialized");
        Ok(Self { pool })
    }
}
