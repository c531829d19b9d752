//! PostgreSQL schema setup for perfcons storage.

use sqlx::PgPool;

/// Create the record tables if they don't exist yet.
pub async fn run_pg_migrations(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS facts (
            conversation_id VARCHAR(255) PRIMARY KEY,
            fact TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS budgets (
            conversation_id VARCHAR(255) PRIMARY KEY,
            budget TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}
