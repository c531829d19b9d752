//! Shared constants for perfcons.
//!
//! Column limits mirror the table definitions in the storage crate.

/// Maximum length of a conversation id, in bytes (`VARCHAR(255)`).
pub const MAX_CONVERSATION_ID_BYTES: usize = 255;

/// Maximum length of a fact, in characters.
pub const MAX_FACT_CHARS: usize = 16_000;

/// Maximum length of a budget, in characters.
pub const MAX_BUDGET_CHARS: usize = 100_000;

/// SQLite connection pool: default maximum connections.
pub const SQLITE_POOL_MAX_CONNECTIONS: u32 = 8;

/// SQLite busy timeout in milliseconds.
pub const SQLITE_BUSY_TIMEOUT_MS: u32 = 5_000;

/// PostgreSQL connection pool: default maximum connections.
pub const PG_POOL_MAX_CONNECTIONS: u32 = 20;

/// PostgreSQL connection pool: acquire timeout in seconds.
pub const PG_POOL_ACQUIRE_TIMEOUT_SECS: u64 = 10;

/// PostgreSQL connection pool: idle timeout in seconds.
pub const PG_POOL_IDLE_TIMEOUT_SECS: u64 = 300;

/// Default bind address for `perfcons serve`.
pub const DEFAULT_HOST: &str = "0.0.0.0";

/// Default port for `perfcons serve`.
pub const DEFAULT_PORT: u16 = 8000;

/// Environment variable holding the shared bearer token.
pub const ENV_API_TOKEN: &str = "API_TOKEN";

/// Environment variable holding the storage connection string.
pub const ENV_DATABASE_URL: &str = "DATABASE_URL";

/// Environment variable toggling auth on the list-all routes.
pub const ENV_PROTECT_LIST_ALL: &str = "PERFCONS_PROTECT_LIST_ALL";

/// Environment variable overriding the connection pool size.
pub const ENV_DB_POOL_SIZE: &str = "PERFCONS_DB_POOL_SIZE";
