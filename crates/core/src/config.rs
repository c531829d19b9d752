//! Process configuration assembled from the environment.
//!
//! Values are read once at startup and passed down explicitly; nothing below
//! the binary reads the environment on its own.

use std::path::PathBuf;

use crate::constants::{
    ENV_API_TOKEN, ENV_DATABASE_URL, ENV_DB_POOL_SIZE, ENV_PROTECT_LIST_ALL,
};
use crate::env_config::{env_non_empty, env_parse_with_default};
use crate::error::ConfigError;

/// Where records are persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatabaseTarget {
    /// SQLite database file.
    Sqlite(PathBuf),
    /// PostgreSQL connection string.
    Postgres(String),
}

impl DatabaseTarget {
    /// Parse a `DATABASE_URL` value.
    ///
    /// `postgres://` and `postgresql://` select PostgreSQL, `sqlite://` (or
    /// `sqlite:`) and bare paths select SQLite. Any other `scheme://` is rejected.
    pub fn parse(url: &str) -> Result<Self, ConfigError> {
        let url = url.trim();
        if url.starts_with("postgres://") || url.starts_with("postgresql://") {
            return Ok(Self::Postgres(url.to_owned()));
        }
        if let Some(path) = url.strip_prefix("sqlite://").or_else(|| url.strip_prefix("sqlite:")) {
            return Ok(Self::Sqlite(PathBuf::from(path)));
        }
        if let Some((scheme, _)) = url.split_once("://") {
            return Err(ConfigError::UnsupportedScheme(scheme.to_owned()));
        }
        Ok(Self::Sqlite(PathBuf::from(url)))
    }

    /// Default location: `<local data dir>/perfcons/perfcons.db`.
    #[must_use]
    pub fn default_sqlite() -> Self {
        Self::Sqlite(
            dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("perfcons")
                .join("perfcons.db"),
        )
    }

    /// Read `DATABASE_URL`, falling back to [`DatabaseTarget::default_sqlite`].
    pub fn from_env() -> Result<Self, ConfigError> {
        match env_non_empty(ENV_DATABASE_URL) {
            Some(url) => Self::parse(&url),
            None => Ok(Self::default_sqlite()),
        }
    }
}

/// Storage settings shared by `serve` and the admin commands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    pub target: DatabaseTarget,
    /// Overrides the backend's default pool size when set.
    pub pool_size: Option<u32>,
}

impl StorageConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let pool_size = match env_parse_with_default(ENV_DB_POOL_SIZE, 0u32) {
            0 => None,
            n => Some(n),
        };
        Ok(Self { target: DatabaseTarget::from_env()?, pool_size })
    }
}

/// Everything `perfcons serve` needs besides the bind address.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Shared bearer secret.
    pub api_token: String,
    /// Whether `GET /{facts,budgets}/all` requires the bearer token.
    pub protect_list_all: bool,
    pub storage: StorageConfig,
}

impl ServerConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_token = env_non_empty(ENV_API_TOKEN).ok_or(ConfigError::Missing(ENV_API_TOKEN))?;
        Ok(Self {
            api_token,
            protect_list_all: env_parse_with_default(ENV_PROTECT_LIST_ALL, true),
            storage: StorageConfig::from_env()?,
        })
    }
}
