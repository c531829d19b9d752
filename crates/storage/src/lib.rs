//! Storage layer for perfcons
//!
//! One table per [`ResourceKind`](perfcons_core::ResourceKind), keyed by
//! conversation id. SQLite (default) and PostgreSQL backends implement the
//! same async [`RecordStore`] trait and are selected at runtime through
//! [`StorageBackend`].

#![allow(clippy::absolute_paths, reason = "std paths in error handling are clear")]

mod backend;
pub mod error;
#[cfg(feature = "sqlite")]
mod migrations;
#[cfg(feature = "postgres")]
mod pg_migrations;
#[cfg(feature = "postgres")]
mod pg_storage;
#[cfg(feature = "sqlite")]
mod sqlite_async;
#[cfg(feature = "sqlite")]
mod storage;
#[cfg(all(test, feature = "sqlite"))]
mod tests;
pub mod traits;

pub use backend::StorageBackend;
pub use error::StorageError;
#[cfg(feature = "postgres")]
pub use pg_storage::PgStorage;
#[cfg(feature = "sqlite")]
pub use storage::SqliteStorage;
pub use traits::RecordStore;
