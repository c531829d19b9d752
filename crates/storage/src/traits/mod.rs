//! Storage backend trait abstraction
//!
//! Async domain traits implemented by both the SQLite and PostgreSQL backends.

pub mod record;

pub use record::RecordStore;
