//! Core types and configuration for perfcons
//!
//! Domain types shared by the storage, service and HTTP crates.

mod config;
pub mod constants;
mod env_config;
mod error;
mod record;

pub use config::{DatabaseTarget, ServerConfig, StorageConfig};
pub use constants::*;
pub use env_config::{env_non_empty, env_parse_with_default};
pub use error::{ConfigError, ValidationError};
pub use record::{Record, ResourceKind, validate_conversation_id};
