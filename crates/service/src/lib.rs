//! Record semantics for perfcons: validation plus the per-id state machine,
//! shared by facts and budgets.

mod error;
mod record_service;

pub use error::ServiceError;
pub use record_service::RecordService;
