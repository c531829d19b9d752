//! Admin commands that talk to storage directly, bypassing HTTP and auth.

use std::sync::Arc;

use anyhow::Result;
use perfcons_core::{ResourceKind, StorageConfig};
use perfcons_service::{RecordService, ServiceError};
use perfcons_storage::StorageBackend;

async fn open_service(kind: ResourceKind) -> Result<RecordService> {
    let config = StorageConfig::from_env()?;
    let storage = StorageBackend::connect(&config).await?;
    Ok(RecordService::new(Arc::new(storage), kind))
}

pub(crate) async fn run_list(kind: ResourceKind) -> Result<()> {
    let service = open_service(kind).await?;
    let records = service.list().await?;
    println!("{}", serde_json::to_string_pretty(&records)?);
    Ok(())
}

pub(crate) async fn run_get(kind: ResourceKind, conversation_id: &str) -> Result<()> {
    let service = open_service(kind).await?;
    match service.get(conversation_id).await {
        Ok(record) => println!("{}", serde_json::to_string_pretty(&record)?),
        Err(e @ ServiceError::NotFound { .. }) => println!("{e}: {conversation_id}"),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

pub(crate) async fn run_delete(kind: ResourceKind, conversation_id: &str) -> Result<()> {
    let service = open_service(kind).await?;
    match service.delete(conversation_id).await {
        Ok(()) => println!("Deleted {} for {conversation_id}", kind.field()),
        Err(e @ ServiceError::NotFound { .. }) => println!("{e}: {conversation_id}"),
        Err(e) => return Err(e.into()),
    }
    Ok(())
}
