//! Integration tests for PgStorage.
//! Run with: DATABASE_URL=... cargo test -p perfcons-storage --features postgres -- --ignored pg_

#![cfg(feature = "postgres")]
#![allow(clippy::unwrap_used, reason = "integration test code")]

use std::sync::Arc;

use perfcons_core::ResourceKind;
use perfcons_storage::{PgStorage, RecordStore, StorageError};
use uuid::Uuid;

async fn create_pg_storage() -> PgStorage {
    let url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set for PgStorage integration tests");
    PgStorage::new(&url, None).await.expect("Failed to connect to PostgreSQL")
}

fn unique_id() -> String {
    format!("test-{}", Uuid::new_v4())
}

#[tokio::test]
#[ignore]
async fn pg_fact_lifecycle() {
    let storage = create_pg_storage().await;
    let id = unique_id();

    let created = storage.insert_record(ResourceKind::Fact, &id, "A").await.unwrap();
    assert_eq!(created.text, "A");
    assert_eq!(storage.get_record(ResourceKind::Fact, &id).await.unwrap().unwrap().text, "A");

    let updated = storage.update_record(ResourceKind::Fact, &id, "B").await.unwrap().unwrap();
    assert_eq!(updated.text, "B");

    assert!(storage.delete_record(ResourceKind::Fact, &id).await.unwrap());
    assert!(storage.get_record(ResourceKind::Fact, &id).await.unwrap().is_none());
}

#[tokio::test]
#[ignore]
async fn pg_duplicate_insert_keeps_first() {
    let storage = create_pg_storage().await;
    let id = unique_id();

    storage.insert_record(ResourceKind::Budget, &id, "first").await.unwrap();
    let err = storage.insert_record(ResourceKind::Budget, &id, "second").await.unwrap_err();
    assert!(matches!(err, StorageError::Duplicate(_)));
    assert_eq!(storage.get_record(ResourceKind::Budget, &id).await.unwrap().unwrap().text, "first");

    storage.delete_record(ResourceKind::Budget, &id).await.unwrap();
}

#[tokio::test]
#[ignore]
async fn pg_update_absent_returns_none() {
    let storage = create_pg_storage().await;
    let id = unique_id();
    assert!(storage.update_record(ResourceKind::Fact, &id, "x").await.unwrap().is_none());
    assert!(storage.get_record(ResourceKind::Fact, &id).await.unwrap().is_none());
}

#[tokio::test]
#[ignore]
async fn pg_concurrent_creates_have_single_winner() {
    let storage = Arc::new(create_pg_storage().await);
    let id = unique_id();

    let mut handles = vec![];
    for i in 0..8 {
        let storage = Arc::clone(&storage);
        let id = id.clone();
        handles.push(tokio::spawn(async move {
            storage.insert_record(ResourceKind::Budget, &id, &format!("writer {i}")).await
        }));
    }

    let mut ok = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => ok += 1,
            Err(e) => assert!(e.is_duplicate(), "unexpected error: {e:?}"),
        }
    }
    assert_eq!(ok, 1);

    storage.delete_record(ResourceKind::Budget, &id).await.unwrap();
}

#[tokio::test]
#[ignore]
async fn pg_list_contains_inserted() {
    let storage = create_pg_storage().await;
    let ids: Vec<String> = (0..3).map(|_| unique_id()).collect();
    for id in &ids {
        storage.insert_record(ResourceKind::Fact, id, id).await.unwrap();
    }

    let listed = storage.list_records(ResourceKind::Fact).await.unwrap();
    for id in &ids {
        let record = listed.iter().find(|r| &r.conversation_id == id).unwrap();
        assert_eq!(&record.text, id);
        storage.delete_record(ResourceKind::Fact, id).await.unwrap();
    }
}
