use perfcons_core::ResourceKind;

use super::create_test_storage;
use crate::{RecordStore, SqliteStorage, StorageError};

#[test]
fn test_insert_and_get_record() {
    let (storage, _temp_dir) = create_test_storage();

    let created = storage.insert_record(ResourceKind::Fact, "conv-001", "A").unwrap();
    assert_eq!(created.conversation_id, "conv-001");
    assert_eq!(created.text, "A");

    let fetched = storage.get_record(ResourceKind::Fact, "conv-001").unwrap().unwrap();
    assert_eq!(fetched, created);
}

#[test]
fn test_insert_duplicate_keeps_first_value() {
    let (storage, _temp_dir) = create_test_storage();
    storage.insert_record(ResourceKind::Budget, "conv-002", "first").unwrap();

    let err = storage.insert_record(ResourceKind::Budget, "conv-002", "second").unwrap_err();
    assert!(err.is_duplicate(), "expected duplicate, got {err:?}");

    let fetched = storage.get_record(ResourceKind::Budget, "conv-002").unwrap().unwrap();
    assert_eq!(fetched.text, "first");
}

#[test]
fn test_kinds_are_independent_tables() {
    let (storage, _temp_dir) = create_test_storage();
    storage.insert_record(ResourceKind::Fact, "shared", "fact text").unwrap();

    assert!(storage.get_record(ResourceKind::Budget, "shared").unwrap().is_none());
    storage.insert_record(ResourceKind::Budget, "shared", "budget text").unwrap();

    assert_eq!(storage.get_record(ResourceKind::Fact, "shared").unwrap().unwrap().text, "fact text");
    assert_eq!(
        storage.get_record(ResourceKind::Budget, "shared").unwrap().unwrap().text,
        "budget text"
    );
}

#[test]
fn test_update_absent_creates_nothing() {
    let (storage, _temp_dir) = create_test_storage();

    let updated = storage.update_record(ResourceKind::Fact, "missing", "text").unwrap();
    assert!(updated.is_none());
    assert!(storage.get_record(ResourceKind::Fact, "missing").unwrap().is_none());
}

#[test]
fn test_update_replaces_text() {
    let (storage, _temp_dir) = create_test_storage();
    storage.insert_record(ResourceKind::Fact, "conv-003", "old").unwrap();

    let updated = storage.update_record(ResourceKind::Fact, "conv-003", "new").unwrap().unwrap();
    assert_eq!(updated.text, "new");
    assert_eq!(storage.get_record(ResourceKind::Fact, "conv-003").unwrap().unwrap().text, "new");
}

#[test]
fn test_delete_then_get_is_absent() {
    let (storage, _temp_dir) = create_test_storage();
    storage.insert_record(ResourceKind::Budget, "conv-004", "text").unwrap();

    assert!(storage.delete_record(ResourceKind::Budget, "conv-004").unwrap());
    assert!(storage.get_record(ResourceKind::Budget, "conv-004").unwrap().is_none());
    assert!(!storage.delete_record(ResourceKind::Budget, "conv-004").unwrap());
}

#[test]
fn test_list_records_returns_every_row() {
    let (storage, _temp_dir) = create_test_storage();
    assert!(storage.list_records(ResourceKind::Fact).unwrap().is_empty());

    for i in (0..5).rev() {
        storage.insert_record(ResourceKind::Fact, &format!("conv-{i}"), &format!("fact {i}")).unwrap();
    }
    storage.insert_record(ResourceKind::Budget, "conv-x", "budget").unwrap();

    let facts = storage.list_records(ResourceKind::Fact).unwrap();
    assert_eq!(facts.len(), 5);
    for (i, record) in facts.iter().enumerate() {
        assert_eq!(record.conversation_id, format!("conv-{i}"));
        assert_eq!(record.text, format!("fact {i}"));
        assert_eq!(record.kind, ResourceKind::Fact);
    }
}

#[test]
fn test_large_budget_roundtrip() {
    let (storage, _temp_dir) = create_test_storage();
    let text = "budget line\n".repeat(8_000);

    storage.insert_record(ResourceKind::Budget, "big", &text).unwrap();
    assert_eq!(storage.get_record(ResourceKind::Budget, "big").unwrap().unwrap().text, text);
}

#[test]
fn test_reopen_keeps_data() {
    let (storage, temp_dir) = create_test_storage();
    storage.insert_record(ResourceKind::Fact, "persisted", "still here").unwrap();
    drop(storage);

    let reopened = SqliteStorage::new(&temp_dir.path().join("test.db"), Some(2)).unwrap();
    let fetched = reopened.get_record(ResourceKind::Fact, "persisted").unwrap().unwrap();
    assert_eq!(fetched.text, "still here");
}

#[tokio::test]
async fn test_async_trait_delegates_to_sqlite() {
    let (storage, _temp_dir) = create_test_storage();
    let store: &dyn RecordStore = &storage;

    store.ping().await.unwrap();
    store.insert_record(ResourceKind::Fact, "async", "via trait").await.unwrap();
    let err = store.insert_record(ResourceKind::Fact, "async", "again").await.unwrap_err();
    assert!(matches!(err, StorageError::Duplicate(_)));

    let listed = store.list_records(ResourceKind::Fact).await.unwrap();
    assert_eq!(listed.len(), 1);
}

#[test]
fn test_ping_fails_when_a_record_table_is_missing() {
    let (storage, temp_dir) = create_test_storage();
    storage.ping().unwrap();

    let conn = rusqlite::Connection::open(temp_dir.path().join("test.db")).unwrap();
    conn.execute_batch("DROP TABLE budgets").unwrap();

    assert!(matches!(storage.ping().unwrap_err(), StorageError::Sqlite(_)));
}
