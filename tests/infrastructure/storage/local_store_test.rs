use bytes::Bytes;

use fundex::application::ports::{StagingStore, StagingStoreError};
use fundex::domain::{StoragePath, TaskId};
use fundex::infrastructure::storage::LocalStagingStore;

fn create_test_store() -> (tempfile::TempDir, LocalStagingStore) {
    let dir = tempfile::TempDir::new().unwrap();
    let store = LocalStagingStore::new(dir.path().to_path_buf()).unwrap();
    (dir, store)
}

#[tokio::test]
async fn given_bytes_when_storing_then_reported_size_matches() {
    let (_dir, store) = create_test_store();
    let path = StoragePath::for_upload(&TaskId::new(), "report.pdf");

    let size = store
        .store(&path, Bytes::from_static(b"hello world"))
        .await
        .unwrap();

    assert_eq!(size, 11);
}

#[tokio::test]
async fn given_stored_file_when_fetching_then_bytes_match_original() {
    let (_dir, store) = create_test_store();
    let path = StoragePath::for_upload(&TaskId::new(), "report.pdf");
    let content = b"fund report content";

    store
        .store(&path, Bytes::from_static(content))
        .await
        .unwrap();

    let fetched = store.fetch(&path).await.unwrap();
    assert_eq!(fetched, content);
}

#[tokio::test]
async fn given_stored_file_when_deleting_then_fetch_returns_not_found() {
    let (_dir, store) = create_test_store();
    let path = StoragePath::for_upload(&TaskId::new(), "report.pdf");

    store.store(&path, Bytes::from_static(b"data")).await.unwrap();
    store.delete(&path).await.unwrap();

    let result = store.fetch(&path).await;
    assert!(matches!(result, Err(StagingStoreError::NotFound(_))));
}

#[tokio::test]
async fn given_nonexistent_path_when_fetching_then_returns_not_found() {
    let (_dir, store) = create_test_store();
    let path = StoragePath::from_raw("nonexistent.xlsx");

    let result = store.fetch(&path).await;

    assert!(matches!(result, Err(StagingStoreError::NotFound(_))));
}

#[tokio::test]
async fn given_same_path_when_storing_twice_then_second_write_wins() {
    let (_dir, store) = create_test_store();
    let path = StoragePath::from_raw("workbook.xlsx");

    store
        .store(&path, Bytes::from_static(b"first"))
        .await
        .unwrap();
    store
        .store(&path, Bytes::from_static(b"second"))
        .await
        .unwrap();

    assert_eq!(store.fetch(&path).await.unwrap(), b"second");
}
