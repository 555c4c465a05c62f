use chrono::Utc;

use docsum::application::ports::DocumentStore;
use docsum::domain::StoragePath;
use docsum::infrastructure::storage::LocalDocumentStore;

fn create_test_store() -> (tempfile::TempDir, LocalDocumentStore) {
    let dir = tempfile::TempDir::new().unwrap();
    let store = LocalDocumentStore::new(dir.path().to_path_buf()).unwrap();
    (dir, store)
}

#[tokio::test]
async fn given_upload_when_storing_then_file_lands_under_dated_key() {
    let (_dir, store) = create_test_store();

    store.store(b"hello world", "report.pdf").await.unwrap();

    let expected = StoragePath::new(b"hello world", "report.pdf", Utc::now().date_naive());
    let on_disk = store.base_path().join(expected.as_str());
    assert_eq!(std::fs::read(on_disk).unwrap(), b"hello world");
}

#[tokio::test]
async fn given_upload_when_storing_then_returns_file_locator_under_base_path() {
    let (_dir, store) = create_test_store();

    let locator = store.store(b"hello world", "report.pdf").await.unwrap();

    let prefix = format!("file://{}/uploads/", store.base_path().display());
    assert!(locator.as_str().starts_with(&prefix), "{locator}");
    assert!(locator.as_str().ends_with("_report.pdf"));
}

#[tokio::test]
async fn given_filename_with_reserved_characters_when_storing_then_locator_points_at_written_file() {
    let (_dir, store) = create_test_store();

    let locator = store
        .store(b"hello world", "q1 [draft] 100%.pdf")
        .await
        .unwrap();

    let on_disk = locator.as_str().strip_prefix("file://").unwrap();
    assert_eq!(std::fs::read(on_disk).unwrap(), b"hello world");
}

#[tokio::test]
async fn given_same_upload_when_storing_twice_then_overwrites_same_key() {
    let (_dir, store) = create_test_store();

    let first = store.store(b"hello world", "report.pdf").await.unwrap();
    let second = store.store(b"hello world", "report.pdf").await.unwrap();

    assert_eq!(first, second);
}

#[test]
fn given_missing_directory_when_creating_store_then_directory_is_created() {
    let dir = tempfile::TempDir::new().unwrap();
    let nested = dir.path().join("nested").join("storage");

    let store = LocalDocumentStore::new(nested.clone()).unwrap();

    assert!(nested.is_dir());
    assert!(store.base_path().is_absolute());
}
