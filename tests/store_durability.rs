//! Store Durability Tests
//!
//! The file store must survive a reopen, fail explicitly on corruption, and
//! resolve duplicate identifiers to the latest write.

use std::fs;

use bookshelf::model::Book;
use bookshelf::store::{BookStore, FileStore, StoreErrorCode};
use tempfile::TempDir;

// =============================================================================
// Test Utilities
// =============================================================================

fn sample_book(id: &str) -> Book {
    Book::new(id, format!("title-{}", id), "author", "cover")
}

fn store_file(temp_dir: &TempDir) -> std::path::PathBuf {
    temp_dir.path().join("books.dat")
}

// =============================================================================
// Durability across reopen
// =============================================================================

#[test]
fn test_records_survive_reopen() {
    let temp_dir = TempDir::new().unwrap();

    {
        let store = FileStore::open(temp_dir.path()).unwrap();
        store.put(sample_book("b1")).unwrap();
        store.put(sample_book("b2")).unwrap();
    }

    let store = FileStore::open(temp_dir.path()).unwrap();
    assert_eq!(store.get("b1").unwrap().unwrap(), sample_book("b1"));
    assert_eq!(store.get("b2").unwrap().unwrap(), sample_book("b2"));
    assert_eq!(store.scan().unwrap().len(), 2);
}

#[test]
fn test_latest_write_wins_after_reopen() {
    let temp_dir = TempDir::new().unwrap();

    {
        let store = FileStore::open(temp_dir.path()).unwrap();
        store.put(Book::new("b1", "first", "author", "cover")).unwrap();
        store.put(Book::new("b1", "second", "author", "cover")).unwrap();
    }

    let store = FileStore::open(temp_dir.path()).unwrap();
    assert_eq!(store.get("b1").unwrap().unwrap().title, "second");
    assert_eq!(store.scan().unwrap().len(), 1);
}

#[test]
fn test_empty_store_scans_empty() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileStore::open(temp_dir.path()).unwrap();

    assert!(store.scan().unwrap().is_empty());
    assert!(store.get("missing").unwrap().is_none());
}

// =============================================================================
// Corruption is never ignored
// =============================================================================

#[test]
fn test_corruption_fails_reopen_explicitly() {
    let temp_dir = TempDir::new().unwrap();

    {
        let store = FileStore::open(temp_dir.path()).unwrap();
        store.put(sample_book("b1")).unwrap();
    }

    // Corrupt a byte in the record file
    {
        let path = store_file(&temp_dir);
        let mut contents = fs::read(&path).unwrap();
        let mid = contents.len() / 2;
        contents[mid] ^= 0xFF;
        fs::write(&path, contents).unwrap();
    }

    let err = FileStore::open(temp_dir.path()).unwrap_err();
    assert_eq!(err.code(), StoreErrorCode::Corruption);
    assert!(err.is_fatal());
}

#[test]
fn test_truncated_tail_fails_reopen() {
    let temp_dir = TempDir::new().unwrap();

    {
        let store = FileStore::open(temp_dir.path()).unwrap();
        store.put(sample_book("b1")).unwrap();
    }

    {
        let path = store_file(&temp_dir);
        let contents = fs::read(&path).unwrap();
        fs::write(&path, &contents[..contents.len() - 3]).unwrap();
    }

    assert!(FileStore::open(temp_dir.path()).is_err());
}

// =============================================================================
// Scan semantics
// =============================================================================

#[test]
fn test_scan_is_ordered_by_book_id() {
    let temp_dir = TempDir::new().unwrap();
    let store = FileStore::open(temp_dir.path()).unwrap();

    store.put(sample_book("b3")).unwrap();
    store.put(sample_book("b1")).unwrap();
    store.put(sample_book("b2")).unwrap();

    let ids: Vec<String> = store
        .scan()
        .unwrap()
        .into_iter()
        .map(|b| b.book_id)
        .collect();
    assert_eq!(ids, vec!["b1", "b2", "b3"]);
}

#[test]
fn test_memory_and_file_stores_agree() {
    use bookshelf::store::MemoryStore;

    let temp_dir = TempDir::new().unwrap();
    let file_store = FileStore::open(temp_dir.path()).unwrap();
    let memory_store = MemoryStore::new();

    for store in [&file_store as &dyn BookStore, &memory_store as &dyn BookStore] {
        store.put(sample_book("b2")).unwrap();
        store.put(sample_book("b1")).unwrap();
        store.put(sample_book("b1")).unwrap();
    }

    assert_eq!(file_store.scan().unwrap(), memory_store.scan().unwrap());
    assert_eq!(
        file_store.get("b1").unwrap(),
        memory_store.get("b1").unwrap()
    );
}
