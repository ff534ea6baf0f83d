//! Append-only file store
//!
//! The durable store backend. Records are appended to `books.dat` and never
//! rewritten in place; an in-memory offset index is rebuilt on open and
//! maintained on every write.
//!
//! # Design Principles
//!
//! - Append-only, no in-place updates
//! - fsync after every write
//! - Checksum verified on every read
//! - Latest record wins for the same `book_id`

use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use crate::model::Book;

use super::errors::{StoreError, StoreResult};
use super::record::BookRecord;
use super::BookStore;

/// Name of the record file inside the data directory
const STORE_FILE_NAME: &str = "books.dat";

/// Durable book store backed by an append-only record file.
///
/// Interior state lives behind a single mutex: one store call at a time, as
/// the handlers expect.
pub struct FileStore {
    inner: Mutex<Inner>,
}

struct Inner {
    path: PathBuf,
    file: File,
    current_offset: u64,
    /// book_id -> offset of the latest record for that key
    offsets: BTreeMap<String, u64>,
}

impl FileStore {
    /// Opens or creates the store under the given data directory.
    ///
    /// Creates `<data_dir>/books.dat` and any missing parent directories.
    /// The offset index is rebuilt by scanning every existing record; a
    /// checksum failure during the scan aborts the open.
    pub fn open(data_dir: &Path) -> StoreResult<Self> {
        let path = data_dir.join(STORE_FILE_NAME);

        if !data_dir.exists() {
            fs::create_dir_all(data_dir).map_err(|e| {
                StoreError::io_error(
                    format!("Failed to create data directory: {}", data_dir.display()),
                    e,
                )
            })?;
        }

        let file = OpenOptions::new()
            .create(true)
            .read(true)
            .append(true)
            .open(&path)
            .map_err(|e| {
                StoreError::io_error(
                    format!("Failed to open store file: {}", path.display()),
                    e,
                )
            })?;

        let current_offset = file
            .metadata()
            .map_err(|e| StoreError::io_error("Failed to read store file metadata", e))?
            .len();

        let offsets = Self::build_offset_index(&path)?;

        Ok(Self {
            inner: Mutex::new(Inner {
                path,
                file,
                current_offset,
                offsets,
            }),
        })
    }

    /// Builds the offset index by scanning the record file front to back.
    /// Later records for the same key replace earlier ones.
    fn build_offset_index(path: &Path) -> StoreResult<BTreeMap<String, u64>> {
        let data = fs::read(path)
            .map_err(|e| StoreError::read_failed("Failed to read store file", e))?;

        let mut offsets = BTreeMap::new();
        let mut pos = 0usize;
        while pos < data.len() {
            let (record, consumed) = BookRecord::deserialize(&data[pos..]).map_err(|e| {
                StoreError::corruption(format!("Invalid record at offset {}: {}", pos, e))
            })?;
            offsets.insert(record.book.book_id, pos as u64);
            pos += consumed;
        }

        Ok(offsets)
    }

    /// Number of distinct keys in the store
    pub fn record_count(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .offsets
            .len()
    }

    /// Reads and verifies one record at the given offset.
    ///
    /// The file handle is opened in append mode, which pins writes to the
    /// end of the file, so seeking for reads is safe.
    fn read_record_at(inner: &Inner, offset: u64) -> StoreResult<Book> {
        let mut file = &inner.file;

        file.seek(SeekFrom::Start(offset))
            .map_err(|e| StoreError::read_failed(format!("Failed to seek to offset {}", offset), e))?;

        let mut len_buf = [0u8; 4];
        file.read_exact(&mut len_buf)
            .map_err(|e| StoreError::read_failed(format!("Failed to read record at offset {}", offset), e))?;
        let record_length = u32::from_le_bytes(len_buf) as usize;

        if record_length < len_buf.len() {
            return Err(StoreError::corruption(format!(
                "Invalid record length {} at offset {}",
                record_length, offset
            )));
        }

        let mut buf = vec![0u8; record_length];
        buf[..4].copy_from_slice(&len_buf);
        file.read_exact(&mut buf[4..])
            .map_err(|e| StoreError::read_failed(format!("Failed to read record at offset {}", offset), e))?;

        let (record, _) = BookRecord::deserialize(&buf).map_err(|e| {
            StoreError::corruption(format!("Invalid record at offset {}: {}", offset, e))
        })?;
        Ok(record.book)
    }
}

impl BookStore for FileStore {
    fn put(&self, book: Book) -> StoreResult<()> {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);

        let record = BookRecord::new(book);
        let serialized = record.serialize();
        let offset = inner.current_offset;

        inner.file.write_all(&serialized).map_err(|e| {
            StoreError::write_failed(
                format!("Failed to write book: {}", record.book.book_id),
                e,
            )
        })?;

        // fsync before acknowledging the write
        inner.file.sync_all().map_err(|e| {
            StoreError::write_failed(
                format!("fsync failed after writing book: {}", record.book.book_id),
                e,
            )
        })?;

        inner.current_offset += serialized.len() as u64;
        inner.offsets.insert(record.book.book_id, offset);

        Ok(())
    }

    fn get(&self, book_id: &str) -> StoreResult<Option<Book>> {
        let inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);

        match inner.offsets.get(book_id) {
            Some(&offset) => Ok(Some(Self::read_record_at(&inner, offset)?)),
            None => Ok(None),
        }
    }

    fn scan(&self) -> StoreResult<Vec<Book>> {
        let inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);

        let mut books = Vec::with_capacity(inner.offsets.len());
        for &offset in inner.offsets.values() {
            books.push(Self::read_record_at(&inner, offset)?);
        }
        Ok(books)
    }
}

impl std::fmt::Debug for FileStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f.debug_struct("FileStore")
            .field("path", &inner.path)
            .field("records", &inner.offsets.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_book(id: &str) -> Book {
        Book::new(id, "title", "author", "cover")
    }

    #[test]
    fn test_open_creates_store_file() {
        let temp_dir = TempDir::new().unwrap();
        let _store = FileStore::open(temp_dir.path()).unwrap();
        assert!(temp_dir.path().join(STORE_FILE_NAME).exists());
    }

    #[test]
    fn test_put_then_get() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::open(temp_dir.path()).unwrap();

        store.put(sample_book("b1")).unwrap();
        let book = store.get("b1").unwrap().unwrap();
        assert_eq!(book, sample_book("b1"));
    }

    #[test]
    fn test_get_missing_returns_none() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::open(temp_dir.path()).unwrap();
        assert!(store.get("missing").unwrap().is_none());
    }

    #[test]
    fn test_latest_record_wins() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::open(temp_dir.path()).unwrap();

        store.put(sample_book("b1")).unwrap();
        store.put(Book::new("b1", "updated", "author", "cover")).unwrap();

        assert_eq!(store.record_count(), 1);
        assert_eq!(store.get("b1").unwrap().unwrap().title, "updated");
    }

    #[test]
    fn test_scan_is_ordered_by_key() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::open(temp_dir.path()).unwrap();

        store.put(sample_book("b2")).unwrap();
        store.put(sample_book("b1")).unwrap();

        let ids: Vec<String> = store
            .scan()
            .unwrap()
            .into_iter()
            .map(|b| b.book_id)
            .collect();
        assert_eq!(ids, vec!["b1", "b2"]);
    }

    #[test]
    fn test_index_rebuilt_on_reopen() {
        let temp_dir = TempDir::new().unwrap();

        {
            let store = FileStore::open(temp_dir.path()).unwrap();
            store.put(sample_book("b1")).unwrap();
            store.put(sample_book("b2")).unwrap();
        }

        let store = FileStore::open(temp_dir.path()).unwrap();
        assert_eq!(store.record_count(), 2);
        assert_eq!(store.get("b2").unwrap().unwrap(), sample_book("b2"));
    }
}
