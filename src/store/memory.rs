//! In-memory store
//!
//! A mutex-guarded ordered map. Used by the test suites and for ephemeral
//! serving; nothing survives process exit.

use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};

use crate::model::Book;

use super::errors::StoreResult;
use super::BookStore;

/// Ephemeral book store backed by an ordered in-memory map.
pub struct MemoryStore {
    books: Mutex<BTreeMap<String, Book>>,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            books: Mutex::new(BTreeMap::new()),
        }
    }

    /// Number of stored records
    pub fn len(&self) -> usize {
        self.books
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BookStore for MemoryStore {
    fn put(&self, book: Book) -> StoreResult<()> {
        // A poisoned lock only means a writer panicked; the map is still usable
        let mut books = self.books.lock().unwrap_or_else(PoisonError::into_inner);
        books.insert(book.book_id.clone(), book);
        Ok(())
    }

    fn get(&self, book_id: &str) -> StoreResult<Option<Book>> {
        let books = self.books.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(books.get(book_id).cloned())
    }

    fn scan(&self) -> StoreResult<Vec<Book>> {
        let books = self.books.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(books.values().cloned().collect())
    }
}
