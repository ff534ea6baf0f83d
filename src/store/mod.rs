//! Book storage subsystem
//!
//! The store is a key-value collection of [`Book`] records keyed by
//! `book_id`, supporting exactly three operations: point upsert, point read
//! and full scan.
//!
//! # Design Principles
//!
//! - One synchronous store call per handler invocation
//! - Interior mutex; no shared mutable state outside the store
//! - Last write wins for the same `book_id`
//! - File-store reads are checksum-verified

mod checksum;
mod errors;
mod file;
mod memory;
mod record;

pub use checksum::{compute_checksum, verify_checksum};
pub use errors::{Severity, StoreError, StoreErrorCode, StoreResult};
pub use file::FileStore;
pub use memory::MemoryStore;
pub use record::BookRecord;

use crate::model::Book;

/// Key-value collection of book records.
///
/// Implementations are constructed at startup and injected into the request
/// handlers; the handlers themselves hold no storage state.
pub trait BookStore: Send + Sync {
    /// Point upsert. A later write for the same `book_id` replaces the record.
    fn put(&self, book: Book) -> StoreResult<()>;

    /// Point read by key.
    fn get(&self, book_id: &str) -> StoreResult<Option<Book>>;

    /// Full single-pass scan, ordered by `book_id`.
    fn scan(&self) -> StoreResult<Vec<Book>>;
}
