//! Book catalog data model
//!
//! A single entity: [`Book`], keyed by `book_id`. Books are created by the
//! write handlers and read back verbatim; nothing in the service updates or
//! deletes them.

use serde::{Deserialize, Serialize};

/// A catalog record, stored verbatim as received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    /// Primary key
    pub book_id: String,
    /// Title (required on every write path)
    pub title: String,
    /// Author (required on every write path)
    pub author: String,
    /// Cover image reference (URL or object key; may be empty)
    pub cover_image: String,
}

/// List-view projection of a [`Book`].
///
/// The cover image is intentionally omitted from list responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSummary {
    pub book_id: String,
    pub title: String,
    pub author: String,
}

impl Book {
    /// Create a new book record
    pub fn new(
        book_id: impl Into<String>,
        title: impl Into<String>,
        author: impl Into<String>,
        cover_image: impl Into<String>,
    ) -> Self {
        Self {
            book_id: book_id.into(),
            title: title.into(),
            author: author.into(),
            cover_image: cover_image.into(),
        }
    }

    /// Project to the list-view summary
    pub fn summary(&self) -> BookSummary {
        BookSummary {
            book_id: self.book_id.clone(),
            title: self.title.clone(),
            author: self.author.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_book_creation() {
        let book = Book::new("b1", "Dune", "Frank Herbert", "https://covers/dune.jpg");
        assert_eq!(book.book_id, "b1");
        assert_eq!(book.title, "Dune");
    }

    #[test]
    fn test_summary_omits_cover_image() {
        let book = Book::new("b1", "Dune", "Frank Herbert", "https://covers/dune.jpg");
        let json = serde_json::to_value(book.summary()).unwrap();

        assert_eq!(json["book_id"], "b1");
        assert!(json.get("cover_image").is_none());
    }

    #[test]
    fn test_book_roundtrip() {
        let book = Book::new("b1", "Dune", "Frank Herbert", "");
        let json = serde_json::to_string(&book).unwrap();
        let parsed: Book = serde_json::from_str(&json).unwrap();
        assert_eq!(book, parsed);
    }
}
