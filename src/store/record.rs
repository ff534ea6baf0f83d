//! On-disk record framing for the file store
//!
//! Record layout:
//!
//! ```text
//! +------------------+
//! | Record Length    | (u32 LE, includes this field and the checksum)
//! +------------------+
//! | book_id          | (length-prefixed string)
//! +------------------+
//! | title            | (length-prefixed string)
//! +------------------+
//! | author           | (length-prefixed string)
//! +------------------+
//! | cover_image      | (length-prefixed string)
//! +------------------+
//! | Checksum         | (u32 LE)
//! +------------------+
//! ```
//!
//! The checksum covers all bytes except the checksum itself.

use std::io::{self, Read};

use crate::model::Book;

use super::checksum::compute_checksum;

/// A framed book record as stored on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookRecord {
    /// The book carried by this record
    pub book: Book,
}

impl BookRecord {
    /// Frame a book for storage
    pub fn new(book: Book) -> Self {
        Self { book }
    }

    /// Serialize the record body (everything between length prefix and checksum).
    fn serialize_body(&self) -> Vec<u8> {
        fn push_string(buf: &mut Vec<u8>, s: &str) {
            buf.extend_from_slice(&(s.len() as u32).to_le_bytes());
            buf.extend_from_slice(s.as_bytes());
        }

        let mut buf = Vec::new();
        push_string(&mut buf, &self.book.book_id);
        push_string(&mut buf, &self.book.title);
        push_string(&mut buf, &self.book.author);
        push_string(&mut buf, &self.book.cover_image);
        buf
    }

    /// Serialize the complete record to bytes.
    ///
    /// Format: record length (u32 LE), body, checksum (u32 LE). The checksum
    /// covers the length prefix and the body.
    pub fn serialize(&self) -> Vec<u8> {
        let body = self.serialize_body();
        let record_length = (4 + body.len() + 4) as u32;

        let mut checksum_data = Vec::with_capacity(4 + body.len());
        checksum_data.extend_from_slice(&record_length.to_le_bytes());
        checksum_data.extend_from_slice(&body);
        let checksum = compute_checksum(&checksum_data);

        let mut record = Vec::with_capacity(record_length as usize);
        record.extend_from_slice(&record_length.to_le_bytes());
        record.extend_from_slice(&body);
        record.extend_from_slice(&checksum.to_le_bytes());
        record
    }

    /// Deserialize a record from bytes, verifying the checksum.
    ///
    /// Returns the record and the number of bytes consumed.
    pub fn deserialize(data: &[u8]) -> io::Result<(Self, usize)> {
        // len prefix + four empty strings + checksum
        const MIN_RECORD_SIZE: usize = 4 + 4 * 4 + 4;

        if data.len() < MIN_RECORD_SIZE {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "Record too short",
            ));
        }

        let record_length = u32::from_le_bytes([data[0], data[1], data[2], data[3]]) as usize;

        if record_length < MIN_RECORD_SIZE {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("Invalid record length: {}", record_length),
            ));
        }

        if data.len() < record_length {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                format!(
                    "Record truncated: expected {} bytes, got {}",
                    record_length,
                    data.len()
                ),
            ));
        }

        let checksum_offset = record_length - 4;
        let stored_checksum = u32::from_le_bytes([
            data[checksum_offset],
            data[checksum_offset + 1],
            data[checksum_offset + 2],
            data[checksum_offset + 3],
        ]);

        let computed_checksum = compute_checksum(&data[0..checksum_offset]);
        if computed_checksum != stored_checksum {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!(
                    "Checksum mismatch: computed {:08x}, stored {:08x}",
                    computed_checksum, stored_checksum
                ),
            ));
        }

        fn read_string<R: Read>(reader: &mut R) -> io::Result<String> {
            let mut len_buf = [0u8; 4];
            reader.read_exact(&mut len_buf)?;
            let len = u32::from_le_bytes(len_buf) as usize;

            let mut buf = vec![0u8; len];
            reader.read_exact(&mut buf)?;

            String::from_utf8(buf).map_err(|e| {
                io::Error::new(io::ErrorKind::InvalidData, format!("Invalid UTF-8: {}", e))
            })
        }

        let mut cursor = io::Cursor::new(&data[4..checksum_offset]);
        let book_id = read_string(&mut cursor)?;
        let title = read_string(&mut cursor)?;
        let author = read_string(&mut cursor)?;
        let cover_image = read_string(&mut cursor)?;

        Ok((
            Self {
                book: Book {
                    book_id,
                    title,
                    author,
                    cover_image,
                },
            },
            record_length,
        ))
    }
}
