//! Store error types
//!
//! Error codes:
//! - SHELF_STORE_IO_ERROR (ERROR severity)
//! - SHELF_STORE_WRITE_FAILED (ERROR severity)
//! - SHELF_STORE_READ_FAILED (ERROR severity)
//! - SHELF_STORE_CORRUPTION (FATAL severity)

use std::fmt;
use std::io;

/// Severity levels for store errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Operation fails, service continues
    Error,
    /// The store must not be trusted further
    Fatal,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "ERROR"),
            Severity::Fatal => write!(f, "FATAL"),
        }
    }
}

/// Store-specific error codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreErrorCode {
    /// Filesystem I/O failure
    IoError,
    /// Record write failed
    WriteFailed,
    /// Record read failed
    ReadFailed,
    /// Record checksum failure
    Corruption,
}

impl StoreErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            StoreErrorCode::IoError => "SHELF_STORE_IO_ERROR",
            StoreErrorCode::WriteFailed => "SHELF_STORE_WRITE_FAILED",
            StoreErrorCode::ReadFailed => "SHELF_STORE_READ_FAILED",
            StoreErrorCode::Corruption => "SHELF_STORE_CORRUPTION",
        }
    }

    /// Returns the severity level for this code
    pub fn severity(&self) -> Severity {
        match self {
            StoreErrorCode::IoError => Severity::Error,
            StoreErrorCode::WriteFailed => Severity::Error,
            StoreErrorCode::ReadFailed => Severity::Error,
            StoreErrorCode::Corruption => Severity::Fatal,
        }
    }
}

impl fmt::Display for StoreErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Store error with code, message and optional I/O source
#[derive(Debug)]
pub struct StoreError {
    code: StoreErrorCode,
    message: String,
    source: Option<io::Error>,
}

impl StoreError {
    /// Filesystem I/O error
    pub fn io_error(message: impl Into<String>, source: io::Error) -> Self {
        Self {
            code: StoreErrorCode::IoError,
            message: message.into(),
            source: Some(source),
        }
    }

    /// Record write failure
    pub fn write_failed(message: impl Into<String>, source: io::Error) -> Self {
        Self {
            code: StoreErrorCode::WriteFailed,
            message: message.into(),
            source: Some(source),
        }
    }

    /// Record read failure
    pub fn read_failed(message: impl Into<String>, source: io::Error) -> Self {
        Self {
            code: StoreErrorCode::ReadFailed,
            message: message.into(),
            source: Some(source),
        }
    }

    /// Checksum or framing failure
    pub fn corruption(message: impl Into<String>) -> Self {
        Self {
            code: StoreErrorCode::Corruption,
            message: message.into(),
            source: None,
        }
    }

    /// Returns the error code
    pub fn code(&self) -> StoreErrorCode {
        self.code
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the severity
    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    /// Returns whether this error is fatal
    pub fn is_fatal(&self) -> bool {
        matches!(self.severity(), Severity::Fatal)
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}: {}", self.severity(), self.code, self.message)?;
        if let Some(source) = &self.source {
            write!(f, " ({})", source)?;
        }
        Ok(())
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source.as_ref().map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;
