//! Collection store error types
//!
//! Error codes:
//! - EVENTDB_STORE_IO_ERROR (ERROR severity): filesystem unreadable/unwritable
//! - EVENTDB_STORE_CORRUPT (FATAL severity): stored collection JSON is malformed
//! - EVENTDB_STORE_INVALID_NAME (ERROR severity): collection name rejected
//!
//! A missing collection is never an error; it is created empty on first
//! touch. Corruption is never downgraded to an empty collection.

use std::fmt;
use std::io;

/// Severity levels for store errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Operation fails, caller may continue
    Error,
    /// Stored state is unusable; the caller must stop and surface it
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
    /// Disk I/O failure
    Io,
    /// Stored collection content is not a JSON array of objects
    Corrupt,
    /// Collection name failed validation
    InvalidName,
}

impl StoreErrorCode {
    /// Returns the string code
    pub fn code(&self) -> &'static str {
        match self {
            StoreErrorCode::Io => "EVENTDB_STORE_IO_ERROR",
            StoreErrorCode::Corrupt => "EVENTDB_STORE_CORRUPT",
            StoreErrorCode::InvalidName => "EVENTDB_STORE_INVALID_NAME",
        }
    }

    /// Returns the severity level for this error
    pub fn severity(&self) -> Severity {
        match self {
            StoreErrorCode::Io => Severity::Error,
            StoreErrorCode::Corrupt => Severity::Fatal,
            StoreErrorCode::InvalidName => Severity::Error,
        }
    }
}

impl fmt::Display for StoreErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Store error with collection context.
#[derive(Debug)]
pub struct StoreError {
    /// Error code
    code: StoreErrorCode,
    /// Human-readable message
    message: String,
    /// Collection the operation targeted, if known
    collection: Option<String>,
    /// Underlying I/O error if applicable
    source: Option<io::Error>,
}

impl StoreError {
    /// Create an I/O error for a collection operation
    pub fn io_error(
        collection: impl Into<String>,
        message: impl Into<String>,
        source: io::Error,
    ) -> Self {
        Self {
            code: StoreErrorCode::Io,
            message: message.into(),
            collection: Some(collection.into()),
            source: Some(source),
        }
    }

    /// Create an I/O error without an underlying io::Error
    pub fn io_error_no_source(collection: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: StoreErrorCode::Io,
            message: message.into(),
            collection: Some(collection.into()),
            source: None,
        }
    }

    /// Create a corruption error (FATAL)
    pub fn corrupt(collection: impl Into<String>, reason: impl Into<String>) -> Self {
        Self {
            code: StoreErrorCode::Corrupt,
            message: reason.into(),
            collection: Some(collection.into()),
            source: None,
        }
    }

    /// Create an invalid-name error
    pub fn invalid_name(name: impl Into<String>, reason: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            code: StoreErrorCode::InvalidName,
            message: format!("invalid collection name '{}': {}", name, reason.into()),
            collection: Some(name),
            source: None,
        }
    }

    /// Returns the error code
    pub fn code(&self) -> StoreErrorCode {
        self.code
    }

    /// Returns the severity level
    pub fn severity(&self) -> Severity {
        self.code.severity()
    }

    /// Returns the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Returns the collection the operation targeted
    pub fn collection(&self) -> Option<&str> {
        self.collection.as_deref()
    }

    /// Returns whether this error is fatal
    pub fn is_fatal(&self) -> bool {
        self.severity() == Severity::Fatal
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}: {}",
            self.code.severity(),
            self.code.code(),
            self.message
        )?;
        if let Some(ref collection) = self.collection {
            write!(f, " (collection: {})", collection)?;
        }
        Ok(())
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e as &(dyn std::error::Error + 'static))
    }
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;
