//! CLI-specific error types
//!
//! CLI errors terminate the process with a non-zero exit; subsystem errors
//! are wrapped with their own message so the code string survives to the
//! output.

use std::fmt;
use std::io;

use crate::events::EventsError;
use crate::store::StoreError;

/// CLI error codes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CliErrorCode {
    /// Command input could not be parsed
    InvalidInput,
    /// Collection store operation failed
    Store,
    /// Remote event operation failed
    Remote,
    /// I/O error (stdout)
    IoError,
    /// Async runtime could not be started
    Runtime,
}

impl CliErrorCode {
    /// Get the error code string
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidInput => "EVENTDB_CLI_INVALID_INPUT",
            Self::Store => "EVENTDB_CLI_STORE_ERROR",
            Self::Remote => "EVENTDB_CLI_REMOTE_ERROR",
            Self::IoError => "EVENTDB_CLI_IO_ERROR",
            Self::Runtime => "EVENTDB_CLI_RUNTIME_ERROR",
        }
    }
}

/// CLI error
#[derive(Debug)]
pub struct CliError {
    code: CliErrorCode,
    message: String,
}

impl CliError {
    /// Create a new CLI error
    pub fn new(code: CliErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    /// Invalid command input
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::InvalidInput, msg)
    }

    /// Runtime startup failure
    pub fn runtime(msg: impl Into<String>) -> Self {
        Self::new(CliErrorCode::Runtime, msg)
    }

    /// Get the error code
    pub fn code(&self) -> &CliErrorCode {
        &self.code
    }

    /// Get the error code string
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.code(), self.message)
    }
}

impl std::error::Error for CliError {}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        Self::new(CliErrorCode::IoError, e.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        Self::new(CliErrorCode::IoError, format!("JSON error: {}", e))
    }
}

impl From<StoreError> for CliError {
    fn from(e: StoreError) -> Self {
        Self::new(CliErrorCode::Store, e.to_string())
    }
}

impl From<EventsError> for CliError {
    fn from(e: EventsError) -> Self {
        Self::new(CliErrorCode::Remote, e.to_string())
    }
}

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;
