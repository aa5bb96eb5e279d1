//! Remote event repository errors
//!
//! Network failures, bad payloads, and validation failures all abort the
//! whole operation; a lookup that simply finds nothing is `Ok(None)`, not
//! an error. Nothing here retries.

use std::time::Duration;

use thiserror::Error;

use crate::schema::ValidationError;

/// Result type for remote event operations
pub type EventsResult<T> = Result<T, EventsError>;

/// Remote event repository errors
#[derive(Debug, Error)]
pub enum EventsError {
    /// Required configuration is absent
    #[error("configuration error: environment variable {0} is not set")]
    Config(&'static str),

    /// The HTTP client could not be constructed
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The request failed in transit
    #[error("request to {uri} failed: {source}")]
    Request {
        uri: String,
        #[source]
        source: reqwest::Error,
    },

    /// The request exceeded the bounded fetch timeout
    #[error("request to {uri} timed out after {timeout:?}")]
    Timeout { uri: String, timeout: Duration },

    /// The remote answered with a non-success status
    #[error("unexpected status {status} from {uri}")]
    Status { uri: String, status: u16 },

    /// The response body was not the expected keyed event map
    #[error("malformed events payload from {uri}: {reason}")]
    Payload { uri: String, reason: String },

    /// A record in the batch violated the event schema (fails the whole batch)
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl EventsError {
    /// Returns whether the failure is transient: retrying the same request
    /// later could succeed without any state change on our side.
    pub fn is_transient(&self) -> bool {
        matches!(self, EventsError::Request { .. } | EventsError::Timeout { .. })
    }
}
