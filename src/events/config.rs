//! Remote repository configuration
//!
//! The remote base URI comes from a single environment variable, read on
//! first use; its absence is a configuration error, not a silent default.
//! The fetch timeout bounds every request (the upstream source had none).

use std::env;
use std::time::Duration;

use super::errors::{EventsError, EventsResult};

/// Environment variable holding the remote base URI.
pub const REMOTE_URI_ENV: &str = "EVENTDB_REMOTE_URI";

/// Default bound on a single fetch.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(10);

/// Configuration for the remote event repository.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    base_uri: String,
    fetch_timeout: Duration,
}

impl RemoteConfig {
    /// Creates a configuration with the default fetch timeout.
    pub fn new(base_uri: impl Into<String>) -> Self {
        Self {
            base_uri: base_uri.into(),
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
        }
    }

    /// Reads the base URI from [`REMOTE_URI_ENV`].
    ///
    /// # Errors
    ///
    /// Returns `EventsError::Config` naming the variable when it is unset,
    /// empty, or not valid Unicode.
    pub fn from_env() -> EventsResult<Self> {
        match env::var(REMOTE_URI_ENV) {
            Ok(uri) if !uri.trim().is_empty() => Ok(Self::new(uri)),
            _ => Err(EventsError::Config(REMOTE_URI_ENV)),
        }
    }

    /// Replaces the fetch timeout.
    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    /// Returns the remote base URI.
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the bound on a single fetch.
    pub fn fetch_timeout(&self) -> Duration {
        self.fetch_timeout
    }
}
