//! Remote event repository
//!
//! The remote source is a JSON object keyed by event id:
//!
//! ```text
//! {
//!   "e1": { "title": ..., "date": ..., ... },
//!   "e2": { ... }
//! }
//! ```
//!
//! `get_all` flattens that map into a list (each key becomes the record's
//! `id`), validates every record, and returns the full sequence or fails.
//! `get_by_id` and `get_filtered` are linear passes over `get_all`; result
//! order always follows the remote map's key order.

use chrono::{Datelike, NaiveDate};
use serde_json::{Map, Value};

use crate::schema::{Event, EventValidator};

use super::config::RemoteConfig;
use super::errors::{EventsError, EventsResult};

/// Path of the dataset below the configured base URI.
const EVENTS_PATH: &str = "/events.json";

/// Schema-validated access to the remote event dataset.
pub struct EventRepository {
    client: reqwest::Client,
    base_uri: String,
    fetch_timeout: std::time::Duration,
    validator: EventValidator,
}

impl EventRepository {
    /// Creates a repository from an explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns `EventsError::Client` when the HTTP client cannot be built.
    pub fn new(config: RemoteConfig) -> EventsResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.fetch_timeout())
            .build()
            .map_err(EventsError::Client)?;

        Ok(Self {
            client,
            base_uri: config.base_uri().to_string(),
            fetch_timeout: config.fetch_timeout(),
            validator: EventValidator::new(),
        })
    }

    /// Creates a repository configured from the environment.
    ///
    /// # Errors
    ///
    /// Returns `EventsError::Config` when the base URI variable is unset.
    pub fn from_env() -> EventsResult<Self> {
        Self::new(RemoteConfig::from_env()?)
    }

    /// Fetches, reshapes, and validates the full event dataset.
    ///
    /// # Errors
    ///
    /// Fails on transport errors, non-success status, a payload that is not
    /// a keyed object, or any record violating the event schema. One bad
    /// record fails the whole batch; partial results are never returned.
    pub async fn get_all(&self) -> EventsResult<Vec<Event>> {
        let uri = format!("{}{}", self.base_uri, EVENTS_PATH);
        tracing::debug!(%uri, "fetching events");

        let response = self
            .client
            .get(&uri)
            .send()
            .await
            .map_err(|e| self.fetch_error(&uri, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(EventsError::Status {
                uri,
                status: status.as_u16(),
            });
        }

        let data: Value = response
            .json()
            .await
            .map_err(|e| self.fetch_error(&uri, e))?;

        let map = match data.as_object() {
            Some(map) => map,
            None => {
                return Err(EventsError::Payload {
                    uri,
                    reason: "expected a JSON object keyed by event id".to_string(),
                })
            }
        };

        let raw_events = flatten_events(map);
        let mut events = Vec::with_capacity(raw_events.len());
        for raw in &raw_events {
            events.push(self.validator.validate(raw)?);
        }

        tracing::debug!(count = events.len(), "events validated");
        Ok(events)
    }

    /// Returns the event with the given id, or `None` when no event
    /// matches. Absence is not an error.
    pub async fn get_by_id(&self, id: &str) -> EventsResult<Option<Event>> {
        let events = self.get_all().await?;
        Ok(events.into_iter().find(|event| event.id == id))
    }

    /// Returns the events whose date falls in the given calendar year and
    /// 1-based month, in dataset order.
    pub async fn get_filtered(&self, year: i32, month: u32) -> EventsResult<Vec<Event>> {
        let events = self.get_all().await?;

        let month0 = match month.checked_sub(1) {
            Some(month0) => month0,
            None => return Ok(Vec::new()),
        };

        Ok(events
            .into_iter()
            .filter(|event| falls_in_month(&event.date, year, month0))
            .collect())
    }

    /// Maps a transport-level failure onto the error taxonomy.
    fn fetch_error(&self, uri: &str, error: reqwest::Error) -> EventsError {
        if error.is_timeout() {
            EventsError::Timeout {
                uri: uri.to_string(),
                timeout: self.fetch_timeout,
            }
        } else if error.is_decode() {
            EventsError::Payload {
                uri: uri.to_string(),
                reason: error.to_string(),
            }
        } else {
            EventsError::Request {
                uri: uri.to_string(),
                source: error,
            }
        }
    }
}

/// Flattens the remote keyed map into a list of raw records.
///
/// Each map key becomes the record's `id`; the keyed object's own fields
/// follow (an inner `id` field, if present, wins; the legacy reshaping
/// spread the object over the key). Key order is preserved.
pub fn flatten_events(data: &Map<String, Value>) -> Vec<Value> {
    data.iter()
        .map(|(key, value)| {
            let mut record = Map::new();
            record.insert("id".to_string(), Value::String(key.clone()));
            if let Some(fields) = value.as_object() {
                for (field, v) in fields {
                    record.insert(field.clone(), v.clone());
                }
            }
            Value::Object(record)
        })
        .collect()
}

/// Whether a `YYYY-MM-DD`-leading date string falls in the given year and
/// 0-based month. Unparseable dates never match.
fn falls_in_month(date: &str, year: i32, month0: u32) -> bool {
    let parsed = date
        .get(..10)
        .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok());

    match parsed {
        Some(d) => d.year() == year && d.month0() == month0,
        None => false,
    }
}
