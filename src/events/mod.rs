//! Remote event repository subsystem for eventdb
//!
//! Fetches the full event dataset from a configured remote JSON endpoint,
//! reshapes the keyed map into records (the map key becomes the record id),
//! validates every record through the schema subsystem, and answers three
//! query patterns: all events, one event by id, events in a calendar month.
//!
//! Every query re-fetches and re-validates the whole dataset. There is no
//! cache; adding one would need its own invalidation contract.

mod config;
mod errors;
mod repository;

pub use config::{RemoteConfig, DEFAULT_FETCH_TIMEOUT, REMOTE_URI_ENV};
pub use errors::{EventsError, EventsResult};
pub use repository::{flatten_events, EventRepository};
