//! Event schema subsystem for eventdb
//!
//! Defines the shape of an event record and validates untrusted input
//! against it. Validation is fail-closed: a batch containing one invalid
//! record is rejected as a whole, never partially surfaced.
//!
//! # Design Principles
//!
//! - Explicit ordered field rules (no runtime reflection)
//! - Every violated field is reported, not just the first
//! - Validated values are trimmed where the rule says so, otherwise unmutated
//! - Validation is deterministic

mod errors;
mod event;
mod validator;

pub use errors::{FieldViolation, SchemaResult, ValidationError};
pub use event::{Event, EVENT_ID_MIN_LEN, EVENT_ID_PREFIX, EVENT_IMAGE_PREFIX};
pub use validator::EventValidator;
