//! Event record validator
//!
//! Validates one untrusted JSON record against the event schema. Fields are
//! checked in a fixed order (id, title, description, image, location, date,
//! isFeatured); every violated rule is collected, so a failed record reports
//! all of its problems at once.
//!
//! The validator does not mutate its input. String fields other than
//! `description` are trimmed before their constraints run, and the trimmed
//! value is what the resulting [`Event`] carries.

use regex::Regex;
use serde_json::Value;

use super::errors::{FieldViolation, SchemaResult, ValidationError};
use super::event::{Event, EVENT_ID_MIN_LEN, EVENT_ID_PREFIX, EVENT_IMAGE_PREFIX};

/// Unanchored date pattern: the field must contain a `YYYY-MM-DD` shape.
const DATE_PATTERN: &str = r"\d{4}-\d{2}-\d{2}";

/// Validates raw event records into typed [`Event`] values.
pub struct EventValidator {
    date_pattern: Regex,
}

impl EventValidator {
    /// Creates a new validator.
    pub fn new() -> Self {
        let date_pattern = Regex::new(DATE_PATTERN).expect("date pattern is a valid regex");
        Self { date_pattern }
    }

    /// Validates a raw record against the event schema.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` enumerating every violated field when the
    /// record is not an object or any field rule fails. Callers must reject
    /// the whole batch the record came from.
    pub fn validate(&self, raw: &Value) -> SchemaResult<Event> {
        let record = match raw.as_object() {
            Some(record) => record,
            None => {
                return Err(ValidationError::single(
                    "$root",
                    "event record must be a JSON object",
                ))
            }
        };

        let mut violations = Vec::new();

        let id = take_string(record, "id", true, &mut violations);
        if let Some(id) = &id {
            if id.chars().count() < EVENT_ID_MIN_LEN {
                violations.push(FieldViolation::new(
                    "id",
                    "id must be at least two characters",
                ));
            }
            if !id.starts_with(EVENT_ID_PREFIX) {
                violations.push(FieldViolation::new("id", "id must start with e"));
            }
        }

        let title = take_string(record, "title", true, &mut violations);
        if let Some(title) = &title {
            if title.is_empty() {
                violations.push(FieldViolation::new("title", "title cannot be empty"));
            }
        }

        let description = take_string(record, "description", false, &mut violations);

        let image = take_string(record, "image", true, &mut violations);
        if let Some(image) = &image {
            if !image.starts_with(EVENT_IMAGE_PREFIX) {
                violations.push(FieldViolation::new(
                    "image",
                    "path to images must begin with `images`",
                ));
            }
        }

        let location = take_string(record, "location", true, &mut violations);
        if let Some(location) = &location {
            if location.is_empty() {
                violations.push(FieldViolation::new("location", "location cannot be empty"));
            }
        }

        let date = take_string(record, "date", true, &mut violations);
        if let Some(date) = &date {
            if date.is_empty() {
                violations.push(FieldViolation::new("date", "date cannot be empty"));
            }
            if !self.date_pattern.is_match(date) {
                violations.push(FieldViolation::new(
                    "date",
                    "date should be in YYYY-MM-DD format",
                ));
            }
        }

        let is_featured = take_bool(record, "isFeatured", &mut violations);

        match (id, title, description, image, location, date, is_featured) {
            (
                Some(id),
                Some(title),
                Some(description),
                Some(image),
                Some(location),
                Some(date),
                Some(is_featured),
            ) if violations.is_empty() => Ok(Event {
                id,
                title,
                description,
                image,
                location,
                date,
                is_featured,
            }),
            _ => Err(ValidationError::new(violations)),
        }
    }
}

impl Default for EventValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Extracts a string field, recording presence and type violations.
///
/// Returns the (optionally trimmed) value so later rules can run on it.
fn take_string(
    record: &serde_json::Map<String, Value>,
    field: &str,
    trim: bool,
    violations: &mut Vec<FieldViolation>,
) -> Option<String> {
    match record.get(field) {
        None | Some(Value::Null) => {
            violations.push(FieldViolation::new(field, format!("{} is required", field)));
            None
        }
        Some(Value::String(s)) => {
            if trim {
                Some(s.trim().to_string())
            } else {
                Some(s.clone())
            }
        }
        Some(other) => {
            violations.push(FieldViolation::new(
                field,
                format!("{} must be a string, got {}", field, json_type_name(other)),
            ));
            None
        }
    }
}

/// Extracts a boolean field, recording presence and type violations.
fn take_bool(
    record: &serde_json::Map<String, Value>,
    field: &str,
    violations: &mut Vec<FieldViolation>,
) -> Option<bool> {
    match record.get(field) {
        None | Some(Value::Null) => {
            violations.push(FieldViolation::new(field, format!("{} is required", field)));
            None
        }
        Some(Value::Bool(b)) => Some(*b),
        Some(other) => {
            violations.push(FieldViolation::new(
                field,
                format!("{} must be a boolean, got {}", field, json_type_name(other)),
            ));
            None
        }
    }
}

/// Returns the JSON type name for error messages.
fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
