//! Record id generation
//!
//! Ids are derived from the wall clock (milliseconds since the Unix epoch)
//! and bumped past the previously issued id when the clock has not advanced,
//! so a single generator never issues the same id twice even for inserts
//! landing within one millisecond.

use std::sync::Mutex;

use chrono::Utc;

/// Issues time-derived, strictly increasing record ids.
pub struct RecordIdGenerator {
    last: Mutex<i64>,
}

impl RecordIdGenerator {
    /// Creates a generator with no issued ids.
    pub fn new() -> Self {
        Self { last: Mutex::new(0) }
    }

    /// Returns the next id: the current epoch milliseconds, or the previous
    /// id plus one when the clock has not moved since the last call.
    pub fn next_id(&self) -> i64 {
        let now = Utc::now().timestamp_millis();
        let mut last = self.last.lock().unwrap_or_else(|e| e.into_inner());
        *last = now.max(*last + 1);
        *last
    }
}

impl Default for RecordIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}
