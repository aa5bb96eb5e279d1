//! Collection store subsystem for eventdb
//!
//! A named collection is one JSON array file under an explicitly injected
//! base directory. The store exposes exactly two primitives:
//!
//! - `find`: read the whole collection (creating it empty on first touch)
//! - `insert`: append one record and rewrite the whole file
//!
//! There is no update or delete; callers compose "update" as find +
//! re-insert. Every call re-reads from disk (no in-memory cache), so the
//! caller always observes the latest committed state.
//!
//! # Invariants Enforced
//!
//! - Malformed stored JSON is a fatal corruption error, never an empty read
//! - Writes are whole-file replace, serialized per collection by a lock
//!   (two overlapping read-modify-write spans would otherwise lose the
//!   first writer's record)
//! - Record ids are time-derived and strictly increasing per store

mod errors;
mod id;
mod paths;
mod store;

pub use errors::{Severity, StoreError, StoreErrorCode, StoreResult};
pub use id::RecordIdGenerator;
pub use store::{CollectionStore, Record};
