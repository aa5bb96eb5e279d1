//! File-backed collection store
//!
//! `find` and `insert` are the only primitives. Both re-read the collection
//! file on every call; `insert` rewrites the whole file (full replace, not a
//! patch) and fsyncs before returning.
//!
//! Two overlapping read-modify-write spans on the same collection would
//! silently lose the first writer's record, so each collection has a lock
//! held for the entire span.

use std::collections::HashMap;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use serde_json::Value;

use super::errors::{StoreError, StoreResult};
use super::id::RecordIdGenerator;
use super::paths::{collection_path, ensure_collection};

/// One loosely-typed collection record: arbitrary fields plus an `id`.
pub type Record = serde_json::Map<String, Value>;

/// File-backed store of named collections.
///
/// The base directory is the sole source of truth; the store keeps no
/// record cache between operations.
pub struct CollectionStore {
    base_dir: PathBuf,
    ids: RecordIdGenerator,
    locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl CollectionStore {
    /// Creates a store rooted at the given base directory.
    ///
    /// The directory itself is created lazily on the first write.
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
            ids: RecordIdGenerator::new(),
            locks: Mutex::new(HashMap::new()),
        }
    }

    /// Returns the base directory collections live under.
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Reads every record of the named collection.
    ///
    /// A collection that has never been touched is created empty and an
    /// empty sequence is returned.
    ///
    /// # Errors
    ///
    /// Returns `EVENTDB_STORE_INVALID_NAME` for a rejected name,
    /// `EVENTDB_STORE_IO_ERROR` when the file cannot be read, and
    /// `EVENTDB_STORE_CORRUPT` (fatal) when the stored content is not a
    /// JSON array of objects. Corruption is never reported as empty.
    pub fn find(&self, collection: &str) -> StoreResult<Vec<Record>> {
        let path = collection_path(&self.base_dir, collection)?;
        let lock = self.collection_lock(collection);
        let _guard = hold(&lock);

        ensure_collection(collection, &path)?;
        self.read_records(collection, &path)
    }

    /// Appends one record to the named collection and returns it, with its
    /// freshly assigned `id`.
    ///
    /// The full sequence is read, extended, and written back as a whole-file
    /// replace. The collection lock is held across the entire span.
    ///
    /// # Errors
    ///
    /// Same taxonomy as [`find`](Self::find), plus `EVENTDB_STORE_IO_ERROR`
    /// when the rewrite fails.
    pub fn insert(&self, collection: &str, fields: Record) -> StoreResult<Record> {
        let path = collection_path(&self.base_dir, collection)?;
        let lock = self.collection_lock(collection);
        let _guard = hold(&lock);

        ensure_collection(collection, &path)?;
        let mut records = self.read_records(collection, &path)?;

        let mut record = Record::new();
        record.insert("id".to_string(), Value::from(self.ids.next_id()));
        // Caller fields land after the id; a caller-supplied "id" wins,
        // matching the legacy insert shape.
        for (field, value) in fields {
            record.insert(field, value);
        }

        records.push(record.clone());
        self.write_records(collection, &path, &records)?;

        tracing::debug!(collection, "record inserted");
        Ok(record)
    }

    /// Returns the lock guarding the named collection, creating it on
    /// first touch.
    fn collection_lock(&self, collection: &str) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().unwrap_or_else(|e| e.into_inner());
        locks
            .entry(collection.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }

    fn read_records(&self, collection: &str, path: &Path) -> StoreResult<Vec<Record>> {
        let content = fs::read_to_string(path).map_err(|e| {
            StoreError::io_error(
                collection,
                format!("failed to read collection file {}", path.display()),
                e,
            )
        })?;

        serde_json::from_str(&content).map_err(|e| {
            StoreError::corrupt(
                collection,
                format!("collection file is not a JSON array of records: {}", e),
            )
        })
    }

    fn write_records(&self, collection: &str, path: &Path, records: &[Record]) -> StoreResult<()> {
        let content = serde_json::to_string(records).map_err(|e| {
            StoreError::io_error_no_source(
                collection,
                format!("failed to encode collection: {}", e),
            )
        })?;

        let mut file = File::create(path).map_err(|e| {
            StoreError::io_error(
                collection,
                format!("failed to open collection file {}", path.display()),
                e,
            )
        })?;

        file.write_all(content.as_bytes()).map_err(|e| {
            StoreError::io_error(
                collection,
                format!("failed to write collection file {}", path.display()),
                e,
            )
        })?;

        file.sync_all().map_err(|e| {
            StoreError::io_error(
                collection,
                format!("fsync failed for collection file {}", path.display()),
                e,
            )
        })
    }
}

/// Acquires a collection lock, recovering the guard from a poisoned mutex.
fn hold(lock: &Mutex<()>) -> MutexGuard<'_, ()> {
    lock.lock().unwrap_or_else(|e| e.into_inner())
}
