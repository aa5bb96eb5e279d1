//! Collection file paths and lazy initialization
//!
//! Each collection lives at `<base_dir>/<name>.json`. Names are validated
//! before touching the filesystem: a collection name is an identifier, not
//! a path, so separators and parent references are rejected.

use std::fs;
use std::path::{Path, PathBuf};

use super::errors::{StoreError, StoreResult};

/// Validates a collection name and returns its file path.
pub(crate) fn collection_path(base_dir: &Path, name: &str) -> StoreResult<PathBuf> {
    validate_name(name)?;
    Ok(base_dir.join(format!("{}.json", name)))
}

/// Ensures the collection file exists, creating it as an empty array.
///
/// Returns `true` when the file was created by this call.
pub(crate) fn ensure_collection(name: &str, path: &Path) -> StoreResult<bool> {
    if path.exists() {
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| {
            StoreError::io_error(
                name,
                format!("failed to create base directory {}", parent.display()),
                e,
            )
        })?;
    }

    fs::write(path, "[]").map_err(|e| {
        StoreError::io_error(
            name,
            format!("failed to initialize collection file {}", path.display()),
            e,
        )
    })?;

    tracing::info!(collection = name, path = %path.display(), "collection initialized");
    Ok(true)
}

/// A collection name must be a bare identifier: non-empty, made of
/// alphanumerics, `-` and `_`.
fn validate_name(name: &str) -> StoreResult<()> {
    if name.is_empty() {
        return Err(StoreError::invalid_name(name, "name is empty"));
    }

    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(StoreError::invalid_name(
            name,
            "only alphanumerics, '-' and '_' are allowed",
        ));
    }

    Ok(())
}
