//! Storage error types for election-storage.
//!
//! [`StorageError`] wraps the failures the store can surface. Query failures
//! keep the raw SQLite message so callers can pass it through unchanged.

use thiserror::Error;

/// Errors produced by storage operations.
#[derive(Debug, Error)]
pub enum StorageError {
    /// A query failed (constraint violation, malformed SQL, I/O inside SQLite).
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),

    /// Applying the embedded schema failed.
    #[error("migration error: {0}")]
    Migration(String),

    /// Preparing the database location on disk failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
