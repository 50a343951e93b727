//! Application state holding the shared store connection.
//!
//! [`AppState`] wraps the store in `Arc<tokio::sync::Mutex<>>` for use with
//! axum handlers. `SqliteStore` contains a `rusqlite::Connection`, which is
//! `!Sync`, so it cannot sit behind an `RwLock`; handlers await the mutex
//! without blocking the tokio runtime.

use std::sync::Arc;

use election_storage::{ElectionStore, SqliteStore};

use crate::error::ApiError;

/// Shared application state for the HTTP server.
///
/// The store is opened once and handed to the router at construction; there
/// is no global connection.
#[derive(Clone)]
pub struct AppState {
    /// The shared store (async Mutex -- non-blocking await).
    pub store: Arc<tokio::sync::Mutex<SqliteStore>>,
}

impl AppState {
    /// Opens the SQLite database at `db_path` and verifies it is readable.
    pub fn new(db_path: &str) -> Result<Self, ApiError> {
        let store = SqliteStore::new(db_path).map_err(ApiError::internal)?;
        Self::ready(store)
    }

    /// Creates a new `AppState` with a private in-memory database (for testing).
    pub fn in_memory() -> Result<Self, ApiError> {
        let store = SqliteStore::in_memory().map_err(ApiError::internal)?;
        Self::ready(store)
    }

    fn ready(store: SqliteStore) -> Result<Self, ApiError> {
        store.verify().map_err(ApiError::internal)?;
        Ok(AppState {
            store: Arc::new(tokio::sync::Mutex::new(store)),
        })
    }
}
