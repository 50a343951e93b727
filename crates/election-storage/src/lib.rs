//! Storage layer for the election API.
//!
//! Provides the [`ElectionStore`] trait defining the entity-level contract for
//! candidates and parties, and [`SqliteStore`], the SQLite backend that
//! implements it on top of four thin query families (list, get-one, insert,
//! execute).
//!
//! # Modules
//!
//! - [`error`]: StorageError enum with all failure modes
//! - [`types`]: Candidate, Party and id types
//! - [`traits`]: ElectionStore trait definition
//! - [`schema`]: embedded schema and connection setup
//! - [`sqlite`]: SqliteStore implementation

pub mod error;
pub mod schema;
pub mod sqlite;
pub mod traits;
pub mod types;

// Re-export key types for ergonomic use.
pub use error::StorageError;
pub use sqlite::SqliteStore;
pub use traits::ElectionStore;
pub use types::{Candidate, CandidateId, NewCandidate, Party, PartyId};
