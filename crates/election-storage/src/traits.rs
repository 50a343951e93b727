//! The [`ElectionStore`] trait defining the storage contract for candidates
//! and parties.
//!
//! Lookups by id return `Ok(None)` and writes by id return `Ok(0)` when no row
//! matches; a missing row is never an error at this layer.

use crate::error::StorageError;
use crate::types::{Candidate, CandidateId, NewCandidate, Party, PartyId};

/// The storage contract for the election data set.
///
/// The trait is synchronous; the server serialises access to a single
/// connection.
pub trait ElectionStore {
    /// Checks that the store is open and its schema is readable.
    fn verify(&self) -> Result<(), StorageError>;

    // -------------------------------------------------------------------
    // Candidates
    // -------------------------------------------------------------------

    /// Lists every candidate, joined with its party name, ordered by id.
    fn list_candidates(&self) -> Result<Vec<Candidate>, StorageError>;

    /// Fetches one candidate joined with its party name.
    fn get_candidate(&self, id: CandidateId) -> Result<Option<Candidate>, StorageError>;

    /// Inserts a candidate with no party and returns its generated id.
    fn create_candidate(&mut self, candidate: &NewCandidate) -> Result<CandidateId, StorageError>;

    /// Sets a candidate's party affiliation.
    ///
    /// Returns the number of rows changed. The party is not checked for
    /// existence.
    fn set_candidate_party(
        &mut self,
        id: CandidateId,
        party: PartyId,
    ) -> Result<usize, StorageError>;

    /// Deletes a candidate, returning the number of rows removed.
    fn delete_candidate(&mut self, id: CandidateId) -> Result<usize, StorageError>;

    // -------------------------------------------------------------------
    // Parties
    // -------------------------------------------------------------------

    /// Lists every party ordered by id.
    fn list_parties(&self) -> Result<Vec<Party>, StorageError>;

    /// Fetches one party.
    fn get_party(&self, id: PartyId) -> Result<Option<Party>, StorageError>;

    /// Inserts a party and returns its generated id.
    fn create_party(&mut self, name: &str) -> Result<PartyId, StorageError>;

    /// Deletes a party, returning the number of rows removed.
    ///
    /// Candidates that reference the party keep their dangling `party_id`.
    fn delete_party(&mut self, id: PartyId) -> Result<usize, StorageError>;
}
