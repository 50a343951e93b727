//! Party response types.
//!
//! Parties are read and deleted through the API but never written, so only
//! the row view lives here.

use election_storage::{Party, PartyId};
use serde::Serialize;

/// A party as returned by the API.
#[derive(Debug, Clone, Serialize)]
pub struct PartyView {
    pub id: PartyId,
    pub name: String,
}

impl From<Party> for PartyView {
    fn from(party: Party) -> Self {
        PartyView {
            id: party.id,
            name: party.name,
        }
    }
}
