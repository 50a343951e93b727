//! Row types for candidates and parties.
//!
//! Ids are storage-layer concerns: rows gain one when inserted. The inner
//! `i64` aligns with SQLite's `INTEGER PRIMARY KEY`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a stored candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CandidateId(pub i64);

impl fmt::Display for CandidateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CandidateId({})", self.0)
    }
}

/// Identifier of a stored party.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PartyId(pub i64);

impl fmt::Display for PartyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PartyId({})", self.0)
    }
}

/// A candidate row joined with the name of its party.
///
/// `party_name` is `None` both when `party_id` is null and when it points at
/// a party that no longer exists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub id: CandidateId,
    pub first_name: String,
    pub last_name: String,
    /// 0/1 flag.
    pub industry_connected: i64,
    pub party_id: Option<PartyId>,
    pub party_name: Option<String>,
}

/// Column values for inserting a candidate.
///
/// Party affiliation is not part of creation; it is set afterwards through
/// [`crate::ElectionStore::set_candidate_party`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCandidate {
    pub first_name: String,
    pub last_name: String,
    pub industry_connected: i64,
}

/// A party row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Party {
    pub id: PartyId,
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn candidate_serializes_flat_ids() {
        let candidate = Candidate {
            id: CandidateId(1),
            first_name: "Ronald".to_string(),
            last_name: "Firbank".to_string(),
            industry_connected: 1,
            party_id: Some(PartyId(99)),
            party_name: None,
        };
        assert_eq!(
            serde_json::to_value(&candidate).unwrap(),
            json!({
                "id": 1,
                "first_name": "Ronald",
                "last_name": "Firbank",
                "industry_connected": 1,
                "party_id": 99,
                "party_name": null
            })
        );
    }

    #[test]
    fn party_serializes_flat_id() {
        let party = Party {
            id: PartyId(2),
            name: "Whig".to_string(),
        };
        assert_eq!(serde_json::to_value(&party).unwrap(), json!({ "id": 2, "name": "Whig" }));
    }

    #[test]
    fn id_display() {
        assert_eq!(CandidateId(7).to_string(), "CandidateId(7)");
        assert_eq!(PartyId(3).to_string(), "PartyId(3)");
    }
}
