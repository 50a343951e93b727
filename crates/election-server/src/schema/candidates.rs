//! Candidate request/response types.
//!
//! Write bodies arrive as loose records (JSON or form data). After the
//! required-field check passes, the record is converted into typed column
//! values here; the received record is echoed back unchanged as `data`.

use election_storage::{Candidate, CandidateId, NewCandidate, PartyId};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::ApiError;

/// Fields required by `POST /api/candidate`.
pub const CREATE_FIELDS: &[&str] = &["first_name", "last_name", "industry_connected"];

/// Fields required by `PUT /api/candidate/{id}`.
pub const AFFILIATION_FIELDS: &[&str] = &["party_id"];

/// A candidate as returned by the API, joined with its party name.
#[derive(Debug, Clone, Serialize)]
pub struct CandidateView {
    pub id: CandidateId,
    pub first_name: String,
    pub last_name: String,
    pub industry_connected: i64,
    pub party_id: Option<PartyId>,
    pub party_name: Option<String>,
}

impl From<Candidate> for CandidateView {
    fn from(candidate: Candidate) -> Self {
        CandidateView {
            id: candidate.id,
            first_name: candidate.first_name,
            last_name: candidate.last_name,
            industry_connected: candidate.industry_connected,
            party_id: candidate.party_id,
            party_name: candidate.party_name,
        }
    }
}

/// Response from creating a candidate.
#[derive(Debug, Clone, Serialize)]
pub struct CreateCandidateResponse {
    pub message: &'static str,
    /// The request body as received.
    pub data: Map<String, Value>,
    /// The generated candidate id.
    pub id: CandidateId,
}

/// Response from updating a candidate's party.
#[derive(Debug, Clone, Serialize)]
pub struct UpdateAffiliationResponse {
    pub message: &'static str,
    /// The request body as received.
    pub data: Map<String, Value>,
    /// 1 if the candidate existed, 0 otherwise.
    pub changes: usize,
}

/// Converts a validated create record into insertable column values.
pub fn new_candidate(record: &Map<String, Value>) -> Result<NewCandidate, ApiError> {
    Ok(NewCandidate {
        first_name: text_field(record, "first_name")?,
        last_name: text_field(record, "last_name")?,
        industry_connected: flag_field(record, "industry_connected")?,
    })
}

/// Extracts the party id from a validated affiliation record.
pub fn party_id(record: &Map<String, Value>) -> Result<PartyId, ApiError> {
    integer_field(record, "party_id").map(PartyId)
}

fn text_field(record: &Map<String, Value>, field: &str) -> Result<String, ApiError> {
    match record.get(field) {
        Some(Value::String(s)) => Ok(s.clone()),
        Some(value @ (Value::Number(_) | Value::Bool(_))) => Ok(value.to_string()),
        _ => Err(invalid(field, "a string")),
    }
}

fn flag_field(record: &Map<String, Value>, field: &str) -> Result<i64, ApiError> {
    match record.get(field) {
        Some(Value::Bool(b)) => Ok(i64::from(*b)),
        _ => integer_field(record, field),
    }
}

fn integer_field(record: &Map<String, Value>, field: &str) -> Result<i64, ApiError> {
    let parsed = match record.get(field) {
        Some(Value::Number(n)) => n.as_i64(),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    };
    parsed.ok_or_else(|| invalid(field, "an integer"))
}

fn invalid(field: &str, expected: &str) -> ApiError {
    ApiError::BadRequest(format!("{field} must be {expected}"))
}
