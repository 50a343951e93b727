//! Candidate handlers (list, get, create, update affiliation, delete).

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::Json;
use election_storage::{CandidateId, ElectionStore};

use crate::error::ApiError;
use crate::extract::RecordBody;
use crate::schema::candidates::{
    self, CandidateView, CreateCandidateResponse, UpdateAffiliationResponse, AFFILIATION_FIELDS,
    CREATE_FIELDS,
};
use crate::schema::common::{DeleteResponse, ListResponse, RowResponse, SUCCESS};
use crate::state::AppState;
use crate::validate::missing_fields;

/// Lists all candidates with their party names.
///
/// `GET /api/candidates`
pub async fn list_candidates(
    State(state): State<AppState>,
) -> Result<Json<ListResponse<CandidateView>>, ApiError> {
    let store = state.store.lock().await;
    let candidates = store.list_candidates().map_err(ApiError::internal)?;
    Ok(Json(ListResponse::success(
        candidates.into_iter().map(CandidateView::from).collect(),
    )))
}

/// Fetches one candidate; `data` is null when no candidate has the id.
///
/// An `id` that is not an integer is rejected with 400 before the store is
/// queried.
///
/// `GET /api/candidate/{id}`
pub async fn get_candidate(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<RowResponse<CandidateView>>, ApiError> {
    let Path(id) = path?;
    let store = state.store.lock().await;
    let candidate = store.get_candidate(CandidateId(id))?;
    Ok(Json(RowResponse::success(candidate.map(CandidateView::from))))
}

/// Creates a candidate with no party.
///
/// `POST /api/candidate`
pub async fn create_candidate(
    State(state): State<AppState>,
    RecordBody(body): RecordBody,
) -> Result<Json<CreateCandidateResponse>, ApiError> {
    if let Some(problems) = missing_fields(&body, CREATE_FIELDS) {
        return Err(ApiError::Validation(problems));
    }
    let candidate = candidates::new_candidate(&body)?;

    let mut store = state.store.lock().await;
    let id = store.create_candidate(&candidate)?;
    tracing::debug!(%id, "candidate created");

    Ok(Json(CreateCandidateResponse {
        message: SUCCESS,
        data: body,
        id,
    }))
}

/// Sets a candidate's party. The party is not required to exist.
///
/// A non-integer `id` is rejected with 400.
///
/// `PUT /api/candidate/{id}`
pub async fn update_candidate_party(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    RecordBody(body): RecordBody,
) -> Result<Json<UpdateAffiliationResponse>, ApiError> {
    let Path(id) = path?;
    if let Some(problems) = missing_fields(&body, AFFILIATION_FIELDS) {
        return Err(ApiError::Validation(problems));
    }
    let party_id = candidates::party_id(&body)?;

    let mut store = state.store.lock().await;
    let changes = store.set_candidate_party(CandidateId(id), party_id)?;

    Ok(Json(UpdateAffiliationResponse {
        message: SUCCESS,
        data: body,
        changes,
    }))
}

/// Deletes a candidate. `changes` is 0 when no candidate has the id; a
/// non-integer `id` is rejected with 400 instead.
///
/// `DELETE /api/candidate/{id}`
pub async fn delete_candidate(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let Path(id) = path?;
    let mut store = state.store.lock().await;
    let changes = store.delete_candidate(CandidateId(id))?;
    Ok(Json(DeleteResponse::deleted(changes)))
}
