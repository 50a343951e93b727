//! Party handlers (list, get, delete).

use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::Json;
use election_storage::{ElectionStore, PartyId};

use crate::error::ApiError;
use crate::schema::common::{DeleteResponse, ListResponse, RowResponse};
use crate::schema::parties::PartyView;
use crate::state::AppState;

/// Lists all parties.
///
/// `GET /api/parties`
pub async fn list_parties(
    State(state): State<AppState>,
) -> Result<Json<ListResponse<PartyView>>, ApiError> {
    let store = state.store.lock().await;
    let parties = store.list_parties().map_err(ApiError::internal)?;
    Ok(Json(ListResponse::success(
        parties.into_iter().map(PartyView::from).collect(),
    )))
}

/// Fetches one party; `data` is null when no party has the id. A
/// non-integer `id` is rejected with 400.
///
/// `GET /api/party/{id}`
pub async fn get_party(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<RowResponse<PartyView>>, ApiError> {
    let Path(id) = path?;
    let store = state.store.lock().await;
    let party = store.get_party(PartyId(id))?;
    Ok(Json(RowResponse::success(party.map(PartyView::from))))
}

/// Deletes a party. Candidates referencing it are left untouched.
///
/// `changes` is 0 when no party has the id; a non-integer `id` is rejected
/// with 400 instead.
///
/// `DELETE /api/party/{id}`
pub async fn delete_party(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<DeleteResponse>, ApiError> {
    let Path(id) = path?;
    let mut store = state.store.lock().await;
    let changes = store.delete_party(PartyId(id))?;
    Ok(Json(DeleteResponse::deleted(changes)))
}
