//! Router assembly for the election HTTP API.
//!
//! [`build_router`] wires all handler functions to their routes with
//! CORS and tracing middleware layers.

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Builds the complete axum router with all API routes.
///
/// Routes use axum 0.8 `/{param}` path syntax. Unmatched paths and
/// unsupported methods on matched paths both answer 404 with an empty body.
/// CORS is permissive (the front end may be served from another origin).
pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Candidates
        .route("/api/candidates", get(handlers::candidates::list_candidates))
        .route("/api/candidate", post(handlers::candidates::create_candidate))
        .route(
            "/api/candidate/{id}",
            get(handlers::candidates::get_candidate)
                .put(handlers::candidates::update_candidate_party)
                .delete(handlers::candidates::delete_candidate),
        )
        // Parties
        .route("/api/parties", get(handlers::parties::list_parties))
        .route(
            "/api/party/{id}",
            get(handlers::parties::get_party).delete(handlers::parties::delete_party),
        )
        .fallback(handlers::not_found)
        .method_not_allowed_fallback(handlers::not_found)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
