//! HTTP handler modules for the election API.
//!
//! Each handler extracts its inputs, runs the required-field check for
//! writes, makes exactly one store call under the store lock, and shapes the
//! JSON response.

use axum::http::StatusCode;

pub mod candidates;
pub mod parties;

/// Catch-all for unmatched paths and methods: 404 with an empty body.
pub async fn not_found() -> StatusCode {
    StatusCode::NOT_FOUND
}
