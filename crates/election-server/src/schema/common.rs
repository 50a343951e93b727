//! Response envelopes shared by every resource.
//!
//! Successful bodies always carry a `message`; reads add `data`, deletes add
//! `changes`.

use serde::Serialize;

/// `message` of every successful read or write.
pub const SUCCESS: &str = "success";

/// `message` of a successful delete.
pub const DELETED: &str = "successfully deleted";

/// Envelope for listing routes.
#[derive(Debug, Clone, Serialize)]
pub struct ListResponse<T: Serialize> {
    pub message: &'static str,
    pub data: Vec<T>,
}

impl<T: Serialize> ListResponse<T> {
    pub fn success(data: Vec<T>) -> Self {
        ListResponse {
            message: SUCCESS,
            data,
        }
    }
}

/// Envelope for single-row reads.
///
/// A missing row serializes as `"data": null` rather than an error.
#[derive(Debug, Clone, Serialize)]
pub struct RowResponse<T: Serialize> {
    pub message: &'static str,
    pub data: Option<T>,
}

impl<T: Serialize> RowResponse<T> {
    pub fn success(data: Option<T>) -> Self {
        RowResponse {
            message: SUCCESS,
            data,
        }
    }
}

/// Envelope for deletes. `changes` is 0 when nothing matched.
#[derive(Debug, Clone, Serialize)]
pub struct DeleteResponse {
    pub message: &'static str,
    pub changes: usize,
}

impl DeleteResponse {
    pub fn deleted(changes: usize) -> Self {
        DeleteResponse {
            message: DELETED,
            changes,
        }
    }
}
