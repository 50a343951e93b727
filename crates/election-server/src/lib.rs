//! HTTP/JSON API server for the election data set.
//!
//! Exposes list/get/create/update/delete endpoints for candidates and
//! list/get/delete endpoints for parties. This crate contains the request
//! validation, body extraction, response schema, error mapping, and route
//! definitions; persistence lives in `election-storage`.

pub mod config;
pub mod error;
pub mod extract;
pub mod handlers;
pub mod router;
pub mod schema;
pub mod state;
pub mod validate;
