//! API schema types for request/response definitions.
//!
//! Each sub-module defines the request and response types for one resource.
//! Types use serde derives for JSON serialization.

pub mod candidates;
pub mod common;
pub mod parties;
