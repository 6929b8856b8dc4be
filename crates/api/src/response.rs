//! Shared response envelope types for API handlers.
//!
//! All API responses use a `{ "data": ... }` envelope; delete
//! acknowledgments use `{ "message": ... }`. Use these instead of ad-hoc
//! `serde_json::json!` literals for compile-time type safety.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Standard `{ "message": ... }` acknowledgment, returned by delete
/// endpoints and logout.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
