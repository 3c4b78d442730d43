//! Shared response envelope types for API handlers.
//!
//! Successful responses use a `{ "data": ..., "message": ... }` envelope.
//! Use [`DataResponse`] instead of ad-hoc `serde_json::json!` bodies to get
//! compile-time type safety and consistent serialization.

use serde::Serialize;
use utoipa::ToSchema;

/// Standard `{ "data": T, "message": "..." }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse::new(question, "Successfully retrieved the question.")))
/// ```
#[derive(Debug, Serialize, ToSchema)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
    pub message: String,
}

impl<T: Serialize> DataResponse<T> {
    pub fn new(data: T, message: impl Into<String>) -> Self {
        Self {
            data,
            message: message.into(),
        }
    }
}

/// Body-less confirmation, e.g. after a delete.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
