//! Body extractors.

use axum::extract::FromRequest;

use crate::error::AppError;

/// `axum::Json` with its rejection routed through [`AppError`].
///
/// A missing `content-type`, malformed JSON, or a body of the wrong shape
/// comes back as a 400 `VALIDATION_ERROR` in the `{error, code}` envelope
/// instead of axum's plain-text rejection.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ValidJson<T>(pub T);
