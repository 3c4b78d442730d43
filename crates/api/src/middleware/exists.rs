//! Existence gates for path-addressed entities.
//!
//! Each extractor reads the `{id}` path segment and confirms the row exists
//! before the handler body runs. A handler that takes one of these cannot
//! execute against a missing entity:
//!
//! ```ignore
//! async fn get_by_id(State(state): State<AppState>, ExistingQuestion(id): ExistingQuestion) { ... }
//! ```
//!
//! Missing rows reject with 404; storage failures reject with 500.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use qa_core::error::CoreError;
use qa_core::types::DbId;
use qa_db::repositories::{AnswerRepo, QuestionRepo};

use crate::error::AppError;
use crate::state::AppState;

/// The `{id}` of a question that exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExistingQuestion(pub DbId);

/// The `{id}` of an answer that exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExistingAnswer(pub DbId);

impl FromRequestParts<AppState> for ExistingQuestion {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let id = path_id(parts, state).await?;
        if !QuestionRepo::exists(&state.pool, id).await? {
            return Err(AppError::Core(CoreError::NotFound {
                entity: "Question",
                id,
            }));
        }
        Ok(ExistingQuestion(id))
    }
}

impl FromRequestParts<AppState> for ExistingAnswer {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let id = path_id(parts, state).await?;
        if !AnswerRepo::exists(&state.pool, id).await? {
            return Err(AppError::Core(CoreError::NotFound {
                entity: "Answer",
                id,
            }));
        }
        Ok(ExistingAnswer(id))
    }
}

/// Parse the single `{id}` path parameter.
async fn path_id(parts: &mut Parts, state: &AppState) -> Result<DbId, AppError> {
    let Path(id) = Path::<DbId>::from_request_parts(parts, state)
        .await
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
    Ok(id)
}
