//! Vote handlers for questions and answers.
//!
//! Each handler passes the existence gate, appends one vote event, and
//! returns the entity with its recomputed `upvotes` / `downvotes`.

use axum::extract::State;
use axum::Json;
use qa_core::error::CoreError;
use qa_core::types::DbId;
use qa_core::votes::VoteDirection;
use qa_db::models::answer::Answer;
use qa_db::models::question::Question;
use qa_db::models::vote::{AnswerWithVotes, QuestionWithVotes};
use qa_db::repositories::{Votable, VoteRepo};

use crate::error::{AppError, AppResult, ErrorBody};
use crate::middleware::exists::{ExistingAnswer, ExistingQuestion};
use crate::response::DataResponse;
use crate::state::AppState;

/// Record a vote and wrap the resulting tally in the response envelope.
async fn cast<T: Votable>(
    state: &AppState,
    id: DbId,
    direction: VoteDirection,
) -> AppResult<Json<DataResponse<T::WithVotes>>>
where
    T::WithVotes: serde::Serialize,
{
    let row = VoteRepo::cast::<T>(&state.pool, id, direction)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: T::ENTITY,
            id,
        }))?;

    tracing::info!(entity = T::ENTITY, id, vote = direction.value(), "Vote cast");

    let message = format!(
        "Successfully {} the {}.",
        direction.verb(),
        T::ENTITY.to_lowercase()
    );
    Ok(Json(DataResponse::new(row, message)))
}

/// POST /api/v1/questions/{id}/upvote
#[utoipa::path(
    post,
    path = "/api/v1/questions/{id}/upvote",
    tag = "votes",
    params(("id" = i64, Path, description = "Question id")),
    responses(
        (status = 200, description = "Question with its updated tally", body = DataResponse<QuestionWithVotes>),
        (status = 404, description = "No such question", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody),
    )
)]
pub async fn upvote_question(
    State(state): State<AppState>,
    ExistingQuestion(id): ExistingQuestion,
) -> AppResult<Json<DataResponse<QuestionWithVotes>>> {
    cast::<Question>(&state, id, VoteDirection::Up).await
}

/// POST /api/v1/questions/{id}/downvote
#[utoipa::path(
    post,
    path = "/api/v1/questions/{id}/downvote",
    tag = "votes",
    params(("id" = i64, Path, description = "Question id")),
    responses(
        (status = 200, description = "Question with its updated tally", body = DataResponse<QuestionWithVotes>),
        (status = 404, description = "No such question", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody),
    )
)]
pub async fn downvote_question(
    State(state): State<AppState>,
    ExistingQuestion(id): ExistingQuestion,
) -> AppResult<Json<DataResponse<QuestionWithVotes>>> {
    cast::<Question>(&state, id, VoteDirection::Down).await
}

/// POST /api/v1/answers/{id}/upvote
#[utoipa::path(
    post,
    path = "/api/v1/answers/{id}/upvote",
    tag = "votes",
    params(("id" = i64, Path, description = "Answer id")),
    responses(
        (status = 200, description = "Answer with its updated tally", body = DataResponse<AnswerWithVotes>),
        (status = 404, description = "No such answer", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody),
    )
)]
pub async fn upvote_answer(
    State(state): State<AppState>,
    ExistingAnswer(id): ExistingAnswer,
) -> AppResult<Json<DataResponse<AnswerWithVotes>>> {
    cast::<Answer>(&state, id, VoteDirection::Up).await
}

/// POST /api/v1/answers/{id}/downvote
#[utoipa::path(
    post,
    path = "/api/v1/answers/{id}/downvote",
    tag = "votes",
    params(("id" = i64, Path, description = "Answer id")),
    responses(
        (status = 200, description = "Answer with its updated tally", body = DataResponse<AnswerWithVotes>),
        (status = 404, description = "No such answer", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody),
    )
)]
pub async fn downvote_answer(
    State(state): State<AppState>,
    ExistingAnswer(id): ExistingAnswer,
) -> AppResult<Json<DataResponse<AnswerWithVotes>>> {
    cast::<Answer>(&state, id, VoteDirection::Down).await
}
