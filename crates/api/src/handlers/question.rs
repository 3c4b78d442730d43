//! Handlers for the `/questions` resource.

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::Json;
use qa_core::error::CoreError;
use qa_db::models::question::{Question, QuestionFilter, QuestionPayload};
use qa_db::repositories::QuestionRepo;

use crate::error::{AppError, AppResult, ErrorBody};
use crate::extract::ValidJson;
use crate::middleware::exists::ExistingQuestion;
use crate::response::{DataResponse, MessageResponse};
use crate::state::AppState;

/// POST /api/v1/questions
#[utoipa::path(
    post,
    path = "/api/v1/questions",
    tag = "questions",
    request_body = QuestionPayload,
    responses(
        (status = 201, description = "Question created", body = DataResponse<Question>),
        (status = 400, description = "Missing title or unknown category", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody),
    )
)]
pub async fn create(
    State(state): State<AppState>,
    ValidJson(payload): ValidJson<QuestionPayload>,
) -> AppResult<(StatusCode, Json<DataResponse<Question>>)> {
    let input = payload.validate()?;
    let question = QuestionRepo::create(&state.pool, &input).await?;

    tracing::info!(question_id = question.id, "Question created");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse::new(question, "Question created successfully.")),
    ))
}

/// GET /api/v1/questions?title=&category=
///
/// An empty result is a 200 with `[]` unless `EMPTY_SEARCH_IS_ERROR` is set.
#[utoipa::path(
    get,
    path = "/api/v1/questions",
    tag = "questions",
    params(QuestionFilter),
    responses(
        (status = 200, description = "Matching questions", body = DataResponse<Vec<Question>>),
        (status = 400, description = "No match while EMPTY_SEARCH_IS_ERROR is set", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody),
    )
)]
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<QuestionFilter>,
) -> AppResult<Json<DataResponse<Vec<Question>>>> {
    let questions = QuestionRepo::list(&state.pool, &filter).await?;

    if questions.is_empty() && state.config.empty_search_is_error {
        return Err(AppError::BadRequest("Invalid query parameters.".to_string()));
    }

    Ok(Json(DataResponse::new(
        questions,
        "Successfully retrieved the list of questions.",
    )))
}

/// GET /api/v1/questions/{id}
#[utoipa::path(
    get,
    path = "/api/v1/questions/{id}",
    tag = "questions",
    params(("id" = i64, Path, description = "Question id")),
    responses(
        (status = 200, description = "The question", body = DataResponse<Question>),
        (status = 404, description = "No such question", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody),
    )
)]
pub async fn get_by_id(
    State(state): State<AppState>,
    ExistingQuestion(id): ExistingQuestion,
) -> AppResult<Json<DataResponse<Question>>> {
    let question = QuestionRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Question",
            id,
        }))?;
    Ok(Json(DataResponse::new(
        question,
        "Successfully retrieved the question.",
    )))
}

/// PUT /api/v1/questions/{id}
#[utoipa::path(
    put,
    path = "/api/v1/questions/{id}",
    tag = "questions",
    params(("id" = i64, Path, description = "Question id")),
    request_body = QuestionPayload,
    responses(
        (status = 200, description = "Question replaced", body = DataResponse<Question>),
        (status = 400, description = "Missing title or unknown category", body = ErrorBody),
        (status = 404, description = "No such question", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody),
    )
)]
pub async fn update(
    State(state): State<AppState>,
    ExistingQuestion(id): ExistingQuestion,
    ValidJson(payload): ValidJson<QuestionPayload>,
) -> AppResult<Json<DataResponse<Question>>> {
    let input = payload.validate()?;
    let question = QuestionRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Question",
            id,
        }))?;

    tracing::info!(question_id = id, "Question updated");

    Ok(Json(DataResponse::new(
        question,
        "Successfully updated the question.",
    )))
}

/// DELETE /api/v1/questions/{id}
///
/// Answers and votes are removed by the database cascade.
#[utoipa::path(
    delete,
    path = "/api/v1/questions/{id}",
    tag = "questions",
    params(("id" = i64, Path, description = "Question id")),
    responses(
        (status = 200, description = "Question, answers and votes deleted", body = MessageResponse),
        (status = 404, description = "No such question", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody),
    )
)]
pub async fn delete(
    State(state): State<AppState>,
    ExistingQuestion(id): ExistingQuestion,
) -> AppResult<Json<MessageResponse>> {
    if !QuestionRepo::delete(&state.pool, id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Question",
            id,
        }));
    }

    tracing::info!(question_id = id, "Question deleted");

    Ok(Json(MessageResponse::new(
        "Question and answers deleted successfully",
    )))
}
