//! Handlers for answers nested under `/questions/{id}/answers`.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use qa_db::models::answer::{Answer, AnswerPayload};
use qa_db::repositories::AnswerRepo;

use crate::error::{AppResult, ErrorBody};
use crate::extract::ValidJson;
use crate::middleware::exists::ExistingQuestion;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/questions/{id}/answers
#[utoipa::path(
    post,
    path = "/api/v1/questions/{id}/answers",
    tag = "answers",
    params(("id" = i64, Path, description = "Question id")),
    request_body = AnswerPayload,
    responses(
        (status = 201, description = "Answer created", body = DataResponse<Answer>),
        (status = 400, description = "Empty or over-long content", body = ErrorBody),
        (status = 404, description = "No such question", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody),
    )
)]
pub async fn create(
    State(state): State<AppState>,
    ExistingQuestion(question_id): ExistingQuestion,
    ValidJson(payload): ValidJson<AnswerPayload>,
) -> AppResult<(StatusCode, Json<DataResponse<Answer>>)> {
    let content = payload.validate()?;
    let answer = AnswerRepo::create(&state.pool, question_id, &content).await?;

    tracing::info!(question_id, answer_id = answer.id, "Answer created");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse::new(answer, "Answer created successfully.")),
    ))
}

/// GET /api/v1/questions/{id}/answers
#[utoipa::path(
    get,
    path = "/api/v1/questions/{id}/answers",
    tag = "answers",
    params(("id" = i64, Path, description = "Question id")),
    responses(
        (status = 200, description = "Answers to the question", body = DataResponse<Vec<Answer>>),
        (status = 404, description = "No such question", body = ErrorBody),
        (status = 500, description = "Storage failure", body = ErrorBody),
    )
)]
pub async fn list_by_question(
    State(state): State<AppState>,
    ExistingQuestion(question_id): ExistingQuestion,
) -> AppResult<Json<DataResponse<Vec<Answer>>>> {
    let answers = AnswerRepo::list_by_question(&state.pool, question_id).await?;
    Ok(Json(DataResponse::new(
        answers,
        "Successfully retrieved answers.",
    )))
}
