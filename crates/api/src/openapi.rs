//! OpenAPI document and the Swagger UI serving it.
//!
//! The UI lives at `/api-docs` and the raw document at
//! `/api-docs/openapi.json`. Paths are collected from the `#[utoipa::path]`
//! attributes on the handlers.

use axum::Router;
use qa_db::models::answer::{Answer, AnswerPayload};
use qa_db::models::question::{Question, QuestionPayload};
use qa_db::models::vote::{AnswerWithVotes, QuestionWithVotes};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::error::ErrorBody;
use crate::handlers::{answer, question, vote};
use crate::response::MessageResponse;
use crate::routes::health;
use crate::state::AppState;

/// Where the Swagger UI is mounted.
pub const DOCS_PATH: &str = "/api-docs";
/// Where the generated document is served.
pub const DOCUMENT_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Q&A API",
        description = "Questions, answers and up/down votes."
    ),
    paths(
        health::health_check,
        question::create,
        question::list,
        question::get_by_id,
        question::update,
        question::delete,
        answer::create,
        answer::list_by_question,
        vote::upvote_question,
        vote::downvote_question,
        vote::upvote_answer,
        vote::downvote_answer,
    ),
    components(schemas(
        Question,
        QuestionPayload,
        QuestionWithVotes,
        Answer,
        AnswerPayload,
        AnswerWithVotes,
        MessageResponse,
        ErrorBody,
    )),
    tags(
        (name = "questions", description = "Question CRUD and search"),
        (name = "answers", description = "Answers to a question"),
        (name = "votes", description = "Append-only up/down votes"),
        (name = "health", description = "Service status"),
    )
)]
pub struct ApiDoc;

/// Swagger UI plus the JSON document, ready to merge into the app router.
pub fn router() -> Router<AppState> {
    SwaggerUi::new(DOCS_PATH)
        .url(DOCUMENT_PATH, ApiDoc::openapi())
        .into()
}
