//! Route definitions for the `/questions` resource.
//!
//! Also nests answer creation/listing and question votes under
//! `/questions/{id}/...`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{answer, question, vote};
use crate::state::AppState;

/// Routes mounted at `/questions`.
///
/// ```text
/// GET    /                  -> list
/// POST   /                  -> create
/// GET    /{id}              -> get_by_id
/// PUT    /{id}              -> update
/// DELETE /{id}              -> delete
///
/// GET    /{id}/answers      -> answer::list_by_question
/// POST   /{id}/answers      -> answer::create
///
/// POST   /{id}/upvote       -> vote::upvote_question
/// POST   /{id}/downvote     -> vote::downvote_question
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(question::list).post(question::create))
        .route(
            "/{id}",
            get(question::get_by_id)
                .put(question::update)
                .delete(question::delete),
        )
        .route(
            "/{id}/answers",
            get(answer::list_by_question).post(answer::create),
        )
        .route("/{id}/upvote", post(vote::upvote_question))
        .route("/{id}/downvote", post(vote::downvote_question))
}
