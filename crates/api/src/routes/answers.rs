//! Route definitions for the `/answers` resource.

use axum::routing::post;
use axum::Router;

use crate::handlers::vote;
use crate::state::AppState;

/// Routes mounted at `/answers`.
///
/// ```text
/// POST   /{id}/upvote       -> vote::upvote_answer
/// POST   /{id}/downvote     -> vote::downvote_answer
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/{id}/upvote", post(vote::upvote_answer))
        .route("/{id}/downvote", post(vote::downvote_answer))
}
