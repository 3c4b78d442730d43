pub mod answers;
pub mod health;
pub mod questions;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /questions                         list (?title=&category=), create
/// /questions/{id}                    get, update, delete
/// /questions/{id}/answers            list, create
/// /questions/{id}/upvote             upvote (POST)
/// /questions/{id}/downvote           downvote (POST)
///
/// /answers/{id}/upvote               upvote (POST)
/// /answers/{id}/downvote             downvote (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/questions", questions::router())
        .nest("/answers", answers::router())
}
