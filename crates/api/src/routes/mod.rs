pub mod categories;
pub mod health;
pub mod questions;
pub mod quizzes;

use axum::Router;

use crate::state::AppState;

/// Build the trivia route tree.
///
/// Route hierarchy:
///
/// ```text
/// /categories                          list categories (GET)
/// /categories/{id}/questions           questions in a category (GET, ?page=)
///
/// /questions                           list (GET, ?page=), create (POST)
/// /questions/{id}                      get, delete
/// /questions/search_question           search (POST, ?page=)
///
/// /quizzes                             next quiz question (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(categories::router())
        .merge(questions::router())
        .merge(quizzes::router())
}
