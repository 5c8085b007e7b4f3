//! Route definitions for questions.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::questions;
use crate::state::AppState;

/// ```text
/// GET    /questions                   -> list_questions
/// POST   /questions                   -> create_question
/// POST   /questions/search_question   -> search_questions
/// GET    /questions/{id}              -> get_question
/// DELETE /questions/{id}              -> delete_question
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/questions",
            get(questions::list_questions).post(questions::create_question),
        )
        .route("/questions/search_question", post(questions::search_questions))
        .route(
            "/questions/{id}",
            get(questions::get_question).delete(questions::delete_question),
        )
}
