//! Route definitions for the quiz game.

use axum::routing::post;
use axum::Router;

use crate::handlers::quizzes;
use crate::state::AppState;

/// ```text
/// POST   /quizzes   -> play_quiz
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/quizzes", post(quizzes::play_quiz))
}
