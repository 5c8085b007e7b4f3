//! Handler for the quiz game.

use std::collections::HashSet;

use axum::extract::State;
use axum::Json;
use trivia_core::error::CoreError;
use trivia_core::quiz::select_question;
use trivia_core::types::DbId;
use trivia_db::models::quiz::QuizRequest;
use trivia_db::repositories::QuestionRepo;

use crate::error::AppResult;
use crate::extract::ValidJson;
use crate::response::QuestionResponse;
use crate::state::AppState;

/// POST /quizzes
///
/// Serve a random question from the chosen category that the player has not
/// seen yet. Once the category is exhausted the response carries
/// `question: null`.
pub async fn play_quiz(
    State(state): State<AppState>,
    ValidJson(body): ValidJson<QuizRequest>,
) -> AppResult<Json<QuestionResponse>> {
    let (Some(category), Some(previous)) = (body.quiz_category, body.previous_questions) else {
        return Err(CoreError::Unprocessable(
            "quiz_category and previous_questions are required".into(),
        )
        .into());
    };

    let scope = category.scope();
    let candidates =
        QuestionRepo::list_quiz_candidates(&state.pool, scope.category_id(), &previous).await?;

    let seen: HashSet<DbId> = previous.iter().copied().collect();
    let question = select_question(&candidates, scope, &seen, &mut rand::rng()).cloned();

    match &question {
        Some(q) => tracing::debug!(question_id = q.id, ?scope, seen = seen.len(), "Quiz question served"),
        None => tracing::debug!(?scope, seen = seen.len(), "Quiz exhausted"),
    }

    Ok(Json(QuestionResponse {
        success: true,
        question,
    }))
}
