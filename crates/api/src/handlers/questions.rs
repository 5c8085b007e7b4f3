//! Handlers for question listing, lookup, creation, deletion and search.

use axum::extract::State;
use axum::Json;
use trivia_core::error::CoreError;
use trivia_core::pagination::paginate;
use trivia_core::search::effective_term;
use trivia_db::models::category::category_map;
use trivia_db::models::question::{CreateQuestion, SearchQuestions};
use trivia_db::repositories::{CategoryRepo, QuestionRepo};
use validator::Validate;

use crate::error::AppResult;
use crate::extract::{LenientQuery, ResourceId, ValidJson};
use crate::query::PageParams;
use crate::response::{
    CreatedResponse, DeletedResponse, QuestionListResponse, QuestionPageResponse,
    QuestionResponse,
};
use crate::state::AppState;

/// GET /questions?page=N
///
/// One page of all questions, plus the category map for the sidebar.
pub async fn list_questions(
    State(state): State<AppState>,
    LenientQuery(params): LenientQuery<PageParams>,
) -> AppResult<Json<QuestionListResponse>> {
    let questions = QuestionRepo::list_all(&state.pool).await?;
    let page = params.page();
    let current = paginate(&questions, page);

    if current.is_empty() {
        return Err(CoreError::EmptyPage {
            entity: "questions",
            page,
        }
        .into());
    }

    let categories = CategoryRepo::list_all(&state.pool).await?;

    Ok(Json(QuestionListResponse {
        success: true,
        questions: current.to_vec(),
        total_questions: questions.len(),
        categories: category_map(&categories),
        current_category: None,
    }))
}

/// GET /questions/{id}
pub async fn get_question(
    State(state): State<AppState>,
    ResourceId(question_id): ResourceId,
) -> AppResult<Json<QuestionResponse>> {
    let question = QuestionRepo::find_by_id(&state.pool, question_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Question",
            id: question_id,
        })?;

    Ok(Json(QuestionResponse {
        success: true,
        question: Some(question),
    }))
}

/// POST /questions
///
/// The body is schema-checked before anything touches the database; a
/// storage failure after that point is unprocessable.
pub async fn create_question(
    State(state): State<AppState>,
    ValidJson(input): ValidJson<CreateQuestion>,
) -> AppResult<Json<CreatedResponse>> {
    input.validate().map_err(CoreError::from)?;

    let question = QuestionRepo::create(&state.pool, &input).await?;

    tracing::info!(
        question_id = question.id,
        category = question.category,
        difficulty = question.difficulty,
        "Question created"
    );

    Ok(Json(CreatedResponse {
        success: true,
        created: question.id,
    }))
}

/// DELETE /questions/{id}
pub async fn delete_question(
    State(state): State<AppState>,
    ResourceId(question_id): ResourceId,
) -> AppResult<Json<DeletedResponse>> {
    let deleted = QuestionRepo::delete(&state.pool, question_id).await?;

    if !deleted {
        return Err(CoreError::NotFound {
            entity: "Question",
            id: question_id,
        }
        .into());
    }

    tracing::info!(question_id, "Question deleted");

    Ok(Json(DeletedResponse {
        success: true,
        deleted: question_id,
    }))
}

/// POST /questions/search_question?page=N
///
/// Case-insensitive substring search over question text. A missing or empty
/// `searchTerm` searches for a single space; one containing NUL is a bad
/// request.
pub async fn search_questions(
    State(state): State<AppState>,
    LenientQuery(params): LenientQuery<PageParams>,
    ValidJson(body): ValidJson<SearchQuestions>,
) -> AppResult<Json<QuestionPageResponse>> {
    body.validate().map_err(CoreError::from)?;

    let term = effective_term(body.search_term.as_deref());
    let matches = QuestionRepo::search(&state.pool, term).await?;
    let page = params.page();
    let current = paginate(&matches, page);

    if current.is_empty() {
        return Err(CoreError::EmptyPage {
            entity: "search results",
            page,
        }
        .into());
    }

    tracing::debug!(term, page, total = matches.len(), "Searched questions");

    Ok(Json(QuestionPageResponse {
        success: true,
        total_question: current.len(),
        questions: current.to_vec(),
        current_category: None,
    }))
}
