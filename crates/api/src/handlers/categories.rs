//! Handlers for category listing and per-category question pages.

use axum::extract::State;
use axum::Json;
use trivia_core::error::CoreError;
use trivia_core::pagination::paginate;
use trivia_db::models::category::category_map;
use trivia_db::repositories::{CategoryRepo, QuestionRepo};

use crate::error::{AppError, AppResult};
use crate::extract::{LenientQuery, ResourceId};
use crate::query::PageParams;
use crate::response::{CategoriesResponse, QuestionPageResponse};
use crate::state::AppState;

/// GET /categories
///
/// Map of every category id to its label.
pub async fn list_categories(
    State(state): State<AppState>,
) -> AppResult<Json<CategoriesResponse>> {
    let categories = CategoryRepo::list_all(&state.pool).await?;

    if categories.is_empty() {
        return Err(AppError::NotFound("no categories configured".into()));
    }

    Ok(Json(CategoriesResponse {
        success: true,
        categories: category_map(&categories),
    }))
}

/// GET /categories/{id}/questions?page=N
///
/// One page of the questions filed under a category.
pub async fn list_category_questions(
    State(state): State<AppState>,
    ResourceId(category_id): ResourceId,
    LenientQuery(params): LenientQuery<PageParams>,
) -> AppResult<Json<QuestionPageResponse>> {
    let category = CategoryRepo::find_by_id(&state.pool, category_id)
        .await?
        .ok_or(CoreError::NotFound {
            entity: "Category",
            id: category_id,
        })?;

    let questions = QuestionRepo::list_by_category(&state.pool, category.id).await?;
    let page = params.page();
    let current = paginate(&questions, page);

    if current.is_empty() {
        return Err(CoreError::EmptyPage {
            entity: "questions",
            page,
        }
        .into());
    }

    tracing::debug!(category_id, page, count = current.len(), "Listed category questions");

    Ok(Json(QuestionPageResponse {
        success: true,
        total_question: current.len(),
        questions: current.to_vec(),
        current_category: Some(category.kind),
    }))
}
