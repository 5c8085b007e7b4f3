//! Response envelope types for API handlers.
//!
//! Every successful response carries `success: true` alongside its payload.
//! Field names follow the web client's contract, including its mixed
//! `totalQuestions` / `totalQuestion` spelling.

use serde::Serialize;
use trivia_core::types::DbId;
use trivia_db::models::category::CategoryMap;
use trivia_db::models::question::Question;

/// `GET /categories`
#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub success: bool,
    pub categories: CategoryMap,
}

/// `GET /questions`
#[derive(Debug, Serialize)]
pub struct QuestionListResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    #[serde(rename = "totalQuestions")]
    pub total_questions: usize,
    pub categories: CategoryMap,
    pub current_category: Option<String>,
}

/// Search results and per-category listings.
#[derive(Debug, Serialize)]
pub struct QuestionPageResponse {
    pub success: bool,
    pub questions: Vec<Question>,
    #[serde(rename = "totalQuestion")]
    pub total_question: usize,
    pub current_category: Option<String>,
}

/// A single question, or `null` when a quiz has nothing left to ask.
#[derive(Debug, Serialize)]
pub struct QuestionResponse {
    pub success: bool,
    pub question: Option<Question>,
}

/// `POST /questions`
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub success: bool,
    pub created: DbId,
}

/// `DELETE /questions/{id}`
#[derive(Debug, Serialize)]
pub struct DeletedResponse {
    pub success: bool,
    pub deleted: DbId,
}
