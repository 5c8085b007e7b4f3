//! Question model and request DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use trivia_core::quiz::QuizCandidate;
use trivia_core::types::DbId;
use validator::{Validate, ValidationError};

/// A row from the `questions` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Question {
    pub id: DbId,
    pub question: String,
    pub answer: String,
    pub difficulty: i32,
    pub category: DbId,
}

impl QuizCandidate for Question {
    fn id(&self) -> DbId {
        self.id
    }

    fn category_id(&self) -> DbId {
        self.category
    }
}

/// DTO for `POST /questions`.
///
/// Every field is required; a body missing one fails deserialization before
/// validation runs.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateQuestion {
    #[validate(custom(function = "not_blank"))]
    pub question: String,
    #[validate(custom(function = "not_blank"))]
    pub answer: String,
    #[validate(range(min = 1, max = 5))]
    pub difficulty: i32,
    #[validate(range(min = 1))]
    pub category: DbId,
}

/// DTO for `POST /questions/search_question`.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct SearchQuestions {
    #[serde(rename = "searchTerm")]
    #[validate(custom(function = "no_nul"))]
    pub search_term: Option<String>,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

/// Postgres text columns cannot hold NUL, so such a term could never match.
fn no_nul(value: &str) -> Result<(), ValidationError> {
    if value.contains('\0') {
        return Err(ValidationError::new("nul_byte"));
    }
    Ok(())
}
