//! Quiz request DTOs.

use serde::Deserialize;
use trivia_core::lenient;
use trivia_core::quiz::CategoryScope;
use trivia_core::types::DbId;

/// Category selector sent by the quiz client.
#[derive(Debug, Clone, Deserialize)]
pub struct QuizCategory {
    /// `0` selects every category.
    #[serde(deserialize_with = "lenient::flexible_id")]
    pub id: DbId,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

impl QuizCategory {
    pub fn scope(&self) -> CategoryScope {
        CategoryScope::from_id(self.id)
    }
}

/// DTO for `POST /quizzes`.
///
/// Both fields are optional at the serde level so that an absent field can be
/// reported as unprocessable rather than as a malformed body.
#[derive(Debug, Clone, Deserialize)]
pub struct QuizRequest {
    pub quiz_category: Option<QuizCategory>,
    pub previous_questions: Option<Vec<DbId>>,
}
