//! Repository for the `questions` table.
//!
//! Every list query orders by `id` so pagination over the result is stable.

use sqlx::PgPool;
use trivia_core::search::like_pattern;
use trivia_core::types::DbId;

use crate::models::question::{CreateQuestion, Question};

/// Column list for `questions` queries.
const COLUMNS: &str = "id, question, answer, difficulty, category";

/// Provides insert, delete and filtered listing for questions.
pub struct QuestionRepo;

impl QuestionRepo {
    /// Insert a new question, returning the created row with its assigned id.
    pub async fn create(pool: &PgPool, input: &CreateQuestion) -> Result<Question, sqlx::Error> {
        let query = format!(
            "INSERT INTO questions (question, answer, difficulty, category) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(&input.question)
            .bind(&input.answer)
            .bind(input.difficulty)
            .bind(input.category)
            .fetch_one(pool)
            .await
    }

    /// Find a question by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Question>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM questions WHERE id = $1");
        sqlx::query_as::<_, Question>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every question ordered by id.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM questions ORDER BY id");
        sqlx::query_as::<_, Question>(&query).fetch_all(pool).await
    }

    /// List the questions belonging to one category.
    pub async fn list_by_category(
        pool: &PgPool,
        category_id: DbId,
    ) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM questions WHERE category = $1 ORDER BY id");
        sqlx::query_as::<_, Question>(&query)
            .bind(category_id)
            .fetch_all(pool)
            .await
    }

    /// Case-insensitive substring search on the question text.
    pub async fn search(pool: &PgPool, term: &str) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM questions \
             WHERE question ILIKE $1 ESCAPE '\\' \
             ORDER BY id"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(like_pattern(term))
            .fetch_all(pool)
            .await
    }

    /// Questions a quiz may still serve: optionally limited to one category,
    /// never including an id from `exclude`.
    pub async fn list_quiz_candidates(
        pool: &PgPool,
        category_id: Option<DbId>,
        exclude: &[DbId],
    ) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM questions \
             WHERE ($1::BIGINT IS NULL OR category = $1) \
               AND NOT (id = ANY($2)) \
             ORDER BY id"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(category_id)
            .bind(exclude)
            .fetch_all(pool)
            .await
    }

    /// Delete a question by ID.
    ///
    /// Returns `true` if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
