//! Repository for the `answers` table.

use qa_core::types::DbId;
use sqlx::PgPool;

use crate::models::answer::Answer;

const COLUMNS: &str = "id, question_id, content, created_at, updated_at";

/// Provides create and read operations for answers.
///
/// Answers are never updated or deleted directly; they are removed with
/// their parent question.
pub struct AnswerRepo;

impl AnswerRepo {
    /// Insert a new answer under `question_id`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        question_id: DbId,
        content: &str,
    ) -> Result<Answer, sqlx::Error> {
        let query = format!(
            "INSERT INTO answers (question_id, content)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Answer>(&query)
            .bind(question_id)
            .bind(content)
            .fetch_one(pool)
            .await
    }

    /// Find an answer by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Answer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM answers WHERE id = $1");
        sqlx::query_as::<_, Answer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Returns `true` if an answer with the given ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM answers WHERE id = $1)")
                .bind(id)
                .fetch_one(pool)
                .await?;
        Ok(exists)
    }

    /// List all answers for a question, oldest first.
    pub async fn list_by_question(
        pool: &PgPool,
        question_id: DbId,
    ) -> Result<Vec<Answer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM answers WHERE question_id = $1 ORDER BY id");
        sqlx::query_as::<_, Answer>(&query)
            .bind(question_id)
            .fetch_all(pool)
            .await
    }
}
