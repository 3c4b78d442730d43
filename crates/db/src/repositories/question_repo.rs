//! Repository for the `questions` table.

use qa_core::category::Category;
use qa_core::types::DbId;
use sqlx::PgPool;

use crate::models::question::{Question, QuestionFilter, QuestionInput};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, category, created_at, updated_at";

/// Provides CRUD operations for questions.
pub struct QuestionRepo;

impl QuestionRepo {
    /// Insert a new question, returning the created row.
    pub async fn create(pool: &PgPool, input: &QuestionInput) -> Result<Question, sqlx::Error> {
        let query = format!(
            "INSERT INTO questions (title, description, category)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.category.map(Category::as_str))
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

    /// Returns `true` if a question with the given ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let (exists,): (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM questions WHERE id = $1)")
                .bind(id)
                .fetch_one(pool)
                .await?;
        Ok(exists)
    }

    /// List questions whose title and category contain the given filters.
    ///
    /// Matching is a case-sensitive substring match; an absent or empty
    /// filter matches everything. Ordered by ID ascending.
    pub async fn list(pool: &PgPool, filter: &QuestionFilter) -> Result<Vec<Question>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM questions
             WHERE ($1::TEXT IS NULL OR $1 = '' OR title LIKE '%' || $1 || '%')
               AND ($2::TEXT IS NULL OR $2 = '' OR category LIKE '%' || $2 || '%')
             ORDER BY id"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(&filter.title)
            .bind(&filter.category)
            .fetch_all(pool)
            .await
    }

    /// Replace a question's title, description and category.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &QuestionInput,
    ) -> Result<Option<Question>, sqlx::Error> {
        let query = format!(
            "UPDATE questions SET
                title = $2,
                description = $3,
                category = $4,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.category.map(Category::as_str))
            .fetch_optional(pool)
            .await
    }

    /// Delete a question by ID. Answers and votes go with it via
    /// `ON DELETE CASCADE`. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM questions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
