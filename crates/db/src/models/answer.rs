//! Answer entity model and DTOs.

use qa_core::error::CoreError;
use qa_core::types::{DbId, Timestamp};
use qa_core::validation::validate_answer_content;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// An answer row from the `answers` table.
#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
pub struct Answer {
    #[schema(value_type = i64)]
    pub id: DbId,
    #[schema(value_type = i64)]
    pub question_id: DbId,
    pub content: String,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: Timestamp,
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: Timestamp,
}

/// Request body for creating an answer.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct AnswerPayload {
    /// Between 1 and 300 characters.
    #[schema(example = "Boil them for seven minutes.")]
    pub content: Option<String>,
}

impl AnswerPayload {
    /// Return the answer content once it passes the length rules.
    pub fn validate(self) -> Result<String, CoreError> {
        validate_answer_content(self.content.as_deref()).map(str::to_string)
    }
}
