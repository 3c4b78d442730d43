//! Question entity model and DTOs.

use qa_core::category::{validate_category, Category};
use qa_core::error::CoreError;
use qa_core::types::{DbId, Timestamp};
use qa_core::validation::validate_title;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

/// A question row from the `questions` table.
#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
pub struct Question {
    #[schema(value_type = i64)]
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    #[schema(example = "science")]
    pub category: Option<String>,
    #[schema(value_type = String, format = DateTime)]
    pub created_at: Timestamp,
    #[schema(value_type = String, format = DateTime)]
    pub updated_at: Timestamp,
}

/// Request body for creating or replacing a question.
///
/// Fields are left loosely typed so that a missing title or an unknown
/// category produces a validation message rather than a deserialization
/// rejection. `category` accepts any JSON value: only a string naming one
/// of the categories (or `null`) passes validation.
#[derive(Debug, Clone, Default, Deserialize, ToSchema)]
pub struct QuestionPayload {
    #[schema(example = "How do vaccines work?")]
    pub title: Option<String>,
    pub description: Option<String>,
    #[schema(value_type = Option<String>, example = "science")]
    pub category: Option<Value>,
}

/// A validated question, ready to insert or apply as an update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionInput {
    pub title: String,
    pub description: Option<String>,
    pub category: Option<Category>,
}

impl QuestionPayload {
    /// Check the category against the closed set, then require a title.
    pub fn validate(self) -> Result<QuestionInput, CoreError> {
        let category = match self.category {
            None | Some(Value::Null) => None,
            Some(Value::String(name)) => validate_category(Some(&name))?,
            Some(_) => return Err(Category::unknown()),
        };
        let title = validate_title(self.title.as_deref())?.to_string();
        Ok(QuestionInput {
            title,
            description: self.description,
            category,
        })
    }
}

/// Substring filters for listing questions (`?title=&category=`).
///
/// An absent or empty filter matches every row.
#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct QuestionFilter {
    pub title: Option<String>,
    pub category: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(title: Option<&str>, category: Option<&str>) -> QuestionPayload {
        QuestionPayload {
            title: title.map(str::to_string),
            description: None,
            category: category.map(|c| Value::String(c.to_string())),
        }
    }

    #[test]
    fn valid_payload_becomes_input() {
        let input = payload(Some("Best ramen?"), Some("cuisine")).validate().unwrap();
        assert_eq!(input.title, "Best ramen?");
        assert_eq!(input.category, Some(Category::Cuisine));
    }

    #[test]
    fn category_is_optional() {
        let input = payload(Some("Anything"), None).validate().unwrap();
        assert_eq!(input.category, None);
    }

    #[test]
    fn missing_title_fails() {
        assert!(payload(None, None).validate().is_err());
        assert!(payload(Some(""), Some("music")).validate().is_err());
    }

    #[test]
    fn bad_category_fails_even_with_title() {
        let err = payload(Some("Title"), Some("gardening")).validate().unwrap_err();
        assert!(err.to_string().contains("technology"));
    }

    #[test]
    fn non_string_category_fails_with_allowed_list() {
        for value in [serde_json::json!(5), serde_json::json!(true), serde_json::json!(["music"])] {
            let payload = QuestionPayload {
                title: Some("Title".to_string()),
                description: None,
                category: Some(value),
            };
            let err = payload.validate().unwrap_err();
            assert!(err.to_string().contains("miscellaneous"));
        }
    }

    #[test]
    fn null_category_is_absent() {
        let payload: QuestionPayload =
            serde_json::from_str(r#"{"title":"Title","category":null}"#).unwrap();
        assert_eq!(payload.validate().unwrap().category, None);
    }
}
