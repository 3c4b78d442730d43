//! Question categories.
//!
//! The set is closed: a question either has no category or exactly one of
//! the ten variants below. The string forms must match the CHECK constraint
//! in `20260301000001_create_questions_table.sql`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// A question category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Technology,
    Cuisine,
    Travelling,
    Science,
    Literature,
    Music,
    Sports,
    Movies,
    History,
    Miscellaneous,
}

impl Category {
    /// Every category, in display order.
    pub const ALL: [Category; 10] = [
        Category::Technology,
        Category::Cuisine,
        Category::Travelling,
        Category::Science,
        Category::Literature,
        Category::Music,
        Category::Sports,
        Category::Movies,
        Category::History,
        Category::Miscellaneous,
    ];

    /// The lowercase name stored in the `questions.category` column.
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Technology => "technology",
            Category::Cuisine => "cuisine",
            Category::Travelling => "travelling",
            Category::Science => "science",
            Category::Literature => "literature",
            Category::Music => "music",
            Category::Sports => "sports",
            Category::Movies => "movies",
            Category::History => "history",
            Category::Miscellaneous => "miscellaneous",
        }
    }

    /// Comma-separated list of all category names, used in error messages.
    pub fn allowed_values() -> String {
        Self::ALL
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// The validation error for a category outside the closed set.
    pub fn unknown() -> CoreError {
        CoreError::Validation(format!(
            "Please enter a category from the following options: {}.",
            Self::allowed_values()
        ))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    /// Exact, case-sensitive match against the category names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(Self::unknown)
    }
}

/// Validate an optional category from a request payload.
///
/// `None` is valid (category is optional). A present value, including the
/// empty string, must name one of the ten categories.
pub fn validate_category(category: Option<&str>) -> Result<Option<Category>, CoreError> {
    category.map(str::parse::<Category>).transpose()
}
