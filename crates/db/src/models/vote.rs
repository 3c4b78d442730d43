//! Entities joined with their vote tallies.

use qa_core::votes::VoteTally;
use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::models::answer::Answer;
use crate::models::question::Question;

/// A question with its aggregated `upvotes` and `downvotes`.
///
/// Serializes flat: the question's columns plus the two counts.
#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
pub struct QuestionWithVotes {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub question: Question,
    pub upvotes: i64,
    pub downvotes: i64,
}

/// An answer with its aggregated `upvotes` and `downvotes`.
#[derive(Debug, Clone, FromRow, Serialize, ToSchema)]
pub struct AnswerWithVotes {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub answer: Answer,
    pub upvotes: i64,
    pub downvotes: i64,
}

impl QuestionWithVotes {
    pub fn tally(&self) -> VoteTally {
        VoteTally {
            upvotes: self.upvotes,
            downvotes: self.downvotes,
        }
    }
}

impl AnswerWithVotes {
    pub fn tally(&self) -> VoteTally {
        VoteTally {
            upvotes: self.upvotes,
            downvotes: self.downvotes,
        }
    }
}
