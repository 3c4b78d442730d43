//! Repository for the `question_votes` and `answer_votes` tables.
//!
//! Vote events are append-only. Counts are never stored; they are
//! recomputed from the events every time an entity is read with its tally.

use qa_core::types::DbId;
use qa_core::votes::{VoteDirection, VoteTally};
use sqlx::postgres::PgRow;
use sqlx::{FromRow, PgExecutor, PgPool};

use crate::models::answer::Answer;
use crate::models::question::Question;
use crate::models::vote::{AnswerWithVotes, QuestionWithVotes};

/// An entity that can receive votes.
///
/// Ties an entity table to its vote table and to the row type returned
/// when the entity is read together with its tally.
pub trait Votable {
    /// Entity name used in not-found errors and log lines.
    const ENTITY: &'static str;
    /// The entity table.
    const TABLE: &'static str;
    /// The vote event table.
    const VOTE_TABLE: &'static str;
    /// Column in `VOTE_TABLE` referencing `TABLE.id`.
    const FOREIGN_KEY: &'static str;
    /// Entity columns, qualified with the `e` alias.
    const COLUMNS: &'static str;

    type WithVotes: for<'r> FromRow<'r, PgRow> + Send + Unpin + 'static;

    /// The counts carried by a row read with its tally.
    fn tally(row: &Self::WithVotes) -> VoteTally;
}

impl Votable for Question {
    const ENTITY: &'static str = "Question";
    const TABLE: &'static str = "questions";
    const VOTE_TABLE: &'static str = "question_votes";
    const FOREIGN_KEY: &'static str = "question_id";
    const COLUMNS: &'static str =
        "e.id, e.title, e.description, e.category, e.created_at, e.updated_at";

    type WithVotes = QuestionWithVotes;

    fn tally(row: &QuestionWithVotes) -> VoteTally {
        row.tally()
    }
}

impl Votable for Answer {
    const ENTITY: &'static str = "Answer";
    const TABLE: &'static str = "answers";
    const VOTE_TABLE: &'static str = "answer_votes";
    const FOREIGN_KEY: &'static str = "answer_id";
    const COLUMNS: &'static str = "e.id, e.question_id, e.content, e.created_at, e.updated_at";

    type WithVotes = AnswerWithVotes;

    fn tally(row: &AnswerWithVotes) -> VoteTally {
        row.tally()
    }
}

/// Records vote events and reads entities with their tallies.
pub struct VoteRepo;

impl VoteRepo {
    /// Append a vote event for entity `id` and return the entity with its
    /// recomputed tally.
    ///
    /// The insert and the read share one transaction: if the read fails the
    /// vote is rolled back. A missing entity surfaces as a foreign-key
    /// violation from the insert; `None` is returned if the entity vanished
    /// before the read, in which case nothing is recorded.
    pub async fn cast<T: Votable>(
        pool: &PgPool,
        id: DbId,
        direction: VoteDirection,
    ) -> Result<Option<T::WithVotes>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let insert = format!(
            "INSERT INTO {} ({}, vote) VALUES ($1, $2)",
            T::VOTE_TABLE,
            T::FOREIGN_KEY
        );
        sqlx::query(&insert)
            .bind(id)
            .bind(direction.value())
            .execute(&mut *tx)
            .await?;

        let Some(row) = Self::tally_in::<T, _>(&mut *tx, id).await? else {
            tx.rollback().await?;
            return Ok(None);
        };

        tx.commit().await?;

        let tally = T::tally(&row);
        tracing::debug!(
            entity = T::ENTITY,
            id,
            vote = direction.value(),
            upvotes = tally.upvotes,
            downvotes = tally.downvotes,
            "Vote recorded"
        );
        Ok(Some(row))
    }

    /// Read entity `id` with its current tally, without recording a vote.
    pub async fn find_with_votes<T: Votable>(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<T::WithVotes>, sqlx::Error> {
        Self::tally_in::<T, _>(pool, id).await
    }

    /// Aggregate the vote events for one entity. Entities without votes
    /// come back with both counts at zero.
    async fn tally_in<'e, T, E>(executor: E, id: DbId) -> Result<Option<T::WithVotes>, sqlx::Error>
    where
        T: Votable,
        E: PgExecutor<'e>,
    {
        let query = format!(
            "SELECT {columns},
                    COUNT(v.vote) FILTER (WHERE v.vote = 1) AS upvotes,
                    COUNT(v.vote) FILTER (WHERE v.vote = -1) AS downvotes
             FROM {table} e
             LEFT JOIN {vote_table} v ON v.{fk} = e.id
             WHERE e.id = $1
             GROUP BY e.id",
            columns = T::COLUMNS,
            table = T::TABLE,
            vote_table = T::VOTE_TABLE,
            fk = T::FOREIGN_KEY,
        );
        sqlx::query_as::<_, T::WithVotes>(&query)
            .bind(id)
            .fetch_optional(executor)
            .await
    }
}
