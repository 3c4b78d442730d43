//! Integration tests for question and answer repositories.
//!
//! Exercises the repository layer against a real database:
//! - Create / read / update / delete for questions
//! - Substring filtering on list
//! - Cascade delete of answers
//! - Schema-level constraints

use qa_core::category::Category;
use qa_db::models::question::{QuestionFilter, QuestionInput};
use qa_db::repositories::{AnswerRepo, QuestionRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_question(title: &str, category: Option<Category>) -> QuestionInput {
    QuestionInput {
        title: title.to_string(),
        description: None,
        category,
    }
}

fn filter(title: Option<&str>, category: Option<&str>) -> QuestionFilter {
    QuestionFilter {
        title: title.map(str::to_string),
        category: category.map(str::to_string),
    }
}

// ---------------------------------------------------------------------------
// Questions
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_returns_generated_row(pool: PgPool) {
    let first = QuestionRepo::create(&pool, &new_question("First", None))
        .await
        .unwrap();
    let second = QuestionRepo::create(&pool, &new_question("Second", Some(Category::Music)))
        .await
        .unwrap();

    assert_eq!(first.title, "First");
    assert_eq!(second.title, "Second");
    assert_eq!(second.category.as_deref(), Some("music"));
    assert!(second.id > first.id);
    assert_eq!(second.created_at, second.updated_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_find_and_exists(pool: PgPool) {
    let q = QuestionRepo::create(&pool, &new_question("Find me", None))
        .await
        .unwrap();

    let found = QuestionRepo::find_by_id(&pool, q.id).await.unwrap().unwrap();
    assert_eq!(found.title, "Find me");
    assert!(QuestionRepo::exists(&pool, q.id).await.unwrap());

    assert!(QuestionRepo::find_by_id(&pool, q.id + 1000).await.unwrap().is_none());
    assert!(!QuestionRepo::exists(&pool, q.id + 1000).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_replaces_fields(pool: PgPool) {
    let q = QuestionRepo::create(
        &pool,
        &QuestionInput {
            title: "Old".to_string(),
            description: Some("old description".to_string()),
            category: Some(Category::History),
        },
    )
    .await
    .unwrap();

    let updated = QuestionRepo::update(&pool, q.id, &new_question("New", None))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.id, q.id);
    assert_eq!(updated.title, "New");
    assert_eq!(updated.description, None);
    assert_eq!(updated.category, None);
    assert!(updated.updated_at >= q.updated_at);
    assert_eq!(updated.created_at, q.created_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_returns_none(pool: PgPool) {
    let result = QuestionRepo::update(&pool, 424242, &new_question("Nope", None))
        .await
        .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_filters_by_substring(pool: PgPool) {
    QuestionRepo::create(&pool, &new_question("Capital of France?", Some(Category::History)))
        .await
        .unwrap();
    QuestionRepo::create(&pool, &new_question("Best pasta shape", Some(Category::Cuisine)))
        .await
        .unwrap();
    QuestionRepo::create(&pool, &new_question("Capital of Peru?", None))
        .await
        .unwrap();

    let all = QuestionRepo::list(&pool, &filter(None, None)).await.unwrap();
    assert_eq!(all.len(), 3);

    let empty_filters = QuestionRepo::list(&pool, &filter(Some(""), Some("")))
        .await
        .unwrap();
    assert_eq!(empty_filters.len(), 3);

    let capitals = QuestionRepo::list(&pool, &filter(Some("Capital"), None))
        .await
        .unwrap();
    assert_eq!(capitals.len(), 2);
    assert!(capitals[0].id < capitals[1].id);

    let history_capitals = QuestionRepo::list(&pool, &filter(Some("Capital"), Some("hist")))
        .await
        .unwrap();
    assert_eq!(history_capitals.len(), 1);
    assert_eq!(history_capitals[0].title, "Capital of France?");

    // Case-sensitive.
    let lowercase = QuestionRepo::list(&pool, &filter(Some("capital"), None))
        .await
        .unwrap();
    assert!(lowercase.is_empty());

    let nothing = QuestionRepo::list(&pool, &filter(Some("zzzznomatch"), None))
        .await
        .unwrap();
    assert!(nothing.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_question(pool: PgPool) {
    let q = QuestionRepo::create(&pool, &new_question("Delete me", None))
        .await
        .unwrap();

    assert!(QuestionRepo::delete(&pool, q.id).await.unwrap());
    assert!(QuestionRepo::find_by_id(&pool, q.id).await.unwrap().is_none());
    assert!(!QuestionRepo::delete(&pool, q.id).await.unwrap());
}

// ---------------------------------------------------------------------------
// Answers
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_answers_listed_per_question(pool: PgPool) {
    let q1 = QuestionRepo::create(&pool, &new_question("Q1", None)).await.unwrap();
    let q2 = QuestionRepo::create(&pool, &new_question("Q2", None)).await.unwrap();

    let a1 = AnswerRepo::create(&pool, q1.id, "first").await.unwrap();
    let a2 = AnswerRepo::create(&pool, q1.id, "second").await.unwrap();
    AnswerRepo::create(&pool, q2.id, "other").await.unwrap();

    assert_eq!(a1.question_id, q1.id);
    assert!(AnswerRepo::exists(&pool, a2.id).await.unwrap());

    let answers = AnswerRepo::list_by_question(&pool, q1.id).await.unwrap();
    let contents: Vec<_> = answers.iter().map(|a| a.content.as_str()).collect();
    assert_eq!(contents, ["first", "second"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_question_cascades_to_answers(pool: PgPool) {
    let q = QuestionRepo::create(&pool, &new_question("Parent", None)).await.unwrap();
    let a1 = AnswerRepo::create(&pool, q.id, "one").await.unwrap();
    let a2 = AnswerRepo::create(&pool, q.id, "two").await.unwrap();

    QuestionRepo::delete(&pool, q.id).await.unwrap();

    assert!(AnswerRepo::find_by_id(&pool, a1.id).await.unwrap().is_none());
    assert!(AnswerRepo::find_by_id(&pool, a2.id).await.unwrap().is_none());
    assert!(AnswerRepo::list_by_question(&pool, q.id).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_answer_for_missing_question_is_fk_violation(pool: PgPool) {
    let err = AnswerRepo::create(&pool, 999_999, "orphan").await.unwrap_err();
    match err {
        sqlx::Error::Database(db_err) => assert_eq!(db_err.code().as_deref(), Some("23503")),
        other => panic!("expected FK violation, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Constraints
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_schema_rejects_overlong_answer(pool: PgPool) {
    let q = QuestionRepo::create(&pool, &new_question("Limits", None)).await.unwrap();
    let content = "x".repeat(301);
    assert!(AnswerRepo::create(&pool, q.id, &content).await.is_err());
    assert!(AnswerRepo::list_by_question(&pool, q.id).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_schema_rejects_unknown_category(pool: PgPool) {
    let result = sqlx::query("INSERT INTO questions (title, category) VALUES ('t', 'gardening')")
        .execute(&pool)
        .await;
    assert!(result.is_err());
}
