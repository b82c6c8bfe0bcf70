//! Store behavior against a real file

use qastore::{JsonFileRepository, QuestionRepository, WriteStatus};
use serde_json::json;
use tempfile::TempDir;

mod common;
use common::{write_store, KNOWN_ANSWER_ID, KNOWN_QUESTION_ID, TWO_QUESTIONS, UNKNOWN_ID};

fn repo_with(temp: &TempDir, contents: &str) -> JsonFileRepository {
    JsonFileRepository::new(write_store(temp.path(), contents))
}

#[tokio::test]
async fn test_empty_store_has_no_questions() {
    let temp = TempDir::new().unwrap();
    let repo = repo_with(&temp, "[]");

    assert_eq!(repo.get_questions().await.unwrap().len(), 0);
}

#[tokio::test]
async fn test_lists_two_questions() {
    let temp = TempDir::new().unwrap();
    let repo = repo_with(&temp, TWO_QUESTIONS);

    assert_eq!(repo.get_questions().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_get_question_by_id() {
    let temp = TempDir::new().unwrap();
    let repo = repo_with(&temp, TWO_QUESTIONS);

    let question = repo
        .get_question_by_id(KNOWN_QUESTION_ID)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(
        serde_json::to_value(&question).unwrap(),
        json!({
            "id": KNOWN_QUESTION_ID,
            "summary": "Who are you?",
            "author": "Tim Doods",
            "answers": [
                {
                    "id": KNOWN_ANSWER_ID,
                    "author": "Anakin Earthwalker",
                    "summary": "I am your father."
                },
                {
                    "id": "fa309210-b8fd-4065-ace3-73dce62f6014",
                    "author": "Luke Mattews",
                    "summary": "I am a postman. Here is your mail."
                }
            ]
        })
    );
}

#[tokio::test]
async fn test_get_question_by_unknown_id() {
    let temp = TempDir::new().unwrap();
    let repo = repo_with(&temp, TWO_QUESTIONS);

    assert!(repo.get_question_by_id(UNKNOWN_ID).await.unwrap().is_none());
}

#[tokio::test]
async fn test_get_answers() {
    let temp = TempDir::new().unwrap();
    let repo = repo_with(&temp, TWO_QUESTIONS);

    let answers = repo.get_answers(KNOWN_QUESTION_ID).await.unwrap();
    assert_eq!(answers.len(), 2);
    assert_eq!(answers[0].author, "Anakin Earthwalker");
    assert_eq!(answers[1].author, "Luke Mattews");

    assert!(repo.get_answers(UNKNOWN_ID).await.unwrap().is_empty());
}

#[tokio::test]
async fn test_get_answer() {
    let temp = TempDir::new().unwrap();
    let repo = repo_with(&temp, TWO_QUESTIONS);

    let answer = repo
        .get_answer(KNOWN_QUESTION_ID, KNOWN_ANSWER_ID)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(
        serde_json::to_value(&answer).unwrap(),
        json!({
            "id": KNOWN_ANSWER_ID,
            "author": "Anakin Earthwalker",
            "summary": "I am your father."
        })
    );
}

#[tokio::test]
async fn test_get_answer_unknown_ids() {
    let temp = TempDir::new().unwrap();
    let repo = repo_with(&temp, TWO_QUESTIONS);

    assert!(repo.get_answer(UNKNOWN_ID, UNKNOWN_ID).await.unwrap().is_none());
    assert!(repo
        .get_answer(KNOWN_QUESTION_ID, UNKNOWN_ID)
        .await
        .unwrap()
        .is_none());
}

#[tokio::test]
async fn test_add_question_with_missing_properties_does_nothing() {
    let temp = TempDir::new().unwrap();
    let repo = repo_with(&temp, TWO_QUESTIONS);

    let before = serde_json::to_string(&repo.get_questions().await.unwrap()).unwrap();
    let status = repo.add_question(&json!({"test": "test"})).await.unwrap();
    let after = serde_json::to_string(&repo.get_questions().await.unwrap()).unwrap();

    assert_eq!(status.as_str(), "failed");
    assert_eq!(before, after);
}

#[tokio::test]
async fn test_add_question() {
    let temp = TempDir::new().unwrap();
    let repo = repo_with(&temp, TWO_QUESTIONS);

    let status = repo
        .add_question(&json!({"author": "John Doe", "summary": "Do you like sun?"}))
        .await
        .unwrap();
    assert_eq!(status.as_str(), "success");

    let questions = repo.get_questions().await.unwrap();
    assert_eq!(questions.len(), 3);
    assert!(serde_json::to_string(&questions)
        .unwrap()
        .contains(r#""author":"John Doe","summary":"Do you like sun?""#));

    let added = &questions[2];
    assert!(uuid::Uuid::parse_str(&added.id).is_ok());
    assert!(added.answers.is_empty());
}

#[tokio::test]
async fn test_add_answer_with_missing_properties_does_nothing() {
    let temp = TempDir::new().unwrap();
    let repo = repo_with(&temp, TWO_QUESTIONS);

    let before = serde_json::to_string(&repo.get_answers(KNOWN_QUESTION_ID).await.unwrap()).unwrap();
    let status = repo
        .add_answer(KNOWN_QUESTION_ID, &json!({"test": "test"}))
        .await
        .unwrap();
    let after = serde_json::to_string(&repo.get_answers(KNOWN_QUESTION_ID).await.unwrap()).unwrap();

    assert_eq!(status, WriteStatus::Failed);
    assert_eq!(before, after);
}

#[tokio::test]
async fn test_add_answer_to_unknown_question_attaches_nothing() {
    let temp = TempDir::new().unwrap();
    let repo = repo_with(&temp, TWO_QUESTIONS);
    let body = json!({
        "author": "Adam Handers",
        "summary": "The answer is so simple I just can't answer to it."
    });

    let before = serde_json::to_string(&repo.get_questions().await.unwrap()).unwrap();
    let status = repo.add_answer(UNKNOWN_ID, &body).await.unwrap();
    let after = serde_json::to_string(&repo.get_questions().await.unwrap()).unwrap();

    assert_eq!(status.as_str(), "success");
    assert_eq!(before, after);
    assert!(repo.get_answers(UNKNOWN_ID).await.unwrap().is_empty());

    // Rewritten in compact form even though nothing was attached
    let raw = std::fs::read_to_string(repo.path()).unwrap();
    assert_eq!(raw, after);
}

#[tokio::test]
async fn test_add_answer() {
    let temp = TempDir::new().unwrap();
    let repo = repo_with(&temp, TWO_QUESTIONS);

    let status = repo
        .add_answer(
            KNOWN_QUESTION_ID,
            &json!({
                "author": "Adam Handers",
                "summary": "The answer is so simple I just can't answer to it."
            }),
        )
        .await
        .unwrap();
    assert_eq!(status, WriteStatus::Success);

    let answers = repo.get_answers(KNOWN_QUESTION_ID).await.unwrap();
    assert_eq!(answers.len(), 3);
    assert!(serde_json::to_string(&answers).unwrap().contains(
        r#""author":"Adam Handers","summary":"The answer is so simple I just can't answer to it.""#
    ));
    assert_eq!(answers[2].author, "Adam Handers");
    assert!(uuid::Uuid::parse_str(&answers[2].id).is_ok());

    // The other question is untouched
    let questions = repo.get_questions().await.unwrap();
    assert!(questions[0].answers.is_empty());
}

#[tokio::test]
async fn test_reads_see_external_writes() {
    let temp = TempDir::new().unwrap();
    let repo = repo_with(&temp, "[]");
    assert!(repo.get_questions().await.unwrap().is_empty());

    write_store(temp.path(), TWO_QUESTIONS);
    assert_eq!(repo.get_questions().await.unwrap().len(), 2);
}
