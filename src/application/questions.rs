//! Question and answer use cases

use crate::domain::{Answer, Question, WriteStatus};
use crate::error::{QaError, Result};
use crate::infrastructure::QuestionRepository;
use serde_json::{Map, Value};

/// Service the CLI drives; turns "absent" lookups into errors.
pub struct QuestionService<R: QuestionRepository> {
    repository: R,
}

impl<R: QuestionRepository> QuestionService<R> {
    pub fn new(repository: R) -> Self {
        QuestionService { repository }
    }

    pub async fn list(&self) -> Result<Vec<Question>> {
        self.repository.get_questions().await
    }

    pub async fn show(&self, question_id: &str) -> Result<Question> {
        self.repository
            .get_question_by_id(question_id)
            .await?
            .ok_or_else(|| QaError::RecordNotFound(format!("question '{}'", question_id)))
    }

    pub async fn ask(&self, body: &Value) -> Result<WriteStatus> {
        self.repository.add_question(body).await
    }

    pub async fn answers(&self, question_id: &str) -> Result<Vec<Answer>> {
        self.repository.get_answers(question_id).await
    }

    pub async fn answer(&self, question_id: &str, answer_id: &str) -> Result<Answer> {
        self.repository
            .get_answer(question_id, answer_id)
            .await?
            .ok_or_else(|| {
                QaError::RecordNotFound(format!(
                    "answer '{}' under question '{}'",
                    answer_id, question_id
                ))
            })
    }

    pub async fn reply(&self, question_id: &str, body: &Value) -> Result<WriteStatus> {
        self.repository.add_answer(question_id, body).await
    }
}

/// Build a submission body from command-line input.
///
/// `json` takes precedence and must parse as JSON. Otherwise the object holds
/// whichever of `author`/`summary` were given; the store decides whether the
/// key set is acceptable.
pub fn submission_body(
    json: Option<&str>,
    author: Option<&str>,
    summary: Option<&str>,
) -> Result<Value> {
    if let Some(raw) = json {
        return serde_json::from_str(raw)
            .map_err(|e| QaError::InvalidInput(format!("body is not valid JSON: {}", e)));
    }

    let mut body = Map::new();
    if let Some(author) = author {
        body.insert("author".to_string(), Value::String(author.to_string()));
    }
    if let Some(summary) = summary {
        body.insert("summary".to_string(), Value::String(summary.to_string()));
    }
    Ok(Value::Object(body))
}
