//! JSON file question store

use crate::domain::{Answer, Question, Submission, WriteStatus};
use crate::error::{QaError, Result};
use async_trait::async_trait;
use log::{debug, info, warn};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;

/// Abstract store for questions and their answers
///
/// Every call is a full load (and, for writes, a full rewrite) of the
/// backing document. Nothing is cached between calls.
#[async_trait]
pub trait QuestionRepository: Send + Sync {
    /// All questions, in stored order
    async fn get_questions(&self) -> Result<Vec<Question>>;

    /// First question whose id matches exactly
    async fn get_question_by_id(&self, question_id: &str) -> Result<Option<Question>>;

    /// Append a question built from an `{author, summary}` body
    async fn add_question(&self, question: &Value) -> Result<WriteStatus>;

    /// Answers of the first matching question; empty when it does not exist
    async fn get_answers(&self, question_id: &str) -> Result<Vec<Answer>>;

    /// First matching answer under the first matching question
    async fn get_answer(&self, question_id: &str, answer_id: &str) -> Result<Option<Answer>>;

    /// Append an answer built from an `{author, summary}` body
    async fn add_answer(&self, question_id: &str, answer: &Value) -> Result<WriteStatus>;
}

/// Question store backed by a single JSON array on disk.
///
/// The file must already exist; this type never creates it.
#[derive(Debug, Clone)]
pub struct JsonFileRepository {
    path: PathBuf,
}

impl JsonFileRepository {
    /// Bind a store to the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileRepository { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<Vec<Question>> {
        let contents = fs::read_to_string(&self.path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                QaError::StoreNotFound(self.path.clone())
            } else {
                QaError::Io(e)
            }
        })?;

        let questions: Vec<Question> = serde_json::from_str(&contents)?;
        debug!(
            "event=store_load module=store path={} questions={}",
            self.path.display(),
            questions.len()
        );
        Ok(questions)
    }

    /// Overwrite the whole file with the compact serialization.
    async fn save(&self, questions: &[Question]) -> Result<()> {
        let contents = serde_json::to_string(questions)?;

        let mut file = OpenOptions::new()
            .write(true)
            .truncate(true)
            .open(&self.path)
            .await
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    QaError::StoreNotFound(self.path.clone())
                } else {
                    QaError::Io(e)
                }
            })?;
        file.write_all(contents.as_bytes()).await?;
        file.flush().await?;

        debug!(
            "event=store_save module=store path={} questions={} bytes={}",
            self.path.display(),
            questions.len(),
            contents.len()
        );
        Ok(())
    }
}

#[async_trait]
impl QuestionRepository for JsonFileRepository {
    async fn get_questions(&self) -> Result<Vec<Question>> {
        self.load().await
    }

    async fn get_question_by_id(&self, question_id: &str) -> Result<Option<Question>> {
        let questions = self.load().await?;
        Ok(questions.into_iter().find(|q| q.id == question_id))
    }

    async fn add_question(&self, question: &Value) -> Result<WriteStatus> {
        let Some(submission) = Submission::from_value(question) else {
            warn!("event=question_rejected module=store reason=invalid_keys");
            return Ok(WriteStatus::Failed);
        };

        let record = Question::from_submission(submission);
        let id = record.id.clone();

        let mut questions = self.load().await?;
        questions.push(record);
        self.save(&questions).await?;

        info!("event=question_added module=store id={}", id);
        Ok(WriteStatus::Success)
    }

    async fn get_answers(&self, question_id: &str) -> Result<Vec<Answer>> {
        Ok(self
            .get_question_by_id(question_id)
            .await?
            .map(|q| q.answers)
            .unwrap_or_default())
    }

    async fn get_answer(&self, question_id: &str, answer_id: &str) -> Result<Option<Answer>> {
        let answers = self.get_answers(question_id).await?;
        Ok(answers.into_iter().find(|a| a.id == answer_id))
    }

    async fn add_answer(&self, question_id: &str, answer: &Value) -> Result<WriteStatus> {
        let Some(submission) = Submission::from_value(answer) else {
            warn!(
                "event=answer_rejected module=store reason=invalid_keys question_id={}",
                question_id
            );
            return Ok(WriteStatus::Failed);
        };

        let record = Answer::from_submission(submission);

        // An unknown question id matches nothing; the file is still rewritten.
        let mut questions = self.load().await?;
        let mut attached = 0usize;
        for question in questions.iter_mut().filter(|q| q.id == question_id) {
            question.answers.push(record.clone());
            attached += 1;
        }
        self.save(&questions).await?;

        if attached == 0 {
            debug!(
                "event=answer_unattached module=store question_id={}",
                question_id
            );
        }
        info!(
            "event=answer_added module=store question_id={} id={} attached={}",
            question_id, record.id, attached
        );
        Ok(WriteStatus::Success)
    }
}
