//! Question and answer records

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// A top-level record in the store.
///
/// Field order matters for serialization: `id`, `author`, `summary`,
/// `answers`, then any fields this crate does not know about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub author: String,
    pub summary: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub answers: Vec<Answer>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Question {
    /// Build a new question with a fresh id and no answers
    pub fn from_submission(submission: Submission) -> Self {
        Question {
            id: Uuid::new_v4().to_string(),
            author: submission.author,
            summary: submission.summary,
            answers: Vec::new(),
            extra: Map::new(),
        }
    }
}

/// `"answers": null` reads as no answers
fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Answer>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Answer>>::deserialize(deserializer)?.unwrap_or_default())
}

/// A reply owned by exactly one question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub id: String,
    pub author: String,
    pub summary: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Answer {
    /// Build a new answer with a fresh id
    pub fn from_submission(submission: Submission) -> Self {
        Answer {
            id: Uuid::new_v4().to_string(),
            author: submission.author,
            summary: submission.summary,
            extra: Map::new(),
        }
    }
}

/// Caller-supplied body for a new question or answer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub author: String,
    pub summary: String,
}

impl Submission {
    pub fn new(author: impl Into<String>, summary: impl Into<String>) -> Self {
        Submission {
            author: author.into(),
            summary: summary.into(),
        }
    }

    /// Validate an untyped body.
    ///
    /// The key set must be exactly `{author, summary}` and both values must be
    /// strings. Anything else returns `None`.
    pub fn from_value(value: &Value) -> Option<Self> {
        let object = value.as_object()?;
        if object.len() != 2 {
            return None;
        }

        let author = object.get("author")?.as_str()?;
        let summary = object.get("summary")?.as_str()?;

        Some(Submission::new(author, summary))
    }
}
