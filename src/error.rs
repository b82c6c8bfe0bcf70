//! Error types for qastore

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for qastore
///
/// Only structural failures live here. A rejected submission is not an
/// error; it is reported through [`crate::domain::WriteStatus`].
#[derive(Debug, Error)]
pub enum QaError {
    #[error("Question store not found: {0}")]
    StoreNotFound(PathBuf),

    #[error("Store already exists: {0}")]
    AlreadyExists(PathBuf),

    #[error("Not found: {0}")]
    RecordNotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),
}

impl QaError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            QaError::StoreNotFound(_) => 2,
            QaError::InvalidInput(_) => 3,
            QaError::RecordNotFound(_) => 4,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            QaError::StoreNotFound(path) => {
                format!(
                    "Question store not found: {}\n\n\
                    Suggestions:\n\
                    • Run 'qastore init' to create an empty store\n\
                    • Point to an existing store with --file <PATH>\n\
                    • Set QASTORE_FILE environment variable to your store path",
                    path.display()
                )
            }
            QaError::Json(err) => {
                format!(
                    "Question store is not valid JSON: {}\n\n\
                    The store must hold a JSON array of questions, e.g. []",
                    err
                )
            }
            QaError::InvalidInput(msg) => {
                format!(
                    "Invalid input: {}\n\n\
                    Submissions need exactly two fields: author and summary\n\
                    Example: qastore ask --author 'John Doe' --summary 'Do you like sun?'",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using QaError
pub type Result<T> = std::result::Result<T, QaError>;
