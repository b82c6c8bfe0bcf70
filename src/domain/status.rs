//! Outcome of a mutating store operation

use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of `add_question` / `add_answer`.
///
/// Each variant keeps the literal token its operation reports, so callers
/// that compare against `"success"`, `"failed"` or `"fail"` keep working.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WriteStatus {
    /// Record stored and file rewritten
    Success,
    /// Submission rejected by key validation; nothing written
    Failed,
    /// Token of the "question not found" branch. The file store never
    /// reports it: an unknown question id still rewrites the file and
    /// reports `Success` with nothing attached.
    Fail,
}

impl WriteStatus {
    /// The literal status token
    pub fn as_str(&self) -> &'static str {
        match self {
            WriteStatus::Success => "success",
            WriteStatus::Failed => "failed",
            WriteStatus::Fail => "fail",
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, WriteStatus::Success)
    }
}

impl fmt::Display for WriteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
