//! qastore - Question/answer persistence over a single JSON file
//!
//! The store reads the whole document on every call and rewrites it on every
//! accepted submission. It assumes a single writer.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use domain::{Answer, Question, Submission, WriteStatus};
pub use error::QaError;
pub use infrastructure::{JsonFileRepository, QuestionRepository};
