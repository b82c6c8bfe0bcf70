//! Application layer - Use cases and orchestration

pub mod init;
pub mod questions;

pub use questions::{submission_body, QuestionService};
