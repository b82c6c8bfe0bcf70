//! Infrastructure layer - File I/O, configuration and logging

pub mod config;
pub mod logging;
pub mod repository;

pub use config::Config;
pub use repository::{JsonFileRepository, QuestionRepository};
