//! Domain layer - Records and submission rules

pub mod question;
pub mod status;

pub use question::{Answer, Question, Submission};
pub use status::WriteStatus;
