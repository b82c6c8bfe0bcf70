//! Output formatting utilities

use crate::domain::{Answer, Question};
use crate::error::Result;
use serde::Serialize;

/// Format a list of questions for display
pub fn format_question_list(questions: &[Question]) -> String {
    if questions.is_empty() {
        return "No questions found".to_string();
    }

    let mut output = String::new();
    for question in questions {
        output.push_str(&format!(
            "{}  {} ({} answers)\n    {}\n",
            question.id,
            question.author,
            question.answers.len(),
            question.summary
        ));
    }
    output
}

/// Format a list of answers for display
pub fn format_answer_list(answers: &[Answer]) -> String {
    if answers.is_empty() {
        return "No answers found".to_string();
    }

    let mut output = String::new();
    for answer in answers {
        output.push_str(&format!(
            "{}  {}\n    {}\n",
            answer.id, answer.author, answer.summary
        ));
    }
    output
}

pub fn to_pretty_json<T: Serialize>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
