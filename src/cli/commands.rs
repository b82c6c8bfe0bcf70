//! CLI command definitions

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "qastore")]
#[command(about = "Question/answer store kept in a single JSON file", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Store file (default: QASTORE_FILE, qastore.toml, or questions.json)
    #[arg(short, long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, global = true, value_name = "LEVEL")]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create an empty store file
    Init {
        /// File to create (default: the configured store)
        path: Option<PathBuf>,
    },

    /// List all questions
    Questions,

    /// Show one question with its answers
    Question {
        /// Question id
        id: String,
    },

    /// Add a question
    Ask(SubmissionArgs),

    /// List answers of a question
    Answers {
        /// Question id
        question_id: String,
    },

    /// Show one answer
    Answer {
        /// Question id
        question_id: String,

        /// Answer id
        answer_id: String,
    },

    /// Add an answer to a question
    Reply {
        /// Question id
        question_id: String,

        #[command(flatten)]
        body: SubmissionArgs,
    },
}

/// Body of a new question or answer
#[derive(Args, Debug)]
pub struct SubmissionArgs {
    /// Author name
    #[arg(short, long)]
    pub author: Option<String>,

    /// Text of the question or answer
    #[arg(short, long)]
    pub summary: Option<String>,

    /// Raw JSON object instead of --author/--summary
    #[arg(long, conflicts_with_all = ["author", "summary"])]
    pub json: Option<String>,
}
