#![allow(deprecated)]
#![allow(dead_code)]

use assert_cmd::Command;
use std::path::{Path, PathBuf};

pub const KNOWN_QUESTION_ID: &str = "50cb7124-39ab-4380-b90a-19d9f4eccc7f";
pub const KNOWN_ANSWER_ID: &str = "f080d447-d185-4b13-8d9e-34d04980e8a6";
pub const UNKNOWN_ID: &str = "this-is-not-even-an-proper-id-123";

/// Two questions, the second carrying two answers
pub const TWO_QUESTIONS: &str = r#"[
  {"id":"0d6f1a3e-5d55-4b8e-9a43-1c2c7d7b2f10","summary":"What is my name?","author":"Jack London","answers":[]},
  {"id":"50cb7124-39ab-4380-b90a-19d9f4eccc7f","summary":"Who are you?","author":"Tim Doods","answers":[
    {"id":"f080d447-d185-4b13-8d9e-34d04980e8a6","author":"Anakin Earthwalker","summary":"I am your father."},
    {"id":"fa309210-b8fd-4065-ace3-73dce62f6014","author":"Luke Mattews","summary":"I am a postman. Here is your mail."}
  ]}
]"#;

pub fn write_store(dir: &Path, contents: &str) -> PathBuf {
    let path = dir.join("questions.json");
    std::fs::write(&path, contents).unwrap();
    path
}

pub fn qastore_cmd() -> Command {
    let mut cmd = Command::cargo_bin("qastore").unwrap();
    cmd.env_remove("QASTORE_FILE");
    cmd.env_remove("QASTORE_LOG");
    cmd
}
