//! Common test utilities for resume-merge integration tests
//!
//! - Running the compiled binary and capturing its status line
//! - The labelled sample PDFs the unit tests use, from `src/data/fixtures.rs`

#![allow(dead_code)]

use std::path::Path;
use std::process::Command;

#[path = "../../src/data/fixtures.rs"]
mod fixtures;

pub use fixtures::{outline_titles, page_labels, rewrite_trailer, write_outlined_pdf, write_sample_pdf};

/// Result of one binary invocation
#[derive(Debug)]
pub struct CliResponse {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl CliResponse {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(self.stdout.trim_end()).expect("stdout is not a JSON status line")
    }

    pub fn message(&self) -> String {
        self.json()["message"].as_str().unwrap_or_default().to_string()
    }
}

/// Run `resume-merge` with the given arguments
pub fn resume_merge(args: &[&str]) -> CliResponse {
    let output = Command::new(env!("CARGO_BIN_EXE_resume-merge"))
        .args(args)
        .output()
        .expect("failed to run resume-merge");
    CliResponse {
        stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
        stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        exit_code: output.status.code().unwrap_or(-1),
    }
}

/// Build the JSON request argument
pub fn request(resume: &Path, cover_letter: &Path, output: &Path) -> String {
    serde_json::json!({
        "resume": resume.to_str().unwrap(),
        "cover_letter": cover_letter.to_str().unwrap(),
        "output": output.to_str().unwrap(),
    })
    .to_string()
}
