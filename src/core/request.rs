// request.rs - The validated merge request

use std::path::Path;

use serde_json::{Map, Value};

use crate::error::AppError;

/// Resume path, cover letter path and output path for one invocation.
///
/// Only constructible through [`MergeRequest::from_fields`], so every instance
/// holds three non-empty paths.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeRequest {
    resume: String,
    cover_letter: String,
    output: String,
}

impl MergeRequest {
    pub const RESUME_KEY: &'static str = "resume";
    pub const COVER_LETTER_KEY: &'static str = "cover_letter";
    pub const OUTPUT_KEY: &'static str = "output";

    /// Build a request from the payload object.
    ///
    /// A field counts as present only when it is a non-empty JSON string;
    /// `null`, `false`, `0`, empty containers and other non-string values are
    /// reported as missing.
    pub fn from_fields(fields: &Map<String, Value>) -> Result<Self, AppError> {
        let resume = path_field(fields, Self::RESUME_KEY);
        let cover_letter = path_field(fields, Self::COVER_LETTER_KEY);
        let output = path_field(fields, Self::OUTPUT_KEY);

        match (resume, cover_letter, output) {
            (Some(resume), Some(cover_letter), Some(output)) => Ok(Self {
                resume: resume.to_string(),
                cover_letter: cover_letter.to_string(),
                output: output.to_string(),
            }),
            (resume, cover_letter, output) => {
                let missing = [
                    (Self::RESUME_KEY, resume.is_none()),
                    (Self::COVER_LETTER_KEY, cover_letter.is_none()),
                    (Self::OUTPUT_KEY, output.is_none()),
                ]
                .into_iter()
                .filter_map(|(key, absent)| absent.then_some(key))
                .collect();
                Err(AppError::Validation { missing })
            }
        }
    }

    pub fn resume_path(&self) -> &Path {
        Path::new(&self.resume)
    }

    pub fn cover_letter_path(&self) -> &Path {
        Path::new(&self.cover_letter)
    }

    pub fn output_path(&self) -> &Path {
        Path::new(&self.output)
    }

    /// The output path exactly as the caller supplied it
    pub fn output(&self) -> &str {
        &self.output
    }
}

fn path_field<'a>(fields: &'a Map<String, Value>, key: &str) -> Option<&'a str> {
    fields
        .get(key)
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
}
