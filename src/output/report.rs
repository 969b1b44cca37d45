// report.rs - The JSON status line printed on stdout

use std::io;

use serde::Serialize;
use serde_json::ser::{Formatter, Serializer};

use crate::core::MergeRequest;
use crate::error::AppError;

pub const SUCCESS_MESSAGE: &str = "PDFs merged successfully!";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Success,
    Error,
}

/// `{"status": ..., "message": ..., "output": ...}`, the only thing written to stdout
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusReport {
    pub status: Status,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

impl StatusReport {
    pub fn success(request: &MergeRequest) -> Self {
        Self {
            status: Status::Success,
            message: SUCCESS_MESSAGE.to_string(),
            output: Some(request.output().to_string()),
        }
    }

    pub fn failure(err: &AppError) -> Self {
        Self {
            status: Status::Error,
            message: err.to_string(),
            output: None,
        }
    }

    /// Render as a single line, spaced and escaped the way the desktop host
    /// has always received it: `", "` / `": "` separators, ASCII-only output.
    pub fn to_line(&self) -> String {
        let mut buf = Vec::new();
        let mut ser = Serializer::with_formatter(&mut buf, HostFormatter);
        if self.serialize(&mut ser).is_err() {
            return String::from(r#"{"status": "error", "message": "failed to encode status"}"#);
        }
        // Every byte written is ASCII
        String::from_utf8_lossy(&buf).into_owned()
    }
}

/// Compact JSON with spaced separators and `\uXXXX` escapes for everything
/// outside printable ASCII.
struct HostFormatter;

impl Formatter for HostFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        let mut units = [0u16; 2];
        for ch in fragment.chars() {
            if (' '..='~').contains(&ch) {
                writer.write_all(&[ch as u8])?;
            } else {
                for unit in ch.encode_utf16(&mut units) {
                    write!(writer, "\\u{:04x}", unit)?;
                }
            }
        }
        Ok(())
    }
}
