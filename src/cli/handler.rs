// handler.rs - One invocation: argv in, status line and exit status out

use tracing::{debug, warn};

use crate::cli::args::{Args, Invocation};
use crate::cli::validation::{parse_payload, validate_settings};
use crate::cli::Config;
use crate::core::{merge_pdfs, MergeOptions, MergeRequest};
use crate::error::AppError;
use crate::logging;
use crate::output::StatusReport;
use crate::status::ExitStatus;

/// Text for stdout plus the process exit status
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub stdout: String,
    pub exit_status: ExitStatus,
}

impl Outcome {
    fn report(report: &StatusReport, exit_status: ExitStatus) -> Self {
        Self {
            stdout: report.to_line(),
            exit_status,
        }
    }

    fn text(text: String) -> Self {
        Self {
            stdout: text.trim_end().to_string(),
            exit_status: ExitStatus::Success,
        }
    }
}

/// Run one invocation. Never panics on bad input and never touches stderr;
/// every failure becomes an error status line with exit status 2.
pub fn run(argv: &[String]) -> Outcome {
    match dispatch(argv) {
        Ok(outcome) => outcome,
        Err(err) => {
            warn!(kind = err.kind(), error = ?err, "{}", err);
            Outcome::report(&StatusReport::failure(&err), err.exit_status())
        }
    }
}

fn dispatch(argv: &[String]) -> Result<Outcome, AppError> {
    let args = match Args::parse(argv)? {
        Invocation::Run(args) => args,
        Invocation::Help(text) => return Ok(Outcome::text(text)),
    };

    if args.generate_config {
        return Ok(Outcome::text(Config::generate_sample()));
    }

    let settings = args.settings()?;
    let level = validate_settings(&settings)?;
    if let Some(log_file) = &settings.log_file {
        logging::init(log_file, level)?;
    }

    let request = execute(args.payload(), &settings.merge)?;
    Ok(Outcome::report(&StatusReport::success(&request), ExitStatus::Success))
}

/// Parse, validate and merge. Each step is a terminal failure point.
pub fn execute(payload: Option<&str>, options: &MergeOptions) -> Result<MergeRequest, AppError> {
    let fields = parse_payload(payload)?;
    let request = MergeRequest::from_fields(&fields)?;
    debug!(
        resume = %request.resume_path().display(),
        cover_letter = %request.cover_letter_path().display(),
        output = %request.output_path().display(),
        "merge request accepted"
    );

    merge_pdfs(&request, options)?;
    Ok(request)
}
