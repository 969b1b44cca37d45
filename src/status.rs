// status.rs - Process exit status
//!
//! The host process only distinguishes success from failure:
//! - 0: the merged document was written
//! - 2: anything else (bad input, missing fields, merge or configuration failure)
//!
//! The JSON status line is the only place failure classes are told apart.

use std::process::{ExitCode, Termination};

/// Exit status codes returned to the calling process
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitStatus {
    Success = 0,
    Failure = 2,
}

impl Termination for ExitStatus {
    fn report(self) -> ExitCode {
        ExitCode::from(self as u8)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes() {
        assert_eq!(ExitStatus::Success as u8, 0);
        assert_eq!(ExitStatus::Failure as u8, 2);
        assert_eq!(
            format!("{:?}", ExitStatus::Failure.report()),
            format!("{:?}", ExitCode::from(2))
        );
    }
}
