// args.rs - Command line arguments definition

use argh::{EarlyExit, FromArgs};

use crate::error::AppError;

#[derive(FromArgs, Debug)]
/// resume-merge - combine a resume and a cover letter into a single PDF
pub struct Args {
    /// merge request as a JSON object with "resume", "cover_letter" and "output" paths; options go first
    #[argh(positional, greedy)]
    pub payload: Vec<String>,

    /// path to TOML configuration file
    #[argh(option)]
    pub config: Option<String>,

    /// generate sample configuration file and exit
    #[argh(switch)]
    pub generate_config: bool,
}

/// What the command line asks for
#[derive(Debug)]
pub enum Invocation {
    Run(Args),
    /// `--help` was given; the usage text
    Help(String),
}

impl Args {
    /// Parse a full argv (program name first).
    ///
    /// Argument errors are reported as input errors so the caller still
    /// receives a status line instead of usage text on stderr.
    pub fn parse(argv: &[String]) -> Result<Invocation, AppError> {
        let command = argv.first().map(String::as_str).unwrap_or("resume-merge");
        let rest: Vec<&str> = argv.iter().skip(1).map(String::as_str).collect();

        match Args::from_args(&[command], &rest) {
            Ok(args) => Ok(Invocation::Run(args)),
            Err(EarlyExit { output, status: Ok(()) }) => Ok(Invocation::Help(output)),
            Err(EarlyExit { output, status: Err(()) }) => {
                Err(AppError::Input(output.trim().to_string()))
            }
        }
    }

    /// The JSON request; anything after it is ignored
    pub fn payload(&self) -> Option<&str> {
        self.payload.first().map(String::as_str)
    }
}
